//! Crate to find the shortest route between two named stations.
//!
//! # Basic usage
//! ```
//! use route_core::prelude::*;
//!
//! // Create a new graph
//! let mut g: Graph = Graph::new();
//! g.add_edge("S1".into(), "S2".into(), 10);
//! g.add_edge("S2".into(), "S3".into(), 15);
//! g.add_edge("S1".into(), "S3".into(), 30);
//!
//! // Search
//! let result = Dijkstra::new(&g).search("S1", "S3").expect("S1 is in the graph");
//!
//! assert_eq!(result.distance, Distance::Reached(25));
//! assert_eq!(result.render(), "S1 → (10) → S2 → (15) → S3");
//!```
//! [`Graph`]: crate::graph::Graph
pub mod constants;
pub mod error;
pub mod graph;
pub mod input;
pub mod prelude;
pub mod render;
pub mod search;
pub mod statistics;
pub mod util;
