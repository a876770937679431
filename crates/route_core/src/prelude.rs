//! Re-exports of the most commonly used items in `route_core`.
pub use crate::constants::{Distance, Weight};
pub use crate::error::{GraphError, InputError, SearchError};
pub use crate::graph::{Graph, NodeKey, Station};
pub use crate::input::{parse_route, Network, Query, Route};
pub use crate::render::render_path;
pub use crate::search::dijkstra::Dijkstra;
pub use crate::search::shortest_path::{DistanceTable, SearchResult, ShortestPath};

pub use crate::search;

pub use crate::util::test_graphs::generate_simple_graph;
