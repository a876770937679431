//! Error types of the library.
//!
//! An unreachable target is not an error: the search reports it as
//! [`Distance::Unreached`](crate::constants::Distance::Unreached).
use thiserror::Error;

/// Failed lookups on a [`Graph`](crate::graph::Graph)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("node `{0}` is not in the graph")]
    NodeNotFound(String),
}

/// Conditions that abort a shortest path query
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("start node `{0}` not found")]
    UnknownStartNode(String),
}

/// Rejected station or route input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("malformed route `{line}`: expected `FROM TO DISTANCE`")]
    MalformedRoute { line: String },

    #[error("invalid distance `{0}`: must be a non-negative integer")]
    InvalidDistance(String),

    #[error("unknown station `{0}`")]
    UnknownStation(String),

    #[error("station `{0}` already exists")]
    DuplicateStation(String),
}
