use thiserror::Error;

/// Error produced when text handed to the graph layer cannot be understood.
///
/// Searches themselves never fail: a missing route is reported
/// as an empty path.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Malformed edge: {0:?} (expected FROM TO COST)")]
    MalformedEdge(String),

    #[error("Invalid edge cost: {0:?}")]
    InvalidCost(String),

    #[error("Unknown search algorithm: {0} (expected BFS, DFS or UCS)")]
    UnknownAlgorithm(String),
}

/// Result when parsing graph input might fail.
pub type Result<T> = std::result::Result<T, ParseError>;
