//! Uninformed search over small weighted, undirected graphs.
//!
//! Build a [Graph] one edge at a time, then ask a [SearchKind]
//! to find a route between two of its nodes:
//!
//! ```
//! use searcher::{Graph, NodeId, SearchKind};
//!
//! let mut graph = Graph::new();
//! graph.add_edge("a", "b", 4.0);
//! graph.add_edge("a", "c", 1.0);
//! graph.add_edge("c", "b", 1.0);
//!
//! let outcome = SearchKind::Ucs.run(&graph, &NodeId::new("a"), &NodeId::new("b"));
//! assert_eq!(outcome.path.to_string(), "A -> C -> B");
//! assert_eq!(outcome.total_cost, 2.0);
//! ```

pub mod algorithm;
pub mod cost;
mod errors;
pub mod graph;
pub mod queue;

pub use errors::ParseError;
pub use errors::Result as ParseResult;

pub use graph::{parse_cost, parse_edge, Cost, Edge, Graph, NodeId, Path};
pub use queue::PriorityQueue;

pub use algorithm::basic::bfs;
pub use algorithm::basic::dfs;
pub use algorithm::uniform::ucs;
pub use algorithm::{SearchKind, SearchOutcome};
