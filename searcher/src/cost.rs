//! Recompute the cost of a path after the fact.

use crate::graph::{Cost, Graph, NodeId, Path};

/// Sum the edge costs along a path.
///
/// Each step uses the first edge from the earlier node to the later one.
/// Steps with no such edge cost nothing.
pub fn total_cost(graph: &Graph, path: &Path) -> Cost {
    path.nodes()
        .windows(2)
        .map(|pair| edge_cost(graph, &pair[0], &pair[1]))
        .fold(0.0, |total, cost| total + cost)
}

fn edge_cost(graph: &Graph, from: &NodeId, to: &NodeId) -> Cost {
    graph
        .neighbors(from)
        .iter()
        .find(|e| &e.node == to)
        .map(|e| e.cost)
        .unwrap_or(0.0)
}
