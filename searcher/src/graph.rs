//! Graph decomposition and datastructures.

use std::collections::hash_map::{Entry, HashMap};
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::cost;
use crate::errors::{ParseError, Result};

mod edge;
mod node;
mod path;

pub use edge::Edge;
pub use node::NodeId;
pub use path::Path;

/// Numeric weight carried by every edge.
pub type Cost = f64;

/// An undirected, weighted graph stored as adjacency lists.
///
/// Neighbors are kept in insertion order, which is the order
/// the search algorithms discover them in.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: HashMap<NodeId, Vec<Edge>>,
    order: Vec<NodeId>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    fn connections(&mut self, node: NodeId) -> &mut Vec<Edge> {
        match self.nodes.entry(node) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                self.order.push(entry.key().clone());
                entry.insert(Vec::new())
            }
        }
    }

    /// Connect two nodes in both directions with the same cost.
    ///
    /// Repeated calls add parallel edges; nothing is deduplicated.
    pub fn add_edge<A, B>(&mut self, a: A, b: B, cost: Cost)
    where
        A: Into<NodeId>,
        B: Into<NodeId>,
    {
        let a = a.into();
        let b = b.into();

        // Left to right
        self.connections(a.clone()).push(Edge::new(b.clone(), cost));

        // Right to left
        self.connections(b).push(Edge::new(a, cost));
    }

    /// Edges leaving this node, in insertion order.
    ///
    /// Unknown nodes are isolated and have no edges.
    pub fn neighbors(&self, node: &NodeId) -> &[Edge] {
        self.nodes.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, node: &NodeId) -> bool {
        self.nodes.contains_key(node)
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Nodes in the order they first appeared.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.order.iter()
    }

    /// Every stored adjacency entry, grouped by origin node.
    ///
    /// Each undirected edge appears twice, once from each end.
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &Edge)> {
        self.order
            .iter()
            .flat_map(move |node| self.neighbors(node).iter().map(move |e| (node, e)))
    }

    /// Total cost of walking this path through the graph.
    pub fn path_cost(&self, path: &Path) -> Cost {
        cost::total_cost(self, path)
    }
}

/// Parse a single `FROM TO COST` edge description.
///
/// The two names may be separated by whitespace or a dash,
/// e.g. `a b 4` or `A-B 4`.
pub fn parse_edge(line: &str) -> Result<(NodeId, NodeId, Cost)> {
    lazy_static! {
        static ref RE: Regex =
            Regex::new(r"^(?P<from>[^\s-]+)\s*[-\s]\s*(?P<to>[^\s-]+)\s+(?P<cost>\S+)$").unwrap();
    };

    let line = line.trim();
    let cap = RE
        .captures(line)
        .ok_or_else(|| ParseError::MalformedEdge(line.to_string()))?;

    Ok((
        NodeId::new(&cap["from"]),
        NodeId::new(&cap["to"]),
        parse_cost(&cap["cost"])?,
    ))
}

/// Parse an edge cost.
pub fn parse_cost(s: &str) -> Result<Cost> {
    s.trim()
        .parse()
        .map_err(|_| ParseError::InvalidCost(s.to_string()))
}

impl FromStr for Graph {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        let mut graph = Graph::new();
        for line in s.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (from, to, cost) = parse_edge(line)?;
            graph.add_edge(from, to, cost);
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn n(s: &str) -> NodeId {
        NodeId::new(s)
    }

    #[test]
    fn edges_are_symmetric() {
        let mut graph = Graph::new();
        graph.add_edge("a", "b", 4.0);

        assert_eq!(graph.neighbors(&n("A")), &[Edge::new(n("B"), 4.0)]);
        assert_eq!(graph.neighbors(&n("B")), &[Edge::new(n("A"), 4.0)]);
    }

    #[test]
    fn neighbors_keep_insertion_order() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 4.0);
        graph.add_edge("A", "C", 1.0);
        graph.add_edge("C", "B", 1.0);

        let names: Vec<&str> = graph
            .neighbors(&n("A"))
            .iter()
            .map(|e| e.node.as_str())
            .collect();
        assert_eq!(names, vec!["B", "C"]);

        let order: Vec<&str> = graph.nodes().map(NodeId::as_str).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn unknown_node_is_isolated() {
        let graph = Graph::new();
        assert!(graph.neighbors(&n("Z")).is_empty());
        assert!(!graph.contains(&n("Z")));
        assert!(graph.is_empty());
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0);
        graph.add_edge("A", "B", 1.0);

        assert_eq!(graph.neighbors(&n("A")).len(), 2);
        assert_eq!(graph.neighbors(&n("B")).len(), 2);
        assert_eq!(graph.edges().count(), 4);
    }

    #[test]
    fn self_loop_lands_twice() {
        let mut graph = Graph::new();
        graph.add_edge("A", "A", 2.0);

        assert_eq!(graph.neighbors(&n("A")).len(), 2);
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn parse_edge_lines() {
        assert_eq!(
            parse_edge("a b 4").unwrap(),
            (n("A"), n("B"), 4.0)
        );
        assert_eq!(
            parse_edge("  A-C 1.5 ").unwrap(),
            (n("A"), n("C"), 1.5)
        );
        assert_eq!(
            parse_edge("A B four"),
            Err(ParseError::InvalidCost("four".to_string()))
        );
        assert_eq!(
            parse_edge("A 4"),
            Err(ParseError::MalformedEdge("A 4".to_string()))
        );
    }

    #[test]
    fn parse_graph() {
        let graph: Graph = "# triangle
        A B 4
        A C 1

        C-B 1"
            .parse()
            .unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.neighbors(&n("C")).len(), 2);
        assert_eq!(graph.neighbors(&n("B"))[1], Edge::new(n("C"), 1.0));
    }
}
