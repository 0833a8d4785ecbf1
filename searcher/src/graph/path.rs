use std::fmt;
use std::iter::FromIterator;

use super::NodeId;

/// An ordered walk through the graph, origin first.
///
/// An empty path means no route was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    nodes: Vec<NodeId>,
}

impl Path {
    pub fn new(origin: NodeId) -> Self {
        Self {
            nodes: vec![origin],
        }
    }

    /// The path which goes nowhere.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of nodes visited, including both ends.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Extend the path by one node.
    pub fn step(&self, node: NodeId) -> Self {
        let mut nextpath = self.clone();
        nextpath.nodes.push(node);
        nextpath
    }

    pub fn origin(&self) -> Option<&NodeId> {
        self.nodes.first()
    }

    pub fn destination(&self) -> Option<&NodeId> {
        self.nodes.last()
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn contains(&self, node: &NodeId) -> bool {
        self.nodes.contains(node)
    }
}

impl FromIterator<NodeId> for Path {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}
