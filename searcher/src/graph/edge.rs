use super::{Cost, NodeId};

/// One direction of a weighted connection: the node reached,
/// and what it costs to get there.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub node: NodeId,
    pub cost: Cost,
}

impl Edge {
    pub fn new(node: NodeId, cost: Cost) -> Self {
        Self { node, cost }
    }
}
