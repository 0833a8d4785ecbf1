//! Uniform-cost search

use crate::algorithm::{Candidate, SearchAlgorithm, SearchKind, SearchOutcome, SearchQueue};
use crate::graph::{Cost, Graph, NodeId};
use crate::queue::PriorityQueue;

/// A frontier which always yields the cheapest candidate so far,
/// oldest first among equals.
#[derive(Debug, Default)]
pub struct CostQueue {
    queue: PriorityQueue<Candidate, Cost>,
}

impl SearchQueue for CostQueue {
    type Candidate = Candidate;

    fn pop(&mut self) -> Option<Self::Candidate> {
        self.queue.dequeue().map(|e| e.element)
    }

    fn push(&mut self, item: Self::Candidate) {
        let cost = item.cost();
        self.queue.enqueue(item, cost);
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

pub type UniformCostSearch<'g> = SearchAlgorithm<'g, CostQueue>;

/// Perform a uniform-cost search.
///
/// Behaves like a breadth first search, but always extends the cheapest
/// path found so far. The goal is checked as it comes off the frontier,
/// so with non-negative costs the path returned is the cheapest one.
/// Negative costs are not rejected, but the result may not be optimal.
pub fn ucs(graph: &Graph, start: &NodeId, goal: &NodeId) -> SearchOutcome {
    let searcher: UniformCostSearch = SearchAlgorithm::new(SearchKind::Ucs, graph, start, goal);
    searcher
        .run()
        .map(|c| SearchOutcome::new(c.path, c.cost))
        .unwrap_or_else(SearchOutcome::not_found)
}
