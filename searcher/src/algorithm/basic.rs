pub use bfs::bfs;
pub use dfs::dfs;

mod bfs {
    use std::collections::VecDeque;
    use std::default::Default;

    use crate::algorithm::{Candidate, SearchAlgorithm, SearchKind, SearchOutcome, SearchQueue};
    use crate::graph::{Graph, NodeId};

    #[derive(Debug)]
    pub struct BreadthQueue<S> {
        queue: VecDeque<S>,
    }

    impl<S> SearchQueue for BreadthQueue<S> {
        type Candidate = S;

        fn pop(&mut self) -> Option<Self::Candidate> {
            self.queue.pop_front()
        }

        fn push(&mut self, item: Self::Candidate) {
            self.queue.push_back(item);
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    impl<S> Default for BreadthQueue<S> {
        fn default() -> Self {
            BreadthQueue {
                queue: VecDeque::new(),
            }
        }
    }

    type BreadthFirstSearcher<'g> = SearchAlgorithm<'g, BreadthQueue<Candidate>>;

    /// Breadth-first search, where neighbors are explored
    /// in the order they were added to the graph.
    ///
    /// Edge costs are ignored while searching, so the path found has
    /// the fewest edges. Its cost is worked out afterwards.
    pub fn bfs(graph: &Graph, start: &NodeId, goal: &NodeId) -> SearchOutcome {
        let searcher: BreadthFirstSearcher = SearchAlgorithm::new(SearchKind::Bfs, graph, start, goal);
        match searcher.run() {
            Some(candidate) => {
                let total_cost = graph.path_cost(&candidate.path);
                SearchOutcome::new(candidate.path, total_cost)
            }
            None => SearchOutcome::not_found(),
        }
    }
}

mod dfs {
    use std::default::Default;

    use crate::algorithm::{Candidate, SearchAlgorithm, SearchKind, SearchOutcome, SearchQueue};
    use crate::graph::{Graph, NodeId};

    #[derive(Debug)]
    pub struct DepthQueue<S> {
        stack: Vec<S>,
    }

    impl<S> Default for DepthQueue<S> {
        fn default() -> Self {
            DepthQueue { stack: Vec::new() }
        }
    }

    impl<S> SearchQueue for DepthQueue<S> {
        type Candidate = S;

        fn pop(&mut self) -> Option<Self::Candidate> {
            self.stack.pop()
        }

        fn push(&mut self, item: Self::Candidate) {
            self.stack.push(item);
        }

        fn len(&self) -> usize {
            self.stack.len()
        }
    }

    pub type DepthFirstSearcher<'g> = SearchAlgorithm<'g, DepthQueue<Candidate>>;

    /// Depth-first search.
    ///
    /// Neighbors are pushed in the order they were added, so the
    /// last-listed neighbor is explored first. No guarantee is made
    /// about the length or cost of the path found.
    pub fn dfs(graph: &Graph, start: &NodeId, goal: &NodeId) -> SearchOutcome {
        let searcher: DepthFirstSearcher = SearchAlgorithm::new(SearchKind::Dfs, graph, start, goal);
        match searcher.run() {
            Some(candidate) => {
                let total_cost = graph.path_cost(&candidate.path);
                SearchOutcome::new(candidate.path, total_cost)
            }
            None => SearchOutcome::not_found(),
        }
    }

    #[cfg(test)]
    mod test {
        use super::*;

        #[test]
        fn stack_order() {
            let mut stack = DepthQueue::default();
            stack.push(1);
            stack.push(2);
            stack.push(3);
            assert_eq!(stack.len(), 3);
            assert_eq!(stack.pop(), Some(3));
            assert_eq!(stack.pop(), Some(2));
            assert_eq!(stack.pop(), Some(1));
            assert_eq!(stack.pop(), None);
        }
    }
}
