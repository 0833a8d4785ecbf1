//! Provides the building blocks for search algorithms

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::errors::{ParseError, Result};
use crate::graph::{Cost, Graph, NodeId, Path};

pub(crate) mod basic;
pub(crate) mod uniform;

/// Trait used to implement frontiers of search candidates
/// which should be checked for completion.
pub trait SearchQueue {
    type Candidate;

    fn pop(&mut self) -> Option<Self::Candidate>;

    fn push(&mut self, item: Self::Candidate);

    fn len(&self) -> usize;
}

/// A partial route waiting on the frontier.
#[derive(Debug, Clone)]
pub struct Candidate {
    node: NodeId,
    path: Path,
    cost: Cost,
}

impl Candidate {
    fn start(origin: NodeId) -> Self {
        Self {
            path: Path::new(origin.clone()),
            node: origin,
            cost: 0.0,
        }
    }

    fn step(&self, node: &NodeId, cost: Cost) -> Self {
        Self {
            node: node.clone(),
            path: self.path.step(node.clone()),
            cost: self.cost + cost,
        }
    }

    /// The node at the end of this candidate's path.
    pub fn node(&self) -> &NodeId {
        &self.node
    }

    /// Cost accumulated along the way.
    pub fn cost(&self) -> Cost {
        self.cost
    }
}

/// What a search found.
///
/// When the goal cannot be reached the path is empty
/// and the cost is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub path: Path,
    pub total_cost: Cost,
}

impl SearchOutcome {
    pub fn new(path: Path, total_cost: Cost) -> Self {
        Self { path, total_cost }
    }

    pub fn not_found() -> Self {
        Self::new(Path::empty(), 0.0)
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// The uninformed searches on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    Bfs,
    Dfs,
    Ucs,
}

const KINDS: [SearchKind; 3] = [SearchKind::Bfs, SearchKind::Dfs, SearchKind::Ucs];

impl SearchKind {
    pub fn all() -> impl Iterator<Item = Self> {
        KINDS.iter().cloned()
    }

    /// Search between two nodes of the graph with this algorithm.
    pub fn run(self, graph: &Graph, start: &NodeId, goal: &NodeId) -> SearchOutcome {
        match self {
            SearchKind::Bfs => basic::bfs(graph, start, goal),
            SearchKind::Dfs => basic::dfs(graph, start, goal),
            SearchKind::Ucs => uniform::ucs(graph, start, goal),
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            SearchKind::Bfs => "BFS",
            SearchKind::Dfs => "DFS",
            SearchKind::Ucs => "UCS",
        })
    }
}

impl FromStr for SearchKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "BFS" => Ok(SearchKind::Bfs),
            "DFS" => Ok(SearchKind::Dfs),
            "UCS" => Ok(SearchKind::Ucs),
            _ => Err(ParseError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Implementation of search, using a generic frontier.
///
/// The queue (Q) decides which candidate is expanded next; everything
/// else is shared. A node is marked visited when it is expanded, not when
/// it is queued, so it may sit on the frontier several times.
#[derive(Debug)]
pub struct SearchAlgorithm<'g, Q>
where
    Q: SearchQueue<Candidate = Candidate> + Default,
{
    kind: SearchKind,
    graph: &'g Graph,
    goal: &'g NodeId,
    visited: HashSet<NodeId>,
    queue: Q,
}

impl<'g, Q> SearchAlgorithm<'g, Q>
where
    Q: SearchQueue<Candidate = Candidate> + Default,
{
    fn new(kind: SearchKind, graph: &'g Graph, start: &NodeId, goal: &'g NodeId) -> Self {
        let mut sr = SearchAlgorithm {
            kind,
            graph,
            goal,
            visited: HashSet::new(),
            queue: Q::default(),
        };

        // Unknown nodes can never be part of a route.
        if graph.contains(start) {
            sr.queue.push(Candidate::start(start.clone()));
        }
        sr
    }

    /// Run the search until the goal is taken off the frontier,
    /// or the frontier runs dry.
    pub fn run(mut self) -> Option<Candidate> {
        let graph = self.graph;
        let mut expanded = 0usize;

        while let Some(candidate) = self.queue.pop() {
            if candidate.node() == self.goal {
                debug!(
                    kind = %self.kind,
                    goal = %self.goal,
                    expanded,
                    length = candidate.path.len(),
                    "goal reached"
                );
                return Some(candidate);
            }

            if !self.visited.insert(candidate.node().clone()) {
                continue;
            }
            expanded += 1;
            trace!(
                kind = %self.kind,
                node = %candidate.node(),
                cost = candidate.cost(),
                frontier = self.queue.len(),
                "expanding"
            );

            for edge in graph.neighbors(candidate.node()) {
                if !self.visited.contains(&edge.node) {
                    self.queue.push(candidate.step(&edge.node, edge.cost));
                }
            }
        }

        debug!(kind = %self.kind, goal = %self.goal, expanded, "frontier exhausted");
        None
    }
}
