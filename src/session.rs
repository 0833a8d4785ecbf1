//! Interactive command session.
//!
//! A session owns one graph and the positions of its nodes, and runs
//! one text command at a time against them.

use std::collections::HashMap;
use std::fs;
use std::io::{BufRead, Write};

use anyhow::Error;
use lazy_static::lazy_static;
use paste::paste;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;
use tracing::{debug, info, warn};

use geometry::coord2d::{Canvas, Layout};
use searcher::{parse_cost, parse_edge, Cost, Graph, NodeId, SearchKind, SearchOutcome};

use crate::render;

type Result<T> = std::result::Result<T, Error>;
type Handler = fn(&mut Session, &[&str]) -> Result<Option<String>>;

macro_rules! command {
    ($name:ident) => {
        paste! {
            (stringify!($name), Session::[<command_ $name>] as Handler)
        }
    };
    ($alias:ident => $name:ident) => {
        paste! {
            (stringify!($alias), Session::[<command_ $name>] as Handler)
        }
    };
}

lazy_static! {
    static ref COMMANDS: HashMap<&'static str, Handler> = {
        let commands: Vec<(&'static str, Handler)> = vec![
            command!(edge),
            command!(add => edge),
            command!(bfs),
            command!(dfs),
            command!(ucs),
            command!(search),
            command!(nodes),
            command!(draw),
        ];

        commands.into_iter().collect()
    };
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("{0} expects {1}")]
    MissingArgument(&'static str, &'static str),

    #[error("I/O failure")]
    Io(#[from] std::io::Error),
}

/// Format a search result the way it is shown to the user.
pub fn report(kind: SearchKind, outcome: &SearchOutcome) -> String {
    if outcome.is_found() {
        format!(
            "{} Path: {}\nCost: {}",
            kind, outcome.path, outcome.total_cost
        )
    } else {
        "No Path Found".to_string()
    }
}

/// A graph under construction, plus where its nodes are drawn.
#[derive(Debug)]
pub struct Session {
    graph: Graph,
    layout: Layout<NodeId>,
    rng: StdRng,
}

impl Session {
    pub fn new(canvas: Canvas, seed: Option<u64>) -> Self {
        Self {
            graph: Graph::new(),
            layout: Layout::new(canvas),
            rng: match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            },
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn layout(&self) -> &Layout<NodeId> {
        &self.layout
    }

    /// Add an edge and give any new endpoint a place on the canvas.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, cost: Cost) {
        self.layout.place(&from, &mut self.rng);
        self.layout.place(&to, &mut self.rng);
        info!(from = %from, to = %to, cost, "edge added");
        self.graph.add_edge(from, to, cost);
    }

    /// Add every edge from an edge list, one `FROM TO COST` per line.
    pub fn load_edges(&mut self, text: &str) -> Result<usize> {
        let mut count = 0;
        for line in text.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (from, to, cost) = parse_edge(line)?;
            self.add_edge(from, to, cost);
            count += 1;
        }
        Ok(count)
    }

    pub fn search(&self, kind: SearchKind, start: &str, goal: &str) -> SearchOutcome {
        kind.run(&self.graph, &NodeId::new(start), &NodeId::new(goal))
    }

    /// Run a single command line.
    ///
    /// Returns the text to show the user, if any. Blank lines
    /// and `#` comments do nothing.
    pub fn execute(&mut self, line: &str) -> Result<Option<String>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = words.collect();

        match COMMANDS.get(name.as_str()) {
            None => Err(SessionError::UnknownCommand(name).into()),
            Some(handler) => {
                debug!(command = %name, ?args, "executing");
                handler(self, &args)
            }
        }
    }

    /// Run every command from a reader, writing responses to `out`.
    ///
    /// A failing command is reported and skipped; the session carries on.
    /// Returns the number of commands which failed.
    pub fn run_script<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<usize> {
        let mut failures = 0;
        for (n, line) in input.lines().enumerate() {
            let line = line.map_err(SessionError::from)?;
            match self.execute(&line) {
                Ok(Some(text)) => writeln!(out, "{}", text)?,
                Ok(None) => {}
                Err(e) => {
                    warn!(line = n + 1, error = %e, "command failed");
                    writeln!(out, "Error: {:#}", e)?;
                    failures += 1;
                }
            }
        }
        Ok(failures)
    }

    pub fn draw(&self) -> String {
        render::svg(&self.graph, &self.layout)
    }

    fn run_kind(&mut self, kind: SearchKind, args: &[&str]) -> Result<Option<String>> {
        match args {
            [start, goal] => Ok(Some(report(kind, &self.search(kind, start, goal)))),
            _ => Err(SessionError::MissingArgument("search", "START GOAL").into()),
        }
    }

    fn command_edge(&mut self, args: &[&str]) -> Result<Option<String>> {
        match args {
            [from, to, cost] => {
                let cost = parse_cost(cost)?;
                self.add_edge(NodeId::new(from), NodeId::new(to), cost);
                Ok(None)
            }
            _ => Err(SessionError::MissingArgument("edge", "FROM TO COST").into()),
        }
    }

    fn command_bfs(&mut self, args: &[&str]) -> Result<Option<String>> {
        self.run_kind(SearchKind::Bfs, args)
    }

    fn command_dfs(&mut self, args: &[&str]) -> Result<Option<String>> {
        self.run_kind(SearchKind::Dfs, args)
    }

    fn command_ucs(&mut self, args: &[&str]) -> Result<Option<String>> {
        self.run_kind(SearchKind::Ucs, args)
    }

    fn command_search(&mut self, args: &[&str]) -> Result<Option<String>> {
        match args {
            [kind, rest @ ..] => self.run_kind(kind.parse()?, rest),
            [] => Err(SessionError::MissingArgument("search", "KIND START GOAL").into()),
        }
    }

    fn command_nodes(&mut self, _args: &[&str]) -> Result<Option<String>> {
        if self.graph.is_empty() {
            return Ok(Some("(empty graph)".to_string()));
        }

        let lines: Vec<String> = self
            .graph
            .nodes()
            .map(|node| {
                let neighbors: Vec<String> = self
                    .graph
                    .neighbors(node)
                    .iter()
                    .map(|e| format!("{}({})", e.node, e.cost))
                    .collect();
                format!("{}: {}", node, neighbors.join(", "))
            })
            .collect();
        Ok(Some(lines.join("\n")))
    }

    fn command_draw(&mut self, args: &[&str]) -> Result<Option<String>> {
        match args {
            [path] => {
                fs::write(path, self.draw()).map_err(SessionError::from)?;
                Ok(Some(format!("Wrote {}", path)))
            }
            _ => Err(SessionError::MissingArgument("draw", "FILE").into()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn session() -> Session {
        Session::new(Canvas::default(), Some(5))
    }

    fn run(session: &mut Session, line: &str) -> Option<String> {
        session.execute(line).unwrap()
    }

    #[test]
    fn triangle_through_commands() {
        let mut s = session();
        assert_eq!(run(&mut s, "edge a b 4"), None);
        assert_eq!(run(&mut s, "EDGE A C 1"), None);
        assert_eq!(run(&mut s, "add c b 1"), None);

        assert_eq!(
            run(&mut s, "ucs a b").unwrap(),
            "UCS Path: A -> C -> B\nCost: 2"
        );
        assert_eq!(run(&mut s, "bfs A B").unwrap(), "BFS Path: A -> B\nCost: 4");
        assert_eq!(
            run(&mut s, "search dfs A B").unwrap(),
            "DFS Path: A -> C -> B\nCost: 2"
        );
        assert_eq!(run(&mut s, "ucs A Z").unwrap(), "No Path Found");
    }

    #[test]
    fn new_nodes_get_positions() {
        let mut s = session();
        run(&mut s, "edge a b 4");
        run(&mut s, "edge b c 1");

        assert_eq!(s.layout().len(), 3);
        assert_eq!(s.graph().len(), 3);
        let b = s.layout().position(&NodeId::new("B")).unwrap();
        run(&mut s, "edge b d 2");
        assert_eq!(s.layout().position(&NodeId::new("B")), Some(b));
    }

    #[test]
    fn comments_and_blanks_are_ignored() {
        let mut s = session();
        assert_eq!(run(&mut s, ""), None);
        assert_eq!(run(&mut s, "   # nothing to see"), None);
    }

    #[test]
    fn bad_commands_are_errors() {
        let mut s = session();
        assert!(s.execute("teleport A B").is_err());
        assert!(s.execute("edge A B").is_err());
        assert!(s.execute("edge A B lots").is_err());
        assert!(s.execute("bfs A").is_err());
        assert!(s.execute("search astar A B").is_err());
        assert!(s.execute("search").is_err());
        assert!(s.graph().is_empty());
    }

    #[test]
    fn lists_nodes() {
        let mut s = session();
        assert_eq!(run(&mut s, "nodes").unwrap(), "(empty graph)");
        run(&mut s, "edge a b 4");
        run(&mut s, "edge a c 1.5");
        assert_eq!(
            run(&mut s, "nodes").unwrap(),
            "A: B(4), C(1.5)\nB: A(4)\nC: A(1.5)"
        );
    }

    #[test]
    fn scripts_keep_going_after_errors() {
        let mut s = session();
        let script = "edge a b 4\nbogus\nbfs a b\n";
        let mut out = Vec::new();

        let failures = s.run_script(script.as_bytes(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(failures, 1);
        assert!(out.contains("Error: Unknown command: bogus"));
        assert!(out.ends_with("BFS Path: A -> B\nCost: 4\n"));
    }

    #[test]
    fn loads_edge_lists() {
        let mut s = session();
        let count = s.load_edges("# roads\nS A 1\n\nA-G 2\n").unwrap();
        assert_eq!(count, 2);
        assert_eq!(
            report(SearchKind::Ucs, &s.search(SearchKind::Ucs, "s", "g")),
            "UCS Path: S -> A -> G\nCost: 3"
        );
        assert!(s.load_edges("S A").is_err());
    }

    #[test]
    fn draw_covers_every_node() {
        let mut s = session();
        run(&mut s, "edge a b 4");
        let doc = s.draw();
        assert_eq!(doc.matches("<circle").count(), 2);
    }
}
