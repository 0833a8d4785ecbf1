use std::collections::HashMap;
use std::hash::Hash;

use rand::Rng;

use super::{Canvas, Point};

/// Remembers where each node sits on the canvas.
///
/// A node is given a random position the first time it is placed,
/// and keeps it from then on.
#[derive(Debug, Clone)]
pub struct Layout<K> {
    canvas: Canvas,
    positions: HashMap<K, Point>,
    order: Vec<K>,
}

impl<K> Default for Layout<K> {
    fn default() -> Self {
        Self::new(Canvas::default())
    }
}

impl<K> Layout<K> {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            positions: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<K> Layout<K>
where
    K: Hash + Eq + Clone,
{
    /// Position of a node, placing it at random if it is new.
    pub fn place<R: Rng>(&mut self, node: &K, rng: &mut R) -> Point {
        if let Some(point) = self.positions.get(node) {
            return *point;
        }

        let point = self.canvas.random_point(rng);
        self.positions.insert(node.clone(), point);
        self.order.push(node.clone());
        point
    }

    pub fn position(&self, node: &K) -> Option<Point> {
        self.positions.get(node).copied()
    }

    /// Nodes and their positions, in the order they were placed.
    pub fn iter(&self) -> impl Iterator<Item = (&K, Point)> {
        self.order
            .iter()
            .filter_map(move |node| self.positions.get(node).map(|p| (node, *p)))
    }
}
