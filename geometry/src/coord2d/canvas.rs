use std::ops::Range;
use std::str::FromStr;

use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;

use super::{ParsePointError, Point};
use crate::Position;

/// The drawing area nodes are placed on.
///
/// Nodes are kept `margin` away from every side so that
/// their circles and labels stay visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: Position,
    pub height: Position,
    pub margin: Position,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl Canvas {
    /// A canvas of the given size with the standard margin.
    pub fn new(width: Position, height: Position) -> Self {
        Self {
            width,
            height,
            margin: 50.0,
        }
    }

    pub fn with_margin(mut self, margin: Position) -> Self {
        self.margin = margin;
        self
    }

    fn horizontal(&self) -> Range<Position> {
        self.margin..(self.width - self.margin)
    }

    fn vertical(&self) -> Range<Position> {
        self.margin..(self.height - self.margin)
    }

    /// Is this point inside the area nodes may be placed in?
    pub fn contains(&self, point: Point) -> bool {
        self.horizontal().contains(&point.x) && self.vertical().contains(&point.y)
    }

    /// Pick a uniformly random point inside the placement area.
    ///
    /// A canvas too small for its margin collapses onto the margin corner.
    pub fn random_point<R: Rng>(&self, rng: &mut R) -> Point {
        Point::new(sample(rng, self.horizontal()), sample(rng, self.vertical()))
    }
}

fn sample<R: Rng>(rng: &mut R, range: Range<Position>) -> Position {
    if range.end > range.start {
        rng.gen_range(range.start, range.end)
    } else {
        range.start
    }
}

impl FromStr for Canvas {
    type Err = ParsePointError;

    /// Parse a size such as `800x600`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref RE: Regex =
                Regex::new(r"^\s*(?P<width>[\d.]+)\s*[xX]\s*(?P<height>[\d.]+)\s*$").unwrap();
        };

        let cap = match RE.captures(s) {
            None => return Err(ParsePointError::InvalidLiteral(s.to_string())),
            Some(c) => c,
        };

        Ok(Self::new(cap["width"].parse()?, cap["height"].parse()?))
    }
}
