//! Coordinate work in two dimensions.

use std::fmt;
use std::ops;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::Position;

pub mod canvas;
pub mod layout;

pub use canvas::Canvas;
pub use layout::Layout;

/// A location in 2D space, with y growing downwards
/// as it does on a screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: Position,
    pub y: Position,
}

impl Point {
    /// Build a new point from coordinates.
    pub fn new(x: Position, y: Position) -> Self {
        Self { x, y }
    }

    /// Returns a point at (0, 0)
    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// The point halfway between this point and another.
    pub fn midpoint(self, other: Point) -> Point {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Straight line distance to another point.
    pub fn distance(self, other: Point) -> Position {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::origin()
    }
}

impl ops::Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Self::Output {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl From<(Position, Position)> for Point {
    fn from(coordinates: (Position, Position)) -> Self {
        Self {
            x: coordinates.0,
            y: coordinates.1,
        }
    }
}

/// Error when parsing a point or canvas size from string.
#[derive(Debug, Error, PartialEq)]
pub enum ParsePointError {
    #[error("Invalid Point: {}", _0)]
    InvalidLiteral(String),

    #[error("Invalid Number Literal")]
    InvalidNumber,
}

impl From<::std::num::ParseFloatError> for ParsePointError {
    fn from(_: ::std::num::ParseFloatError) -> Self {
        ParsePointError::InvalidNumber
    }
}

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref RE: Regex =
                Regex::new(r"^\s*(?P<x>-?[\d.]+),\s*(?P<y>-?[\d.]+)\s*$").unwrap();
        };

        let cap = match RE.captures(s) {
            None => return Err(ParsePointError::InvalidLiteral(s.to_string())),
            Some(c) => c,
        };

        Ok(Self::new(cap["x"].parse()?, cap["y"].parse()?))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_points() {
        assert_eq!("3,4".parse::<Point>().unwrap(), Point::new(3.0, 4.0));
        assert_eq!(
            " 1.5, -2 ".parse::<Point>().unwrap(),
            Point::new(1.5, -2.0)
        );
        assert_eq!(
            "3;4".parse::<Point>(),
            Err(ParsePointError::InvalidLiteral("3;4".to_string()))
        );
        assert_eq!("1.2.3,4".parse::<Point>(), Err(ParsePointError::InvalidNumber));
    }

    #[test]
    fn midpoint_and_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(6.0, 8.0);
        assert_eq!(a.midpoint(b), Point::new(3.0, 4.0));
        assert_eq!(a.distance(b), 10.0);
        assert_eq!(a + b, b);
        assert_eq!(format!("{}", Point::new(1.0, 2.5)), "1,2.5");
    }
}
