//! Drawn edges between nodes.

use super::direction::Direction;
use super::player::PlayerId;
use super::point::Point;
use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// An edge drawn by a player between two adjacent nodes.
///
/// Stores endpoint coordinates rather than node references; the board
/// resolves them on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, new)]
#[display("{start} {direction} {end}")]
pub struct Connection {
    start: Point,
    end: Point,
    direction: Direction,
    owner: PlayerId,
}

impl Connection {
    /// Node the connection was drawn from.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Node the connection was drawn to.
    pub fn end(&self) -> Point {
        self.end
    }

    /// Direction from `start` to `end`.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Player who drew it.
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    /// True if this connection joins `a` and `b`, in either order.
    pub fn joins(&self, a: Point, b: Point) -> bool {
        (self.start == a && self.end == b) || (self.start == b && self.end == a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_is_unordered() {
        let a = Point::new(1, 1);
        let b = Point::new(2, 2);
        let connection = Connection::new(a, b, Direction::BottomRight, PlayerId(0));
        assert!(connection.joins(a, b));
        assert!(connection.joins(b, a));
        assert!(!connection.joins(a, Point::new(2, 1)));
    }

    #[test]
    fn test_display() {
        let connection = Connection::new(Point::new(0, 0), Point::new(1, 0), Direction::Right, PlayerId(1));
        assert_eq!(connection.to_string(), "(0, 0) RIGHT (1, 0)");
    }
}
