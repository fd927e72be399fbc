//! Results of legality queries: who can connect where, and in which direction.

use super::direction::Direction;
use super::point::Point;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// One of the two active ends of the drawn path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Cursor {
    /// The head cursor.
    #[display("head")]
    Head,
    /// The tail cursor.
    #[display("tail")]
    Tail,
}

/// Outcome of asking whether `start` may connect to `end`.
///
/// A possible `Connectivity` is a legal move. Two values are equal when they
/// join the same `start` and `end`, whatever cursor offered them.
#[derive(Debug, Clone, Copy, Display, Serialize, Deserialize)]
#[display("{start} {direction} {end}")]
pub struct Connectivity {
    direction: Direction,
    possible: bool,
    start: Point,
    end: Point,
    cursor: Option<Cursor>,
}

impl Connectivity {
    /// A legal step from `start` to `end`.
    pub fn possible(start: Point, end: Point, direction: Direction) -> Self {
        Self {
            direction,
            possible: true,
            start,
            end,
            cursor: None,
        }
    }

    /// A refused step from `start` to `end`.
    pub fn impossible(start: Point, end: Point) -> Self {
        Self {
            direction: Direction::Impossible,
            possible: false,
            start,
            end,
            cursor: None,
        }
    }

    /// Tags the move with the cursor that offered it.
    pub fn from_cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// Direction from `start` to `end` (`Impossible` when refused).
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the move is legal.
    pub fn is_possible(&self) -> bool {
        self.possible
    }

    /// Source node.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Destination node.
    pub fn end(&self) -> Point {
        self.end
    }

    /// Cursor that offered the move, if any.
    pub fn cursor(&self) -> Option<Cursor> {
        self.cursor
    }

    /// True if offered from the head.
    pub fn from_head(&self) -> bool {
        self.cursor == Some(Cursor::Head)
    }

    /// True if offered from the tail.
    pub fn from_tail(&self) -> bool {
        self.cursor == Some(Cursor::Tail)
    }
}

impl PartialEq for Connectivity {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for Connectivity {}

impl Hash for Connectivity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}
