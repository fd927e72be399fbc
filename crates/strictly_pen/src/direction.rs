//! Compass classification of moves between adjacent nodes.

use super::point::Point;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Direction of a connection, seen from its start node.
///
/// `y` grows downward, so `Top` means the end node is one row above.
/// Diagonals are named after the corner the end node sits in:
/// `(-1, -1)` is `TopLeft` and `(1, -1)` is `TopRight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    /// `(0, -1)`
    #[display("TOP")]
    Top,
    /// `(0, 1)`
    #[display("BOTTOM")]
    Bottom,
    /// `(-1, 0)`
    #[display("LEFT")]
    Left,
    /// `(1, 0)`
    #[display("RIGHT")]
    Right,
    /// `(-1, -1)`
    #[display("TOP_LEFT")]
    TopLeft,
    /// `(1, -1)`
    #[display("TOP_RIGHT")]
    TopRight,
    /// `(-1, 1)`
    #[display("BOTTOM_LEFT")]
    BottomLeft,
    /// `(1, 1)`
    #[display("BOTTOM_RIGHT")]
    BottomRight,
    /// Not a single-step move.
    #[display("IMPOSSIBLE")]
    Impossible,
}

impl Direction {
    /// Classifies the step from `from` to `to`.
    ///
    /// Returns `Impossible` for a zero offset or when either axis moves by
    /// more than one.
    pub fn classify(from: Point, to: Point) -> Self {
        Self::from_offset(from.delta(to))
    }

    /// Direction for a raw `(dx, dy)` offset.
    pub fn from_offset((dx, dy): (i32, i32)) -> Self {
        match (dx, dy) {
            (0, -1) => Direction::Top,
            (0, 1) => Direction::Bottom,
            (-1, 0) => Direction::Left,
            (1, 0) => Direction::Right,
            (-1, -1) => Direction::TopLeft,
            (1, -1) => Direction::TopRight,
            (-1, 1) => Direction::BottomLeft,
            (1, 1) => Direction::BottomRight,
            _ => Direction::Impossible,
        }
    }

    /// The `(dx, dy)` step this direction stands for.
    pub fn offset(self) -> Option<(i32, i32)> {
        match self {
            Direction::Top => Some((0, -1)),
            Direction::Bottom => Some((0, 1)),
            Direction::Left => Some((-1, 0)),
            Direction::Right => Some((1, 0)),
            Direction::TopLeft => Some((-1, -1)),
            Direction::TopRight => Some((1, -1)),
            Direction::BottomLeft => Some((-1, 1)),
            Direction::BottomRight => Some((1, 1)),
            Direction::Impossible => None,
        }
    }

    /// The direction of the same step walked backwards.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::TopLeft => Direction::BottomRight,
            Direction::TopRight => Direction::BottomLeft,
            Direction::BottomLeft => Direction::TopRight,
            Direction::BottomRight => Direction::TopLeft,
            Direction::Impossible => Direction::Impossible,
        }
    }

    /// True for the four diagonal steps.
    pub fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::TopLeft | Direction::TopRight | Direction::BottomLeft | Direction::BottomRight
        )
    }

    /// True for every direction except `Impossible`.
    pub fn is_possible(self) -> bool {
        self != Direction::Impossible
    }

    /// Single-character glyph used by the text rendering.
    pub fn symbol(self) -> char {
        match self {
            Direction::Top => '↑',
            Direction::Bottom => '↓',
            Direction::Left => '←',
            Direction::Right => '→',
            Direction::TopLeft => '↖',
            Direction::TopRight => '↗',
            Direction::BottomLeft => '↙',
            Direction::BottomRight => '↘',
            Direction::Impossible => '×',
        }
    }
}
