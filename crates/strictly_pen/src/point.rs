//! Integer grid coordinates.

use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A position on the board grid.
///
/// `x` grows to the right and `y` grows downward, so `(0, 0)` is the
/// top-left node. Coordinates are signed so that off-board neighbours
/// (e.g. `(-1, 0)`) can be represented and rejected rather than wrapped.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Display, Serialize, Deserialize, new,
)]
#[display("({x}, {y})")]
pub struct Point {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Point {
    /// Sentinel used as the end of a move whose destination does not exist.
    pub const MISSING: Point = Point { x: -1, y: -1 };

    /// Returns this point shifted by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Signed offset from `self` to `other`.
    pub fn delta(self, other: Point) -> (i32, i32) {
        (other.x - self.x, other.y - self.y)
    }

    /// True if either coordinate is negative.
    pub fn is_negative(self) -> bool {
        self.x < 0 || self.y < 0
    }

    /// True if `other` is one of the 8 surrounding points.
    pub fn is_adjacent(self, other: Point) -> bool {
        let (dx, dy) = self.delta(other);
        (dx, dy) != (0, 0) && dx.abs() <= 1 && dy.abs() <= 1
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
