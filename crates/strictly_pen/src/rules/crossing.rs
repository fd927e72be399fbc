//! Crossing rule: two diagonals of the same 2x2 block may not both be drawn.

use crate::{Board, Direction, Point};
use tracing::instrument;

/// True if a diagonal step from `from` to `to` would cross an existing
/// diagonal.
///
/// The step spans a 2x2 block whose other two corners are `(from.x, to.y)`
/// and `(to.x, from.y)`. It crosses when both corners are connected and a
/// connection joins them. Orthogonal steps never cross.
#[instrument(skip(board))]
pub fn crosses(board: &Board, from: Point, to: Point) -> bool {
    if !Direction::classify(from, to).is_diagonal() {
        return false;
    }

    let corner_a = Point::new(from.x, to.y);
    let corner_b = Point::new(to.x, from.y);
    let connected = |p| board.node_at(p).is_some_and(|n| n.is_connected());

    connected(corner_a) && connected(corner_b) && board.has_connection(corner_a, corner_b)
}
