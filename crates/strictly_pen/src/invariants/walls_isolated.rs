//! Wall invariant: walls never join the path.

use super::Invariant;
use crate::Board;

/// Invariant: a wall is never connected, never a cursor, and never touched
/// by a connection.
pub struct WallsIsolatedInvariant;

impl Invariant<Board> for WallsIsolatedInvariant {
    fn holds(board: &Board) -> bool {
        let walls_untouched = board.nodes().iter().filter(|n| n.is_wall()).all(|wall| {
            !wall.is_connected() && !wall.is_head() && !wall.is_tail() && wall.connections().is_empty()
        });
        let ends_open = board.connections().iter().all(|c| {
            [c.start(), c.end()]
                .into_iter()
                .all(|p| board.node_at(p).is_some_and(|n| !n.is_wall()))
        });
        walls_untouched && ends_open
    }

    fn description() -> &'static str {
        "Walls stay out of the path"
    }
}
