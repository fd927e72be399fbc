//! Connection geometry invariant: every edge is a single in-bounds step.

use super::Invariant;
use crate::{Board, Direction};

/// Invariant: every connection joins two connected, in-bounds, adjacent
/// nodes, and its stored direction matches the step it makes.
pub struct ConnectionGeometryInvariant;

impl Invariant<Board> for ConnectionGeometryInvariant {
    fn holds(board: &Board) -> bool {
        board.connections().iter().all(|c| {
            let endpoints_ok = [c.start(), c.end()]
                .into_iter()
                .all(|p| board.node_at(p).is_some_and(|n| n.is_connected()));
            let direction = Direction::classify(c.start(), c.end());
            endpoints_ok && direction.is_possible() && direction == c.direction()
        })
    }

    fn description() -> &'static str {
        "Connections are single in-bounds steps with a matching direction"
    }
}
