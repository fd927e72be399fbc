//! Unique edge invariant: no pair of nodes is joined twice.

use super::Invariant;
use crate::{Board, Point};
use std::collections::HashSet;

/// Invariant: no two connections share the same unordered endpoint pair.
pub struct UniqueEdgesInvariant;

impl Invariant<Board> for UniqueEdgesInvariant {
    fn holds(board: &Board) -> bool {
        let mut seen: HashSet<(Point, Point)> = HashSet::new();
        board.connections().iter().all(|c| {
            let key = if c.start() <= c.end() {
                (c.start(), c.end())
            } else {
                (c.end(), c.start())
            };
            seen.insert(key)
        })
    }

    fn description() -> &'static str {
        "No edge is drawn twice"
    }
}
