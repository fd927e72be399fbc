//! Cursor invariant: head and tail sit on connected nodes that carry their flags.

use super::Invariant;
use crate::Board;

/// Invariant: both cursors point at connected, non-wall nodes, and exactly
/// one node carries each cursor flag.
pub struct CursorsConnectedInvariant;

impl Invariant<Board> for CursorsConnectedInvariant {
    fn holds(board: &Board) -> bool {
        let cursor_ok = |p| {
            board
                .node_at(p)
                .is_some_and(|n| n.is_connected() && !n.is_wall())
        };
        if !cursor_ok(board.head()) || !cursor_ok(board.tail()) {
            return false;
        }

        let heads: Vec<_> = board.nodes().iter().filter(|n| n.is_head()).collect();
        let tails: Vec<_> = board.nodes().iter().filter(|n| n.is_tail()).collect();
        matches!(heads.as_slice(), [h] if h.position() == board.head())
            && matches!(tails.as_slice(), [t] if t.position() == board.tail())
    }

    fn description() -> &'static str {
        "Head and tail are on connected nodes flagged as such"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardSettings, Point};

    fn board() -> Board {
        BoardSettings::new(3, 3)
            .with_anchor(Point::new(1, 1))
            .with_wall_density(0.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_fresh_board_holds() {
        assert!(CursorsConnectedInvariant::holds(&board()));
    }

    #[test]
    fn test_holds_after_moves() {
        let mut board = board();
        let mv = board.head_moves()[0];
        board.connect_head(&mv).unwrap();
        let mv = board.tail_moves()[0];
        board.connect_tail(&mv).unwrap();
        assert!(CursorsConnectedInvariant::holds(&board));
    }

    #[test]
    fn test_head_on_unconnected_node_violates() {
        let mut board = board();
        board.head = Point::new(0, 0);
        assert!(!CursorsConnectedInvariant::holds(&board));
    }

    #[test]
    fn test_stray_flag_violates() {
        let mut board = board();
        board.nodes[0].is_tail = true;
        assert!(!CursorsConnectedInvariant::holds(&board));
    }
}
