//! Automated play-outs and board previews.

use serde::Serialize;
use strictly_pen::{Board, Connection, GameStatus, MovePolicy, Point};
use tracing::{info, instrument};

/// Outcome of a finished play-out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSummary {
    /// Board columns.
    pub width: usize,
    /// Board rows.
    pub height: usize,
    /// Starting node.
    pub anchor: Point,
    /// Policy that chose the moves.
    pub policy: String,
    /// Final game status.
    pub status: GameStatus,
    /// Name of the losing player.
    pub loser: Option<String>,
    /// Connections in the order they were drawn.
    pub connections: Vec<Connection>,
}

/// Plays `board` to the end with `policy`.
#[instrument(skip_all, fields(policy = policy.name()))]
pub fn simulate(board: &mut Board, policy: &mut dyn MovePolicy) -> SimulationSummary {
    let status = board.play_out(policy);
    let loser = status
        .loser()
        .and_then(|id| board.player(id))
        .map(|spec| spec.name.clone());

    info!(moves = board.connections().len(), %status, "Simulation finished");

    SimulationSummary {
        width: board.width(),
        height: board.height(),
        anchor: board.anchor(),
        policy: policy.name().to_string(),
        status,
        loser,
        connections: board.connections().to_vec(),
    }
}

/// Renders the final board followed by the result line.
pub fn render_summary(board: &Board, summary: &SimulationSummary) -> String {
    let mut out = board.display_as_text();
    out.push_str(&format!("{} moves played\n", summary.connections.len()));
    if let Some(loser) = &summary.loser {
        out.push_str(&format!("{loser} lost, no connections left\n"));
    }
    out
}

/// Renders a board and its numbered legal moves.
pub fn render_moves(board: &Board) -> String {
    let mut out = board.display_as_text();
    for (i, mv) in board.available_moves().iter().enumerate() {
        let from = mv.cursor().map(|c| c.to_string()).unwrap_or_default();
        out.push_str(&format!("{}: {} {} {} [{}]\n", i + 1, mv.start(), mv.direction(), mv.end(), from));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_pen::{BoardSettings, FirstMovePolicy};

    fn board() -> Board {
        BoardSettings::new(3, 3)
            .with_anchor(Point::new(0, 0))
            .with_wall_density(0.0)
            .with_seed(5)
            .build()
            .unwrap()
    }

    #[test]
    fn test_simulate_reports_loser() {
        let mut board = board();
        let summary = simulate(&mut board, &mut FirstMovePolicy);

        assert!(summary.status.is_over());
        assert_eq!(summary.policy, "First");
        assert_eq!(summary.connections.len(), board.connections().len());
        assert!(summary.loser.is_some());
        assert!(render_summary(&board, &summary).contains("lost, no connections left"));
    }

    #[test]
    fn test_render_moves_numbers_from_one() {
        let text = render_moves(&board());
        assert!(text.contains("1: (0, 0) RIGHT (1, 0) [head]"));
    }
}
