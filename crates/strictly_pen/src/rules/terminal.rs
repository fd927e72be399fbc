//! Terminal condition: the game ends when neither cursor can move.

use crate::{Board, PlayerId};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum GameStatus {
    /// At least one cursor has a legal move.
    #[display("in progress")]
    InProgress,
    /// No legal move is left; the player to move has lost.
    #[display("{} lost", _0)]
    Lost(PlayerId),
}

impl GameStatus {
    /// True once the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Lost(_))
    }

    /// The losing player, if the game has ended.
    pub fn loser(&self) -> Option<PlayerId> {
        match self {
            GameStatus::Lost(player) => Some(*player),
            GameStatus::InProgress => None,
        }
    }
}

/// Evaluates the board: lost for the player to move once no cursor can move.
#[instrument(skip(board))]
pub fn status(board: &Board) -> GameStatus {
    if board.available_moves().is_empty() {
        GameStatus::Lost(board.current_player())
    } else {
        GameStatus::InProgress
    }
}
