//! Thread-safe handle for hosts that touch one board from several threads.

use super::board::Board;
use super::connection::Connection;
use super::connectivity::{Connectivity, Cursor};
use super::rules::GameStatus;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, instrument};

/// A board behind a single mutex.
///
/// A move touches two nodes, the connection list, a cursor and the turn
/// order together, so the whole board is locked for every call.
#[derive(Debug, Clone)]
pub struct SharedBoard {
    board: Arc<Mutex<Board>>,
}

impl SharedBoard {
    /// Wraps a board.
    pub fn new(board: Board) -> Self {
        Self {
            board: Arc::new(Mutex::new(board)),
        }
    }

    // Every mutation is all-or-nothing, so a poisoned board is still consistent.
    fn lock(&self) -> MutexGuard<'_, Board> {
        self.board.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with exclusive access to the board.
    pub fn with<R>(&self, f: impl FnOnce(&mut Board) -> R) -> R {
        f(&mut *self.lock())
    }

    /// Legal moves from both cursors.
    pub fn available_moves(&self) -> Vec<Connectivity> {
        self.lock().available_moves()
    }

    /// Plays a move from the given cursor.
    #[instrument(skip(self, mv), fields(to = %mv.end()))]
    pub fn connect(&self, cursor: Cursor, mv: &Connectivity) -> Option<Connection> {
        let result = self.lock().connect(cursor, mv);
        debug!(applied = result.is_some(), "Shared move");
        result
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.lock().status()
    }

    /// A copy of the board as it is now.
    pub fn snapshot(&self) -> Board {
        self.lock().clone()
    }
}

impl From<Board> for SharedBoard {
    fn from(board: Board) -> Self {
        Self::new(board)
    }
}
