//! Move selection policies for automated play.

use super::board::Board;
use super::connectivity::Connectivity;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks one move out of the legal moves on offer.
pub trait MovePolicy {
    /// Chooses a move, or `None` to stop playing.
    fn choose(&mut self, board: &Board, moves: &[Connectivity]) -> Option<Connectivity>;

    /// Policy name for logs.
    fn name(&self) -> &str;
}

/// Picks uniformly at random.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    /// Seeds from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence of choices.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl MovePolicy for RandomPolicy {
    fn choose(&mut self, _board: &Board, moves: &[Connectivity]) -> Option<Connectivity> {
        if moves.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..moves.len());
        Some(moves[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

/// Always takes the first move on offer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstMovePolicy;

impl MovePolicy for FirstMovePolicy {
    fn choose(&mut self, _board: &Board, moves: &[Connectivity]) -> Option<Connectivity> {
        moves.first().copied()
    }

    fn name(&self) -> &str {
        "First"
    }
}
