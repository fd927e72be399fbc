//! Players and the turn rotation.

use super::error::{BoardError, BoardErrorKind};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Index of a player within the rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[display("player {}", _0)]
pub struct PlayerId(pub usize);

/// An RGB colour used to draw a player's connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Cyan.
    pub const CYAN: Rgb = Rgb(0, 255, 255);
    /// Yellow.
    pub const YELLOW: Rgb = Rgb(255, 255, 0);
}

/// A participant: display name and connection colour.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[display("{name}")]
pub struct PlayerSpec {
    /// Name shown to users.
    pub name: String,
    /// Colour of this player's connections.
    pub color: Rgb,
}

impl PlayerSpec {
    /// Creates a player.
    pub fn new(name: impl Into<String>, color: Rgb) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    /// The two built-in players used when none are configured.
    pub fn defaults() -> Vec<PlayerSpec> {
        vec![
            PlayerSpec::new("Ya", Rgb::CYAN),
            PlayerSpec::new("Ne Ya", Rgb::YELLOW),
        ]
    }
}

/// Cyclic turn order over a fixed, non-empty list of players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRotation {
    players: Vec<PlayerSpec>,
    index: usize,
}

impl PlayerRotation {
    /// Creates a rotation starting with the first player.
    ///
    /// # Errors
    ///
    /// Returns `BoardErrorKind::NoPlayers` for an empty list.
    #[instrument(skip(players), fields(count = players.len()))]
    pub fn new(players: Vec<PlayerSpec>) -> Result<Self, BoardError> {
        if players.is_empty() {
            return Err(BoardError::new(BoardErrorKind::NoPlayers));
        }
        Ok(Self { players, index: 0 })
    }

    /// The player whose turn it is.
    pub fn current(&self) -> PlayerId {
        PlayerId(self.index)
    }

    /// Details of the player whose turn it is.
    pub fn current_spec(&self) -> &PlayerSpec {
        &self.players[self.index]
    }

    /// Moves to the next player and returns it.
    pub fn advance(&mut self) -> PlayerId {
        self.index = (self.index + 1) % self.players.len();
        debug!(next = %self.players[self.index], "Turn passed");
        PlayerId(self.index)
    }

    /// Looks up a player by id.
    pub fn get(&self, id: PlayerId) -> Option<&PlayerSpec> {
        self.players.get(id.0)
    }

    /// All players in turn order.
    pub fn players(&self) -> &[PlayerSpec] {
        &self.players
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always false; a rotation cannot be empty.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Returns to the first player.
    pub fn restart(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rotation_rejected() {
        let err = PlayerRotation::new(Vec::new()).unwrap_err();
        assert_eq!(err.kind, BoardErrorKind::NoPlayers);
    }

    #[test]
    fn test_rotation_wraps() {
        let mut rotation = PlayerRotation::new(vec![
            PlayerSpec::new("Shuri", Rgb(0, 100, 0)),
            PlayerSpec::new("Steve", Rgb(255, 165, 0)),
            PlayerSpec::new("Chen", Rgb(128, 0, 32)),
        ])
        .unwrap();

        assert_eq!(rotation.current(), PlayerId(0));
        assert_eq!(rotation.advance(), PlayerId(1));
        assert_eq!(rotation.advance(), PlayerId(2));
        assert_eq!(rotation.advance(), PlayerId(0));
        assert_eq!(rotation.current_spec().name, "Shuri");
    }

    #[test]
    fn test_single_player_keeps_turn() {
        let mut rotation = PlayerRotation::new(vec![PlayerSpec::new("Solo", Rgb::CYAN)]).unwrap();
        assert_eq!(rotation.advance(), PlayerId(0));
    }

    #[test]
    fn test_defaults() {
        let players = PlayerSpec::defaults();
        assert_eq!(players.len(), 2);
        assert_ne!(players[0].color, players[1].color);
    }
}
