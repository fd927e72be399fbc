//! Board construction parameters and their validation.

use super::board::Board;
use super::error::{BoardError, BoardErrorKind};
use super::player::{PlayerRotation, PlayerSpec};
use super::point::Point;
use derive_setters::Setters;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{instrument, warn};

/// Probability that a cell other than the anchor is a wall.
pub const DEFAULT_WALL_DENSITY: f64 = 0.05;

/// Largest grid, in nodes, that a board may hold.
pub const MAX_NODES: usize = 1 << 20;

/// Everything needed to build a [`Board`].
///
/// ```
/// use strictly_pen::{BoardSettings, Point};
///
/// let board = BoardSettings::new(5, 5)
///     .with_anchor(Point::new(2, 2))
///     .with_wall_density(0.0)
///     .build()
///     .unwrap();
/// assert_eq!(board.head_moves().len(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Setters)]
#[setters(prefix = "with_")]
pub struct BoardSettings {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Fixed starting node; drawn at random when absent.
    #[setters(strip_option)]
    #[serde(default)]
    pub anchor: Option<Point>,
    /// Turn order.
    #[serde(default = "PlayerSpec::defaults")]
    pub players: Vec<PlayerSpec>,
    /// Independent per-cell wall probability.
    #[serde(default = "default_wall_density")]
    pub wall_density: f64,
    /// Cells that are always walls.
    #[serde(default)]
    pub walls: Vec<Point>,
    /// Seed for anchor and wall generation.
    #[setters(strip_option)]
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_wall_density() -> f64 {
    DEFAULT_WALL_DENSITY
}

impl BoardSettings {
    /// Settings for a `width` x `height` board with the defaults.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            anchor: None,
            players: PlayerSpec::defaults(),
            wall_density: DEFAULT_WALL_DENSITY,
            walls: Vec::new(),
            seed: None,
        }
    }

    /// Checks the settings without building anything.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, see [`BoardErrorKind`].
    #[instrument(skip(self), fields(width = self.width, height = self.height))]
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.width == 0 || self.height == 0 {
            return Err(BoardError::new(BoardErrorKind::ZeroSize(self.width, self.height)));
        }
        // Also keeps every coordinate within i32.
        if self.width.checked_mul(self.height).is_none_or(|nodes| nodes > MAX_NODES) {
            return Err(BoardError::new(BoardErrorKind::TooLarge(self.width, self.height)));
        }
        if self.players.is_empty() {
            return Err(BoardError::new(BoardErrorKind::NoPlayers));
        }
        if !(0.0..=1.0).contains(&self.wall_density) {
            return Err(BoardError::new(BoardErrorKind::InvalidWallDensity(self.wall_density)));
        }

        let walls: HashSet<Point> = self.walls.iter().copied().collect();
        if let Some(wall) = walls.iter().find(|w| !self.contains(**w)) {
            return Err(BoardError::new(BoardErrorKind::WallOutOfBounds(*wall)));
        }

        match self.anchor {
            Some(anchor) if !self.contains(anchor) => {
                Err(BoardError::new(BoardErrorKind::AnchorOutOfBounds(anchor)))
            }
            Some(anchor) if walls.contains(&anchor) => {
                Err(BoardError::new(BoardErrorKind::AnchorOnWall(anchor)))
            }
            None if walls.len() >= self.width * self.height => {
                Err(BoardError::new(BoardErrorKind::NoOpenCell))
            }
            _ => Ok(()),
        }
    }

    /// Validates the settings and lays out a board.
    ///
    /// # Errors
    ///
    /// Returns a `BoardError` when [`BoardSettings::validate`] fails.
    pub fn build(self) -> Result<Board, BoardError> {
        self.validate().inspect_err(|e| warn!(error = %e, "Rejected board settings"))?;
        let rotation = PlayerRotation::new(self.players.clone())?;
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Board::generate(self, rotation, rng))
    }

    fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }
}
