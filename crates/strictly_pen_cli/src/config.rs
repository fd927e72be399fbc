//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_pen::{BoardSettings, DEFAULT_WALL_DENSITY, PlayerSpec, Point};
use tracing::{debug, info, instrument};

/// Board and player configuration for a game.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of columns.
    #[serde(default = "default_side")]
    width: usize,

    /// Number of rows.
    #[serde(default = "default_side")]
    height: usize,

    /// Per-cell wall probability.
    #[serde(default = "default_wall_density")]
    wall_density: f64,

    /// Fixed starting node (random when absent).
    #[serde(default)]
    anchor: Option<Point>,

    /// Cells that are always walls.
    #[serde(default)]
    walls: Vec<Point>,

    /// Players in turn order.
    #[serde(default = "PlayerSpec::defaults")]
    players: Vec<PlayerSpec>,

    /// Seed for reproducible boards.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_side() -> usize {
    8
}

#[instrument]
fn default_wall_density() -> f64 {
    DEFAULT_WALL_DENSITY
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfigOverrides {
    /// Replaces `width`.
    pub width: Option<usize>,
    /// Replaces `height`.
    pub height: Option<usize>,
    /// Replaces `wall_density`.
    pub wall_density: Option<f64>,
    /// Replaces `seed`.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: default_side(),
            height: default_side(),
            wall_density: default_wall_density(),
            anchor: None,
            walls: Vec::new(),
            players: PlayerSpec::defaults(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(width = config.width, height = config.height, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if given, the defaults otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(width) = overrides.width {
            self.width = width;
        }
        if let Some(height) = overrides.height {
            self.height = height;
        }
        if let Some(density) = overrides.wall_density {
            self.wall_density = density;
        }
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        self
    }

    /// Board settings described by this configuration.
    pub fn board_settings(&self) -> BoardSettings {
        BoardSettings {
            width: self.width,
            height: self.height,
            anchor: self.anchor,
            players: self.players.clone(),
            wall_density: self.wall_density,
            walls: self.walls.clone(),
            seed: self.seed,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(GameConfig::from_toml("").unwrap(), GameConfig::default());
    }

    #[test]
    fn test_overrides_win() {
        let config = GameConfig::default().with_overrides(ConfigOverrides {
            width: Some(3),
            seed: Some(9),
            ..ConfigOverrides::default()
        });
        assert_eq!(*config.width(), 3);
        assert_eq!(*config.height(), 8);
        assert_eq!(*config.seed(), Some(9));
        assert_eq!(*config.anchor(), None);
    }

    #[test]
    fn test_bad_toml_reports_parse_error() {
        let err = GameConfig::from_toml("width = \"wide\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
