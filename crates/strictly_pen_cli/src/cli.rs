//! Command-line interface for strictly_pen.

use crate::config::ConfigOverrides;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use strictly_pen::{FirstMovePolicy, MovePolicy, RandomPolicy};

/// Strictly Pen - turn-based path drawing on a grid
#[derive(Parser, Debug)]
#[command(name = "strictly_pen")]
#[command(about = "Turn-based grid connection game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a whole game with an automated policy
    Simulate {
        /// Board options
        #[command(flatten)]
        board: BoardArgs,

        /// Move selection policy
        #[arg(long, value_enum, default_value_t = PolicyKind::Random)]
        policy: PolicyKind,

        /// Print a JSON summary instead of the board
        #[arg(long)]
        json: bool,
    },

    /// Play interactively, reading commands from stdin
    Play {
        /// Board options
        #[command(flatten)]
        board: BoardArgs,
    },

    /// Print a fresh board and its legal moves
    Show {
        /// Board options
        #[command(flatten)]
        board: BoardArgs,
    },
}

/// Options shared by every command that builds a board.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct BoardArgs {
    /// Path to a TOML game config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of columns
    #[arg(long)]
    pub width: Option<usize>,

    /// Number of rows
    #[arg(long)]
    pub height: Option<usize>,

    /// Seed for board generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Wall probability per cell
    #[arg(long)]
    pub walls: Option<f64>,
}

impl BoardArgs {
    /// Flag values that replace config file values.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            width: self.width,
            height: self.height,
            wall_density: self.walls,
            seed: self.seed,
        }
    }
}

/// Automated move selection strategies.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    /// Uniformly random legal move
    Random,
    /// Always the first listed legal move
    First,
}

impl PolicyKind {
    /// Builds the policy, seeding random play when a seed is known.
    pub fn build(self, seed: Option<u64>) -> Box<dyn MovePolicy> {
        match self {
            PolicyKind::Random => match seed {
                Some(seed) => Box::new(RandomPolicy::seeded(seed)),
                None => Box::new(RandomPolicy::new()),
            },
            PolicyKind::First => Box::new(FirstMovePolicy),
        }
    }
}
