//! Strictly Pen CLI - command-line driver for the pen game engine
//!
//! Builds boards from TOML configuration and command-line flags, then
//! simulates games with a move policy or plays them interactively.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod play;
mod simulate;

pub use config::{ConfigError, ConfigOverrides, GameConfig};
pub use play::{PlayCommand, run_session};
pub use simulate::{SimulationSummary, render_moves, render_summary, simulate};
