//! Strictly Pen - command-line driver.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io;
use strictly_pen::{Board, RandomPolicy};
use strictly_pen_cli::cli::{BoardArgs, Cli, Command, PolicyKind};
use strictly_pen_cli::{GameConfig, render_moves, render_summary, run_session, simulate};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,strictly_pen=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Simulate { board, policy, json } => run_simulate(board, policy, json),
        Command::Play { board } => run_play(board),
        Command::Show { board } => run_show(board),
    }
}

/// Builds a board from the config file and flag overrides.
#[instrument]
fn build_board(args: &BoardArgs) -> Result<Board> {
    let config = GameConfig::load(args.config.as_deref())?.with_overrides(args.overrides());
    let board = config.board_settings().build()?;
    info!(width = board.width(), height = board.height(), anchor = %board.anchor(), "Board ready");
    Ok(board)
}

/// Plays a full game with an automated policy.
fn run_simulate(args: BoardArgs, policy: PolicyKind, json: bool) -> Result<()> {
    let mut board = build_board(&args)?;
    let mut policy = policy.build(board.settings().seed);
    let summary = simulate(&mut board, policy.as_mut());

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", render_summary(&board, &summary));
    }
    Ok(())
}

/// Plays interactively on stdin/stdout.
fn run_play(args: BoardArgs) -> Result<()> {
    let board = build_board(&args)?;
    let mut autoplay = match board.settings().seed {
        Some(seed) => RandomPolicy::seeded(seed),
        None => RandomPolicy::new(),
    };
    let stdin = io::stdin();
    run_session(board, stdin.lock(), io::stdout(), &mut autoplay)?;
    Ok(())
}

/// Prints a fresh board and its legal moves.
fn run_show(args: BoardArgs) -> Result<()> {
    let board = build_board(&args)?;
    print!("{}", render_moves(&board));
    Ok(())
}
