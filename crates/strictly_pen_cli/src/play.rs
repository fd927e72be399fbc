//! Interactive play over a line-oriented text stream.

use crate::simulate::render_moves;
use anyhow::Result;
use std::io::{BufRead, Write};
use strictly_pen::{Board, MovePolicy};
use tracing::{debug, info, instrument};

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCommand {
    /// Play the numbered legal move (1-based).
    Pick(usize),
    /// Let the autoplay policy finish the game.
    AutoPlay,
    /// Start over on a fresh board.
    Reset,
    /// Leave the session.
    Quit,
    /// Anything else.
    Unknown,
}

impl PlayCommand {
    /// Parses a trimmed input line.
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "q" | "quit" => PlayCommand::Quit,
            "r" | "reset" => PlayCommand::Reset,
            "0" => PlayCommand::AutoPlay,
            other => other.parse().map(PlayCommand::Pick).unwrap_or(PlayCommand::Unknown),
        }
    }
}

/// Runs a game until the input ends or the player quits.
///
/// Returns the board as it stood when the session ended.
#[instrument(skip_all)]
pub fn run_session<R, W>(mut board: Board, input: R, mut output: W, autoplay: &mut dyn MovePolicy) -> Result<Board>
where
    R: BufRead,
    W: Write,
{
    write_state(&board, &mut output)?;

    for line in input.lines() {
        let line = line?;
        let command = PlayCommand::parse(&line);
        debug!(?command, "Read command");

        match command {
            PlayCommand::Quit => {
                info!("Player quit");
                break;
            }
            PlayCommand::Reset => {
                board = board.flush();
                writeln!(output, "New game")?;
            }
            PlayCommand::AutoPlay => {
                board.play_out(autoplay);
            }
            PlayCommand::Pick(number) => match board.pick(number) {
                Some(mv) => {
                    board.connect_move(&mv);
                }
                None => {
                    writeln!(output, "Impossible choice {number}, pick among these options")?;
                }
            },
            PlayCommand::Unknown => {
                writeln!(output, "Unknown command {:?}: a move number, 0, r or q", line.trim())?;
            }
        }

        write_state(&board, &mut output)?;
    }

    output.flush()?;
    Ok(board)
}

fn write_state<W: Write>(board: &Board, output: &mut W) -> Result<()> {
    write!(output, "{}", render_moves(board))?;
    match board.status().loser().and_then(|id| board.player(id)) {
        Some(loser) => writeln!(output, "{} lost, no connections left. r to play again, q to quit", loser.name)?,
        None => write!(output, "{}'s turn > ", board.current_player_spec().name)?,
    }
    output.flush()?;
    Ok(())
}
