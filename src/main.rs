//! Console front end for the chess-core rules engine
//!
//! Owns everything the engine deliberately does not: argument parsing,
//! logging bootstrap, the play-again loop, and wiring the console observer
//! into the move pipeline.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use chess_core::Board;

mod ai;
mod console;
mod session;

use session::{GameSession, Outcome};

/// Console chess for two players, or one player against a random mover
#[derive(Parser, Debug)]
#[command(name = "chessmasters", version, about)]
struct Args {
    /// Starting position as a FEN placement field (or a full FEN record)
    #[arg(long)]
    fen: Option<String>,

    /// Verbose engine logging
    #[arg(long)]
    debug: bool,

    /// Disable ANSI colors in the board rendering
    #[arg(long)]
    plain: bool,

    /// Let the computer play Black
    #[arg(long)]
    ai: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();

    loop {
        let board = match &args.fen {
            Some(fen) => Board::from_fen(fen).context("could not read the starting position")?,
            None => Board::new(),
        };

        let mut session = GameSession::new(board, !args.plain, args.ai);
        match session.run()? {
            Outcome::Quit => break,
            Outcome::GameOver => {
                if !console::prompt_yes_no("Play again? (y/n)")? {
                    break;
                }
            }
        }
    }

    println!("Goodbye");
    Ok(())
}
