//! Interactive turn loop
//!
//! Drives one game from a starting position to checkmate or a quit. The
//! loop owns the turn order and the one rule the engine leaves to its
//! caller: a player may not end their own turn in check. Every candidate
//! move is probed on a disposable clone first, so the live board only ever
//! sees moves that are fully legal.

use anyhow::{Context, Result};
use tracing::{debug, info};

use chess_core::{Board, PieceColor, Square};

use crate::ai;
use crate::console::{self, ConsoleObserver};

/// How a session ended
pub enum Outcome {
    /// Checkmate or a dead end; offer another game
    GameOver,
    /// The player asked to leave
    Quit,
}

pub struct GameSession {
    board: Board,
    turn: PieceColor,
    styled: bool,
    ai_plays_black: bool,
}

impl GameSession {
    pub fn new(board: Board, styled: bool, ai_plays_black: bool) -> Self {
        GameSession {
            board,
            turn: PieceColor::White,
            styled,
            ai_plays_black,
        }
    }

    pub fn run(&mut self) -> Result<Outcome> {
        loop {
            println!("\n{}\n", self.board.render(self.styled));

            if self.board.is_in_checkmate(self.turn) {
                info!("[GAME] checkmate: {:?} wins", self.turn.opposite());
                println!("Checkmate! {:?} wins.", self.turn.opposite());
                return Ok(Outcome::GameOver);
            }
            if self.board.is_in_check(self.turn) {
                println!("{:?} is in check.", self.turn);
            }

            let (from, to) = if self.ai_plays_black && self.turn == PieceColor::Black {
                match ai::choose_move(&self.board, self.turn) {
                    Some((from, to)) => {
                        println!("{:?} plays {} {}", self.turn, from, to);
                        (from, to)
                    }
                    None => {
                        println!("{:?} has no legal moves.", self.turn);
                        return Ok(Outcome::GameOver);
                    }
                }
            } else {
                match self.prompt_move()? {
                    Some(mv) => mv,
                    None => return Ok(Outcome::Quit),
                }
            };

            // Probe on a clone: the move must be accepted by the engine and
            // must not leave the mover's own king attacked.
            let mut probe = self.board.clone();
            match probe.move_piece(from, to) {
                Ok(false) => {
                    println!("Illegal move.");
                    continue;
                }
                Ok(true) if probe.is_in_check(self.turn) => {
                    println!("That move would leave {:?} in check.", self.turn);
                    continue;
                }
                Ok(true) => {}
                Err(err) => {
                    return Err(err).context("the game reached an inconsistent position");
                }
            }

            let mut observer = ConsoleObserver;
            let moved = self
                .board
                .move_piece_with(from, to, &mut observer)
                .context("the game reached an inconsistent position")?;
            if !moved {
                // The probe accepted this exact move a moment ago.
                println!("Illegal move.");
                continue;
            }

            debug!("[GAME] {:?} played {} -> {}", self.turn, from, to);
            self.turn = self.turn.opposite();
        }
    }

    /// Ask the player at the keyboard for a move. `None` means quit
    /// (explicitly, or end of input).
    fn prompt_move(&self) -> Result<Option<(Square, Square)>> {
        loop {
            let Some(line) = console::prompt_line(&format!("{:?}> ", self.turn))? else {
                return Ok(None);
            };
            let line = line.trim();

            if line.is_empty() {
                continue;
            }
            if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
                return Ok(None);
            }

            let mut parts = line.split_whitespace();
            let (Some(from_text), Some(to_text), None) =
                (parts.next(), parts.next(), parts.next())
            else {
                println!("Enter a move as two squares, e.g. 'e2 e4', or 'quit'.");
                continue;
            };

            let from = match Square::from_algebraic(from_text) {
                Ok(square) => square,
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            };
            let to = match Square::from_algebraic(to_text) {
                Ok(square) => square,
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            };

            return Ok(Some((from, to)));
        }
    }
}
