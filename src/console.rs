//! Console-facing collaborators: the notification printer and line prompts

use std::io::{self, BufRead, Write};

use anyhow::Result;
use chess_core::{GameObserver, Piece, Square};

/// Prints engine notifications as one-line announcements
pub struct ConsoleObserver;

impl GameObserver for ConsoleObserver {
    fn piece_captured(&mut self, attacker: &Piece, victim: &Piece) {
        match victim.square {
            Some(square) => println!("{} takes {} on {}", name(attacker), name(victim), square),
            None => println!("{} takes {}", name(attacker), name(victim)),
        }
    }

    fn piece_moved(&mut self, piece: &Piece, to: Square) {
        println!("{} to {}", name(piece), to);
    }
}

fn name(piece: &Piece) -> String {
    format!("{:?} {:?}", piece.color, piece.kind).to_lowercase()
}

/// Print `prompt` and read one line. `None` on end of input.
pub fn prompt_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Yes/no prompt that keeps asking until it gets an answer. End of input
/// reads as "no".
pub fn prompt_yes_no(prompt: &str) -> Result<bool> {
    loop {
        let Some(line) = prompt_line(&format!("{prompt} "))? else {
            return Ok(false);
        };
        match line.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please answer y or n."),
        }
    }
}
