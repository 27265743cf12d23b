//! Random-move opponent
//!
//! Enumerates fully legal moves with the same clone-and-try pipeline the
//! engine's own checkmate search uses, then picks one uniformly. No
//! lookahead, no evaluation; it exists so a single player has something to
//! push back.

use chess_core::{Board, PieceColor, Square};
use rand::seq::IndexedRandom;
use tracing::debug;

/// Pick a uniformly random legal move for `color`, or `None` if there is
/// no legal move at all.
pub fn choose_move(board: &Board, color: PieceColor) -> Option<(Square, Square)> {
    let moves = legal_moves(board, color);
    debug!("[AI] {:?} has {} legal moves", color, moves.len());
    moves.choose(&mut rand::rng()).copied()
}

/// Every move for `color` that the engine accepts and that does not leave
/// the mover's own king attacked.
pub fn legal_moves(board: &Board, color: PieceColor) -> Vec<(Square, Square)> {
    let mut moves = Vec::new();
    for from_rank in 0..8 {
        for from_file in 0..8 {
            let from = Square::new(from_file, from_rank);
            match board.piece_at(from) {
                Some(piece) if piece.color == color => {}
                _ => continue,
            }

            for to_rank in 0..8 {
                for to_file in 0..8 {
                    let to = Square::new(to_file, to_rank);
                    if from == to {
                        continue;
                    }
                    let mut probe = board.clone();
                    if matches!(probe.move_piece(from, to), Ok(true))
                        && !probe.is_in_check(color)
                    {
                        moves.push((from, to));
                    }
                }
            }
        }
    }
    moves
}
