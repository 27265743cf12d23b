//! Notification interface between the board and its surroundings
//!
//! The board reports captures and completed moves through this trait so a
//! presentation layer can log or render them without the engine depending
//! on it. Both callbacks fire synchronously inside the move pipeline: the
//! capture once generic validation has accepted the move, the post-move
//! notification once the grid has been updated.

use crate::piece::Piece;
use crate::square::Square;

/// Receiver for board notifications. Both methods default to no-ops so an
/// implementation can listen to just one of them.
pub trait GameObserver {
    /// A capture was accepted; `victim` still carries the square it is
    /// about to be removed from.
    fn piece_captured(&mut self, attacker: &Piece, victim: &Piece) {
        let _ = (attacker, victim);
    }

    /// A move finished executing. For a promotion, `piece` is the new
    /// queen.
    fn piece_moved(&mut self, piece: &Piece, to: Square) {
        let _ = (piece, to);
    }
}

/// Observer that discards every notification. Simulation probes (checkmate
/// search, legality checks on disposable clones) run with this sink so
/// trial moves never leak to the outside.
pub struct Silent;

impl GameObserver for Silent {}
