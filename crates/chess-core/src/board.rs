//! The 8x8 board: occupancy, generic move legality, execution, and the
//! check/checkmate queries
//!
//! The board is the single owner of the grid. Everything mutating it goes
//! through `move_piece`, which layers the rules in a fixed order: generic
//! validation (obstruction, capture legality, the king-capture invariant),
//! then the piece's own shape check inside `relocate`, then the grid swap,
//! promotion, and notification. Check and checkmate are answered by running
//! the same pipeline against disposable clones.

use crate::error::{ChessResult, IllegalStateError};
use crate::events::{GameObserver, Silent};
use crate::fen;
use crate::piece::{Piece, PieceColor, PieceKind};
use crate::square::{Rank, Square};
use std::fmt;
use tracing::{debug, error};

/// Outcome of the generic, piece-type-independent legality screen.
///
/// `WouldCaptureKing` is not an ordinary rejection: a position where a king
/// can be taken means a check went unhandled on an earlier turn. Check
/// detection is the one caller that reads it as a plain answer ("yes, the
/// king is attacked"); everyone else must surface it as a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Legal,
    Illegal,
    WouldCaptureKing,
}

const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

fn farthest_rank(color: PieceColor) -> Rank {
    match color {
        PieceColor::White => Rank(7),
        PieceColor::Black => Rank(0),
    }
}

/// An 8x8 grid of optional pieces, indexed `[rank][file]`.
///
/// Cloning a board deep-copies every piece (they are plain values), so a
/// clone can be mutated freely without touching the original. The
/// checkmate search leans on this: one clone per trial move, discarded
/// right after the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Standard starting position
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, &kind) in BACK_ROW.iter().enumerate() {
            let file = file as u8;
            board.place_piece(Piece::new(kind, PieceColor::White), Square::new(file, 0));
            board.place_piece(
                Piece::new(PieceKind::Pawn, PieceColor::White),
                Square::new(file, 1),
            );
            board.place_piece(
                Piece::new(PieceKind::Pawn, PieceColor::Black),
                Square::new(file, 6),
            );
            board.place_piece(Piece::new(kind, PieceColor::Black), Square::new(file, 7));
        }
        board
    }

    /// Board with no pieces, for building positions by hand
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Build a board from the placement field of a FEN string.
    ///
    /// A full FEN record is accepted; everything after the first
    /// space-delimited field is ignored.
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        let placement = fen.split_whitespace().next().unwrap_or("");
        Ok(Board {
            squares: fen::parse_placement(placement)?,
        })
    }

    /// Piece occupying `square`, if any
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.squares[square.rank.index() as usize][square.file.index() as usize].as_ref()
    }

    /// Whether `square` is unoccupied
    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    fn set_square(&mut self, square: Square, piece: Option<Piece>) {
        let cell =
            &mut self.squares[square.rank.index() as usize][square.file.index() as usize];
        *cell = piece.map(|mut p| {
            p.square = Some(square);
            p
        });
    }

    /// Put a piece on an empty square. Returns false (and changes nothing)
    /// if the square is taken.
    pub fn place_piece(&mut self, piece: Piece, square: Square) -> bool {
        if self.piece_at(square).is_some() {
            return false;
        }
        self.set_square(square, Some(piece));
        true
    }

    /// Every piece of the given color, scanned rank by rank
    pub fn pieces(&self, color: PieceColor) -> Vec<&Piece> {
        self.squares
            .iter()
            .flatten()
            .filter_map(|cell| cell.as_ref())
            .filter(|piece| piece.color == color)
            .collect()
    }

    /// Square of the given color's king, if one is on the board
    pub fn king_square(&self, color: PieceColor) -> Option<Square> {
        self.pieces(color)
            .iter()
            .find(|piece| piece.kind == PieceKind::King)
            .and_then(|piece| piece.square)
    }

    /// Whether every square strictly between `from` and `to` is empty.
    /// Non-aligned pairs have an empty path and always pass.
    pub fn path_is_clear(&self, from: Square, to: Square) -> bool {
        Square::between(from, to)
            .iter()
            .all(|square| self.is_empty(*square))
    }

    /// The generic legality screen, independent of piece type.
    ///
    /// Checks, in order: obstruction along the path, friendly fire at the
    /// destination, the king-capture invariant, and the pawn rule that a
    /// move is a capture (occupied destination, file change) exclusive-or
    /// a straight advance (empty destination, same file). Shape legality
    /// is deliberately not checked here; `Piece::relocate` does that.
    pub fn validate(&self, piece: &Piece, dest: Square) -> Verdict {
        let Some(from) = piece.square else {
            return Verdict::Illegal;
        };

        if !self.path_is_clear(from, dest) {
            return Verdict::Illegal;
        }

        if let Some(victim) = self.piece_at(dest) {
            if victim.color == piece.color {
                return Verdict::Illegal;
            }
            if victim.kind == PieceKind::King {
                return Verdict::WouldCaptureKing;
            }
        }

        if piece.kind == PieceKind::Pawn {
            let capturing = self.piece_at(dest).is_some();
            let straight = from.file == dest.file;
            if capturing == straight {
                return Verdict::Illegal;
            }
        }

        Verdict::Legal
    }

    /// Execute a move, discarding notifications
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<bool, IllegalStateError> {
        self.move_piece_with(from, to, &mut Silent)
    }

    /// Execute a move, reporting captures and the completed move to
    /// `observer`.
    ///
    /// Returns `Ok(false)` for every ordinary rejection (empty origin,
    /// failed validation, shape mismatch) with the board untouched, and
    /// `Ok(true)` once the move has fully executed, promotion included.
    /// `Err` means the move would capture a king; the board is untouched
    /// but the game has already gone wrong upstream.
    pub fn move_piece_with(
        &mut self,
        from: Square,
        to: Square,
        observer: &mut dyn GameObserver,
    ) -> Result<bool, IllegalStateError> {
        let Some(piece) = self.piece_at(from).copied() else {
            return Ok(false);
        };

        match self.validate(&piece, to) {
            Verdict::Illegal => return Ok(false),
            Verdict::WouldCaptureKing => {
                let err = IllegalStateError {
                    from,
                    to,
                    board: self.render(false),
                };
                error!("[BOARD] {err}");
                return Err(err);
            }
            Verdict::Legal => {}
        }

        if let Some(victim) = self.piece_at(to) {
            if piece.kind != PieceKind::Pawn || from.file != to.file {
                observer.piece_captured(&piece, victim);
            }
        }

        let mut piece = piece;
        if !piece.relocate(to) {
            return Ok(false);
        }

        self.set_square(to, Some(piece));
        self.set_square(from, None);

        if piece.kind == PieceKind::Pawn && to.rank == farthest_rank(piece.color) {
            self.set_square(to, Some(Piece::new(PieceKind::Queen, piece.color)));
            debug!("[BOARD] {:?} pawn promoted to queen on {}", piece.color, to);
        }

        if let Some(moved) = self.piece_at(to) {
            observer.piece_moved(moved, to);
        }
        debug!(
            "[BOARD] {:?} {:?} moved {} -> {}",
            piece.color, piece.kind, from, to
        );
        Ok(true)
    }

    fn attacks_king(&self, piece: &Piece, king: Square) -> bool {
        let Some(from) = piece.square else {
            return false;
        };
        piece
            .kind
            .shape_allows(piece.color, from, king, piece.has_moved())
            && self.validate(piece, king) == Verdict::WouldCaptureKing
    }

    /// Whether the given color's king is attacked.
    ///
    /// An opposing piece attacks the king when its shape reaches the
    /// king's square and the generic screen answers `WouldCaptureKing`
    /// for that attack. This is the one place the invariant verdict is
    /// read as data instead of raised as an error. A board with no king
    /// of this color is not in check.
    pub fn is_in_check(&self, color: PieceColor) -> bool {
        let Some(king) = self.king_square(color) else {
            return false;
        };
        self.pieces(color.opposite())
            .iter()
            .any(|piece| self.attacks_king(piece, king))
    }

    /// Whether the given color is checkmated.
    ///
    /// Exhaustive by design: for every friendly piece and every
    /// destination square, clone the board, try the move, and see whether
    /// the clone is still in check. At most 64x64 trials, each against a
    /// fresh clone, which is cheap at human turn speed. A trial that
    /// trips the king-capture invariant simply counts as "not an escape".
    /// A position with no legal moves while not in check is not detected
    /// here; it reports false.
    pub fn is_in_checkmate(&self, color: PieceColor) -> bool {
        if !self.is_in_check(color) {
            return false;
        }

        for rank_from in 0..8 {
            for file_from in 0..8 {
                let from = Square::new(file_from, rank_from);
                match self.piece_at(from) {
                    Some(piece) if piece.color == color => {}
                    _ => continue,
                }

                for rank_to in 0..8 {
                    for file_to in 0..8 {
                        let to = Square::new(file_to, rank_to);
                        if from == to {
                            continue;
                        }
                        let mut probe = self.clone();
                        if matches!(probe.move_piece(from, to), Ok(true))
                            && !probe.is_in_check(color)
                        {
                            debug!("[BOARD] escape found: {} -> {}", from, to);
                            return false;
                        }
                    }
                }
            }
        }
        true
    }

    /// Render the board as a rank/file-labeled grid.
    ///
    /// With `styled`, squares alternate light and dark ANSI backgrounds;
    /// without, the output is plain text suitable for logs. Human-facing
    /// either way, not a machine format.
    pub fn render(&self, styled: bool) -> String {
        const LIGHT: &str = "\x1b[48;5;250m\x1b[38;5;16m";
        const DARK: &str = "\x1b[48;5;246m\x1b[38;5;16m";
        const RESET: &str = "\x1b[0m";

        let frame = |left: char, joint: char, right: char| {
            let mut row = String::from("   ");
            row.push(left);
            for file in 0..8 {
                if file > 0 {
                    row.push(joint);
                }
                row.push_str("───");
            }
            row.push(right);
            row.push('\n');
            row
        };

        let top = frame('┌', '┬', '┐');
        let sep = frame('├', '┼', '┤');
        let bottom = frame('└', '┴', '┘');

        let mut out = String::new();
        let mut light = true; // a8 is a light square
        for rank in (0..8usize).rev() {
            out.push_str(if rank == 7 { &top } else { &sep });
            out.push_str(&format!(" {} ", rank + 1));
            for file in 0..8 {
                let glyph = match self.squares[rank][file] {
                    Some(piece) => piece.kind.to_fen_char(piece.color),
                    None => '-',
                };
                out.push('│');
                if styled {
                    out.push_str(if light { LIGHT } else { DARK });
                }
                out.push(' ');
                out.push(glyph);
                out.push(' ');
                if styled {
                    out.push_str(RESET);
                }
                light = !light;
            }
            light = !light;
            out.push_str("│\n");
        }
        out.push_str(&bottom);
        out.push_str("     a   b   c   d   e   f   g   h");
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(true))
    }
}
