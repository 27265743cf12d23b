//! Piece variants and their movement geometry
//!
//! Each piece kind answers one question: does the shape of a move match the
//! way this piece travels? The answers are pure functions over coordinates.
//! Obstruction, capture legality, and everything else that needs to see the
//! board lives in the board layer, not here.

use crate::square::Square;
use std::fmt;

/// Side a piece belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    /// The other side
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }
}

/// The closed set of piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceKind {
    /// Map a FEN piece letter to its color and kind.
    ///
    /// Uppercase letters are white, lowercase black. Returns `None` for any
    /// character outside p/r/n/b/q/k.
    pub fn from_fen_char(c: char) -> Option<(PieceColor, PieceKind)> {
        let color = if c.is_ascii_uppercase() {
            PieceColor::White
        } else {
            PieceColor::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'k' => PieceKind::King,
            'q' => PieceKind::Queen,
            'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight,
            'r' => PieceKind::Rook,
            'p' => PieceKind::Pawn,
            _ => return None,
        };
        Some((color, kind))
    }

    /// The FEN letter for this kind in the given color's case
    pub fn to_fen_char(self, color: PieceColor) -> char {
        let c = match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Rook => 'r',
            PieceKind::Pawn => 'p',
        };
        match color {
            PieceColor::White => c.to_ascii_uppercase(),
            PieceColor::Black => c,
        }
    }

    /// Whether the geometry of `from -> to` matches this kind's movement
    /// pattern.
    ///
    /// Geometry only: no obstruction, no occupancy, no awareness of what
    /// sits on the destination. A pawn's diagonal step is allowed here even
    /// though the board layer will reject it without a victim.
    pub fn shape_allows(
        self,
        color: PieceColor,
        from: Square,
        to: Square,
        has_moved: bool,
    ) -> bool {
        if from == to {
            return false;
        }
        match self {
            PieceKind::Pawn => pawn_shape(color, from, to, has_moved),
            PieceKind::Rook => rook_shape(from, to),
            PieceKind::Bishop => bishop_shape(from, to),
            PieceKind::Queen => rook_shape(from, to) || bishop_shape(from, to),
            PieceKind::Knight => knight_shape(from, to),
            PieceKind::King => king_shape(from, to),
        }
    }
}

fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        to.file.index() as i8 - from.file.index() as i8,
        to.rank.index() as i8 - from.rank.index() as i8,
    )
}

fn pawn_shape(color: PieceColor, from: Square, to: Square, has_moved: bool) -> bool {
    let (df, dr) = deltas(from, to);
    let forward = match color {
        PieceColor::White => dr > 0,
        PieceColor::Black => dr < 0,
    };
    if !forward {
        return false;
    }
    let (df, dr) = (df.abs(), dr.abs());
    (df == 0 && (dr == 1 || (dr == 2 && !has_moved))) || (df == 1 && dr == 1)
}

fn rook_shape(from: Square, to: Square) -> bool {
    from.file == to.file || from.rank == to.rank
}

fn bishop_shape(from: Square, to: Square) -> bool {
    let (df, dr) = deltas(from, to);
    df.abs() == dr.abs()
}

fn knight_shape(from: Square, to: Square) -> bool {
    let (df, dr) = deltas(from, to);
    let (df, dr) = (df.abs(), dr.abs());
    (df == 2 && dr == 1) || (df == 1 && dr == 2)
}

fn king_shape(from: Square, to: Square) -> bool {
    let (df, dr) = deltas(from, to);
    df.abs() <= 1 && dr.abs() <= 1
}

/// A piece on (or about to be placed on) a board.
///
/// Plain value type: boards copy pieces by value, so a cloned board owns
/// its own piece instances and simulation never aliases the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
    /// Current square; `None` only before first placement
    pub square: Option<Square>,
    /// Count of successful relocations
    pub moves: u32,
}

impl Piece {
    /// Create an unplaced piece
    pub fn new(kind: PieceKind, color: PieceColor) -> Self {
        Piece {
            kind,
            color,
            square: None,
            moves: 0,
        }
    }

    /// Whether this piece has relocated at least once
    #[inline]
    pub fn has_moved(&self) -> bool {
        self.moves > 0
    }

    /// Attempt to move the piece to the given square.
    ///
    /// If the piece has never been placed, the square is set
    /// unconditionally. Otherwise the move must match this kind's shape;
    /// a geometric mismatch returns false and leaves the piece untouched.
    /// Every successful call bumps the move counter.
    ///
    /// This does not check whether another piece occupies the square; that
    /// is the board's concern.
    pub fn relocate(&mut self, to: Square) -> bool {
        if let Some(from) = self.square {
            if !self.kind.shape_allows(self.color, from, to, self.has_moved()) {
                return false;
            }
        }
        self.square = Some(to);
        self.moves += 1;
        true
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.to_fen_char(self.color))
    }
}
