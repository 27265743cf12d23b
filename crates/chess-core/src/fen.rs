//! FEN piece-placement parsing
//!
//! Only the placement field (the first space-delimited component of a full
//! FEN string) is interpreted: digits are runs of empty squares, letters
//! are pieces, '/' separates ranks from rank 8 down to rank 1. Side to
//! move, castling rights, and the rest of a full FEN record are accepted by
//! the caller and ignored.

use crate::error::{ChessError, ChessResult};
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

/// Placement field of the standard starting position
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

fn invalid(message: String) -> ChessError {
    ChessError::InvalidFen { message }
}

pub(crate) fn parse_placement(placement: &str) -> ChessResult<[[Option<Piece>; 8]; 8]> {
    let mut grid: [[Option<Piece>; 8]; 8] = [[None; 8]; 8];

    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid(format!("expected 8 ranks, got {}", ranks.len())));
    }

    for (i, rank_text) in ranks.iter().enumerate() {
        let rank = 7 - i as u8;
        let mut file = 0u8;

        for c in rank_text.chars() {
            if let Some(run) = c.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(invalid(format!(
                        "invalid empty-square count '{c}' in rank {}",
                        rank + 1
                    )));
                }
                file += run as u8;
            } else {
                let (color, kind) = PieceKind::from_fen_char(c)
                    .ok_or_else(|| invalid(format!("unrecognized character '{c}'")))?;
                if file > 7 {
                    return Err(invalid(format!("too many squares in rank {}", rank + 1)));
                }
                let mut piece = Piece::new(kind, color);
                piece.square = Some(Square::new(file, rank));
                grid[rank as usize][file as usize] = Some(piece);
                file += 1;
            }
            if file > 8 {
                return Err(invalid(format!("too many squares in rank {}", rank + 1)));
            }
        }

        if file != 8 {
            return Err(invalid(format!(
                "rank {} covers {} squares, expected 8",
                rank + 1,
                file
            )));
        }
    }

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PieceColor;

    #[test]
    fn test_parse_standard_placement() {
        let grid = parse_placement(STARTING_PLACEMENT).unwrap();
        let a1 = grid[0][0].unwrap();
        assert_eq!(a1.kind, PieceKind::Rook);
        assert_eq!(a1.color, PieceColor::White);
        let e8 = grid[7][4].unwrap();
        assert_eq!(e8.kind, PieceKind::King);
        assert_eq!(e8.color, PieceColor::Black);
        assert!(grid[3].iter().all(|s| s.is_none()), "rank 4 starts empty");
    }

    #[test]
    fn test_parse_records_piece_squares() {
        let grid = parse_placement("8/8/8/3q4/8/8/8/8").unwrap();
        let queen = grid[4][3].unwrap();
        assert_eq!(queen.square, Some(Square::new(3, 4)));
        assert_eq!(queen.moves, 0);
    }

    #[test]
    fn test_parse_rejects_unrecognized_character() {
        assert!(parse_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX").is_err());
        assert!(parse_placement("8/8/8/8/8/8/8/7?").is_err());
    }

    #[test]
    fn test_parse_rejects_wrong_rank_count() {
        assert!(parse_placement("8/8/8/8/8/8/8").is_err());
        assert!(parse_placement("8/8/8/8/8/8/8/8/8").is_err());
    }

    #[test]
    fn test_parse_rejects_overfull_or_short_ranks() {
        assert!(parse_placement("9/8/8/8/8/8/8/8").is_err());
        assert!(parse_placement("ppppppppp/8/8/8/8/8/8/8").is_err());
        assert!(parse_placement("7/8/8/8/8/8/8/8").is_err());
        assert!(parse_placement("44p/8/8/8/8/8/8/8").is_err());
    }
}
