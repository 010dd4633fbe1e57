//! Canonical chess-rule constants.
//!
//! Holds the standard starting position and the fixed board geometry of the
//! four castling moves.

use crate::game_state::chess_types::{CastlingRight, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Squares involved in one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingGeometry {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares strictly between king and rook; all must be empty.
    pub must_be_empty: &'static [Square],
    /// King origin, transit and destination; none may be attacked.
    pub king_path: &'static [Square],
}

pub const fn castling_geometry(right: CastlingRight) -> CastlingGeometry {
    match right {
        CastlingRight::WhiteKingside => CastlingGeometry {
            king_from: Square::E1,
            king_to: Square::G1,
            rook_from: Square::H1,
            rook_to: Square::F1,
            must_be_empty: &[Square::F1, Square::G1],
            king_path: &[Square::E1, Square::F1, Square::G1],
        },
        CastlingRight::WhiteQueenside => CastlingGeometry {
            king_from: Square::E1,
            king_to: Square::C1,
            rook_from: Square::A1,
            rook_to: Square::D1,
            must_be_empty: &[Square::D1, Square::C1, Square::B1],
            king_path: &[Square::E1, Square::D1, Square::C1],
        },
        CastlingRight::BlackKingside => CastlingGeometry {
            king_from: Square::E8,
            king_to: Square::G8,
            rook_from: Square::H8,
            rook_to: Square::F8,
            must_be_empty: &[Square::F8, Square::G8],
            king_path: &[Square::E8, Square::F8, Square::G8],
        },
        CastlingRight::BlackQueenside => CastlingGeometry {
            king_from: Square::E8,
            king_to: Square::C8,
            rook_from: Square::A8,
            rook_to: Square::D8,
            must_be_empty: &[Square::D8, Square::C8, Square::B8],
            king_path: &[Square::E8, Square::D8, Square::C8],
        },
    }
}
