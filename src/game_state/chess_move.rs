//! A chess move as written in a game record.
//!
//! Moves parsed from SAN are partial: the origin is usually missing and the
//! capture/check flags are whatever the notation claimed. The legality engine
//! fills in the rest (see `move_resolver`).

use std::fmt;

use crate::errors::ParseResult;
use crate::game_state::chess_types::{CastlingRight, Color, Piece, PieceKind, Square};
use crate::utils::san_generator::move_to_san;
use crate::utils::san_parser::parse_san;

/// Traditional move-quality suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveAnnotation {
    /// `!!`
    Brilliant,
    /// `!`
    Good,
    /// `!?`
    Interesting,
    /// `?!`
    Dubious,
    /// `?`
    Mistake,
    /// `??`
    Blunder,
}

impl MoveAnnotation {
    /// Two-character symbols come first so suffix matching is greedy.
    pub const ALL: [MoveAnnotation; 6] = [
        MoveAnnotation::Brilliant,
        MoveAnnotation::Interesting,
        MoveAnnotation::Dubious,
        MoveAnnotation::Blunder,
        MoveAnnotation::Good,
        MoveAnnotation::Mistake,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            MoveAnnotation::Brilliant => "!!",
            MoveAnnotation::Good => "!",
            MoveAnnotation::Interesting => "!?",
            MoveAnnotation::Dubious => "?!",
            MoveAnnotation::Mistake => "?",
            MoveAnnotation::Blunder => "??",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == symbol)
    }
}

impl fmt::Display for MoveAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    /// Moving piece; its color is the color of the move.
    pub piece: Piece,
    pub from: Option<Square>,
    /// Zero-based disambiguation hints.
    pub file_from: Option<u8>,
    pub rank_from: Option<u8>,
    /// Absent only for castling.
    pub to: Option<Square>,
    pub promotion: Option<Piece>,

    pub is_capture: bool,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub castling: Option<CastlingRight>,
    pub annotation: Option<MoveAnnotation>,
}

impl Move {
    pub fn new(piece: Piece, to: Square) -> Self {
        Self {
            piece,
            from: None,
            file_from: None,
            rank_from: None,
            to: Some(to),
            promotion: None,
            is_capture: false,
            is_check: false,
            is_checkmate: false,
            castling: None,
            annotation: None,
        }
    }

    pub fn castle(right: CastlingRight) -> Self {
        Self {
            piece: Piece::king(right.color()),
            from: None,
            file_from: None,
            rank_from: None,
            to: None,
            promotion: None,
            is_capture: false,
            is_check: false,
            is_checkmate: false,
            castling: Some(right),
            annotation: None,
        }
    }

    #[inline]
    pub fn from_san(san: &str, color: Color) -> ParseResult<Self> {
        parse_san(san, color)
    }

    #[inline]
    pub fn san(&self) -> String {
        move_to_san(self)
    }

    /// Sets an explicit origin along with the matching hints.
    pub fn with_from(mut self, from: Square) -> Self {
        self.from = Some(from);
        self.file_from = Some(from.file());
        self.rank_from = Some(from.rank());
        self
    }

    pub fn with_promotion(mut self, kind: PieceKind) -> Self {
        self.promotion = Some(Piece::new(self.piece.color, kind));
        self
    }

    pub fn with_capture(mut self) -> Self {
        self.is_capture = true;
        self
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.piece.color
    }

    #[inline]
    pub fn is_castling(&self) -> bool {
        self.castling.is_some()
    }

    /// Same move played by the other side: piece, promotion and castling
    /// right swap color, squares are kept.
    pub fn with_color(mut self, color: Color) -> Self {
        if self.piece.color == color {
            return self;
        }
        self.piece = self.piece.opposite();
        self.promotion = self.promotion.map(Piece::opposite);
        self.castling = self.castling.map(|right| {
            if right.is_kingside() {
                CastlingRight::kingside(color)
            } else {
                CastlingRight::queenside(color)
            }
        });
        self
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.san())
    }
}

#[cfg(test)]
mod tests {
    use super::{Move, MoveAnnotation};
    use crate::game_state::chess_types::{CastlingRight, Color, Piece, PieceKind, Square};

    #[test]
    fn annotation_symbols() {
        assert_eq!(MoveAnnotation::from_symbol("!?"), Some(MoveAnnotation::Interesting));
        assert_eq!(MoveAnnotation::from_symbol("??"), Some(MoveAnnotation::Blunder));
        assert_eq!(MoveAnnotation::from_symbol("!!!"), None);
        assert_eq!(MoveAnnotation::Dubious.to_string(), "?!");
    }

    #[test]
    fn builders_set_hints() {
        let mv = Move::new(Piece::WHITE_PAWN, Square::E8)
            .with_from(Square::E7)
            .with_promotion(PieceKind::Queen);
        assert_eq!(mv.file_from, Some(4));
        assert_eq!(mv.rank_from, Some(6));
        assert_eq!(mv.promotion, Some(Piece::WHITE_QUEEN));
        assert_eq!(mv.san(), "e7e8=Q");
    }

    #[test]
    fn recoloring_swaps_castling_side_owner() {
        let mv = Move::castle(CastlingRight::WhiteQueenside).with_color(Color::Black);
        assert_eq!(mv.castling, Some(CastlingRight::BlackQueenside));
        assert_eq!(mv.piece, Piece::BLACK_KING);
        assert_eq!(mv.to_string(), "O-O-O");
    }
}
