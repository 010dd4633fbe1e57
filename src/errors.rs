//! Error vocabulary shared by the parsers, the legality engine and the
//! validators.
//!
//! Parse errors abort a whole parse. Move and position violations are
//! reported in a fixed order so the same input always yields the same error.

use thiserror::Error;

/// Text could not be turned into a board, a move or a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid FEN \"{fen}\": {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("invalid SAN string: \"{san}\"")]
    InvalidSan { san: String },

    #[error("invalid square: \"{square}\"")]
    InvalidSquare { square: String },

    #[error("invalid PGN tag pair: {line}")]
    InvalidTagPair { line: String },

    #[error("unexpected character '{character}' at offset {offset} in movetext")]
    UnexpectedCharacter { character: char, offset: usize },

    #[error("comment opened at offset {offset} is never closed")]
    UnterminatedComment { offset: usize },

    #[error("invalid numeric annotation glyph: {nag}")]
    InvalidNag { nag: String },

    #[error("variation nesting exceeds the configured limit of {limit}")]
    VariationTooDeep { limit: usize },
}

/// A board state fails one of the structural checks run after every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
pub enum PositionViolation {
    #[error("no white king present")]
    NoWhiteKing,
    #[error("multiple white kings present")]
    MultipleWhiteKings,
    #[error("no black king present")]
    NoBlackKing,
    #[error("multiple black kings present")]
    MultipleBlackKings,
    #[error("king of the side that just moved is in check")]
    KingInCheck,
    #[error("pawn on the first or last rank")]
    PawnOnInvalidRank,
    #[error("more than eight pawns for one color")]
    TooManyPawns,
    #[error("en passant square is inconsistent with the board")]
    EnPassantSquareInvalid,
}

/// A move cannot be played in a given position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveViolation {
    #[error("no piece found for the move")]
    PieceNotFound,
    #[error("multiple pieces match the move")]
    MultiplePiecesMatch,
    #[error("the piece on the origin square does not match the move")]
    PieceOnFromSquareMismatch,
    #[error("no piece to capture on the target square")]
    NoPieceToCapture,
    #[error("the target square is occupied by an own piece")]
    SquareOccupiedByOwnPiece,
    #[error("castling is not allowed in the current position")]
    CastlingNotAllowed,
    #[error("it is not this color's turn to move")]
    WrongColorToMove,
    #[error("invalid promotion piece")]
    InvalidPromotionPiece,
    #[error("promotion is only possible on the last rank")]
    InvalidPromotionSquare,
    #[error("the move does not give check")]
    MoveNotCheck,
    #[error("the move does not give checkmate")]
    MoveNotCheckmate,
    #[error("the resulting position is invalid: {0:?}")]
    NextPositionInvalid(Vec<PositionViolation>),
}

/// Umbrella error for entry points that parse a move and then play it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Move(#[from] MoveViolation),
}

pub type ParseResult<T> = Result<T, ParseError>;
pub type MoveResult<T> = Result<T, MoveViolation>;
pub type ChessResult<T> = Result<T, ChessError>;
