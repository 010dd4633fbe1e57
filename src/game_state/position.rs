//! Board snapshot used by the legality engine.
//!
//! `Position` is a plain value: cloning it yields a fully independent board,
//! which is what every speculative operation (legal-move enumeration,
//! checkmate detection, variation replay) relies on instead of locking.

use crate::errors::{ChessResult, MoveResult, ParseResult};
use crate::game_state::chess_move::Move;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{
    castling_is_allowed, find_attackers, is_king_attacked,
};
use crate::move_generation::legal_move_generator::{find_legal_moves, is_checkmate, is_stalemate};
use crate::move_generation::legal_move_shared::is_path_clear;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_position::render_position;
use crate::utils::san_parser::parse_san;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    squares: [Option<Piece>; 64],

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// Square a pawn skipped on the previous ply, if it advanced two squares.
    pub en_passant_target: Option<Square>,

    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            squares: [None; 64],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl Position {
    /// Empty board, White to move, no castling rights.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn starting() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ParseResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    #[inline]
    pub fn set_piece_at(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.index()] = piece;
    }

    /// Occupied squares, optionally restricted to one color, in `a1..h8` order.
    pub fn iter_pieces(&self, color: Option<Color>) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::ALL.into_iter().filter_map(move |square| {
            let piece = self.piece_at(square)?;
            match color {
                Some(color) if piece.color != color => None,
                _ => Some((square, piece)),
            }
        })
    }

    pub fn find(&self, piece: Piece) -> Vec<Square> {
        self.iter_pieces(Some(piece.color))
            .filter(|(_, found)| *found == piece)
            .map(|(square, _)| square)
            .collect()
    }

    pub fn find_one(&self, piece: Piece) -> Option<Square> {
        self.iter_pieces(Some(piece.color))
            .find(|(_, found)| *found == piece)
            .map(|(square, _)| square)
    }

    /// Squares holding `piece` on the zero-based `file`.
    pub fn find_by_file(&self, piece: Piece, file: u8) -> Vec<Square> {
        self.find(piece)
            .into_iter()
            .filter(|square| square.file() == file)
            .collect()
    }

    /// Squares holding `piece` on the zero-based `rank`.
    pub fn find_by_rank(&self, piece: Piece, rank: u8) -> Vec<Square> {
        self.find(piece)
            .into_iter()
            .filter(|square| square.rank() == rank)
            .collect()
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.find_one(Piece::king(color))
    }

    #[inline]
    pub fn has_castling_right(&self, right: CastlingRight) -> bool {
        self.castling_rights.contains(right)
    }

    /// Origins of every `by_color` piece that attacks `square`.
    #[inline]
    pub fn find_attackers(&self, square: Square, by_color: Color) -> Vec<Square> {
        find_attackers(self, square, by_color)
    }

    #[inline]
    pub fn has_attacker(&self, square: Square, by_color: Color) -> bool {
        !find_attackers(self, square, by_color).is_empty()
    }

    #[inline]
    pub fn is_path_clear(&self, from: Square, to: Square) -> bool {
        is_path_clear(self, from, to)
    }

    #[inline]
    pub fn castling_is_allowed(&self, right: CastlingRight) -> bool {
        castling_is_allowed(self, right)
    }

    #[inline]
    pub fn legal_moves(&self) -> Vec<Move> {
        find_legal_moves(self)
    }

    /// The side to move has its king attacked.
    #[inline]
    pub fn is_check(&self) -> bool {
        is_king_attacked(self, self.side_to_move)
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        is_checkmate(self)
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        is_stalemate(self)
    }

    /// Plays `mv` on a copy of this position.
    #[inline]
    pub fn apply(&self, mv: &Move) -> MoveResult<Position> {
        apply_move(self, mv)
    }

    /// Parses `san` for the side to move and plays it on a copy.
    pub fn play(&self, san: &str) -> ChessResult<Position> {
        let mv = parse_san(san, self.side_to_move)?;
        Ok(apply_move(self, &mv)?)
    }

    #[inline]
    pub fn render(&self) -> String {
        render_position(self)
    }
}
