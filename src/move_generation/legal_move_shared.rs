//! Board geometry shared by the attack queries, the move applier and the
//! legal-move enumerator.

use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::moves::bishop_moves::is_bishop_move;
use crate::moves::king_moves::is_king_step;
use crate::moves::knight_moves::is_knight_move;
use crate::moves::pawn_moves::can_pawn_move;
use crate::moves::queen_moves::is_queen_move;
use crate::moves::rook_moves::is_rook_move;

/// Bitboard of every occupied square.
pub fn occupancy(position: &Position) -> u64 {
    position
        .iter_pieces(None)
        .fold(0u64, |acc, (square, _)| acc | square.bit())
}

/// True when every square strictly between `from` and `to` is empty.
///
/// Walks one step at a time toward `to`; squares that are not on a common
/// rank, file or diagonal never reach `to` and report `false`. A square is
/// always clear to itself.
pub fn is_path_clear(position: &Position, from: Square, to: Square) -> bool {
    if from == to {
        return true;
    }

    let file_step = (to.file() as i8 - from.file() as i8).signum();
    let rank_step = (to.rank() as i8 - from.rank() as i8).signum();

    let mut current = from;
    loop {
        let Some(next) = current.offset(file_step, rank_step) else {
            return false;
        };
        if next == to {
            return true;
        }
        if position.piece_at(next).is_some() {
            return false;
        }
        current = next;
    }
}

/// Movement rule of `piece` from `from` to `to`, ignoring whether the move
/// would leave its own king attacked. Castling is not a king move here.
pub fn piece_can_move(position: &Position, piece: Piece, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }

    match piece.kind {
        PieceKind::Pawn => can_pawn_move(position, piece.color, from, to),
        PieceKind::Knight => is_knight_move(from, to),
        PieceKind::Bishop => is_bishop_move(from, to, occupancy(position)),
        PieceKind::Rook => is_rook_move(from, to, occupancy(position)),
        PieceKind::Queen => is_queen_move(from, to, occupancy(position)),
        PieceKind::King => is_king_step(from, to),
    }
}

/// Squares holding `piece` that match the optional file/rank hints and can
/// reach `to`.
pub fn origin_candidates(
    position: &Position,
    piece: Piece,
    to: Square,
    file_hint: Option<u8>,
    rank_hint: Option<u8>,
) -> Vec<Square> {
    position
        .find(piece)
        .into_iter()
        .filter(|from| file_hint.is_none_or(|file| from.file() == file))
        .filter(|from| rank_hint.is_none_or(|rank| from.rank() == rank))
        .filter(|from| piece_can_move(position, piece, *from, to))
        .collect()
}

/// A pawn moving diagonally onto the empty en passant target.
#[inline]
pub fn is_en_passant_capture(position: &Position, piece: Piece, from: Square, to: Square) -> bool {
    piece.is_pawn()
        && from.file() != to.file()
        && position.en_passant_target == Some(to)
        && position.piece_at(to).is_none()
}

/// Minimal file/rank hints that single out `from` among the pieces able to
/// reach `to`. Pawn captures always carry their file.
pub fn disambiguation_hints(
    position: &Position,
    piece: Piece,
    from: Square,
    to: Square,
) -> (Option<u8>, Option<u8>) {
    if piece.is_pawn() {
        let file = (from.file() != to.file()).then_some(from.file());
        return (file, None);
    }

    let rivals: Vec<Square> = origin_candidates(position, piece, to, None, None)
        .into_iter()
        .filter(|square| *square != from)
        .collect();

    if rivals.is_empty() {
        (None, None)
    } else if rivals.iter().all(|square| square.file() != from.file()) {
        (Some(from.file()), None)
    } else if rivals.iter().all(|square| square.rank() != from.rank()) {
        (None, Some(from.rank()))
    } else {
        (Some(from.file()), Some(from.rank()))
    }
}
