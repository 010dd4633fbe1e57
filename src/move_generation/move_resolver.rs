//! Completes a partial move (typically parsed from SAN) against a position.

use crate::errors::MoveResult;
use crate::game_state::chess_move::Move;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::{apply_move, resolve_origin};
use crate::move_generation::legal_move_checks::is_king_attacked;
use crate::move_generation::legal_move_generator::has_legal_move;
use crate::move_generation::legal_move_shared::{disambiguation_hints, is_en_passant_capture};

/// Validates `mv` and returns a copy with its origin filled in and the
/// capture, check and checkmate flags set to what actually happens on the
/// board. Hints the move already carries are kept; missing ones are set to
/// the minimum SAN needs.
pub fn resolve_move(position: &Position, mv: &Move) -> MoveResult<Move> {
    Ok(resolve_and_apply(position, mv)?.0)
}

/// Like `resolve_move`, also returning the successor position.
pub fn resolve_and_apply(position: &Position, mv: &Move) -> MoveResult<(Move, Position)> {
    let next = apply_move(position, mv)?;
    let mut resolved = mv.clone();

    if let (None, Some(to)) = (mv.castling, mv.to) {
        let from = resolve_origin(position, mv, to)?;
        resolved.from = Some(from);
        if resolved.file_from.is_none() && resolved.rank_from.is_none() {
            let (file_from, rank_from) = disambiguation_hints(position, mv.piece, from, to);
            resolved.file_from = file_from;
            resolved.rank_from = rank_from;
        }
        resolved.is_capture =
            position.piece_at(to).is_some() || is_en_passant_capture(position, mv.piece, from, to);
    }

    resolved.is_check = is_king_attacked(&next, next.side_to_move);
    resolved.is_checkmate = resolved.is_check && !has_legal_move(&next);

    Ok((resolved, next))
}
