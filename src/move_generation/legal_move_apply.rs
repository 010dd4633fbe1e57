//! Non-destructive move application.
//!
//! `apply_move` checks a (possibly partial) move against a position and, if
//! it is legal, returns the successor position. The input is never touched;
//! on failure the first violation found is returned, in this order:
//!
//! 1. wrong color to move
//! 2. castling preconditions (castling moves only)
//! 3. destination occupied by an own piece
//! 4. origin resolution (explicit origin, then hints and movement rule)
//! 5. capture claim without a capturable piece
//! 6. promotion piece and promotion square
//! 7. structural validity of the resulting position
//! 8. check and checkmate claims

use tracing::trace;

use crate::errors::{MoveResult, MoveViolation};
use crate::game_state::chess_move::Move;
use crate::game_state::chess_rules::castling_geometry;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::{castling_is_allowed, is_king_attacked};
use crate::move_generation::legal_move_generator::is_checkmate;
use crate::move_generation::legal_move_shared::{is_en_passant_capture, origin_candidates};
use crate::validation::position_validator::validate_position;

/// Knobs for `apply_move_with_options`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyOptions {
    /// Reject moves that claim `#` without delivering mate. Legal-move
    /// enumeration turns this off since it never sets the claim itself.
    pub verify_checkmate_claim: bool,
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self {
            verify_checkmate_claim: true,
        }
    }
}

#[inline]
pub fn apply_move(position: &Position, mv: &Move) -> MoveResult<Position> {
    apply_move_with_options(position, mv, ApplyOptions::default())
}

pub fn apply_move_with_options(
    position: &Position,
    mv: &Move,
    options: ApplyOptions,
) -> MoveResult<Position> {
    let result = try_apply(position, mv, options);
    if let Err(violation) = &result {
        trace!(san = %mv, fen = %position.fen(), %violation, "move rejected");
    }
    result
}

/// Origin square of a non-castling move, or the resolution failure.
pub fn resolve_origin(position: &Position, mv: &Move, to: Square) -> MoveResult<Square> {
    if let Some(from) = mv.from {
        if position.piece_at(from) != Some(mv.piece) {
            return Err(MoveViolation::PieceOnFromSquareMismatch);
        }
    }

    let file_hint = mv.from.map(Square::file).or(mv.file_from);
    let rank_hint = mv.from.map(Square::rank).or(mv.rank_from);
    let candidates = origin_candidates(position, mv.piece, to, file_hint, rank_hint);

    match candidates.as_slice() {
        [] => Err(MoveViolation::PieceNotFound),
        [from] => Ok(*from),
        _ => Err(MoveViolation::MultiplePiecesMatch),
    }
}

fn try_apply(position: &Position, mv: &Move, options: ApplyOptions) -> MoveResult<Position> {
    let mover = mv.piece.color;
    if mover != position.side_to_move {
        return Err(MoveViolation::WrongColorToMove);
    }

    let mut next = position.clone();
    let resets_clock = match mv.castling {
        Some(right) => {
            apply_castling(&mut next, mv, right)?;
            false
        }
        None => apply_piece_move(&mut next, position, mv)?,
    };

    if resets_clock {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }
    if mover == Color::Black {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }
    next.side_to_move = mover.opposite();
    revoke_castling_rights(&mut next);

    let violations = validate_position(&next);
    if !violations.is_empty() {
        return Err(MoveViolation::NextPositionInvalid(violations));
    }
    if mv.is_check && !is_king_attacked(&next, next.side_to_move) {
        return Err(MoveViolation::MoveNotCheck);
    }
    if options.verify_checkmate_claim && mv.is_checkmate && !is_checkmate(&next) {
        return Err(MoveViolation::MoveNotCheckmate);
    }

    Ok(next)
}

fn apply_castling(next: &mut Position, mv: &Move, right: CastlingRight) -> MoveResult<()> {
    if right.color() != mv.piece.color || !castling_is_allowed(next, right) {
        return Err(MoveViolation::CastlingNotAllowed);
    }

    let geometry = castling_geometry(right);
    let king = next.piece_at(geometry.king_from);
    let rook = next.piece_at(geometry.rook_from);
    next.set_piece_at(geometry.king_from, None);
    next.set_piece_at(geometry.rook_from, None);
    next.set_piece_at(geometry.king_to, king);
    next.set_piece_at(geometry.rook_to, rook);
    next.en_passant_target = None;

    Ok(())
}

/// Moves the piece on `next` and reports whether the halfmove clock resets.
fn apply_piece_move(next: &mut Position, position: &Position, mv: &Move) -> MoveResult<bool> {
    let Some(to) = mv.to else {
        return Err(MoveViolation::PieceNotFound);
    };
    if position.piece_at(to).is_some_and(|piece| piece.color == mv.piece.color) {
        return Err(MoveViolation::SquareOccupiedByOwnPiece);
    }

    let from = resolve_origin(position, mv, to)?;
    let en_passant = is_en_passant_capture(position, mv.piece, from, to);
    let is_capture = position.piece_at(to).is_some() || en_passant;
    if mv.is_capture && !is_capture {
        return Err(MoveViolation::NoPieceToCapture);
    }

    let placed = match mv.promotion {
        Some(promotion) => promoted_piece(mv.piece, promotion, to)?,
        None => mv.piece,
    };

    next.set_piece_at(from, None);
    next.set_piece_at(to, Some(placed));

    let direction = mv.piece.color.pawn_direction();
    if en_passant {
        if let Some(passed) = to.offset(0, -direction) {
            next.set_piece_at(passed, None);
        }
    }

    let double_step = mv.piece.is_pawn() && from.rank().abs_diff(to.rank()) == 2;
    next.en_passant_target = if double_step {
        from.offset(0, direction)
    } else {
        None
    };

    Ok(mv.piece.is_pawn() || is_capture)
}

fn promoted_piece(mover: Piece, promotion: Piece, to: Square) -> MoveResult<Piece> {
    if !mover.is_pawn()
        || promotion.color != mover.color
        || !PieceKind::PROMOTIONS.contains(&promotion.kind)
    {
        return Err(MoveViolation::InvalidPromotionPiece);
    }
    if to.rank() != mover.color.last_rank() {
        return Err(MoveViolation::InvalidPromotionSquare);
    }
    Ok(promotion)
}

/// Drops every right whose king or rook no longer stands on its home square.
fn revoke_castling_rights(next: &mut Position) {
    for right in next.castling_rights.iter() {
        let color = right.color();
        let geometry = castling_geometry(right);
        if next.piece_at(geometry.king_from) != Some(Piece::king(color))
            || next.piece_at(geometry.rook_from) != Some(Piece::rook(color))
        {
            next.castling_rights.remove(right);
        }
    }
}
