//! Legal move enumeration.
//!
//! Every own piece is tried against every destination (and every promotion
//! piece when a pawn reaches its last rank), plus each castling right still
//! held. A candidate is legal exactly when `apply_move` accepts it, so the
//! enumerator can never disagree with the applier.

use crate::game_state::chess_move::Move;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::{apply_move_with_options, ApplyOptions};
use crate::move_generation::legal_move_checks::is_king_attacked;
use crate::move_generation::legal_move_shared::{
    disambiguation_hints, is_en_passant_capture, piece_can_move,
};
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

/// Produces moves with capture/check/checkmate flags and minimal SAN hints.
pub struct LegalMoveGenerator;
/// Produces bare moves (explicit origin, no flags); used for mate and
/// stalemate detection.
pub struct FastLegalMoveGenerator;

const ENUMERATION_OPTIONS: ApplyOptions = ApplyOptions {
    verify_checkmate_claim: false,
};

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, position: &Position) -> Vec<GeneratedMove> {
        self.generate_legal_moves_internal(position, true)
    }
}

impl MoveGenerator for FastLegalMoveGenerator {
    fn generate_legal_moves(&self, position: &Position) -> Vec<GeneratedMove> {
        LegalMoveGenerator.generate_legal_moves_internal(position, false)
    }
}

impl LegalMoveGenerator {
    fn generate_legal_moves_internal(&self, position: &Position, annotate: bool) -> Vec<GeneratedMove> {
        candidate_moves(position)
            .into_iter()
            .filter_map(|mv| {
                let next = apply_move_with_options(position, &mv, ENUMERATION_OPTIONS).ok()?;
                let mv = if annotate {
                    annotate_move(position, mv, &next)
                } else {
                    mv
                };
                Some(GeneratedMove {
                    mv,
                    position_after: next,
                })
            })
            .collect()
    }
}

/// Pseudo-legal candidates for the side to move.
fn candidate_moves(position: &Position) -> Vec<Move> {
    let mover = position.side_to_move;
    let mut candidates = Vec::with_capacity(64);

    for (from, piece) in position.iter_pieces(Some(mover)) {
        for to in Square::ALL {
            if position.piece_at(to).is_some_and(|p| p.color == mover)
                || !piece_can_move(position, piece, from, to)
            {
                continue;
            }

            let base = Move::new(piece, to).with_from(from);
            if piece.is_pawn() && to.rank() == mover.last_rank() {
                candidates.extend(
                    PieceKind::PROMOTIONS
                        .into_iter()
                        .map(|kind| base.clone().with_promotion(kind)),
                );
            } else {
                candidates.push(base);
            }
        }
    }

    candidates.extend(
        position
            .castling_rights
            .iter()
            .filter(|right| right.color() == mover)
            .map(Move::castle),
    );

    candidates
}

fn annotate_move(position: &Position, mut mv: Move, next: &Position) -> Move {
    if let (Some(from), Some(to)) = (mv.from, mv.to) {
        let (file_from, rank_from) = disambiguation_hints(position, mv.piece, from, to);
        mv.file_from = file_from;
        mv.rank_from = rank_from;
        mv.is_capture =
            position.piece_at(to).is_some() || is_en_passant_capture(position, mv.piece, from, to);
    }
    mv.is_check = is_king_attacked(next, next.side_to_move);
    mv.is_checkmate = mv.is_check && !has_legal_move(next);
    mv
}

/// Every legal move for the side to move, fully resolved.
pub fn find_legal_moves(position: &Position) -> Vec<Move> {
    LegalMoveGenerator
        .generate_legal_moves(position)
        .into_iter()
        .map(|generated| generated.mv)
        .collect()
}

/// Stops at the first legal move found.
pub fn has_legal_move(position: &Position) -> bool {
    candidate_moves(position)
        .iter()
        .any(|mv| apply_move_with_options(position, mv, ENUMERATION_OPTIONS).is_ok())
}

pub fn is_checkmate(position: &Position) -> bool {
    is_king_attacked(position, position.side_to_move) && !has_legal_move(position)
}

pub fn is_stalemate(position: &Position) -> bool {
    !is_king_attacked(position, position.side_to_move) && !has_legal_move(position)
}
