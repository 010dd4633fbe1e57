//! Structural checks run on every position a move produces.

use crate::errors::PositionViolation;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_king_attacked;

const MAX_PAWNS_PER_COLOR: usize = 8;

/// All violations found in `position`, in a fixed order. An empty list means
/// the position is structurally valid.
///
/// The check test looks at the side that is *not* to move: that side has
/// just moved and may not have left its king attacked. It only runs when
/// both colors have exactly one king.
pub fn validate_position(position: &Position) -> Vec<PositionViolation> {
    let mut violations = Vec::new();

    let white_kings = position.find(Piece::WHITE_KING).len();
    let black_kings = position.find(Piece::BLACK_KING).len();
    match white_kings {
        0 => violations.push(PositionViolation::NoWhiteKing),
        1 => {}
        _ => violations.push(PositionViolation::MultipleWhiteKings),
    }
    match black_kings {
        0 => violations.push(PositionViolation::NoBlackKing),
        1 => {}
        _ => violations.push(PositionViolation::MultipleBlackKings),
    }

    if white_kings == 1 && black_kings == 1 && is_king_attacked(position, position.side_to_move.opposite()) {
        violations.push(PositionViolation::KingInCheck);
    }

    let pawn_on_back_rank = position
        .iter_pieces(None)
        .any(|(square, piece)| piece.is_pawn() && (square.rank() == 0 || square.rank() == 7));
    if pawn_on_back_rank {
        violations.push(PositionViolation::PawnOnInvalidRank);
    }

    if [Color::White, Color::Black]
        .into_iter()
        .any(|color| position.find(Piece::pawn(color)).len() > MAX_PAWNS_PER_COLOR)
    {
        violations.push(PositionViolation::TooManyPawns);
    }

    if let Some(target) = position.en_passant_target {
        if !en_passant_target_is_consistent(position, target) {
            violations.push(PositionViolation::EnPassantSquareInvalid);
        }
    }

    violations
}

/// The target must sit on the rank just behind a pawn of the side that just
/// moved, be empty, and have that pawn directly in front of it.
fn en_passant_target_is_consistent(position: &Position, target: Square) -> bool {
    let just_moved = position.side_to_move.opposite();
    let expected_rank = match just_moved {
        Color::White => 2,
        Color::Black => 5,
    };
    if target.rank() != expected_rank || position.piece_at(target).is_some() {
        return false;
    }

    target
        .offset(0, just_moved.pawn_direction())
        .is_some_and(|square| position.piece_at(square) == Some(Piece::pawn(just_moved)))
}

#[inline]
pub fn is_valid_position(position: &Position) -> bool {
    validate_position(position).is_empty()
}

#[cfg(test)]
mod tests {
    use super::{is_valid_position, validate_position};
    use crate::errors::PositionViolation;
    use crate::game_state::chess_types::{Piece, Square};
    use crate::game_state::position::Position;

    fn position(fen: &str) -> Position {
        Position::from_fen(fen).expect("test FEN should parse")
    }

    #[test]
    fn starting_position_is_valid() {
        assert!(is_valid_position(&Position::starting()));
    }

    #[test]
    fn empty_board_lacks_both_kings() {
        assert_eq!(
            validate_position(&Position::empty()),
            vec![PositionViolation::NoWhiteKing, PositionViolation::NoBlackKing]
        );
    }

    #[test]
    fn extra_king_skips_check_test() {
        let mut board = position("4k3/8/8/8/8/8/4r3/4K3 b - - 0 1");
        assert_eq!(validate_position(&board), vec![PositionViolation::KingInCheck]);

        board.set_piece_at(Square::A1, Some(Piece::WHITE_KING));
        assert_eq!(
            validate_position(&board),
            vec![PositionViolation::MultipleWhiteKings]
        );
    }

    #[test]
    fn check_on_side_to_move_is_fine() {
        let board = position("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1");
        assert!(validate_position(&board).is_empty());
    }

    #[test]
    fn pawn_rank_and_count() {
        let back_rank = position("4k2P/8/8/8/8/8/8/4K3 b - - 0 1");
        assert_eq!(validate_position(&back_rank), vec![PositionViolation::PawnOnInvalidRank]);

        let crowded = position("4k3/8/8/8/P7/PPPPPPPP/8/4K3 b - - 0 1");
        assert_eq!(validate_position(&crowded), vec![PositionViolation::TooManyPawns]);
    }

    #[test]
    fn en_passant_target_consistency() {
        let ok = position("4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1");
        assert!(validate_position(&ok).is_empty());

        let wrong_rank = position("4k3/8/8/8/4P3/8/8/4K3 b - e6 0 1");
        assert_eq!(
            validate_position(&wrong_rank),
            vec![PositionViolation::EnPassantSquareInvalid]
        );

        let no_pawn = position("4k3/8/8/8/8/8/8/4K3 b - e3 0 1");
        assert_eq!(
            validate_position(&no_pawn),
            vec![PositionViolation::EnPassantSquareInvalid]
        );
    }
}
