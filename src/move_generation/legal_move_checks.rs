use crate::game_state::chess_rules::castling_geometry;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::occupancy;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

/// En passant target behind a double-stepped enemy pawn standing on `square`.
fn en_passant_square_behind(position: &Position, square: Square, by_color: Color) -> Option<Square> {
    let target = position.en_passant_target?;
    let victim = position.piece_at(square)?;
    if victim != Piece::pawn(by_color.opposite()) {
        return None;
    }
    (square.offset(0, -victim.color.pawn_direction()) == Some(target)).then_some(target)
}

/// Origins of every `by_color` piece attacking `square`, in board order.
///
/// Pawn attacks are geometric and need no occupant on `square`. A pawn that
/// just advanced two squares is also attacked by enemy pawns covering the
/// en passant target behind it.
pub fn find_attackers(position: &Position, square: Square, by_color: Color) -> Vec<Square> {
    let occupied = occupancy(position);
    let pawn_targets = square.bit()
        | en_passant_square_behind(position, square, by_color).map_or(0, Square::bit);

    position
        .iter_pieces(Some(by_color))
        .filter(|(from, piece)| {
            let hit = match piece.kind {
                PieceKind::Pawn => return pawn_attacks(by_color, *from) & pawn_targets != 0,
                PieceKind::Knight => knight_attacks(*from),
                PieceKind::Bishop => bishop_attacks(*from, occupied),
                PieceKind::Rook => rook_attacks(*from, occupied),
                PieceKind::Queen => queen_attacks(*from, occupied),
                PieceKind::King => king_attacks(*from),
            };
            hit & square.bit() != 0
        })
        .map(|(from, _)| from)
        .collect()
}

#[inline]
pub fn is_square_attacked(position: &Position, square: Square, by_color: Color) -> bool {
    !find_attackers(position, square, by_color).is_empty()
}

/// Whether the king of `color` is attacked. A missing king is never attacked.
pub fn is_king_attacked(position: &Position, color: Color) -> bool {
    let Some(king) = position.king_square(color) else {
        return false;
    };
    is_square_attacked(position, king, color.opposite())
}

/// Castling precondition: the right belongs to the side to move and is still
/// held, king and rook stand on their home squares, everything between them
/// is empty and the king neither starts on, crosses nor lands on an attacked
/// square.
pub fn castling_is_allowed(position: &Position, right: CastlingRight) -> bool {
    let color = right.color();
    if color != position.side_to_move || !position.castling_rights.contains(right) {
        return false;
    }

    let geometry = castling_geometry(right);
    if position.piece_at(geometry.king_from) != Some(Piece::king(color))
        || position.piece_at(geometry.rook_from) != Some(Piece::rook(color))
    {
        return false;
    }
    if geometry
        .must_be_empty
        .iter()
        .any(|square| position.piece_at(*square).is_some())
    {
        return false;
    }

    !geometry
        .king_path
        .iter()
        .any(|square| is_square_attacked(position, *square, color.opposite()))
}

#[cfg(test)]
mod tests {
    use super::{castling_is_allowed, find_attackers, is_king_attacked};
    use crate::game_state::chess_types::{CastlingRight, Color, Square};
    use crate::game_state::position::Position;

    #[test]
    fn pawn_attacks_use_pawn_color_and_need_no_target() {
        let position = Position::from_fen("4k3/8/8/8/8/8/4P3/4K3 b - - 0 1")
            .expect("FEN should parse");
        assert_eq!(find_attackers(&position, Square::D3, Color::White), vec![Square::E2]);
        assert_eq!(find_attackers(&position, Square::F3, Color::White), vec![Square::E2]);
        assert!(find_attackers(&position, Square::E3, Color::White).is_empty());
    }

    #[test]
    fn sliders_respect_blockers() {
        let position = Position::from_fen("4k3/8/8/8/8/8/8/R2nK3 w - - 0 1")
            .expect("FEN should parse");
        assert_eq!(find_attackers(&position, Square::C1, Color::White), vec![Square::A1]);
        assert!(find_attackers(&position, Square::E1, Color::White).is_empty());
        assert_eq!(find_attackers(&position, Square::E1, Color::Black), vec![]);
        assert_eq!(find_attackers(&position, Square::F2, Color::Black), vec![Square::D1]);
        assert_eq!(find_attackers(&position, Square::E3, Color::Black), vec![Square::D1]);
    }

    #[test]
    fn double_stepped_pawn_is_attacked_en_passant() {
        let position = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2")
            .expect("FEN should parse");
        assert_eq!(find_attackers(&position, Square::D5, Color::White), vec![Square::E5]);
    }

    #[test]
    fn king_attack_query() {
        let position = Position::from_fen("4k3/8/8/8/8/8/8/4K2r w - - 0 1")
            .expect("FEN should parse");
        assert!(is_king_attacked(&position, Color::White));
        assert!(!is_king_attacked(&position, Color::Black));
        assert!(!is_king_attacked(&Position::empty(), Color::White));
    }

    #[test]
    fn castling_preconditions() {
        let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("FEN should parse");
        assert!(castling_is_allowed(&position, CastlingRight::WhiteKingside));
        assert!(castling_is_allowed(&position, CastlingRight::WhiteQueenside));
        assert!(!castling_is_allowed(&position, CastlingRight::BlackKingside));

        let knight_on_b1 = Position::from_fen("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1")
            .expect("FEN should parse");
        assert!(!castling_is_allowed(&knight_on_b1, CastlingRight::WhiteQueenside));

        let attacked_transit = Position::from_fen("r3k2r/8/8/8/8/8/5r2/R3K2R w KQ - 0 1")
            .expect("FEN should parse");
        assert!(!castling_is_allowed(&attacked_transit, CastlingRight::WhiteKingside));
        assert!(castling_is_allowed(&attacked_transit, CastlingRight::WhiteQueenside));

        let in_check = Position::from_fen("r3k2r/8/8/8/8/8/4r3/R3K2R w KQ - 0 1")
            .expect("FEN should parse");
        assert!(!castling_is_allowed(&in_check, CastlingRight::WhiteKingside));
    }
}
