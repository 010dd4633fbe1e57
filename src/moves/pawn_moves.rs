//! Pawn capture tables and the pawn movement rule.
//!
//! Pawns are the only pieces whose moves depend on both their own color and
//! on what stands on the destination, so the full rule lives here rather
//! than in a plain attack table.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;

pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(1);
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(-1);

/// Diagonal capture targets of a `color` pawn standing on `square`.
#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square.index()],
        Color::Black => BLACK_PAWN_ATTACKS[square.index()],
    }
}

#[inline]
const fn start_rank(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

/// Whether a `color` pawn on `from` may move to `to` in `position`.
///
/// Straight moves need empty squares (two of them for the double step from
/// the start rank); diagonal moves need an enemy piece or the en passant
/// target on the destination.
pub fn can_pawn_move(position: &Position, color: Color, from: Square, to: Square) -> bool {
    let direction = color.pawn_direction();

    if from.file() == to.file() {
        let Some(single) = from.offset(0, direction) else {
            return false;
        };
        if position.piece_at(single).is_some() {
            return false;
        }
        if to == single {
            return true;
        }
        return from.rank() == start_rank(color)
            && from.offset(0, 2 * direction) == Some(to)
            && position.piece_at(to).is_none();
    }

    if pawn_attacks(color, from) & to.bit() == 0 {
        return false;
    }
    match position.piece_at(to) {
        Some(target) => target.color != color,
        None => position.en_passant_target == Some(to),
    }
}

const fn generate_pawn_attacks(direction: i8) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut index = 0usize;

    while index < 64 {
        let file = (index % 8) as i8;
        let rank = (index / 8) as i8;
        let mut attacks = 0u64;

        if let Some(left) = Square::from_coords(file - 1, rank + direction) {
            attacks |= left.bit();
        }
        if let Some(right) = Square::from_coords(file + 1, rank + direction) {
            attacks |= right.bit();
        }

        table[index] = attacks;
        index += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{can_pawn_move, pawn_attacks};
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::position::Position;

    #[test]
    fn capture_tables_follow_pawn_color() {
        assert_eq!(
            pawn_attacks(Color::White, Square::E2),
            Square::D3.bit() | Square::F3.bit()
        );
        assert_eq!(
            pawn_attacks(Color::Black, Square::E7),
            Square::D6.bit() | Square::F6.bit()
        );
        assert_eq!(pawn_attacks(Color::White, Square::A8), 0);
    }

    #[test]
    fn pushes_need_empty_squares() {
        let position = Position::starting();
        assert!(can_pawn_move(&position, Color::White, Square::E2, Square::E3));
        assert!(can_pawn_move(&position, Color::White, Square::E2, Square::E4));
        assert!(!can_pawn_move(&position, Color::White, Square::E2, Square::E5));
        assert!(!can_pawn_move(&position, Color::White, Square::E2, Square::D3));

        let blocked = Position::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1")
            .expect("blocked FEN should parse");
        assert!(!can_pawn_move(&blocked, Color::White, Square::E2, Square::E3));
        assert!(!can_pawn_move(&blocked, Color::White, Square::E2, Square::E4));
    }

    #[test]
    fn double_step_only_from_start_rank() {
        let position = Position::from_fen("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1")
            .expect("FEN should parse");
        assert!(!can_pawn_move(&position, Color::White, Square::E3, Square::E5));
        assert!(can_pawn_move(&position, Color::White, Square::E3, Square::E4));
    }

    #[test]
    fn diagonal_needs_enemy_or_en_passant() {
        let position = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2")
            .expect("en passant FEN should parse");
        assert!(can_pawn_move(&position, Color::White, Square::E5, Square::D6));
        assert!(!can_pawn_move(&position, Color::White, Square::E5, Square::F6));
    }
}
