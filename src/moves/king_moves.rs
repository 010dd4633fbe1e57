//! King step table.

use crate::game_state::chess_types::Square;

pub const KING_ATTACKS: [u64; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square: Square) -> u64 {
    KING_ATTACKS[square.index()]
}

/// One-square king step. Castling is handled separately.
#[inline]
pub const fn is_king_step(from: Square, to: Square) -> bool {
    king_attacks(from) & to.bit() != 0
}

const fn generate_king_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut index = 0usize;

    while index < 64 {
        let file = (index % 8) as i8;
        let rank = (index / 8) as i8;
        let mut attacks = 0u64;
        let mut df = -1i8;

        while df <= 1 {
            let mut dr = -1i8;
            while dr <= 1 {
                if df != 0 || dr != 0 {
                    if let Some(target) = Square::from_coords(file + df, rank + dr) {
                        attacks |= target.bit();
                    }
                }
                dr += 1;
            }
            df += 1;
        }

        table[index] = attacks;
        index += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{is_king_step, king_attacks};
    use crate::game_state::chess_types::Square;

    #[test]
    fn king_step_counts() {
        assert_eq!(king_attacks(Square::E4).count_ones(), 8);
        assert_eq!(king_attacks(Square::H8).count_ones(), 3);
    }

    #[test]
    fn castling_distance_is_not_a_step() {
        assert!(is_king_step(Square::E1, Square::F2));
        assert!(!is_king_step(Square::E1, Square::G1));
    }
}
