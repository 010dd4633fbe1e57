//! Knight jump table.

use crate::game_state::chess_types::Square;

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KNIGHT_ATTACKS: [u64; 64] = generate_knight_attacks();

#[inline]
pub const fn knight_attacks(square: Square) -> u64 {
    KNIGHT_ATTACKS[square.index()]
}

#[inline]
pub const fn is_knight_move(from: Square, to: Square) -> bool {
    knight_attacks(from) & to.bit() != 0
}

const fn generate_knight_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut index = 0usize;

    while index < 64 {
        let file = (index % 8) as i8;
        let rank = (index / 8) as i8;
        let mut attacks = 0u64;
        let mut jump = 0usize;

        while jump < KNIGHT_JUMPS.len() {
            let (df, dr) = KNIGHT_JUMPS[jump];
            if let Some(target) = Square::from_coords(file + df, rank + dr) {
                attacks |= target.bit();
            }
            jump += 1;
        }

        table[index] = attacks;
        index += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{is_knight_move, knight_attacks};
    use crate::game_state::chess_types::Square;

    #[test]
    fn knight_in_centre_has_eight_jumps() {
        assert_eq!(knight_attacks(Square::D4).count_ones(), 8);
        assert_eq!(knight_attacks(Square::A1).count_ones(), 2);
    }

    #[test]
    fn knight_move_geometry() {
        assert!(is_knight_move(Square::G1, Square::F3));
        assert!(is_knight_move(Square::B8, Square::C6));
        assert!(!is_knight_move(Square::G1, Square::G3));
    }
}
