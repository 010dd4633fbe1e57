//! Rook sliding attacks and the ray tracer shared with the other sliders.

use crate::game_state::chess_types::Square;

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Squares reached from `square` stepping by `(file_step, rank_step)`,
/// stopping at (and including) the first occupied square.
pub(crate) fn trace_ray(square: Square, file_step: i8, rank_step: i8, occupancy: u64) -> u64 {
    let mut attacks = 0u64;
    let mut current = square;

    while let Some(next) = current.offset(file_step, rank_step) {
        attacks |= next.bit();
        if occupancy & next.bit() != 0 {
            break;
        }
        current = next;
    }

    attacks
}

#[inline]
pub fn rook_attacks(square: Square, occupancy: u64) -> u64 {
    ROOK_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &(df, dr)| acc | trace_ray(square, df, dr, occupancy))
}

#[inline]
pub fn is_rook_move(from: Square, to: Square, occupancy: u64) -> bool {
    rook_attacks(from, occupancy) & to.bit() != 0
}

#[cfg(test)]
mod tests {
    use super::{is_rook_move, rook_attacks};
    use crate::game_state::chess_types::Square;

    #[test]
    fn open_board_rook_sees_fourteen_squares() {
        assert_eq!(rook_attacks(Square::D4, 0).count_ones(), 14);
    }

    #[test]
    fn blockers_stop_the_ray() {
        let blockers = Square::D6.bit() | Square::F4.bit();
        let attacks = rook_attacks(Square::D4, blockers);

        assert_ne!(attacks & Square::D6.bit(), 0);
        assert_eq!(attacks & Square::D7.bit(), 0);
        assert_ne!(attacks & Square::F4.bit(), 0);
        assert_eq!(attacks & Square::G4.bit(), 0);
        assert!(!is_rook_move(Square::D4, Square::D8, blockers));
        assert!(is_rook_move(Square::D4, Square::A4, blockers));
    }
}
