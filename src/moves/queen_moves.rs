use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn queen_attacks(square: Square, occupancy: u64) -> u64 {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}

#[inline]
pub fn is_queen_move(from: Square, to: Square, occupancy: u64) -> bool {
    queen_attacks(from, occupancy) & to.bit() != 0
}

#[cfg(test)]
mod tests {
    use super::{is_queen_move, queen_attacks};
    use crate::game_state::chess_types::Square;

    #[test]
    fn queen_attacks_are_union_of_sliders() {
        assert_eq!(queen_attacks(Square::D4, 0).count_ones(), 27);

        let blockers = Square::D6.bit() | Square::F6.bit();
        assert!(is_queen_move(Square::D4, Square::F6, blockers));
        assert!(!is_queen_move(Square::D4, Square::D7, blockers));
        assert!(!is_queen_move(Square::D4, Square::E6, blockers));
    }
}
