//! Bishop sliding attacks.

use crate::game_state::chess_types::Square;
use crate::moves::rook_moves::trace_ray;

pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

#[inline]
pub fn bishop_attacks(square: Square, occupancy: u64) -> u64 {
    BISHOP_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &(df, dr)| acc | trace_ray(square, df, dr, occupancy))
}

#[inline]
pub fn is_bishop_move(from: Square, to: Square, occupancy: u64) -> bool {
    bishop_attacks(from, occupancy) & to.bit() != 0
}
