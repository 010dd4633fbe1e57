use crate::game_state::chess_move::Move;
use crate::game_state::position::Position;

/// A legal move together with the position it leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMove {
    pub mv: Move,
    pub position_after: Position,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, position: &Position) -> Vec<GeneratedMove>;
}
