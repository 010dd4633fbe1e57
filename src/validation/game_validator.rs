//! Replays a game record, variations included, and reports the first
//! illegal move.

use std::fmt;

use tracing::debug;

use crate::errors::{MoveViolation, PositionViolation};
use crate::game_state::game::Game;
use crate::game_state::move_node::MoveNode;
use crate::game_state::position::Position;
use crate::game_state::variation::Variation;
use crate::move_generation::legal_move_apply::apply_move;
use crate::utils::pgn_writer::write_move_path;

/// First illegal move of a game, located by the move sequence leading to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameViolation {
    /// Moves from the initial position up to and including the offending
    /// one, e.g. `"1. e4 e5 2. Ke3"`.
    pub path: String,
    pub violation: MoveViolation,
}

impl GameViolation {
    /// Sub-violations when the move produced an invalid position.
    pub fn position_violations(&self) -> &[PositionViolation] {
        match &self.violation {
            MoveViolation::NextPositionInvalid(violations) => violations,
            _ => &[],
        }
    }
}

impl fmt::Display for GameViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.violation)
    }
}

impl std::error::Error for GameViolation {}

/// Depth-first: a node's variations are checked from the position before the
/// node, before the node itself is played.
pub fn validate_game(game: &Game) -> Option<GameViolation> {
    let violation = validate_line(&game.initial_position, &game.main_line, &mut Vec::new());
    match &violation {
        Some(found) => debug!(path = %found.path, violation = %found.violation, "game is invalid"),
        None => debug!(plies = game.main_line.len(), "game is valid"),
    }
    violation
}

fn validate_line<'a>(
    start: &Position,
    line: &'a Variation,
    path: &mut Vec<&'a MoveNode>,
) -> Option<GameViolation> {
    let prefix_len = path.len();
    let mut position = start.clone();

    for node in line {
        for variation in &node.variations {
            if let Some(found) = validate_line(&position, variation, path) {
                return Some(found);
            }
        }

        path.push(node);
        match apply_move(&position, &node.mv) {
            Ok(next) => position = next,
            Err(violation) => {
                return Some(GameViolation {
                    path: write_move_path(path),
                    violation,
                });
            }
        }
    }

    path.truncate(prefix_len);
    None
}
