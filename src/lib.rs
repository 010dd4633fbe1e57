//! Crate root module declarations for the Plum PGN toolkit.
//!
//! Exposes the chess vocabulary and position model, the move legality engine
//! (per-piece rules, application, enumeration, resolution), the position and
//! game validators, and the FEN/SAN/PGN readers and writers under stable
//! module paths.

pub mod errors;

pub mod game_state {
    pub mod chess_move;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game;
    pub mod move_node;
    pub mod position;
    pub mod variation;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod move_generator;
    pub mod move_resolver;
}

pub mod validation {
    pub mod game_validator;
    pub mod position_validator;
}

pub mod utils {
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod pgn_parser;
    pub mod pgn_tokenizer;
    pub mod pgn_writer;
    pub mod render_position;
    pub mod san_generator;
    pub mod san_parser;
}
