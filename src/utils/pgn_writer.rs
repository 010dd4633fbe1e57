//! PGN serialization for games, variations and move paths.
//!
//! The output reads back through `PgnParser` to an equal game: a comment
//! placed before a move is written after that move's number, so the parser
//! sees it while its comment anchor still points forward.

use crate::game_state::chess_types::Color;
use crate::game_state::game::{Game, GameResult};
use crate::game_state::move_node::MoveNode;
use crate::game_state::variation::Variation;

#[derive(Debug, Clone, Copy)]
struct WriteOptions {
    comments: bool,
}

pub fn write_game(game: &Game) -> String {
    let mut out = String::new();
    for (key, value) in game.tags() {
        out.push_str(&format!("[{key} \"{}\"]\n", escape_pgn_value(value)));
    }
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(&write_movetext(game, WriteOptions { comments: true }));
    out.push('\n');
    out
}

/// Movetext and result only.
pub fn write_lite_game(game: &Game) -> String {
    write_movetext(game, WriteOptions { comments: false })
}

/// Movetext of a single line, comments and nested variations included.
pub fn write_variation(variation: &Variation) -> String {
    let mut parts = Vec::new();
    write_line(variation, WriteOptions { comments: true }, &mut parts);
    parts.join(" ")
}

/// Bare move sequence, e.g. `"1. e4 e5 2. Nf3"` or `"3... Nf6 4. O-O"`.
pub fn write_move_path(nodes: &[&MoveNode]) -> String {
    let mut parts = Vec::with_capacity(nodes.len() * 2);
    for (index, node) in nodes.iter().enumerate() {
        match node.color() {
            Color::White => parts.push(format!("{}.", node.move_number)),
            Color::Black if index == 0 => parts.push(format!("{}...", node.move_number)),
            Color::Black => {}
        }
        parts.push(node.mv.san());
    }
    parts.join(" ")
}

fn write_movetext(game: &Game, options: WriteOptions) -> String {
    let mut parts = Vec::new();
    write_line(&game.main_line, options, &mut parts);
    parts.push(game.result.unwrap_or(GameResult::Ongoing).to_string());
    parts.join(" ")
}

fn write_line(variation: &Variation, options: WriteOptions, parts: &mut Vec<String>) {
    let mut needs_number = true;

    for node in variation {
        let before = node.before_comment.as_deref().filter(|_| options.comments);
        let after = node.after_comment.as_deref().filter(|_| options.comments);

        match node.color() {
            Color::White => parts.push(format!("{}.", node.move_number)),
            Color::Black if needs_number || before.is_some() => {
                parts.push(format!("{}...", node.move_number))
            }
            Color::Black => {}
        }
        if let Some(comment) = before {
            parts.push(write_comment(comment));
        }
        parts.push(node.mv.san());
        parts.extend(node.nags().iter().map(|nag| format!("${nag}")));

        needs_number = false;
        if let Some(comment) = after {
            parts.push(write_comment(comment));
            needs_number = true;
        }
        for sub in &node.variations {
            let mut inner = Vec::new();
            write_line(sub, options, &mut inner);
            parts.push(format!("({})", inner.join(" ")));
            needs_number = true;
        }
    }
}

/// Brace comment, or a `;` line comment when the text holds a `}`.
fn write_comment(comment: &str) -> String {
    if comment.contains('}') {
        format!("; {}\n", comment.replace(['\r', '\n'], " "))
    } else {
        format!("{{{comment}}}")
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use rand::prelude::IndexedRandom;
    use rand::{rngs::StdRng, SeedableRng};

    use super::{write_game, write_lite_game, write_move_path, write_variation};
    use crate::game_state::chess_move::Move;
    use crate::game_state::game::Game;
    use crate::game_state::position::Position;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;
    use crate::move_generation::move_generator::MoveGenerator;
    use crate::validation::position_validator::is_valid_position;

    const ANNOTATED: &str = "[Event \"Club \\\"Open\\\"\"]\n[Result \"*\"]\n\n\
        1. {Start} e4 {Main} 1... e5 $1 (1... c5 {Sicilian} 2. Nf3 (2. c3) 2... d6) 2. Nf3 Nc6 *\n";

    #[test]
    fn annotated_game_round_trips() {
        let game = Game::from_pgn(ANNOTATED).expect("annotated PGN should parse");
        let written = write_game(&game);
        assert_eq!(written, ANNOTATED);

        let reparsed = Game::from_pgn(&written).expect("written PGN should parse");
        assert_eq!(reparsed, game);
    }

    #[test]
    fn lite_export_drops_tags_and_comments() {
        let game = Game::from_pgn(ANNOTATED).expect("annotated PGN should parse");
        assert_eq!(
            write_lite_game(&game),
            "1. e4 e5 $1 (1... c5 2. Nf3 (2. c3) 2... d6) 2. Nf3 Nc6 *"
        );
    }

    #[test]
    fn untagged_game_writes_movetext_only() {
        let game = Game::from_pgn("1. d4 d5 2. c4").expect("PGN should parse");
        assert_eq!(write_game(&game), "1. d4 d5 2. c4 *\n");
        assert_eq!(write_variation(&game.main_line), "1. d4 d5 2. c4");
    }

    #[test]
    fn closing_brace_in_comment_uses_line_comment() {
        let game = Game::from_pgn("1. e4 ; see } here\n1... e5 *").expect("PGN should parse");
        let written = write_game(&game);
        assert_eq!(written, "1. e4 ; see } here\n 1... e5 *\n");

        let reparsed = Game::from_pgn(&written).expect("written PGN should parse");
        assert_eq!(write_game(&reparsed), written);
        let e4 = reparsed.main_line.get("1.").expect("1. should exist");
        assert_eq!(e4.after_comment.as_deref(), Some("see } here"));
    }

    #[test]
    fn move_path_numbers_white_and_leading_black() {
        let game = Game::from_pgn("1. e4 e5 2. Nf3 Nc6").expect("PGN should parse");
        let nodes: Vec<_> = game.main_line.iter().collect();
        assert_eq!(write_move_path(&nodes), "1. e4 e5 2. Nf3 Nc6");
        assert_eq!(write_move_path(&nodes[1..]), "1... e5 2. Nf3 Nc6");
    }

    #[test]
    fn random_playouts_survive_san_and_pgn_round_trips() {
        let generator = LegalMoveGenerator;

        for seed in [7_u64, 42, 1858] {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = Game::new();
            let mut position = Position::starting();

            for _ in 0..80 {
                let moves = generator.generate_legal_moves(&position);
                let Some(choice) = moves.choose(&mut rng) else {
                    break;
                };

                let san = choice.mv.san();
                let reparsed = Move::from_san(&san, position.side_to_move)
                    .expect("generated SAN should parse");
                let replayed = position
                    .apply(&reparsed)
                    .expect("generated SAN should replay");
                assert_eq!(replayed, choice.position_after, "seed {seed} move {san}");
                assert!(is_valid_position(&replayed));
                let fen = replayed.fen();
                assert_eq!(Position::from_fen(&fen).expect("exported FEN should parse"), replayed);

                game.main_line.append(reparsed);
                position = replayed;
            }

            assert!(game.validate().is_none(), "seed {seed} should validate");
            let written = write_game(&game);
            let reread = Game::from_pgn(&written).expect("written playout should parse");
            let sans = |game: &Game| -> Vec<String> {
                game.main_line.iter().map(|node| node.mv.san()).collect()
            };
            assert_eq!(sans(&reread), sans(&game));
            assert_eq!(reread.final_position().expect("playout should replay"), position);
        }
    }
}
