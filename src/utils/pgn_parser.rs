//! PGN reader: tag pairs plus recursive movetext with comments, NAGs and
//! nested variations.
//!
//! Parsing is purely syntactic. Moves are parsed as SAN for the color the
//! movetext implies but are not played; use `Game::validate` for legality.

use tracing::{debug, warn};

use crate::errors::{ParseError, ParseResult};
use crate::game_state::chess_move::Move;
use crate::game_state::chess_types::Color;
use crate::game_state::game::{Game, GameResult};
use crate::game_state::move_node::{CommentAnchor, MoveNode};
use crate::game_state::position::Position;
use crate::game_state::variation::Variation;
use crate::utils::pgn_tokenizer::{tokenize, Token};

/// Reader configuration. The default accepts any nesting depth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PgnParser {
    max_variation_depth: Option<usize>,
}

#[inline]
pub fn parse_pgn(pgn: &str) -> ParseResult<Game> {
    PgnParser::default().parse(pgn)
}

impl PgnParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects input with more than `limit` levels of nested variations
    /// (`0` forbids variations altogether).
    pub fn with_max_variation_depth(mut self, limit: usize) -> Self {
        self.max_variation_depth = Some(limit);
        self
    }

    pub fn parse(&self, pgn: &str) -> ParseResult<Game> {
        let lines: Vec<&str> = pgn.lines().collect();
        let movetext_start = lines
            .iter()
            .position(|line| {
                let trimmed = line.trim();
                !trimmed.is_empty() && !trimmed.starts_with('[')
            })
            .unwrap_or(lines.len());

        let mut game = Game::new();
        for line in &lines[..movetext_start] {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let (key, value) = parse_tag_line(trimmed)?;
            game.set_tag(key, value);
        }

        if let Some(fen) = game.tag("FEN") {
            game.initial_position = Position::from_fen(fen)?;
        }

        let (main_line, trailing_result) = self.parse_movetext_with_start(
            &lines[movetext_start..].join("\n"),
            game.initial_position.side_to_move,
            game.initial_position.fullmove_number,
        )?;
        game.main_line = main_line;
        game.result = game
            .tag("Result")
            .and_then(GameResult::from_token)
            .or(trailing_result);

        debug!(
            tags = game.tags().count(),
            plies = game.main_line.len(),
            result = ?game.result,
            "parsed PGN game"
        );
        Ok(game)
    }

    /// Parses bare movetext starting from White's first move.
    pub fn parse_movetext(&self, movetext: &str) -> ParseResult<(Variation, Option<GameResult>)> {
        self.parse_movetext_with_start(movetext, Color::White, 1)
    }

    fn parse_movetext_with_start(
        &self,
        movetext: &str,
        color: Color,
        move_number: u32,
    ) -> ParseResult<(Variation, Option<GameResult>)> {
        let tokens = tokenize(movetext)?;
        let mut builder = VariationBuilder {
            tokens: &tokens,
            index: 0,
            max_depth: self.max_variation_depth,
            result: None,
        };
        let main_line = builder.build(color, move_number, 0)?;

        if builder.index < tokens.len() {
            warn!(
                skipped = tokens.len() - builder.index,
                "ignoring movetext after the end of the main line"
            );
        }
        Ok((main_line, builder.result))
    }
}

struct VariationBuilder<'t> {
    tokens: &'t [Token],
    index: usize,
    max_depth: Option<usize>,
    result: Option<GameResult>,
}

impl VariationBuilder<'_> {
    /// Reads one line until `)`, a result token or the end of input.
    fn build(&mut self, mut color: Color, mut move_number: u32, depth: usize) -> ParseResult<Variation> {
        let mut variation = Variation::new();
        let mut anchor = CommentAnchor::Before;
        let mut pending: Option<String> = None;
        let tokens = self.tokens;

        while let Some(token) = tokens.get(self.index) {
            self.index += 1;

            match token {
                Token::MoveNumber { number, black } => {
                    move_number = *number;
                    color = if *black { Color::Black } else { Color::White };
                    anchor = CommentAnchor::Before;
                }
                Token::San(san) => {
                    let mut node = MoveNode::new(Move::from_san(san, color)?, move_number);
                    node.before_comment = pending.take();
                    if let Some(replaced) = variation.push(node) {
                        warn!(key = %replaced.key(), "duplicate move number replaces earlier move");
                    }
                    anchor = CommentAnchor::After;
                    if color == Color::Black {
                        move_number = move_number.saturating_add(1);
                    }
                    color = color.opposite();
                }
                Token::Comment(text) => {
                    if text.is_empty() {
                        continue;
                    }
                    match (anchor, variation.last_mut()) {
                        (CommentAnchor::After, Some(node)) => {
                            node.append_comment(CommentAnchor::After, text)
                        }
                        _ => {
                            pending = Some(match pending.take() {
                                Some(existing) => format!("{existing} {text}"),
                                None => text.clone(),
                            })
                        }
                    }
                }
                Token::Nag(nag) => match variation.last_mut() {
                    Some(node) => node.add_nag(*nag),
                    None => warn!(nag, "ignoring NAG before the first move"),
                },
                Token::OpenVariation => {
                    if let Some(limit) = self.max_depth {
                        if depth >= limit {
                            return Err(ParseError::VariationTooDeep { limit });
                        }
                    }

                    let (sub_color, sub_number) = variation
                        .last()
                        .map_or((color, move_number), |node| (node.color(), node.move_number));
                    let sub = self.build(sub_color, sub_number, depth + 1)?;

                    match variation.last_mut() {
                        Some(_) if sub.is_empty() => warn!("dropping empty variation"),
                        Some(node) => node.add_variation(sub),
                        None => warn!(plies = sub.len(), "dropping variation with no move to branch from"),
                    }
                }
                Token::CloseVariation => {
                    if depth == 0 {
                        warn!("unmatched ')' ends the main line");
                    }
                    break;
                }
                Token::Result(result) => {
                    if depth == 0 {
                        self.result = Some(*result);
                    }
                    break;
                }
            }
        }

        if let Some(text) = pending {
            match variation.last_mut() {
                Some(node) => node.append_comment(CommentAnchor::After, &text),
                None => warn!(comment = %text, "dropping comment with no move"),
            }
        }

        Ok(variation)
    }
}

/// Parses `[Key "Value"]`, unescaping `\"` and `\\` in the value.
fn parse_tag_line(line: &str) -> ParseResult<(String, String)> {
    let invalid = || ParseError::InvalidTagPair { line: line.to_owned() };

    let inner = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(invalid)?
        .trim();
    let (key, value_raw) = inner.split_once(char::is_whitespace).ok_or_else(invalid)?;
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(invalid());
    }

    let quoted = value_raw
        .trim()
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(invalid)?;

    let mut value = String::with_capacity(quoted.len());
    let mut chars = quoted.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => value.push(chars.next().ok_or_else(invalid)?),
            '"' => return Err(invalid()),
            _ => value.push(ch),
        }
    }

    Ok((key.to_owned(), value))
}
