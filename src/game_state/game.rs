//! A complete game record: tag pairs, starting position, moves and result.

use std::fmt;
use std::str::FromStr;

use crate::errors::{ParseError, ParseResult};
use crate::game_state::position::Position;
use crate::game_state::variation::Variation;
use crate::utils::pgn_parser::PgnParser;
use crate::utils::pgn_writer::{write_game, write_lite_game};
use crate::validation::game_validator::{validate_game, GameViolation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
    Ongoing,
}

impl GameResult {
    pub const fn as_str(self) -> &'static str {
        match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
            GameResult::Ongoing => "*",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "1-0" => Some(GameResult::WhiteWins),
            "0-1" => Some(GameResult::BlackWins),
            "1/2-1/2" => Some(GameResult::Draw),
            "*" => Some(GameResult::Ongoing),
            _ => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Tag pairs in the order they were read or set.
    tags: Vec<(String, String)>,
    pub initial_position: Position,
    pub main_line: Variation,
    pub result: Option<GameResult>,
}

impl Default for Game {
    fn default() -> Self {
        Self {
            tags: Vec::new(),
            initial_position: Position::starting(),
            main_line: Variation::new(),
            result: None,
        }
    }
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_position(initial_position: Position) -> Self {
        Self {
            initial_position,
            ..Self::default()
        }
    }

    #[inline]
    pub fn from_pgn(pgn: &str) -> ParseResult<Self> {
        PgnParser::default().parse(pgn)
    }

    /// Full PGN: tags, commented movetext and result.
    #[inline]
    pub fn pgn(&self) -> String {
        write_game(self)
    }

    /// Movetext and result only: no tags and no comments.
    #[inline]
    pub fn lite_pgn(&self) -> String {
        write_lite_game(self)
    }

    pub fn tags(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    /// Sets a tag, keeping its original position if it already exists.
    pub fn set_tag(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.tags.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.tags.push((key, value)),
        }
    }

    pub fn remove_tag(&mut self, key: &str) -> Option<String> {
        let index = self.tags.iter().position(|(existing, _)| existing == key)?;
        Some(self.tags.remove(index).1)
    }

    pub fn clear_comments(&mut self) {
        self.main_line.clear_comments();
    }

    /// First illegal move in the main line or any variation, if any.
    #[inline]
    pub fn validate(&self) -> Option<GameViolation> {
        validate_game(self)
    }

    /// Position after the last main-line move.
    pub fn final_position(&self) -> Result<Position, GameViolation> {
        match validate_game(self) {
            Some(violation) => Err(violation),
            None => self.main_line.iter().try_fold(self.initial_position.clone(), |position, node| {
                position.apply(&node.mv).map_err(|violation| GameViolation {
                    path: node.key(),
                    violation,
                })
            }),
        }
    }
}

impl FromStr for Game {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Game::from_pgn(s)
    }
}
