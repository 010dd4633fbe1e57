//! One ply of a game record with its commentary and alternatives.

use crate::errors::ParseResult;
use crate::game_state::chess_move::Move;
use crate::game_state::chess_types::Color;
use crate::game_state::variation::Variation;

/// Which side of a move a comment is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentAnchor {
    Before,
    After,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveNode {
    pub mv: Move,
    pub move_number: u32,
    pub before_comment: Option<String>,
    pub after_comment: Option<String>,
    nags: Vec<u8>,
    /// Alternatives to this move, each starting from the position before it.
    pub variations: Vec<Variation>,
}

impl MoveNode {
    pub fn new(mv: Move, move_number: u32) -> Self {
        Self {
            mv,
            move_number,
            before_comment: None,
            after_comment: None,
            nags: Vec::new(),
            variations: Vec::new(),
        }
    }

    pub fn from_san(san: &str, color: Color, move_number: u32) -> ParseResult<Self> {
        Ok(Self::new(Move::from_san(san, color)?, move_number))
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.mv.color()
    }

    /// `"12."` for a White move, `"12..."` for a Black one.
    pub fn key(&self) -> String {
        match self.color() {
            Color::White => format!("{}.", self.move_number),
            Color::Black => format!("{}...", self.move_number),
        }
    }

    #[inline]
    pub fn nags(&self) -> &[u8] {
        &self.nags
    }

    /// Adds a numeric annotation glyph; duplicates are ignored.
    pub fn add_nag(&mut self, nag: u8) {
        if !self.nags.contains(&nag) {
            self.nags.push(nag);
        }
    }

    pub fn remove_nag(&mut self, nag: u8) {
        self.nags.retain(|existing| *existing != nag);
    }

    /// Adds an alternative line unless an identical one is already attached.
    pub fn add_variation(&mut self, variation: Variation) {
        if !self.variations.contains(&variation) {
            self.variations.push(variation);
        }
    }

    pub fn comment(&self, anchor: CommentAnchor) -> Option<&str> {
        match anchor {
            CommentAnchor::Before => self.before_comment.as_deref(),
            CommentAnchor::After => self.after_comment.as_deref(),
        }
    }

    /// Appends `text` to the comment at `anchor`, separated by a space.
    pub fn append_comment(&mut self, anchor: CommentAnchor, text: &str) {
        let slot = match anchor {
            CommentAnchor::Before => &mut self.before_comment,
            CommentAnchor::After => &mut self.after_comment,
        };
        *slot = Some(match slot.take() {
            Some(existing) => format!("{existing} {text}"),
            None => text.to_owned(),
        });
    }

    /// Drops comments here and in every nested variation.
    pub fn clear_comments(&mut self) {
        self.before_comment = None;
        self.after_comment = None;
        for variation in &mut self.variations {
            variation.clear_comments();
        }
    }
}
