//! Ordered line of plies: the main line of a game or one alternative.

use std::mem;

use crate::errors::ParseResult;
use crate::game_state::chess_move::Move;
use crate::game_state::chess_types::Color;
use crate::game_state::move_node::MoveNode;

/// Plies in playing order, keyed by `"n."` / `"n..."`. Keys are unique: a
/// node whose key is already present replaces the existing node in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variation {
    nodes: Vec<MoveNode>,
}

impl Variation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a line from SAN moves, White's first move numbered 1.
    pub fn from_sans<'a>(sans: impl IntoIterator<Item = &'a str>) -> ParseResult<Self> {
        let mut variation = Self::new();
        for san in sans {
            variation.append_san(san)?;
        }
        Ok(variation)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn nodes(&self) -> &[MoveNode] {
        &self.nodes
    }

    #[inline]
    pub fn first(&self) -> Option<&MoveNode> {
        self.nodes.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&MoveNode> {
        self.nodes.last()
    }

    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut MoveNode> {
        self.nodes.last_mut()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MoveNode> {
        self.nodes.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, MoveNode> {
        self.nodes.iter_mut()
    }

    pub fn get(&self, key: &str) -> Option<&MoveNode> {
        self.nodes.iter().find(|node| node.key() == key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut MoveNode> {
        self.nodes.iter_mut().find(|node| node.key() == key)
    }

    /// Adds `node`, returning the node it replaced if its key was taken.
    pub fn push(&mut self, node: MoveNode) -> Option<MoveNode> {
        self.insert(node).1
    }

    fn insert(&mut self, node: MoveNode) -> (usize, Option<MoveNode>) {
        let key = node.key();
        match self.nodes.iter().position(|existing| existing.key() == key) {
            Some(index) => (index, Some(mem::replace(&mut self.nodes[index], node))),
            None => {
                self.nodes.push(node);
                (self.nodes.len() - 1, None)
            }
        }
    }

    /// Color and move number of the ply after the last one.
    pub fn next_ply(&self) -> Option<(Color, u32)> {
        let last = self.nodes.last()?;
        Some(match last.color() {
            Color::White => (Color::Black, last.move_number),
            Color::Black => (Color::White, last.move_number.saturating_add(1)),
        })
    }

    /// Appends `mv` as the next ply. Color and move number are inferred from
    /// the last node: the move is recolored if needed, and Black keeps
    /// White's number while White increments it. An empty line starts at 1
    /// with the move's own color.
    pub fn append(&mut self, mv: Move) -> &mut MoveNode {
        let (color, move_number) = self.next_ply().unwrap_or((mv.color(), 1));
        let (index, _) = self.insert(MoveNode::new(mv.with_color(color), move_number));
        &mut self.nodes[index]
    }

    /// Parses `san` for the color to move next and appends it.
    pub fn append_san(&mut self, san: &str) -> ParseResult<&mut MoveNode> {
        let color = self.next_ply().map_or(Color::White, |(color, _)| color);
        let mv = Move::from_san(san, color)?;
        Ok(self.append(mv))
    }

    pub fn clear_comments(&mut self) {
        for node in &mut self.nodes {
            node.clear_comments();
        }
    }
}

impl<'a> IntoIterator for &'a Variation {
    type Item = &'a MoveNode;
    type IntoIter = std::slice::Iter<'a, MoveNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl<'a> IntoIterator for &'a mut Variation {
    type Item = &'a mut MoveNode;
    type IntoIter = std::slice::IterMut<'a, MoveNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter_mut()
    }
}
