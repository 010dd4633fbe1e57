//! Closed chess vocabulary: colors, piece kinds, pieces, squares and
//! castling rights.
//!
//! Every identity here is a plain `Copy` value with exhaustive matches, so
//! lookups by letter or coordinate are table/match driven and cannot name a
//! square or piece that does not exist.

use std::fmt;

use crate::errors::{ParseError, ParseResult};

/// Side to move, or owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank index (`0..=7`) a pawn of this color promotes on.
    #[inline]
    pub const fn last_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Rank step of a pawn advance.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

/// Piece role, independent of color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Kinds a pawn may promote to, strongest first.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Uppercase SAN letter; pawns have none.
    #[inline]
    pub const fn san_letter(self) -> Option<char> {
        match self {
            PieceKind::Pawn => None,
            PieceKind::Knight => Some('N'),
            PieceKind::Bishop => Some('B'),
            PieceKind::Rook => Some('R'),
            PieceKind::Queen => Some('Q'),
            PieceKind::King => Some('K'),
        }
    }

    #[inline]
    pub const fn from_san_letter(letter: char) -> Option<PieceKind> {
        match letter {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

/// One of the twelve colored pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const WHITE_PAWN: Piece = Piece::new(Color::White, PieceKind::Pawn);
    pub const WHITE_KNIGHT: Piece = Piece::new(Color::White, PieceKind::Knight);
    pub const WHITE_BISHOP: Piece = Piece::new(Color::White, PieceKind::Bishop);
    pub const WHITE_ROOK: Piece = Piece::new(Color::White, PieceKind::Rook);
    pub const WHITE_QUEEN: Piece = Piece::new(Color::White, PieceKind::Queen);
    pub const WHITE_KING: Piece = Piece::new(Color::White, PieceKind::King);
    pub const BLACK_PAWN: Piece = Piece::new(Color::Black, PieceKind::Pawn);
    pub const BLACK_KNIGHT: Piece = Piece::new(Color::Black, PieceKind::Knight);
    pub const BLACK_BISHOP: Piece = Piece::new(Color::Black, PieceKind::Bishop);
    pub const BLACK_ROOK: Piece = Piece::new(Color::Black, PieceKind::Rook);
    pub const BLACK_QUEEN: Piece = Piece::new(Color::Black, PieceKind::Queen);
    pub const BLACK_KING: Piece = Piece::new(Color::Black, PieceKind::King);

    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    #[inline]
    pub const fn king(color: Color) -> Self {
        Self::new(color, PieceKind::King)
    }

    #[inline]
    pub const fn pawn(color: Color) -> Self {
        Self::new(color, PieceKind::Pawn)
    }

    #[inline]
    pub const fn rook(color: Color) -> Self {
        Self::new(color, PieceKind::Rook)
    }

    #[inline]
    pub const fn is_pawn(self) -> bool {
        matches!(self.kind, PieceKind::Pawn)
    }

    /// Same role, other color.
    #[inline]
    pub const fn opposite(self) -> Self {
        Self::new(self.color.opposite(), self.kind)
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub const fn fen_char(self) -> char {
        let base = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };

        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }

    pub const fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };

        match PieceKind::from_san_letter(ch.to_ascii_uppercase()) {
            Some(kind) => Some(Self::new(color, kind)),
            None => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

/// Board square, indexed `a1 = 0`, `h1 = 7`, `a8 = 56`, `h8 = 63`.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    #[rustfmt::skip]
    pub const ALL: [Square; 64] = [
        Square::A1, Square::B1, Square::C1, Square::D1, Square::E1, Square::F1, Square::G1, Square::H1,
        Square::A2, Square::B2, Square::C2, Square::D2, Square::E2, Square::F2, Square::G2, Square::H2,
        Square::A3, Square::B3, Square::C3, Square::D3, Square::E3, Square::F3, Square::G3, Square::H3,
        Square::A4, Square::B4, Square::C4, Square::D4, Square::E4, Square::F4, Square::G4, Square::H4,
        Square::A5, Square::B5, Square::C5, Square::D5, Square::E5, Square::F5, Square::G5, Square::H5,
        Square::A6, Square::B6, Square::C6, Square::D6, Square::E6, Square::F6, Square::G6, Square::H6,
        Square::A7, Square::B7, Square::C7, Square::D7, Square::E7, Square::F7, Square::G7, Square::H7,
        Square::A8, Square::B8, Square::C8, Square::D8, Square::E8, Square::F8, Square::G8, Square::H8,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn from_index(index: usize) -> Option<Square> {
        if index < 64 {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Square from zero-based file and rank; `None` when off the board.
    #[inline]
    pub const fn from_coords(file: i8, rank: i8) -> Option<Square> {
        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            return None;
        }
        Some(Self::ALL[(rank as usize) * 8 + file as usize])
    }

    /// Zero-based file, `a = 0`.
    #[inline]
    pub const fn file(self) -> u8 {
        (self as u8) % 8
    }

    /// Zero-based rank, rank 1 = 0.
    #[inline]
    pub const fn rank(self) -> u8 {
        (self as u8) / 8
    }

    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.file()) as char
    }

    #[inline]
    pub const fn rank_char(self) -> char {
        (b'1' + self.rank()) as char
    }

    /// Color of the square itself; `a1` is a dark square.
    #[inline]
    pub const fn color(self) -> Color {
        if (self.file() + self.rank()) % 2 == 0 {
            Color::Black
        } else {
            Color::White
        }
    }

    /// One-hot bitboard of this square.
    #[inline]
    pub const fn bit(self) -> u64 {
        1u64 << (self as u8)
    }

    /// Square reached by stepping `file_step`/`rank_step`, if on the board.
    #[inline]
    pub const fn offset(self, file_step: i8, rank_step: i8) -> Option<Square> {
        Self::from_coords(self.file() as i8 + file_step, self.rank() as i8 + rank_step)
    }

    pub fn from_algebraic(text: &str) -> ParseResult<Square> {
        let bytes = text.as_bytes();
        let invalid = || ParseError::InvalidSquare {
            square: text.to_owned(),
        };

        if bytes.len() != 2 {
            return Err(invalid());
        }

        let file = bytes[0];
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }

        Square::from_coords((file - b'a') as i8, (rank - b'1') as i8).ok_or_else(invalid)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl std::str::FromStr for Square {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s)
    }
}

/// One of the four castling privileges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CastlingRight {
    WhiteKingside,
    WhiteQueenside,
    BlackKingside,
    BlackQueenside,
}

impl CastlingRight {
    /// FEN order: `KQkq`.
    pub const ALL: [CastlingRight; 4] = [
        CastlingRight::WhiteKingside,
        CastlingRight::WhiteQueenside,
        CastlingRight::BlackKingside,
        CastlingRight::BlackQueenside,
    ];

    #[inline]
    pub const fn kingside(color: Color) -> Self {
        match color {
            Color::White => CastlingRight::WhiteKingside,
            Color::Black => CastlingRight::BlackKingside,
        }
    }

    #[inline]
    pub const fn queenside(color: Color) -> Self {
        match color {
            Color::White => CastlingRight::WhiteQueenside,
            Color::Black => CastlingRight::BlackQueenside,
        }
    }

    #[inline]
    pub const fn color(self) -> Color {
        match self {
            CastlingRight::WhiteKingside | CastlingRight::WhiteQueenside => Color::White,
            CastlingRight::BlackKingside | CastlingRight::BlackQueenside => Color::Black,
        }
    }

    #[inline]
    pub const fn is_kingside(self) -> bool {
        matches!(self, CastlingRight::WhiteKingside | CastlingRight::BlackKingside)
    }

    #[inline]
    const fn bit(self) -> u8 {
        match self {
            CastlingRight::WhiteKingside => 1 << 0,
            CastlingRight::WhiteQueenside => 1 << 1,
            CastlingRight::BlackKingside => 1 << 2,
            CastlingRight::BlackQueenside => 1 << 3,
        }
    }

    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            CastlingRight::WhiteKingside => 'K',
            CastlingRight::WhiteQueenside => 'Q',
            CastlingRight::BlackKingside => 'k',
            CastlingRight::BlackQueenside => 'q',
        }
    }

    #[inline]
    pub const fn from_fen_char(ch: char) -> Option<Self> {
        match ch {
            'K' => Some(CastlingRight::WhiteKingside),
            'Q' => Some(CastlingRight::WhiteQueenside),
            'k' => Some(CastlingRight::BlackKingside),
            'q' => Some(CastlingRight::BlackQueenside),
            _ => None,
        }
    }
}

/// Set of castling rights still held, always iterated in `KQkq` order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights(u8);

impl CastlingRights {
    #[inline]
    pub const fn none() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn all() -> Self {
        Self(0b1111)
    }

    #[inline]
    pub const fn contains(self, right: CastlingRight) -> bool {
        self.0 & right.bit() != 0
    }

    #[inline]
    pub fn insert(&mut self, right: CastlingRight) {
        self.0 |= right.bit();
    }

    #[inline]
    pub fn remove(&mut self, right: CastlingRight) {
        self.0 &= !right.bit();
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = CastlingRight> {
        CastlingRight::ALL
            .into_iter()
            .filter(move |right| self.contains(*right))
    }
}

impl FromIterator<CastlingRight> for CastlingRights {
    fn from_iter<I: IntoIterator<Item = CastlingRight>>(iter: I) -> Self {
        let mut rights = CastlingRights::none();
        for right in iter {
            rights.insert(right);
        }
        rights
    }
}

#[cfg(test)]
mod tests {
    use super::{CastlingRight, CastlingRights, Color, Piece, PieceKind, Square};

    #[test]
    fn square_derivations() {
        assert_eq!(Square::E4.file(), 4);
        assert_eq!(Square::E4.rank(), 3);
        assert_eq!(Square::E4.to_string(), "e4");
        assert_eq!(Square::A1.color(), Color::Black);
        assert_eq!(Square::H1.color(), Color::White);
        assert_eq!(Square::H8.color(), Color::Black);
        assert_eq!(Square::from_index(63), Some(Square::H8));
        assert_eq!(Square::from_index(64), None);
        assert_eq!(Square::H8.offset(1, 0), None);
        assert_eq!(Square::B1.offset(1, 2), Some(Square::C3));
    }

    #[test]
    fn square_index_matches_table_position() {
        for (index, square) in Square::ALL.iter().enumerate() {
            assert_eq!(square.index(), index);
            let reparsed = Square::from_algebraic(&square.to_string()).expect("square should parse");
            assert_eq!(reparsed, *square);
        }
    }

    #[test]
    fn rejects_malformed_squares() {
        assert!(Square::from_algebraic("i1").is_err());
        assert!(Square::from_algebraic("a9").is_err());
        assert!(Square::from_algebraic("a").is_err());
        assert!("e10".parse::<Square>().is_err());
    }

    #[test]
    fn piece_derivations() {
        assert_eq!(Piece::WHITE_KNIGHT.color, Color::White);
        assert!(Piece::BLACK_PAWN.is_pawn());
        assert_eq!(Piece::BLACK_QUEEN.opposite(), Piece::WHITE_QUEEN);
        assert_eq!(Piece::WHITE_KING.fen_char(), 'K');
        assert_eq!(Piece::BLACK_BISHOP.fen_char(), 'b');
        assert_eq!(Piece::from_fen_char('r'), Some(Piece::BLACK_ROOK));
        assert_eq!(Piece::from_fen_char('x'), None);
        assert_eq!(Piece::from_fen_char('3'), None);
        assert_eq!(PieceKind::Pawn.san_letter(), None);
    }

    #[test]
    fn castling_rights_iterate_in_fen_order() {
        let rights: CastlingRights = [CastlingRight::BlackQueenside, CastlingRight::WhiteKingside]
            .into_iter()
            .collect();
        let letters: String = rights.iter().map(CastlingRight::fen_char).collect();
        assert_eq!(letters, "Kq");

        let mut all = CastlingRights::all();
        all.remove(CastlingRight::WhiteQueenside);
        assert!(!all.contains(CastlingRight::WhiteQueenside));
        assert!(all.contains(CastlingRight::BlackKingside));
        assert_eq!(CastlingRight::queenside(Color::Black), CastlingRight::BlackQueenside);
        assert_eq!(CastlingRight::BlackKingside.color(), Color::Black);
    }
}
