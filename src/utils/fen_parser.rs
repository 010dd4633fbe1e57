//! FEN-to-Position parser.
//!
//! Accepts exactly six whitespace-separated fields. Each field is checked
//! against its FEN grammar; the resulting position is not checked for
//! chess validity (kings, pawns, en passant) here.

use crate::errors::{ParseError, ParseResult};
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;

pub fn parse_fen(fen: &str) -> ParseResult<Position> {
    let invalid = |reason: &str| ParseError::InvalidFen {
        fen: fen.to_owned(),
        reason: reason.to_owned(),
    };

    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| invalid("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| invalid("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut position = Position::empty();

    parse_board(board_part, &mut position).map_err(|reason| invalid(&reason))?;
    position.side_to_move = parse_side_to_move(side_part).ok_or_else(|| invalid("side to move must be 'w' or 'b'"))?;
    position.castling_rights =
        parse_castling_rights(castling_part).ok_or_else(|| invalid("castling rights must be '-' or ordered KQkq letters"))?;
    position.en_passant_target = parse_en_passant_square(en_passant_part)
        .ok_or_else(|| invalid("en passant square must be '-' or a square on rank 3 or 6"))?;
    position.halfmove_clock = parse_counter(halfmove_part).ok_or_else(|| invalid("halfmove clock must be a number"))?;
    position.fullmove_number =
        parse_counter(fullmove_part).ok_or_else(|| invalid("fullmove number must be a number"))?;

    Ok(position)
}

fn parse_board(board_part: &str, position: &mut Position) -> Result<(), String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("board layout must contain 8 ranks".to_owned());
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - fen_rank_idx as i8;
        let mut file = 0i8;

        if rank_str.is_empty() {
            return Err(format!("rank {} is empty", rank + 1));
        }

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("invalid empty-square count '{ch}'"));
                }
                file += empty_count as i8;
                continue;
            }

            let piece =
                Piece::from_fen_char(ch).ok_or_else(|| format!("invalid piece character '{ch}' in board layout"))?;
            let square = Square::from_coords(file, rank)
                .ok_or_else(|| format!("rank {} has too many files", rank + 1))?;
            position.set_piece_at(square, Some(piece));
            file += 1;
        }

        if file != 8 {
            return Err(format!("rank {} does not sum to 8 files", rank + 1));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Option<Color> {
    match side_part {
        "w" => Some(Color::White),
        "b" => Some(Color::Black),
        _ => None,
    }
}

/// `-`, or a non-empty subsequence of `KQkq`.
fn parse_castling_rights(castling_part: &str) -> Option<CastlingRights> {
    if castling_part == "-" {
        return Some(CastlingRights::none());
    }
    if castling_part.is_empty() {
        return None;
    }

    let mut remaining = CastlingRight::ALL.iter();
    let mut rights = CastlingRights::none();
    for ch in castling_part.chars() {
        let right = CastlingRight::from_fen_char(ch)?;
        remaining.find(|candidate| **candidate == right)?;
        rights.insert(right);
    }

    Some(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Option<Option<Square>> {
    if en_passant_part == "-" {
        return Some(None);
    }

    let square = Square::from_algebraic(en_passant_part).ok()?;
    matches!(square.rank(), 2 | 5).then_some(Some(square))
}

fn parse_counter(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
