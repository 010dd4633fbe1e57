//! Standard Algebraic Notation parser.
//!
//! Grammar, after removing any `e.p.` marker:
//!
//! ```text
//! san        := (castle | piece_move) check? ws? annotation?
//! castle     := "O-O" | "O-O-O" | "0-0" | "0-0-0"
//! piece_move := [KQRBN]? [a-h]? [1-8]? "x"? [a-h][1-8] ("=" [QRBN])?
//! check      := "+" | "#"
//! annotation := "!!" | "!?" | "?!" | "??" | "!" | "?"
//! ```
//!
//! The parsed move carries only what the text says; the origin square is set
//! only when both the file and the rank hint are given.

use crate::errors::{ParseError, ParseResult};
use crate::game_state::chess_move::{Move, MoveAnnotation};
use crate::game_state::chess_types::*;

pub fn parse_san(san: &str, color: Color) -> ParseResult<Move> {
    let invalid = || ParseError::InvalidSan { san: san.to_owned() };

    let cleaned = san.replace("e.p.", "");
    let (body, annotation) = split_annotation(cleaned.trim());
    let (body, is_check, is_checkmate) = split_check(body.trim_end());
    if body.is_empty() {
        return Err(invalid());
    }

    let mut mv = match castling_side(body) {
        Some(kingside) => {
            let right = if kingside {
                CastlingRight::kingside(color)
            } else {
                CastlingRight::queenside(color)
            };
            Move::castle(right)
        }
        None => parse_piece_move(body, color).ok_or_else(invalid)?,
    };

    mv.is_check = is_check;
    mv.is_checkmate = is_checkmate;
    mv.annotation = annotation;
    Ok(mv)
}

fn split_annotation(text: &str) -> (&str, Option<MoveAnnotation>) {
    MoveAnnotation::ALL
        .into_iter()
        .find_map(|annotation| {
            text.strip_suffix(annotation.as_str())
                .map(|body| (body.trim_end(), Some(annotation)))
        })
        .unwrap_or((text, None))
}

fn split_check(text: &str) -> (&str, bool, bool) {
    if let Some(body) = text.strip_suffix('#') {
        (body, false, true)
    } else if let Some(body) = text.strip_suffix('+') {
        (body, true, false)
    } else {
        (text, false, false)
    }
}

/// `Some(true)` for kingside, `Some(false)` for queenside.
fn castling_side(body: &str) -> Option<bool> {
    match body {
        "O-O" | "0-0" => Some(true),
        "O-O-O" | "0-0-0" => Some(false),
        _ => None,
    }
}

fn parse_piece_move(body: &str, color: Color) -> Option<Move> {
    let bytes = body.as_bytes();
    let mut end = bytes.len();

    let mut promotion = None;
    if end >= 2 && bytes[end - 2] == b'=' {
        let kind = PieceKind::from_san_letter(bytes[end - 1] as char)
            .filter(|kind| PieceKind::PROMOTIONS.contains(kind))?;
        promotion = Some(Piece::new(color, kind));
        end -= 2;
    }

    if end < 2 {
        return None;
    }
    let to = Square::from_algebraic(body.get(end - 2..end)?).ok()?;
    end -= 2;

    let mut start = 0;
    let kind = match bytes.first() {
        Some(&letter) if start < end && matches!(letter, b'K' | b'Q' | b'R' | b'B' | b'N') => {
            start = 1;
            PieceKind::from_san_letter(letter as char)?
        }
        _ => PieceKind::Pawn,
    };

    let mut is_capture = false;
    if end > start && bytes[end - 1] == b'x' {
        is_capture = true;
        end -= 1;
    }

    let mut file_from = None;
    let mut rank_from = None;
    let mut cursor = start;
    if cursor < end && (b'a'..=b'h').contains(&bytes[cursor]) {
        file_from = Some(bytes[cursor] - b'a');
        cursor += 1;
    }
    if cursor < end && (b'1'..=b'8').contains(&bytes[cursor]) {
        rank_from = Some(bytes[cursor] - b'1');
        cursor += 1;
    }
    if cursor != end {
        return None;
    }

    let mut mv = Move::new(Piece::new(color, kind), to);
    mv.file_from = file_from;
    mv.rank_from = rank_from;
    if let (Some(file), Some(rank)) = (file_from, rank_from) {
        mv.from = Square::from_coords(file as i8, rank as i8);
    }
    mv.promotion = promotion;
    mv.is_capture = is_capture;
    Some(mv)
}

#[cfg(test)]
mod tests {
    use super::parse_san;
    use crate::errors::ParseError;
    use crate::game_state::chess_move::MoveAnnotation;
    use crate::game_state::chess_types::*;

    #[test]
    fn pawn_push_and_capture() {
        let push = parse_san("e4", Color::White).expect("e4 should parse");
        assert_eq!(push.piece, Piece::WHITE_PAWN);
        assert_eq!(push.to, Some(Square::E4));
        assert_eq!(push.file_from, None);
        assert!(!push.is_capture);

        let capture = parse_san("exd5", Color::Black).expect("exd5 should parse");
        assert_eq!(capture.piece, Piece::BLACK_PAWN);
        assert_eq!(capture.file_from, Some(4));
        assert!(capture.is_capture);
    }

    #[test]
    fn piece_moves_with_hints() {
        let mv = parse_san("Nbd7", Color::Black).expect("Nbd7 should parse");
        assert_eq!(mv.piece, Piece::BLACK_KNIGHT);
        assert_eq!((mv.file_from, mv.rank_from, mv.from), (Some(1), None, None));

        let mv = parse_san("R1a3", Color::White).expect("R1a3 should parse");
        assert_eq!((mv.file_from, mv.rank_from), (None, Some(0)));

        let mv = parse_san("Qh4xe1", Color::Black).expect("Qh4xe1 should parse");
        assert_eq!(mv.from, Some(Square::H4));
        assert_eq!(mv.to, Some(Square::E1));
        assert!(mv.is_capture);
    }

    #[test]
    fn promotion_check_and_mate() {
        let mv = parse_san("exf8=N+", Color::White).expect("exf8=N+ should parse");
        assert_eq!(mv.promotion, Some(Piece::WHITE_KNIGHT));
        assert!(mv.is_check);
        assert!(!mv.is_checkmate);

        let mv = parse_san("Qxf7#", Color::White).expect("Qxf7# should parse");
        assert!(mv.is_checkmate);
        assert!(!mv.is_check);
    }

    #[test]
    fn castling_spellings() {
        let mv = parse_san("O-O", Color::White).expect("O-O should parse");
        assert_eq!(mv.castling, Some(CastlingRight::WhiteKingside));
        assert_eq!(mv.piece, Piece::WHITE_KING);

        let mv = parse_san("0-0-0+", Color::Black).expect("0-0-0+ should parse");
        assert_eq!(mv.castling, Some(CastlingRight::BlackQueenside));
        assert!(mv.is_check);
    }

    #[test]
    fn annotations_and_en_passant_marker() {
        let mv = parse_san("Nf3!?", Color::White).expect("Nf3!? should parse");
        assert_eq!(mv.annotation, Some(MoveAnnotation::Interesting));

        let mv = parse_san("Bb5 ??", Color::White).expect("spaced annotation should parse");
        assert_eq!(mv.annotation, Some(MoveAnnotation::Blunder));

        let mv = parse_san("exd6 e.p.", Color::White).expect("e.p. marker should be ignored");
        assert_eq!(mv.to, Some(Square::D6));
        assert!(mv.is_capture);
    }

    #[test]
    fn rejects_garbage() {
        for text in ["", "Zf3", "e9", "Nf", "exd", "Pe4", "e8=K", "O-O-O-O", "Nbb1c3", "xe4x"] {
            let err = parse_san(text, Color::White).expect_err("should be rejected");
            assert!(matches!(err, ParseError::InvalidSan { .. }), "{text}");
        }
    }
}
