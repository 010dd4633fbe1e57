//! Move-to-SAN writer. Uses only the hints a move carries; call
//! `resolve_move` first to get minimal disambiguation for a bare move.

use crate::game_state::chess_move::Move;

pub fn move_to_san(mv: &Move) -> String {
    let mut out = String::with_capacity(8);

    match mv.castling {
        Some(right) if right.is_kingside() => out.push_str("O-O"),
        Some(_) => out.push_str("O-O-O"),
        None => {
            if let Some(letter) = mv.piece.kind.san_letter() {
                out.push(letter);
            }
            if let Some(file) = mv.file_from {
                out.push(char::from(b'a' + file));
            }
            if let Some(rank) = mv.rank_from {
                out.push(char::from(b'1' + rank));
            }
            if mv.is_capture {
                out.push('x');
            }
            if let Some(to) = mv.to {
                out.push_str(&to.to_string());
            }
            if let Some(promotion) = mv.promotion.and_then(|piece| piece.kind.san_letter()) {
                out.push('=');
                out.push(promotion);
            }
        }
    }

    if mv.is_checkmate {
        out.push('#');
    } else if mv.is_check {
        out.push('+');
    }
    if let Some(annotation) = mv.annotation {
        out.push_str(annotation.as_str());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::move_to_san;
    use crate::game_state::chess_move::Move;
    use crate::game_state::chess_types::Color;

    #[test]
    fn parsed_san_is_reproduced() {
        let samples = [
            "e4", "exd5", "Nbd7", "R1a3", "Qh4xe1", "exf8=N+", "Qxf7#", "O-O", "O-O-O+", "Nf3!?",
            "Kxe2??",
        ];
        for san in samples {
            let mv = Move::from_san(san, Color::White).expect("sample SAN should parse");
            assert_eq!(move_to_san(&mv), san);
        }
    }

    #[test]
    fn zero_castling_is_normalised() {
        let mv = Move::from_san("0-0", Color::Black).expect("0-0 should parse");
        assert_eq!(move_to_san(&mv), "O-O");
    }
}
