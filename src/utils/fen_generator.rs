use crate::game_state::chess_types::*;
use crate::game_state::position::Position;

pub fn generate_fen(position: &Position) -> String {
    let castling: String = position.castling_rights.iter().map(CastlingRight::fen_char).collect();
    let castling = if castling.is_empty() { "-".to_owned() } else { castling };
    let en_passant = position
        .en_passant_target
        .map_or_else(|| "-".to_owned(), |square| square.to_string());

    format!(
        "{} {} {} {} {} {}",
        generate_board_field(position),
        position.side_to_move.fen_char(),
        castling,
        en_passant,
        position.halfmove_clock,
        position.fullmove_number
    )
}

fn generate_board_field(position: &Position) -> String {
    let mut out = String::new();

    for rank in (0..8i8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8i8 {
            let piece = Square::from_coords(file, rank).and_then(|square| position.piece_at(square));
            match piece {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::position::Position;

    #[test]
    fn canonical_fens_round_trip() {
        let fens = [
            STARTING_POSITION_FEN,
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 b - - 57 120",
        ];
        for fen in fens {
            let position = Position::from_fen(fen).expect("FEN should parse");
            assert_eq!(generate_fen(&position), fen);
        }
    }

    #[test]
    fn empty_position_fen() {
        assert_eq!(generate_fen(&Position::empty()), "8/8/8/8/8/8/8/8 w - - 0 1");
    }

    #[test]
    fn fen_follows_played_moves() {
        let position = Position::starting()
            .play("e4")
            .and_then(|p| p.play("c5"))
            .expect("moves should be legal");
        assert_eq!(
            generate_fen(&position),
            "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2"
        );
    }
}
