//! Human-readable board dump for debugging and diagnostics.

use crate::game_state::chess_types::*;
use crate::game_state::position::Position;

/// Unicode board with rank/file labels, followed by a line naming the side
/// to move and the FEN state fields.
pub fn render_position(position: &Position) -> String {
    let mut out = String::from("  a b c d e f g h\n");

    for rank in (0..8i8).rev() {
        let label = char::from(b'1' + rank as u8);
        let row: Vec<String> = (0..8i8)
            .map(|file| {
                Square::from_coords(file, rank)
                    .and_then(|square| position.piece_at(square))
                    .map_or('·', piece_glyph)
                    .to_string()
            })
            .collect();
        out.push_str(&format!("{label} {} {label}\n", row.join(" ")));
    }
    out.push_str("  a b c d e f g h\n");

    let side = match position.side_to_move {
        Color::White => "White",
        Color::Black => "Black",
    };
    let fen = position.fen();
    let state = fen.split_once(' ').map_or("", |(_, fields)| fields);
    out.push_str(&format!("{side} to move ({state})"));

    out
}

fn piece_glyph(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
