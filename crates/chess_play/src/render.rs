//! Text rendering of boards and game status.

use chess_rules::{Board, Color, GameState, GameStatus, Piece, PieceKind, Square};

use crate::config::PlayConfig;

fn glyph(piece: Piece, unicode: bool) -> char {
    if !unicode {
        return piece.letter();
    }
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::King) => '♔',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::Black, PieceKind::King) => '♚',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Pawn) => '♟',
    }
}

/// Draw `board` with Black at the top. Squares in `marked` get a `*` in
/// front of their cell.
pub fn render_board(board: &Board, config: &PlayConfig, marked: &[Square]) -> String {
    let mut out = String::new();
    for row in 0..8u8 {
        if config.show_coordinates {
            out.push_str(&format!("{} ", 8 - row));
        }
        for col in 0..8u8 {
            let Some(sq) = Square::new(row, col) else {
                continue;
            };
            out.push(if marked.contains(&sq) { '*' } else { ' ' });
            out.push(board.piece_at(sq).map_or('.', |pc| glyph(pc, config.unicode)));
        }
        out.push('\n');
    }
    if config.show_coordinates {
        out.push_str("   a b c d e f g h\n");
    }
    out
}

/// One line describing whose turn it is or how the game ended.
pub fn status_line(state: &GameState) -> String {
    match state.status() {
        GameStatus::Ongoing => format!("{} to move", state.side_to_move()),
        GameStatus::Check(color) => format!("{color} to move, in check"),
        GameStatus::Checkmate(color) => format!("checkmate, {} wins", color.other()),
        GameStatus::Stalemate(color) => format!("stalemate, {color} has no legal move, draw"),
    }
}
