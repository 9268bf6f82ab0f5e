//! Helpers shared by the unit tests.

use crate::{Board, Color, GameState, MoveOutcome, Piece, PieceKind, RulesConfig, Square};

pub fn sq(s: &str) -> Square {
    s.parse().unwrap_or_else(|e| panic!("{e}"))
}

/// Build a board from eight rows, Black's back rank first. Upper case is
/// White, lower case Black, `.` empty; spaces are ignored.
pub fn board(rows: [&str; 8]) -> Board {
    let mut b = Board::empty();
    for (row, line) in rows.iter().enumerate() {
        let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(cells.len(), 8, "row {row} needs 8 cells: {line:?}");
        for (col, c) in cells.into_iter().enumerate() {
            if c == '.' {
                continue;
            }
            let kind = PieceKind::from_letter(c).unwrap_or_else(|| panic!("bad piece {c:?}"));
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let at = Square::new(row as u8, col as u8).unwrap();
            b = b.with_piece(at, Some(Piece::new(color, kind)));
        }
    }
    b
}

pub fn state(rows: [&str; 8], side: Color) -> GameState {
    GameState::from_board(board(rows), side, RulesConfig::default()).unwrap()
}

/// Play a move that must be legal and must not promote.
pub fn play(state: &GameState, from: &str, to: &str) -> GameState {
    match state.try_move(sq(from), sq(to)) {
        Ok(MoveOutcome::Played { state, .. }) => state,
        other => panic!("{from}{to} did not play: {other:?}"),
    }
}
