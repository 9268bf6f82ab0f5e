//! Helpers shared by the integration tests.
#![allow(dead_code)]

use chess_rules::{Board, Color, GameState, MoveOutcome, Piece, PieceKind, RulesConfig, Square};

pub fn sq(s: &str) -> Square {
    s.parse().unwrap_or_else(|e| panic!("{e}"))
}

/// Board from the piece-placement field of a FEN record, rank 8 first.
pub fn board(placement: &str) -> Board {
    let ranks: Vec<&str> = placement.split('/').collect();
    assert_eq!(ranks.len(), 8, "Invalid placement: {placement}");

    let mut b = Board::empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col: u8 = 0;
        for ch in rank_str.chars() {
            if let Some(d) = ch.to_digit(10) {
                col += d as u8;
                continue;
            }
            let kind = PieceKind::from_letter(ch)
                .unwrap_or_else(|| panic!("Invalid piece char in placement: {ch}"));
            let color = if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let at = Square::new(row as u8, col).expect("Square out of bounds in placement");
            b = b.with_piece(at, Some(Piece::new(color, kind)));
            col += 1;
        }
        assert_eq!(col, 8, "Rank {rank_str:?} does not describe 8 files");
    }
    b
}

pub fn position(placement: &str, side: Color) -> GameState {
    position_with(placement, side, RulesConfig::default())
}

pub fn position_with(placement: &str, side: Color, config: RulesConfig) -> GameState {
    GameState::from_board(board(placement), side, config)
        .unwrap_or_else(|e| panic!("bad setup {placement}: {e}"))
}

/// Play a legal, non-promoting move.
pub fn play(state: &GameState, from: &str, to: &str) -> GameState {
    match state.try_move(sq(from), sq(to)) {
        Ok(MoveOutcome::Played { state, .. }) => state,
        other => panic!("{from}{to} did not play: {other:?}"),
    }
}

/// Play a sequence like `["e2e4", "e7e5"]`.
pub fn play_all(state: &GameState, moves: &[&str]) -> GameState {
    moves.iter().fold(state.clone(), |s, mv| {
        assert_eq!(mv.len(), 4, "moves are written as e2e4");
        play(&s, &mv[..2], &mv[2..])
    })
}
