use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::attacks::is_in_check;
use crate::game::GameState;
use crate::movegen::has_legal_move;
use crate::types::Color;

/// Position classification for the side to move. The colour is always the
/// side the status applies to: `Checkmate(White)` means White has lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Check(Color),
    Checkmate(Color),
    Stalemate(Color),
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate(_) | GameStatus::Stalemate(_))
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Check(c) => write!(f, "{c} is in check"),
            GameStatus::Checkmate(c) => write!(f, "{c} is checkmated"),
            GameStatus::Stalemate(c) => write!(f, "{c} is stalemated"),
        }
    }
}

/// Classify the position for `color` as the side about to move.
///
/// For the colour not on move the position is probed as if it were their
/// turn, without en passant rights.
pub fn classify(state: &GameState, color: Color) -> GameStatus {
    let probe = if color == state.side_to_move() {
        Cow::Borrowed(state)
    } else {
        Cow::Owned(state.viewed_as(color))
    };

    let in_check = is_in_check(probe.board(), probe.king_square(color));
    let status = match (in_check, has_legal_move(&probe)) {
        (true, true) => GameStatus::Check(color),
        (false, true) => GameStatus::Ongoing,
        (true, false) => GameStatus::Checkmate(color),
        (false, false) => GameStatus::Stalemate(color),
    };
    tracing::trace!(%color, %status, "classified position");
    status
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod status_tests;
