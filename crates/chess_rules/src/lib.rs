//! Chess rule engine.
//!
//! Decides whether a requested move is legal, plays it, and classifies the
//! resulting position (ongoing, check, checkmate, stalemate), including en
//! passant, castling and promotion. Rendering and input handling live
//! outside this crate; they talk to it through [`GameState`].
//!
//! ```
//! use chess_rules::{GameState, GameStatus, MoveOutcome, Square};
//!
//! let sq = |s: &str| s.parse::<Square>().unwrap();
//! let game = GameState::new_game();
//! let MoveOutcome::Played { state, .. } = game.try_move(sq("e2"), sq("e4")).unwrap() else {
//!     unreachable!("a pawn push from e2 is not a promotion");
//! };
//! assert_eq!(state.status(), GameStatus::Ongoing);
//! assert_eq!(state.history().len(), 2);
//! ```

pub mod attacks;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod legality;
pub mod movegen;
pub mod movement;
pub mod perft;
pub mod special;
pub mod status;
pub mod types;

#[cfg(test)]
mod test_support;

pub use attacks::{attackers_of, is_in_check, is_square_attacked};
pub use board::Board;
pub use config::RulesConfig;
pub use error::{CastlingError, IllegalMove, MoveError, ParseSquareError, SetupError};
pub use game::{GameState, MoveOutcome, PendingPromotion, resolve_promotion};
pub use legality::{does_move_expose_king, is_legal_move, legal_move};
pub use movegen::{has_legal_move, legal_destinations, legal_moves};
pub use movement::is_geometrically_legal;
pub use perft::perft;
pub use special::{CastleSide, RookHistory, is_en_passant, is_promotion_trigger, validate_castle};
pub use status::{GameStatus, classify};
pub use types::*;
