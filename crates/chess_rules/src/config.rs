use serde::{Deserialize, Serialize};

/// Rule switches fixed for the lifetime of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Castling also requires that the rook never left its corner.
    /// When false only the king's movement gates castling.
    pub track_rook_moves: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            track_rook_moves: true,
        }
    }
}

impl RulesConfig {
    /// Castling rights decided by the king alone.
    pub fn king_moved_only() -> Self {
        Self {
            track_rook_moves: false,
        }
    }
}
