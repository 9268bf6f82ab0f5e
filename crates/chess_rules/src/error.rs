//! Error types returned by the rule engine.
//!
//! `MoveError` is the single error type of the public move API. Broken
//! internal invariants (for example a cached king square that no longer holds
//! a king) are not represented here: they panic, because no caller can
//! recover from a corrupted game state.

use crate::status::GameStatus;
use crate::types::{Color, PieceKind, Square};

/// Errors returned by `try_move`, `resolve_promotion` and `history_at`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("illegal move {from}{to}: {reason}")]
    Illegal {
        from: Square,
        to: Square,
        reason: IllegalMove,
    },

    #[error("game is already over: {0}")]
    GameOver(GameStatus),

    #[error("cannot promote to {0}")]
    InvalidPromotion(PieceKind),

    #[error("ply {ply} is out of range, history holds {len} positions")]
    PlyOutOfRange { ply: usize, len: usize },
}

/// Why a requested move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("no piece on the source square")]
    EmptySource,

    #[error("the piece belongs to the side not on move")]
    WrongSide,

    #[error("source and destination are the same square")]
    SameSquare,

    #[error("destination holds a piece of the same colour")]
    OwnPieceAtDestination,

    #[error("a {0} cannot move that way")]
    PieceCannotMove(PieceKind),

    #[error("castling not allowed: {0}")]
    Castling(CastlingError),

    #[error("the move leaves the king in check")]
    KingLeftInCheck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CastlingError {
    #[error("the king has already moved")]
    KingHasMoved,

    #[error("the rook has already moved")]
    RookHasMoved,

    #[error("not a castling destination")]
    NotACastlingMove,

    #[error("the king is in check")]
    KingInCheck,

    #[error("{0} is occupied")]
    PathBlocked(Square),

    #[error("the king would pass through or land on attacked square {0}")]
    SquareAttacked(Square),

    #[error("no rook on {0}")]
    NoRook(Square),
}

/// Errors from building a game out of an arbitrary board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("expected exactly one {color} king, found {count}")]
    KingCount { color: Color, count: usize },

    #[error("kings on {0} and {1} stand next to each other")]
    AdjacentKings(Square, Square),

    #[error("the {0} king is in check but it is not their move")]
    SideNotToMoveInCheck(Color),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid square: {0:?}")]
pub struct ParseSquareError(pub String);

