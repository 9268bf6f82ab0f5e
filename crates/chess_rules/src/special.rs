//! En passant, castling and promotion.

use serde::{Deserialize, Serialize};

use crate::attacks::is_square_attacked;
use crate::board::Board;
use crate::error::CastlingError;
use crate::game::GameState;
use crate::types::*;

// =============================================================================
// En passant
// =============================================================================

/// Whether the pawn on `from` may capture en passant by moving to `to`.
///
/// Only valid on the ply right after the enemy pawn's two-square advance,
/// which is why the previous move is the only history consulted.
pub fn is_en_passant(board: &Board, last_move: Option<&Move>, from: Square, to: Square) -> bool {
    let Some(pawn) = board.piece_at(from) else {
        return false;
    };
    let Some(last) = last_move else {
        return false;
    };
    if pawn.kind != PieceKind::Pawn
        || last.piece.color == pawn.color
        || !last.is_two_square_pawn_advance()
    {
        return false;
    }

    let (d_row, _) = from.delta(to);
    last.to.row() == from.row()
        && last.to.col().abs_diff(from.col()) == 1
        && d_row == pawn.color.forward()
        && to.col() == last.to.col()
        && board.piece_at(last.to) == Some(last.piece)
        && board.is_empty(to)
}

// =============================================================================
// Castling
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// King destinations: column 6 castles kingside, column 2 queenside.
    pub fn from_king_destination(col: u8) -> Option<CastleSide> {
        match col {
            6 => Some(CastleSide::Kingside),
            2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }

    pub fn rook_from_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    pub fn rook_to_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }
}

pub const KING_HOME_COL: u8 = 4;

/// Rook squares of a validated castling move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Castle {
    pub rook_from: Square,
    pub rook_to: Square,
}

/// Which corner rooks have left their square, or been captured on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RookHistory {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl RookHistory {
    pub fn has_moved(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => self.wk,
            (Color::White, CastleSide::Queenside) => self.wq,
            (Color::Black, CastleSide::Kingside) => self.bk,
            (Color::Black, CastleSide::Queenside) => self.bq,
        }
    }

    /// Record that something moved from or onto `sq`. Only corners matter.
    pub fn touch(&mut self, sq: Square) {
        match (sq.row(), sq.col()) {
            (7, 7) => self.wk = true,
            (7, 0) => self.wq = true,
            (0, 7) => self.bk = true,
            (0, 0) => self.bq = true,
            _ => {}
        }
    }

    /// Derive the flags from a board: a corner without its own rook counts as moved.
    pub fn from_board(board: &Board) -> Self {
        let moved = |color: Color, side: CastleSide| {
            let corner = Square::new(color.home_row(), side.rook_from_col());
            corner.and_then(|sq| board.piece_at(sq)) != Some(Piece::new(color, PieceKind::Rook))
        };
        RookHistory {
            wk: moved(Color::White, CastleSide::Kingside),
            wq: moved(Color::White, CastleSide::Queenside),
            bk: moved(Color::Black, CastleSide::Kingside),
            bq: moved(Color::Black, CastleSide::Queenside),
        }
    }
}

fn home_square(color: Color, col: u8) -> Square {
    match Square::new(color.home_row(), col) {
        Some(sq) => sq,
        None => unreachable!("home row and castling columns are on the board"),
    }
}

/// Whether a king move from `from` to `to` is shaped like castling: the king
/// on its home square moving two columns along the home row.
pub fn is_castling_attempt(king: Piece, from: Square, to: Square) -> bool {
    king.kind == PieceKind::King
        && from == home_square(king.color, KING_HOME_COL)
        && to.row() == from.row()
        && to.col().abs_diff(from.col()) == 2
}

/// Check every castling precondition for the king on `from` going to `to`.
pub fn validate_castle(state: &GameState, from: Square, to: Square) -> Result<Castle, CastlingError> {
    let board = state.board();
    let color = match board.piece_at(from) {
        Some(pc) if pc.kind == PieceKind::King => pc.color,
        _ => return Err(CastlingError::NotACastlingMove),
    };
    let enemy = color.other();

    if state.has_king_moved(color) {
        return Err(CastlingError::KingHasMoved);
    }

    let side = if from == home_square(color, KING_HOME_COL) && to.row() == from.row() {
        CastleSide::from_king_destination(to.col())
    } else {
        None
    };
    let side = side.ok_or(CastlingError::NotACastlingMove)?;
    let rook_from = home_square(color, side.rook_from_col());
    let rook_to = home_square(color, side.rook_to_col());

    if is_square_attacked(board, from, enemy) {
        return Err(CastlingError::KingInCheck);
    }

    let (lo, hi) = (
        from.col().min(rook_from.col()),
        from.col().max(rook_from.col()),
    );
    for col in lo + 1..hi {
        let sq = home_square(color, col);
        if !board.is_empty(sq) {
            return Err(CastlingError::PathBlocked(sq));
        }
    }

    let (lo, hi) = (from.col().min(to.col()), from.col().max(to.col()));
    for col in lo..=hi {
        let sq = home_square(color, col);
        if is_square_attacked(board, sq, enemy) {
            return Err(CastlingError::SquareAttacked(sq));
        }
    }

    if board.piece_at(rook_from) != Some(Piece::new(color, PieceKind::Rook)) {
        return Err(CastlingError::NoRook(rook_from));
    }
    if state.config().track_rook_moves && state.rook_history().has_moved(color, side) {
        return Err(CastlingError::RookHasMoved);
    }

    Ok(Castle {
        rook_from,
        rook_to,
    })
}

// =============================================================================
// Promotion
// =============================================================================

/// A pawn arriving on the farthest row must be promoted.
pub fn is_promotion_trigger(piece: Piece, to: Square) -> bool {
    piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row()
}

#[cfg(test)]
#[path = "special_tests.rs"]
mod special_tests;
