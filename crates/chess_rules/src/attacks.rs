//! Attack detection.
//!
//! A plain scan over the board: for each piece of the attacking side, test
//! whether its attack pattern reaches the target. At 64 squares this needs no
//! tables.

use crate::board::Board;
use crate::types::*;

/// Whether the piece on `from` attacks `target`.
///
/// Pawns attack both forward diagonals and kings the eight neighbours,
/// whether or not those squares are occupied. Sliders need a clear path.
pub fn attacks_square(board: &Board, from: Square, target: Square) -> bool {
    let Some(pc) = board.piece_at(from) else {
        return false;
    };
    if from == target {
        return false;
    }
    let (d_row, d_col) = from.delta(target);
    let straight = d_row == 0 || d_col == 0;
    let diagonal = d_row.abs() == d_col.abs();
    match pc.kind {
        PieceKind::Pawn => d_row == pc.color.forward() && d_col.abs() == 1,
        PieceKind::Knight => matches!((d_row.abs(), d_col.abs()), (1, 2) | (2, 1)),
        PieceKind::Bishop => diagonal && board.path_is_clear(from, target),
        PieceKind::Rook => straight && board.path_is_clear(from, target),
        PieceKind::Queen => (straight || diagonal) && board.path_is_clear(from, target),
        PieceKind::King => from.distance(target) == 1,
    }
}

pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    board
        .pieces_of(by)
        .any(|(sq, _)| attacks_square(board, sq, target))
}

/// Squares holding pieces of `by` that attack `target`.
pub fn attackers_of(board: &Board, target: Square, by: Color) -> Vec<Square> {
    board
        .pieces_of(by)
        .filter(|&(sq, _)| attacks_square(board, sq, target))
        .map(|(sq, _)| sq)
        .collect()
}

/// Whether the king standing on `king_sq` is attacked by the other side.
///
/// # Panics
/// If `king_sq` does not hold a king. Callers pass cached king squares, so
/// a miss means the game state is corrupt.
pub fn is_in_check(board: &Board, king_sq: Square) -> bool {
    match board.piece_at(king_sq) {
        Some(pc) if pc.kind == PieceKind::King => {
            is_square_attacked(board, king_sq, pc.color.other())
        }
        other => panic!("no king on {king_sq} (found {other:?})"),
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
