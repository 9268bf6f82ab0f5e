//! Per-piece movement rules.
//!
//! Each predicate answers whether a piece, moving by its own rules, can go
//! from `from` to `to` on the given board. Apart from the king, none of them
//! consider whether the move exposes the mover's king; that is the job of
//! [`crate::legality`]. En passant and castling are recognized in
//! [`crate::special`], not here.

use crate::attacks::is_square_attacked;
use crate::board::Board;
use crate::types::*;

/// Dispatch on the piece standing on `from`. An empty source is never legal.
pub fn is_geometrically_legal(board: &Board, from: Square, to: Square) -> bool {
    let Some(pc) = board.piece_at(from) else {
        return false;
    };
    match pc.kind {
        PieceKind::Pawn => pawn_move(board, from, to, pc.color),
        PieceKind::Knight => knight_move(board, from, to, pc.color),
        PieceKind::Bishop => bishop_move(board, from, to, pc.color),
        PieceKind::Rook => rook_move(board, from, to, pc.color),
        PieceKind::Queen => queen_move(board, from, to, pc.color),
        PieceKind::King => king_move(board, from, to, pc.color),
    }
}

fn lands_on_empty_or_enemy(board: &Board, from: Square, to: Square, color: Color) -> bool {
    from != to && board.piece_at(to).is_none_or(|pc| pc.color != color)
}

pub fn rook_move(board: &Board, from: Square, to: Square, color: Color) -> bool {
    (from.row() == to.row() || from.col() == to.col())
        && lands_on_empty_or_enemy(board, from, to, color)
        && board.path_is_clear(from, to)
}

pub fn bishop_move(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let (d_row, d_col) = from.delta(to);
    d_row.abs() == d_col.abs()
        && lands_on_empty_or_enemy(board, from, to, color)
        && board.path_is_clear(from, to)
}

pub fn queen_move(board: &Board, from: Square, to: Square, color: Color) -> bool {
    rook_move(board, from, to, color) || bishop_move(board, from, to, color)
}

pub fn knight_move(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let (d_row, d_col) = from.delta(to);
    matches!((d_row.abs(), d_col.abs()), (1, 2) | (2, 1))
        && lands_on_empty_or_enemy(board, from, to, color)
}

/// One step in any direction, never next to the enemy king and never onto an
/// attacked square. The attack test runs with the king already on `to`, so
/// stepping back along a checking line is refused.
pub fn king_move(board: &Board, from: Square, to: Square, color: Color) -> bool {
    if from.distance(to) != 1 || !lands_on_empty_or_enemy(board, from, to, color) {
        return false;
    }
    if let Some(enemy_king) = board.find_king(color.other())
        && to.distance(enemy_king) <= 1
    {
        return false;
    }
    !is_square_attacked(&board.relocate(from, to), to, color.other())
}

pub fn pawn_move(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let (d_row, d_col) = from.delta(to);
    let dir = color.forward();
    let target = board.piece_at(to);

    if d_col == 0 {
        // straight pushes never capture
        if d_row == dir {
            return target.is_none();
        }
        if d_row == 2 * dir && from.row() == color.pawn_row() {
            let over = from.offset(dir, 0);
            return target.is_none() && over.is_some_and(|sq| board.is_empty(sq));
        }
        return false;
    }

    d_row == dir && d_col.abs() == 1 && target.is_some_and(|pc| pc.color != color)
}

#[cfg(test)]
#[path = "movement_tests.rs"]
mod movement_tests;
