//! Full legality: movement rules, special moves and king safety combined.
//!
//! Everything here is evaluative. Boards are `Copy`, so the king-safety
//! simulation works on a scratch value and the caller's state is never touched.

use crate::attacks::is_in_check;
use crate::board::Board;
use crate::error::IllegalMove;
use crate::game::GameState;
use crate::movement::is_geometrically_legal;
use crate::special::{is_castling_attempt, is_en_passant, is_promotion_trigger, validate_castle};
use crate::types::*;

/// Build the move `from -> to` if it is legal for the side to move.
///
/// A pawn reaching the last row comes back as a queen promotion; the caller
/// substitutes the piece actually chosen.
pub fn legal_move(state: &GameState, from: Square, to: Square) -> Result<Move, IllegalMove> {
    let board = state.board();
    let piece = board.piece_at(from).ok_or(IllegalMove::EmptySource)?;
    if piece.color != state.side_to_move() {
        return Err(IllegalMove::WrongSide);
    }
    if from == to {
        return Err(IllegalMove::SameSquare);
    }
    let target = board.piece_at(to);
    if target.is_some_and(|pc| pc.color == piece.color) {
        return Err(IllegalMove::OwnPieceAtDestination);
    }

    let kind = if is_castling_attempt(piece, from, to) {
        let castle = validate_castle(state, from, to).map_err(IllegalMove::Castling)?;
        MoveKind::Castle {
            rook_from: castle.rook_from,
            rook_to: castle.rook_to,
        }
    } else if piece.kind == PieceKind::Pawn && is_en_passant(board, state.last_move(), from, to) {
        MoveKind::EnPassant
    } else if is_geometrically_legal(board, from, to) {
        if is_promotion_trigger(piece, to) {
            MoveKind::Promotion {
                to: PieceKind::Queen,
            }
        } else {
            MoveKind::Normal
        }
    } else {
        return Err(IllegalMove::PieceCannotMove(piece.kind));
    };

    let captured = match kind {
        MoveKind::EnPassant => Square::new(from.row(), to.col()).and_then(|sq| board.piece_at(sq)),
        _ => target,
    };
    let mv = Move {
        from,
        to,
        piece,
        captured,
        kind,
    };

    if does_move_expose_king(board, &mv, state.king_square(piece.color)) {
        return Err(IllegalMove::KingLeftInCheck);
    }
    Ok(mv)
}

pub fn is_legal_move(state: &GameState, from: Square, to: Square) -> bool {
    legal_move(state, from, to).is_ok()
}

/// Play `mv` on a scratch copy and test the mover's king.
///
/// `king_sq` is where the mover's king stands before the move; a king move
/// uses its destination instead.
pub fn does_move_expose_king(board: &Board, mv: &Move, king_sq: Square) -> bool {
    let scratch = board.with_move(mv);
    let king_sq = if mv.piece.kind == PieceKind::King {
        mv.to
    } else {
        king_sq
    };
    is_in_check(&scratch, king_sq)
}

#[cfg(test)]
#[path = "legality_tests.rs"]
mod legality_tests;
