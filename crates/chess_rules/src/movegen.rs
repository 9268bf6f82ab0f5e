use crate::board::Board;
use crate::game::GameState;
use crate::legality::legal_move;
use crate::special::KING_HOME_COL;
use crate::types::*;

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Every square the piece on `from` could conceivably reach, before any
/// legality test. Rays stop at the first occupied square.
pub fn candidate_destinations(board: &Board, from: Square, piece: Piece) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => {
            let dir = piece.color.forward();
            for (d_row, d_col) in [(dir, 0), (2 * dir, 0), (dir, -1), (dir, 1)] {
                out.extend(from.offset(d_row, d_col));
            }
        }
        PieceKind::Knight => steps(from, &KNIGHT_DELTAS, &mut out),
        PieceKind::Bishop => rays(board, from, &DIAGONALS, &mut out),
        PieceKind::Rook => rays(board, from, &ORTHOGONALS, &mut out),
        PieceKind::Queen => {
            rays(board, from, &DIAGONALS, &mut out);
            rays(board, from, &ORTHOGONALS, &mut out);
        }
        PieceKind::King => {
            steps(from, &KING_DELTAS, &mut out);
            if from.row() == piece.color.home_row() && from.col() == KING_HOME_COL {
                out.extend(from.offset(0, 2));
                out.extend(from.offset(0, -2));
            }
        }
    }
    out
}

fn steps(from: Square, deltas: &[(i8, i8)], out: &mut Vec<Square>) {
    out.extend(deltas.iter().filter_map(|&(dr, dc)| from.offset(dr, dc)));
}

fn rays(board: &Board, from: Square, dirs: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(sq) = cur {
            out.push(sq);
            if !board.is_empty(sq) {
                break;
            }
            cur = sq.offset(dr, dc);
        }
    }
}

/// All legal moves for the side to move. Promotions appear once per choice.
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    let board = state.board();
    let mut out = Vec::with_capacity(64);
    for (from, pc) in board.pieces_of(state.side_to_move()) {
        for to in candidate_destinations(board, from, pc) {
            let Ok(mv) = legal_move(state, from, to) else {
                continue;
            };
            if mv.is_promotion() {
                out.extend(PROMOTION_CHOICES.iter().map(|&kind| Move {
                    kind: MoveKind::Promotion { to: kind },
                    ..mv
                }));
            } else {
                out.push(mv);
            }
        }
    }
    out
}

/// Legal destinations of the piece on `from`, for selection highlighting.
/// Empty if that piece does not belong to the side to move.
pub fn legal_destinations(state: &GameState, from: Square) -> Vec<Square> {
    let board = state.board();
    match board.piece_at(from) {
        Some(pc) if pc.color == state.side_to_move() => candidate_destinations(board, from, pc)
            .into_iter()
            .filter(|&to| legal_move(state, from, to).is_ok())
            .collect(),
        _ => Vec::new(),
    }
}

/// Short-circuits on the first legal move found.
pub fn has_legal_move(state: &GameState) -> bool {
    let board = state.board();
    board.pieces_of(state.side_to_move()).any(|(from, pc)| {
        candidate_destinations(board, from, pc)
            .into_iter()
            .any(|to| legal_move(state, from, to).is_ok())
    })
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
