use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::*;

/// An 8x8 snapshot of piece placement.
///
/// `Board` is `Copy`: every edit produces a new value, so a board stored in a
/// game's history can never be changed through another handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Standard starting layout: Black on rows 0-1, White on rows 6-7.
    pub fn standard() -> Self {
        let mut b = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            b.cells[0][col] = Some(Piece::new(Color::Black, kind));
            b.cells[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            b.cells[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            b.cells[7][col] = Some(Piece::new(Color::White, kind));
        }
        b
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.row() as usize][sq.col() as usize] = piece;
    }

    /// Copy of this board with `sq` holding `piece`.
    pub fn with_piece(mut self, sq: Square, piece: Option<Piece>) -> Board {
        self.set(sq, piece);
        self
    }

    /// Copy of this board with whatever stands on `from` moved to `to`,
    /// replacing anything there. No special-move handling.
    pub fn relocate(&self, from: Square, to: Square) -> Board {
        let mut next = *self;
        let piece = next.piece_at(from);
        next.set(from, None);
        next.set(to, piece);
        next
    }

    /// Board after `mv`, including the en passant removal, the castling rook
    /// hop and the promoted piece. `self` is left untouched.
    pub fn with_move(&self, mv: &Move) -> Board {
        let mut next = *self;
        if let Some(cap) = mv.capture_square() {
            next.set(cap, None);
        }
        next.set(mv.from, None);
        let placed = match mv.kind {
            MoveKind::Promotion { to } => Piece::new(mv.piece.color, to),
            _ => mv.piece,
        };
        next.set(mv.to, Some(placed));
        if let MoveKind::Castle { rook_from, rook_to } = mv.kind {
            let rook = next.piece_at(rook_from);
            next.set(rook_from, None);
            next.set(rook_to, rook);
        }
        next
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|pc| (sq, pc)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, pc)| pc.color == color)
    }

    pub fn king_squares(&self, color: Color) -> Vec<Square> {
        self.pieces_of(color)
            .filter(|(_, pc)| pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
            .collect()
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, pc)| pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// True if every square strictly between `from` and `to` is empty.
    ///
    /// The two squares must share a row, a column or a diagonal.
    pub fn path_is_clear(&self, from: Square, to: Square) -> bool {
        let (d_row, d_col) = from.delta(to);
        debug_assert!(d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs());
        let (step_r, step_c) = (d_row.signum(), d_col.signum());
        let mut cur = from.offset(step_r, step_c);
        while let Some(sq) = cur {
            if sq == to {
                return true;
            }
            if !self.is_empty(sq) {
                return false;
            }
            cur = sq.offset(step_r, step_c);
        }
        true
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                let c = Square::new(row, col)
                    .and_then(|sq| self.piece_at(sq))
                    .map(Piece::letter)
                    .unwrap_or('.');
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
