//! Game state and the move API.
//!
//! `GameState` is an immutable snapshot from the caller's point of view:
//! `try_move` and `apply_move` return a new state and leave the receiver
//! untouched. `apply_move` is the only place a state is built from a
//! previous one, and it recomputes every derived field in one step.

use tracing::{debug, info};

use crate::attacks::is_in_check;
use crate::board::Board;
use crate::config::RulesConfig;
use crate::error::{MoveError, SetupError};
use crate::legality::{is_legal_move, legal_move};
use crate::special::RookHistory;
use crate::status::{GameStatus, classify};
use crate::types::*;

const WHITE_KING_HOME: Square = match Square::new(7, 4) {
    Some(sq) => sq,
    None => unreachable!(),
};
const BLACK_KING_HOME: Square = match Square::new(0, 4) {
    Some(sq) => sq,
    None => unreachable!(),
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    white_king: Square,
    black_king: Square,
    has_white_king_moved: bool,
    has_black_king_moved: bool,
    rook_history: RookHistory,
    last_move: Option<Move>,
    status: GameStatus,
    /// Board after each ply; `history[0]` is the starting board.
    history: Vec<Board>,
    moves: Vec<Move>,
    config: RulesConfig,
}

/// Result of a successful `try_move`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Played { state: GameState, mv: Move },
    /// A pawn reached the last row; finish with [`PendingPromotion::resolve`].
    PromotionPending(PendingPromotion),
}

/// A validated pawn move waiting for the promotion piece.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingPromotion {
    state: GameState,
    from: Square,
    to: Square,
}

impl PendingPromotion {
    /// The unchanged state the move was requested on.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn from(&self) -> Square {
        self.from
    }

    pub fn to(&self) -> Square {
        self.to
    }

    /// Complete the move with `kind` replacing the pawn.
    pub fn resolve(self, kind: PieceKind) -> Result<GameState, MoveError> {
        if !kind.is_promotion_choice() {
            return Err(MoveError::InvalidPromotion(kind));
        }
        let state = &self.state;
        if state.status.is_terminal() {
            return Err(MoveError::GameOver(state.status));
        }
        let mv = legal_move(state, self.from, self.to).map_err(|reason| MoveError::Illegal {
            from: self.from,
            to: self.to,
            reason,
        })?;
        debug_assert!(mv.is_promotion());
        Ok(state.apply_move(Move {
            kind: MoveKind::Promotion { to: kind },
            ..mv
        }))
    }
}

/// Free-function form of [`PendingPromotion::resolve`].
pub fn resolve_promotion(pending: PendingPromotion, kind: PieceKind) -> Result<GameState, MoveError> {
    pending.resolve(kind)
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, White to move.
    pub fn new_game() -> Self {
        Self::with_config(RulesConfig::default())
    }

    pub fn with_config(config: RulesConfig) -> Self {
        let board = Board::standard();
        GameState {
            board,
            side_to_move: Color::White,
            white_king: WHITE_KING_HOME,
            black_king: BLACK_KING_HOME,
            has_white_king_moved: false,
            has_black_king_moved: false,
            rook_history: RookHistory::default(),
            last_move: None,
            status: GameStatus::Ongoing,
            history: vec![board],
            moves: Vec::new(),
            config,
        }
    }

    /// Start a game from an arbitrary board.
    ///
    /// A king off its home square counts as moved, and so does a corner
    /// rook that is not on its corner. There is no en passant right on the
    /// first ply.
    pub fn from_board(board: Board, side_to_move: Color, config: RulesConfig) -> Result<Self, SetupError> {
        let single_king = |color: Color| {
            let kings = board.king_squares(color);
            match kings.as_slice() {
                [sq] => Ok(*sq),
                _ => Err(SetupError::KingCount {
                    color,
                    count: kings.len(),
                }),
            }
        };
        let white_king = single_king(Color::White)?;
        let black_king = single_king(Color::Black)?;
        if white_king.distance(black_king) <= 1 {
            return Err(SetupError::AdjacentKings(white_king, black_king));
        }

        let waiting = side_to_move.other();
        let waiting_king = match waiting {
            Color::White => white_king,
            Color::Black => black_king,
        };
        if is_in_check(&board, waiting_king) {
            return Err(SetupError::SideNotToMoveInCheck(waiting));
        }

        let mut state = GameState {
            board,
            side_to_move,
            white_king,
            black_king,
            has_white_king_moved: white_king != WHITE_KING_HOME,
            has_black_king_moved: black_king != BLACK_KING_HOME,
            rook_history: RookHistory::from_board(&board),
            last_move: None,
            status: GameStatus::Ongoing,
            history: vec![board],
            moves: Vec::new(),
            config,
        };
        state.status = classify(&state, side_to_move);
        Ok(state)
    }

    // -----------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    pub fn white_king_square(&self) -> Square {
        self.white_king
    }

    pub fn black_king_square(&self) -> Square {
        self.black_king
    }

    pub fn has_king_moved(&self, color: Color) -> bool {
        match color {
            Color::White => self.has_white_king_moved,
            Color::Black => self.has_black_king_moved,
        }
    }

    pub fn has_white_king_moved(&self) -> bool {
        self.has_white_king_moved
    }

    pub fn has_black_king_moved(&self) -> bool {
        self.has_black_king_moved
    }

    pub fn rook_history(&self) -> &RookHistory {
        &self.rook_history
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.last_move.as_ref()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Every board of the game so far, the current one last.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Executed moves; `history()[i + 1]` is the board after `moves()[i]`.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Number of plies played.
    pub fn ply(&self) -> usize {
        self.moves.len()
    }

    /// Board after `ply` plies; ply 0 is the starting board.
    pub fn history_at(&self, ply: usize) -> Result<&Board, MoveError> {
        self.history.get(ply).ok_or(MoveError::PlyOutOfRange {
            ply,
            len: self.history.len(),
        })
    }

    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        is_legal_move(self, from, to)
    }

    /// The same position with `color` to move and no en passant context.
    pub(crate) fn viewed_as(&self, color: Color) -> GameState {
        GameState {
            side_to_move: color,
            last_move: None,
            ..self.clone()
        }
    }

    // -----------------------------------------------------------------
    // Moves
    // -----------------------------------------------------------------

    /// Validate and play `from -> to`.
    ///
    /// Nothing changes on error. A promoting pawn move is not played yet:
    /// it comes back as [`MoveOutcome::PromotionPending`].
    pub fn try_move(&self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        if self.status.is_terminal() {
            debug!(%from, %to, status = %self.status, "move after game end rejected");
            return Err(MoveError::GameOver(self.status));
        }

        let mv = legal_move(self, from, to).map_err(|reason| {
            debug!(%from, %to, %reason, "illegal move rejected");
            MoveError::Illegal { from, to, reason }
        })?;

        if mv.is_promotion() {
            debug!(%from, %to, "promotion pending");
            return Ok(MoveOutcome::PromotionPending(PendingPromotion {
                state: self.clone(),
                from,
                to,
            }));
        }

        let state = self.apply_move(mv);
        Ok(MoveOutcome::Played { state, mv })
    }

    /// Play an already validated move and return the resulting state.
    ///
    /// # Panics
    /// If the resulting board does not hold exactly one king per side on the
    /// cached squares. That only happens when `mv` was not legal.
    pub fn apply_move(&self, mv: Move) -> GameState {
        let mover = mv.piece.color;
        let board = self.board.with_move(&mv);

        let mut next = self.clone();
        next.board = board;

        if mv.piece.kind == PieceKind::King {
            match mover {
                Color::White => {
                    next.white_king = mv.to;
                    next.has_white_king_moved = true;
                }
                Color::Black => {
                    next.black_king = mv.to;
                    next.has_black_king_moved = true;
                }
            }
        }
        next.rook_history.touch(mv.from);
        next.rook_history.touch(mv.to);
        if let MoveKind::Castle { rook_from, .. } = mv.kind {
            next.rook_history.touch(rook_from);
        }

        next.history.push(board);
        next.moves.push(mv);
        next.last_move = Some(mv);
        next.side_to_move = mover.other();
        next.assert_kings_cached();

        next.status = classify(&next, next.side_to_move);
        debug!(ply = next.ply(), mv = %mv, status = %next.status, "move played");
        if next.status.is_terminal() {
            info!(status = %next.status, plies = next.ply(), "game over");
        }
        next
    }

    fn assert_kings_cached(&self) {
        for color in [Color::White, Color::Black] {
            let found = self.board.king_squares(color);
            assert!(
                found == [self.king_square(color)],
                "{color} king cached on {} but board has kings on {found:?}",
                self.king_square(color),
            );
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
