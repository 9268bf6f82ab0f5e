//! Command interpreter for one terminal game.

use tracing::{debug, info};

use chess_rules::{
    GameState, MoveOutcome, PendingPromotion, PieceKind, Square, legal_destinations,
};

use crate::config::PlayConfig;
use crate::render::{render_board, status_line};

pub const HELP: &str = "\
commands:
  e2 e4 | e2e4   move a piece
  select e2      show where the piece on e2 can go
  back           view the previous position
  forward        view the next position
  status         show the current position
  new            start a new game
  help           show this text
  quit           leave";

const PROMOTION_PROMPT: &str = "promote to: q (queen), r (rook), b (bishop), n (knight)";

pub struct Session {
    config: PlayConfig,
    game: GameState,
    /// Ply whose board is on screen; equals `game.ply()` unless browsing history.
    view_ply: usize,
    pending: Option<PendingPromotion>,
    finished: bool,
}

impl Session {
    pub fn new(config: PlayConfig) -> Self {
        let game = GameState::with_config(config.rules);
        Self {
            config,
            game,
            view_ply: 0,
            pending: None,
            finished: false,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn view_ply(&self) -> usize {
        self.view_ply
    }

    pub fn has_pending_promotion(&self) -> bool {
        self.pending.is_some()
    }

    /// Set once `quit` has been handled.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Current board followed by the status line.
    pub fn show(&self) -> String {
        format!(
            "{}{}",
            render_board(self.game.board(), &self.config, &[]),
            status_line(&self.game)
        )
    }

    /// Run one input line and return the text to print.
    pub fn handle(&mut self, line: &str) -> String {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            return String::new();
        }
        debug!(command = line.trim(), "handling command");

        let mut reply = String::new();
        if let Some(pending) = self.pending.take() {
            if let [choice] = parts.as_slice()
                && let Some(kind) = promotion_choice(choice)
            {
                return self.finish_promotion(pending, kind);
            }
            reply.push_str("promotion cancelled\n");
        }

        let answer = match parts.as_slice() {
            ["help"] => HELP.to_string(),
            ["quit"] | ["exit"] => {
                self.finished = true;
                "bye".to_string()
            }
            ["new"] => {
                self.game = GameState::with_config(self.config.rules);
                self.view_ply = 0;
                info!("new game");
                self.show()
            }
            ["status"] => {
                self.view_ply = self.game.ply();
                self.show()
            }
            ["back"] => self.step_view(-1),
            ["forward"] => self.step_view(1),
            ["select", square] => self.select(square),
            [from, to] => self.move_text(from, to),
            [both] if both.len() == 4 && both.is_char_boundary(2) => {
                self.move_text(&both[..2], &both[2..])
            }
            _ => format!("unknown command: {}, type 'help'", line.trim()),
        };
        reply.push_str(&answer);
        reply
    }

    fn step_view(&mut self, delta: isize) -> String {
        let Some(ply) = self.view_ply.checked_add_signed(delta) else {
            return "already at the start of the game".to_string();
        };
        match self.game.history_at(ply) {
            Ok(board) => {
                self.view_ply = ply;
                let mut out = render_board(board, &self.config, &[]);
                if ply == self.game.ply() {
                    out.push_str(&status_line(&self.game));
                } else {
                    out.push_str(&format!("viewing ply {ply} of {}", self.game.ply()));
                }
                out
            }
            Err(_) => "already at the current position".to_string(),
        }
    }

    fn select(&self, square: &str) -> String {
        if let Some(msg) = self.browsing_history() {
            return msg;
        }
        let from: Square = match square.parse() {
            Ok(sq) => sq,
            Err(e) => return format!("error: {e}"),
        };
        let mut targets = legal_destinations(&self.game, from);
        targets.sort_by_key(|sq| (sq.col(), sq.row()));
        if targets.is_empty() {
            return format!("no legal moves from {from}");
        }
        let list: Vec<String> = targets.iter().map(Square::to_string).collect();
        format!(
            "{}{from}: {}",
            render_board(self.game.board(), &self.config, &targets),
            list.join(" ")
        )
    }

    fn move_text(&mut self, from: &str, to: &str) -> String {
        let (from, to) = match (from.parse::<Square>(), to.parse::<Square>()) {
            (Ok(from), Ok(to)) => (from, to),
            (Err(e), _) | (_, Err(e)) => return format!("error: {e}"),
        };
        if let Some(msg) = self.browsing_history() {
            return msg;
        }

        match self.game.try_move(from, to) {
            Ok(MoveOutcome::Played { state, mv }) => {
                self.advance(state);
                format!("{mv}\n{}", self.show())
            }
            Ok(MoveOutcome::PromotionPending(pending)) => {
                self.pending = Some(pending);
                PROMOTION_PROMPT.to_string()
            }
            Err(e) => format!("error: {e}"),
        }
    }

    fn finish_promotion(&mut self, pending: PendingPromotion, kind: PieceKind) -> String {
        match pending.resolve(kind) {
            Ok(state) => {
                self.advance(state);
                let played = self
                    .game
                    .last_move()
                    .map(ToString::to_string)
                    .unwrap_or_default();
                format!("{played}\n{}", self.show())
            }
            Err(e) => format!("error: {e}"),
        }
    }

    fn advance(&mut self, state: GameState) {
        self.game = state;
        self.view_ply = self.game.ply();
    }

    fn browsing_history(&self) -> Option<String> {
        (self.view_ply != self.game.ply()).then(|| {
            format!(
                "viewing ply {} of {}, use 'forward' or 'status' to return to the game",
                self.view_ply,
                self.game.ply()
            )
        })
    }
}

fn promotion_choice(text: &str) -> Option<PieceKind> {
    match text.to_ascii_lowercase().as_str() {
        "q" | "queen" => Some(PieceKind::Queen),
        "r" | "rook" => Some(PieceKind::Rook),
        "b" | "bishop" => Some(PieceKind::Bishop),
        "n" | "knight" => Some(PieceKind::Knight),
        _ => None,
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
