//! Terminal front end for `chess_rules`.
//!
//! The session reads one command per line and answers with text. It keeps
//! no rules of its own: every move goes through [`chess_rules::GameState`].

pub mod config;
pub mod render;
pub mod session;

pub use config::{ConfigError, PlayConfig};
pub use session::Session;
