//! Play chess in the terminal, one command per line.
//!
//! ```bash
//! cargo run -p chess_play -- --config chess_play.toml
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use chess_play::{PlayConfig, Session};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("chess_play [--config <file.toml>]");
    println!();
    println!("Reads commands from stdin; type 'help' once started.");
}

fn main() -> ExitCode {
    let mut config_path: Option<PathBuf> = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => match args.next() {
                Some(path) => config_path = Some(PathBuf::from(path)),
                None => {
                    eprintln!("Error: --config needs a file path");
                    return ExitCode::FAILURE;
                }
            },
            "--help" | "-h" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                return ExitCode::FAILURE;
            }
        }
    }

    let config = match &config_path {
        Some(path) => match PlayConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => PlayConfig::default(),
    };

    // Logs go to stderr so the board on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(io::stderr)
        .init();
    tracing::info!(
        config = ?config_path,
        track_rook_moves = config.rules.track_rook_moves,
        "chess_play v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let mut session = Session::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", session.show()).ok();
    stdout.flush().ok();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let reply = session.handle(&line);
        if !reply.is_empty() {
            writeln!(stdout, "{reply}").ok();
            stdout.flush().ok();
        }
        if session.is_finished() {
            break;
        }
    }
    ExitCode::SUCCESS
}
