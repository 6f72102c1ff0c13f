//! Checkers CLI: a thin record keeper around the rules engine.
//!
//! The CLI stores one game per JSON state file and hands the stored board and
//! turn back to the engine for every move. It owns no rules of its own:
//!
//! - **`new`**: write a fresh game to the state file.
//! - **`play`**: apply one move and print the result as JSON.
//! - **`show`**: print the board with coordinates.
//! - **`moves`**: list the legal moves for the side to move.
//!
//! A rejected move exits with status 2 and leaves the state file untouched. A
//! state file that no longer parses is reported as corruption with status 1.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use checkers::{play_move, GameRecord, Player, Pos, RecordError};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod render;
mod store;

use store::StateFile;

/// Top-level CLI arguments.
#[derive(Parser)]
#[command(name = "checkers-cli", about = "Play checkers against a stored game file")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new game, black to move.
    New {
        /// Path to the game state file.
        #[arg(short, long)]
        state: PathBuf,
        /// Replace an existing game.
        #[arg(short, long)]
        force: bool,
    },
    /// Play one move.
    #[command(allow_negative_numbers = true)]
    Play {
        #[arg(short, long)]
        state: PathBuf,
        /// Player making the move (`b`/`black` or `r`/`red`).
        #[arg(short, long, value_parser = parse_player)]
        player: Player,
        from_x: i32,
        from_y: i32,
        to_x: i32,
        to_y: i32,
    },
    /// Print the board.
    Show {
        #[arg(short, long)]
        state: PathBuf,
    },
    /// List legal moves for the side to move.
    Moves {
        #[arg(short, long)]
        state: PathBuf,
    },
}

fn parse_player(s: &str) -> Result<Player, String> {
    match s.to_ascii_lowercase().as_str() {
        "b" | "black" => Ok(Player::Black),
        "r" | "red" => Ok(Player::Red),
        other => Err(format!("unknown player: {other}")),
    }
}

/// Set up logging to stderr, or to a daily rolling file when a log directory
/// is configured. The returned guard must live until exit.
fn init_tracing() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    match config::get_log_dir() {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, config::LOG_FILE_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false)
                        .with_target(true)
                        .with_line_number(true),
                )
                .with(filter)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(filter)
                .init();
            None
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let rules = config::get_ruleset();
    tracing::debug!("Using ruleset {:?}", rules);

    match cli.command {
        Commands::New { state, force } => {
            let store = StateFile::new(state);
            store.create(&GameRecord::new_game(), force)?;
            tracing::info!("Created new game at {:?}", store.path());
            println!("{}", serde_json::to_string(&store.load()?)?);
        }
        Commands::Play {
            state,
            player,
            from_x,
            from_y,
            to_x,
            to_y,
        } => {
            let store = StateFile::new(state);
            let record = store.load()?;
            let (next, response) = play_move(
                &record,
                player,
                Pos::new(from_x, from_y),
                Pos::new(to_x, to_y),
                rules,
            )
            .with_context(|| format!("game at {}", store.path().display()))?;
            store.save(&next)?;
            println!("{}", serde_json::to_string(&response)?);
        }
        Commands::Show { state } => {
            let store = StateFile::new(state);
            let game = store
                .load()?
                .parse(rules)
                .with_context(|| format!("game at {}", store.path().display()))?;
            print!("{}", render::render_game(&game));
        }
        Commands::Moves { state } => {
            let store = StateFile::new(state);
            let game = store
                .load()?
                .parse(rules)
                .with_context(|| format!("game at {}", store.path().display()))?;
            println!("{}", serde_json::to_string(&game.legal_moves())?);
        }
    }

    Ok(())
}

/// Rejected moves get their own exit status so scripts can tell them apart
/// from corrupt state and I/O failures.
fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<RecordError>() {
        Some(RecordError::Rejected(_)) => 2,
        _ => 1,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = init_tracing();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(RecordError::Corrupt(parse)) = e.downcast_ref::<RecordError>() {
                tracing::error!("Stored game is corrupt: {}", parse);
            }
            eprintln!("error: {:#}", e);
            ExitCode::from(exit_status(&e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers::{MoveError, ParseError};
    use clap::CommandFactory;
    use tempfile::TempDir;

    fn run_args(args: &[&str]) -> anyhow::Result<()> {
        let mut argv = vec!["checkers-cli"];
        argv.extend_from_slice(args);
        run(Cli::try_parse_from(argv)?)
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_player() {
        assert_eq!(parse_player("b"), Ok(Player::Black));
        assert_eq!(parse_player("RED"), Ok(Player::Red));
        assert!(parse_player("green").is_err());
    }

    #[test]
    fn test_new_then_play() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("game.json");
        let state = path.to_str().unwrap();

        run_args(&["new", "--state", state]).unwrap();
        run_args(&["play", "--state", state, "--player", "b", "1", "2", "2", "3"]).unwrap();

        let record = StateFile::new(&path).load().unwrap();
        assert_eq!(record.turn, "r");
        assert_eq!(
            record.board,
            "*b*b*b*b|b*b*b*b*|***b*b*b|**b*****|********|r*r*r*r*|*r*r*r*r|r*r*r*r*"
        );
    }

    #[test]
    fn test_rejected_move_keeps_state() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("game.json");
        let state = path.to_str().unwrap();
        run_args(&["new", "--state", state]).unwrap();
        let before = StateFile::new(&path).load().unwrap();

        let err = run_args(&["play", "-s", state, "-p", "red", "0", "5", "1", "4"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RecordError>(),
            Some(RecordError::Rejected(MoveError::NotPlayerTurn { .. }))
        ));
        assert_eq!(exit_status(&err), 2);

        let err = run_args(&["play", "-s", state, "-p", "b", "1", "2", "2", "55"]).unwrap_err();
        assert!(format!("{:#}", err).contains("wrong move"));
        assert_eq!(StateFile::new(&path).load().unwrap(), before);
    }

    #[test]
    fn test_negative_coordinates_are_wrong_moves() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("game.json");
        let state = path.to_str().unwrap();
        run_args(&["new", "--state", state]).unwrap();

        let err = run_args(&["play", "-s", state, "-p", "b", "1", "2", "-1", "3"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RecordError>(),
            Some(RecordError::Rejected(MoveError::WrongMove { .. }))
        ));
    }

    #[test]
    fn test_corrupt_state_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("game.json");
        let mut record = GameRecord::new_game();
        record.board = "invalid game".to_string();
        StateFile::new(&path).save(&record).unwrap();

        let err = run_args(&["show", "--state", path.to_str().unwrap()]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<RecordError>(),
            Some(&RecordError::Corrupt(ParseError::Malformed(
                "invalid game".to_string()
            )))
        );
        assert_eq!(exit_status(&err), 1);
    }

    #[test]
    fn test_new_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("game.json");
        let state = path.to_str().unwrap();
        run_args(&["new", "--state", state]).unwrap();
        let err = run_args(&["new", "--state", state]).unwrap_err();
        assert!(err.downcast_ref::<store::StoreError>().is_some());
        run_args(&["new", "--state", state, "--force"]).unwrap();
    }
}
