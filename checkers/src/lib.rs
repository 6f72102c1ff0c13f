//! Checkers rules engine.
//!
//! Owns the board, move legality, promotion, turn order and win detection, and
//! the canonical board text used to store games. Pure and synchronous: no I/O,
//! no notion of accounts or storage.

pub mod board;
pub mod game;
pub mod notation;
pub mod record;
pub mod rules;
pub mod ruleset;
pub mod types;
pub mod winner;

pub use board::{Board, Piece, Pos, BOARD_DIM};
pub use game::{Game, GamePhase, HistoryEntry, MoveResult};
pub use notation::{format_board, format_turn, parse_board, parse_turn, ParseError};
pub use record::{play_move, GameRecord, MoveResponse, RecordError, NO_CAPTURE};
pub use rules::{legal_moves, validate, Move, MoveError, MoveKind, MoveOutcome, WrongMoveReason};
pub use ruleset::{Ruleset, WinPolicy};
pub use types::{Player, Rank};
