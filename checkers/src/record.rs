//! Boundary between the engine and whatever stores games.
//!
//! A caller persists a [`GameRecord`] (board text plus turn and winner
//! characters) and hands it back for every move. Sentinels such as `*` for
//! "nobody" and `(-1, -1)` for "no capture" exist only at this layer.

use serde::{Deserialize, Serialize};

use crate::board::Pos;
use crate::game::Game;
use crate::notation::{self, ParseError};
use crate::rules::MoveError;
use crate::ruleset::Ruleset;
use crate::types::Player;

/// Coordinates reported when a move captured nothing.
pub const NO_CAPTURE: Pos = Pos::new(-1, -1);

fn no_winner() -> String {
    notation::format_turn(None).to_string()
}

/// Stored form of a game between moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub board: String,
    pub turn: String,
    #[serde(default = "no_winner")]
    pub winner: String,
}

/// Result of one accepted move, in wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResponse {
    pub captured_x: i32,
    pub captured_y: i32,
    pub winner: String,
}

impl GameRecord {
    pub fn new_game() -> Self {
        Self::from_game(&Game::new())
    }

    pub fn from_game(game: &Game) -> Self {
        Self {
            board: game.to_notation(),
            turn: game.turn().to_char().to_string(),
            winner: notation::format_turn(game.winner()).to_string(),
        }
    }

    /// Rebuild the in-memory game. A failure here means the stored record was
    /// tampered with or corrupted, not that the caller asked for a bad move.
    pub fn parse(&self, rules: Ruleset) -> Result<Game, RecordError> {
        let mut game = Game::from_notation(&self.board, &self.turn, rules)?;
        if let Some(winner) = notation::parse_turn_str(&self.winner)? {
            game.declare_winner(winner);
        }
        Ok(game)
    }
}

impl MoveResponse {
    pub fn new(captured: Option<Pos>, winner: Option<Player>) -> Self {
        let captured = captured.unwrap_or(NO_CAPTURE);
        Self {
            captured_x: captured.x,
            captured_y: captured.y,
            winner: notation::format_turn(winner).to_string(),
        }
    }

    pub fn captured(&self) -> Option<Pos> {
        let pos = Pos::new(self.captured_x, self.captured_y);
        (pos != NO_CAPTURE).then_some(pos)
    }
}

/// Parse `record`, play one move and return the updated record.
///
/// `record` itself is never modified; callers store the returned record only
/// on success.
pub fn play_move(
    record: &GameRecord,
    player: Player,
    from: Pos,
    to: Pos,
    rules: Ruleset,
) -> Result<(GameRecord, MoveResponse), RecordError> {
    let mut game = record.parse(rules)?;
    let result = game.apply_move(player, from, to)?;
    Ok((
        GameRecord::from_game(&game),
        MoveResponse::new(result.captured, result.winner),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// Stored state no longer parses.
    #[error("game is not parseable: {0}")]
    Corrupt(#[from] ParseError),
    #[error(transparent)]
    Rejected(#[from] MoveError),
}

impl RecordError {
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt(_))
    }
}
