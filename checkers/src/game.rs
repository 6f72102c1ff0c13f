use serde::{Deserialize, Serialize};

use crate::board::{crowning_row, Board, Piece, Pos};
use crate::notation::{self, ParseError};
use crate::rules::{self, Move, MoveError};
use crate::ruleset::Ruleset;
use crate::types::{Player, Rank};
use crate::winner;

/// Main game state: the board plus whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Player,
    phase: GamePhase,
    rules: Ruleset,
    history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "winner")]
pub enum GamePhase {
    InProgress,
    /// Absorbing: no further moves are accepted.
    Won(Player),
}

impl GamePhase {
    fn from_winner(winner: Option<Player>) -> Self {
        winner.map_or(Self::InProgress, Self::Won)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Self::InProgress => None,
            Self::Won(player) => Some(player),
        }
    }
}

/// Record of one accepted move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub mv: Move,
    pub player: Player,
    pub piece: Piece, // Piece as it stood before moving
    pub captured: Option<Pos>,
    pub promoted: bool,
    pub board: String, // Board text after this move
}

/// What [`Game::apply_move`] reports back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    pub captured: Option<Pos>,
    pub winner: Option<Player>,
    pub promoted: bool,
}

impl Game {
    /// Create a new game from the standard starting position, black to move.
    pub fn new() -> Self {
        Self::with_rules(Ruleset::default())
    }

    pub fn with_rules(rules: Ruleset) -> Self {
        Self::from_parts(Board::starting(), Player::Black, rules)
    }

    /// Resume a game from a board and the side to move.
    ///
    /// The phase is recomputed from the board, so a finished game stays finished.
    pub fn from_parts(board: Board, turn: Player, rules: Ruleset) -> Self {
        let phase = GamePhase::from_winner(winner::winner(&board, turn, &rules));
        Self {
            board,
            turn,
            phase,
            rules,
            history: Vec::new(),
        }
    }

    /// Resume a game from stored board text and turn character.
    pub fn from_notation(board: &str, turn: &str, rules: Ruleset) -> Result<Self, ParseError> {
        let board = notation::parse_board(board)?;
        let turn = notation::parse_turn_str(turn)?
            .ok_or_else(|| ParseError::InvalidTurn(turn.to_string()))?;
        Ok(Self::from_parts(board, turn, rules))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn winner(&self) -> Option<Player> {
        self.phase.winner()
    }

    pub fn rules(&self) -> &Ruleset {
        &self.rules
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// True if the side to move owns `player`'s color.
    pub fn turn_is(&self, player: Player) -> bool {
        self.turn == player
    }

    /// Legal moves for the side to move. Empty once the game is won.
    pub fn legal_moves(&self) -> Vec<Move> {
        match self.phase {
            GamePhase::InProgress => rules::legal_moves(&self.board, self.turn, &self.rules),
            GamePhase::Won(_) => Vec::new(),
        }
    }

    /// Export the board to canonical text.
    pub fn to_notation(&self) -> String {
        notation::format_board(&self.board)
    }

    /// Mark the game as won regardless of what the board shows.
    pub(crate) fn declare_winner(&mut self, winner: Player) {
        self.phase = GamePhase::Won(winner);
    }

    /// Play one move for `player`.
    ///
    /// Every check runs before the board is touched, so on error the game is
    /// left exactly as it was.
    pub fn apply_move(&mut self, player: Player, from: Pos, to: Pos) -> Result<MoveResult, MoveError> {
        if let GamePhase::Won(winner) = self.phase {
            return Err(MoveError::GameOver { winner });
        }
        if !self.turn_is(player) {
            tracing::debug!("Rejected move by {}: not their turn", player);
            return Err(MoveError::NotPlayerTurn { player });
        }

        let outcome = rules::validate(&self.board, self.turn, from, to, &self.rules)
            .inspect_err(|e| tracing::debug!("Rejected move {} -> {}: {:?}", from, to, e))?;

        self.board.take(from);
        let captured = outcome.captured();
        if let Some(pos) = captured {
            self.board.take(pos);
        }
        let promoted = outcome.piece.rank == Rank::Pawn && to.y == crowning_row(player);
        let placed = if promoted {
            Piece::king(player)
        } else {
            outcome.piece
        };
        self.board.set(to, Some(placed));

        let winner = winner::winner(&self.board, player.opponent(), &self.rules);
        match winner {
            Some(w) => {
                tracing::info!("Game won by {}", w);
                self.phase = GamePhase::Won(w);
            }
            None => self.turn = player.opponent(),
        }

        tracing::debug!(
            "Applied move {} -> {} for {} (captured: {:?}, promoted: {})",
            from,
            to,
            player,
            captured,
            promoted
        );

        self.history.push(HistoryEntry {
            mv: Move::new(from, to),
            player,
            piece: outcome.piece,
            captured,
            promoted,
            board: self.to_notation(),
        });

        Ok(MoveResult {
            captured,
            winner,
            promoted,
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
