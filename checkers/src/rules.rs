//! Move validation. Decides legality and names the captured square without
//! touching the board, so the same checks drive move enumeration.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, Piece, Pos};
use crate::ruleset::Ruleset;
use crate::types::{Player, Rank};

/// A requested relocation of one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Pos,
    pub to: Pos,
}

impl Move {
    pub const fn new(from: Pos, to: Pos) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum MoveKind {
    /// One diagonal step onto an empty square.
    Simple,
    /// Two diagonal steps over an opposing piece, which is removed.
    Jump { captured: Pos },
}

/// What a legal move does, as decided by [`validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The piece being moved, before any promotion.
    pub piece: Piece,
    pub kind: MoveKind,
}

impl MoveOutcome {
    pub fn captured(&self) -> Option<Pos> {
        match self.kind {
            MoveKind::Simple => None,
            MoveKind::Jump { captured } => Some(captured),
        }
    }
}

/// Why a move was classified as a wrong move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrongMoveReason {
    OutOfBounds,
    NoPiece,
    NotOwnPiece,
    Occupied,
    NotDiagonal,
    TooFar,
    Backward,
    EmptyJump,
    OwnPieceJump,
}

impl std::fmt::Display for WrongMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::OutOfBounds => "square is off the board",
            Self::NoPiece => "no piece to move",
            Self::NotOwnPiece => "piece belongs to the opponent",
            Self::Occupied => "destination is occupied",
            Self::NotDiagonal => "move is not diagonal",
            Self::TooFar => "move is too long",
            Self::Backward => "pawns only move forward",
            Self::EmptyJump => "nothing to jump over",
            Self::OwnPieceJump => "cannot jump over own piece",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("move is absent: x ({}) and y ({})", .at.x, .at.y)]
    MoveAbsent { at: Pos },
    #[error("{player}: player tried to play out of turn")]
    NotPlayerTurn { player: Player },
    #[error("invalid move: {from} to {to}: wrong move")]
    WrongMove {
        from: Pos,
        to: Pos,
        reason: WrongMoveReason,
    },
    #[error("game is already won by {winner}")]
    GameOver { winner: Player },
}

impl MoveError {
    pub fn reason(&self) -> Option<WrongMoveReason> {
        match self {
            Self::WrongMove { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

/// Check whether `turn` may move the piece on `from` to `to`.
///
/// Checks run in order and the first failure wins: bounds, distinct endpoints,
/// ownership of the moving piece, an empty destination, then move shape.
pub fn validate(
    board: &Board,
    turn: Player,
    from: Pos,
    to: Pos,
    rules: &Ruleset,
) -> Result<MoveOutcome, MoveError> {
    let wrong = |reason| MoveError::WrongMove { from, to, reason };

    if !from.on_board() || !to.on_board() {
        return Err(wrong(WrongMoveReason::OutOfBounds));
    }
    if from == to {
        return Err(MoveError::MoveAbsent { at: from });
    }

    let piece = board
        .piece_at(from)
        .ok_or(wrong(WrongMoveReason::NoPiece))?;
    if piece.player != turn {
        return Err(wrong(WrongMoveReason::NotOwnPiece));
    }
    if !board.is_empty_at(to) {
        return Err(wrong(WrongMoveReason::Occupied));
    }

    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dx.abs() != dy.abs() {
        return Err(wrong(WrongMoveReason::NotDiagonal));
    }
    let forward = dy.signum() == turn.forward();

    match dx.abs() {
        1 => {
            if piece.rank == Rank::Pawn && !forward {
                return Err(wrong(WrongMoveReason::Backward));
            }
            Ok(MoveOutcome {
                piece,
                kind: MoveKind::Simple,
            })
        }
        2 => {
            if piece.rank == Rank::Pawn && !forward && !rules.pawn_backward_capture {
                return Err(wrong(WrongMoveReason::Backward));
            }
            let captured = from.midpoint(to);
            match board.piece_at(captured) {
                None => Err(wrong(WrongMoveReason::EmptyJump)),
                Some(jumped) if jumped.player == turn => {
                    Err(wrong(WrongMoveReason::OwnPieceJump))
                }
                Some(_) => Ok(MoveOutcome {
                    piece,
                    kind: MoveKind::Jump { captured },
                }),
            }
        }
        _ => Err(wrong(WrongMoveReason::TooFar)),
    }
}

/// On-board squares a piece on `from` could reach in one step or one jump.
fn candidate_targets(from: Pos) -> SmallVec<[Pos; 8]> {
    let mut targets = SmallVec::new();
    for dist in [1, 2] {
        for (dx, dy) in [(-1, -1), (1, -1), (-1, 1), (1, 1)] {
            let to = from.offset(dx * dist, dy * dist);
            if to.on_board() {
                targets.push(to);
            }
        }
    }
    targets
}

/// Every move `player` may legally make on `board`, in board order.
pub fn legal_moves(board: &Board, player: Player, rules: &Ruleset) -> Vec<Move> {
    board
        .pieces_of(player)
        .flat_map(|(from, _)| {
            candidate_targets(from)
                .into_iter()
                .filter(move |&to| validate(board, player, from, to, rules).is_ok())
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

pub fn has_legal_move(board: &Board, player: Player, rules: &Ruleset) -> bool {
    board.pieces_of(player).any(|(from, _)| {
        candidate_targets(from)
            .into_iter()
            .any(|to| validate(board, player, from, to, rules).is_ok())
    })
}
