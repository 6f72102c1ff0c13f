//! Optional rule variants. The default matches the classic engine behaviour.

use serde::{Deserialize, Serialize};

/// When a game counts as won.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinPolicy {
    /// A side with no pieces left loses.
    #[default]
    PieceExhaustion,
    /// As above, and a side to move with pieces but no legal move also loses.
    NoLegalMoves,
}

impl std::str::FromStr for WinPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pieces" | "piece_exhaustion" => Ok(Self::PieceExhaustion),
            "moves" | "no_legal_moves" => Ok(Self::NoLegalMoves),
            other => Err(format!("unknown win policy: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruleset {
    pub win_policy: WinPolicy,
    /// Let pawns jump towards their own home rank. Simple pawn steps stay forward-only.
    pub pawn_backward_capture: bool,
}

impl Ruleset {
    #[must_use]
    pub fn with_win_policy(mut self, win_policy: WinPolicy) -> Self {
        self.win_policy = win_policy;
        self
    }

    #[must_use]
    pub fn with_pawn_backward_capture(mut self, allowed: bool) -> Self {
        self.pawn_backward_capture = allowed;
        self
    }
}
