//! Canonical player and piece types for the engine.
//! Single-character encodings only cross the serialization boundary.

use serde::{Deserialize, Serialize};

/// One side of the board. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Black,
    Red,
}

/// Piece rank. Pawns are promoted to kings on the far rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Pawn,
    King,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Black, Player::Red];

    pub fn opponent(self) -> Self {
        match self {
            Self::Black => Self::Red,
            Self::Red => Self::Black,
        }
    }

    /// Direction along the y axis this side's pawns advance in.
    pub fn forward(self) -> i32 {
        match self {
            Self::Black => 1,
            Self::Red => -1,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::Black => 'b',
            Self::Red => 'r',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'b' => Some(Self::Black),
            'r' => Some(Self::Red),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pawn => write!(f, "pawn"),
            Self::King => write!(f, "king"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::Black.opponent(), Player::Red);
        assert_eq!(Player::Red.opponent(), Player::Black);
    }

    #[test]
    fn test_char_encoding() {
        for player in Player::ALL {
            assert_eq!(Player::from_char(player.to_char()), Some(player));
        }
        assert_eq!(Player::from_char('*'), None);
        assert_eq!(Player::from_char('B'), None);
    }

    #[test]
    fn test_forward_direction() {
        assert_eq!(Player::Black.forward(), 1);
        assert_eq!(Player::Red.forward(), -1);
    }

    #[test]
    fn test_display() {
        assert_eq!(Player::Red.to_string(), "red");
        assert_eq!(Rank::King.to_string(), "king");
    }
}
