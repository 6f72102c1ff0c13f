//! Canonical board text: eight rows of eight squares joined by `|`.
//!
//! Row 0 comes first and squares run left to right with increasing x.
//! `*` marks an empty square, `b`/`r` pawns, `B`/`R` kings. This module is the
//! only authority on what counts as a syntactically valid board.

use crate::board::{Board, Piece, Pos, BOARD_DIM};
use crate::types::Player;

pub const ROW_SEP: char = '|';
pub const EMPTY_SQUARE: char = '*';

/// Parse canonical board text into a Board.
pub fn parse_board(text: &str) -> Result<Board, ParseError> {
    let rows: Vec<&str> = text.split(ROW_SEP).collect();
    if rows.len() != BOARD_DIM as usize
        || rows
            .iter()
            .any(|row| row.chars().count() != BOARD_DIM as usize)
    {
        return Err(ParseError::Malformed(text.to_string()));
    }

    let mut board = Board::empty();
    for (y, row) in rows.iter().enumerate() {
        for (x, c) in row.chars().enumerate() {
            let pos = Pos::new(x as i32, y as i32);
            if c == EMPTY_SQUARE {
                continue;
            }
            let piece = Piece::from_char(c).ok_or(ParseError::InvalidPiece { at: pos, found: c })?;
            if !pos.is_dark() {
                return Err(ParseError::InvalidPlacement { at: pos, piece });
            }
            board.set(pos, Some(piece));
        }
    }

    Ok(board)
}

/// Format a Board as canonical text. Total for any in-memory board.
pub fn format_board(board: &Board) -> String {
    let mut out = String::with_capacity((BOARD_DIM * (BOARD_DIM + 1)) as usize);
    for y in 0..BOARD_DIM {
        if y > 0 {
            out.push(ROW_SEP);
        }
        for x in 0..BOARD_DIM {
            out.push(
                board
                    .piece_at(Pos::new(x, y))
                    .map_or(EMPTY_SQUARE, Piece::to_char),
            );
        }
    }
    out
}

/// Parse a turn or winner character: `b`, `r`, or `*` for nobody.
pub fn parse_turn(c: char) -> Result<Option<Player>, ParseError> {
    if c == EMPTY_SQUARE {
        return Ok(None);
    }
    Player::from_char(c)
        .map(Some)
        .ok_or(ParseError::InvalidTurn(c.to_string()))
}

/// Same as [`parse_turn`] for stored strings, which must hold exactly one character.
pub fn parse_turn_str(s: &str) -> Result<Option<Player>, ParseError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => parse_turn(c),
        _ => Err(ParseError::InvalidTurn(s.to_string())),
    }
}

pub fn format_turn(player: Option<Player>) -> char {
    player.map_or(EMPTY_SQUARE, Player::to_char)
}

impl std::str::FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_board(s)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_board(self))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid board string: {0}")]
    Malformed(String),
    #[error("invalid board, invalid piece at {}, {}", .at.x, .at.y)]
    InvalidPiece { at: Pos, found: char },
    #[error("invalid board, invalid piece at {}, {}", .at.x, .at.y)]
    InvalidPlacement { at: Pos, piece: Piece },
    #[error("invalid turn: {0}")]
    InvalidTurn(String),
}
