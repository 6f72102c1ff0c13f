//! 8x8 checkers board, squares addressed by `Pos`.

use serde::{Deserialize, Serialize};

use crate::types::{Player, Rank};

pub const BOARD_DIM: i32 = 8;

/// A square coordinate. May lie off the board; use [`Pos::on_board`] before indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn on_board(self) -> bool {
        (0..BOARD_DIM).contains(&self.x) && (0..BOARD_DIM).contains(&self.y)
    }

    /// Pieces may only stand on dark squares.
    pub fn is_dark(self) -> bool {
        (self.x + self.y).rem_euclid(2) == 1
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Square halfway between `self` and `other`.
    pub fn midpoint(self, other: Pos) -> Self {
        Self::new((self.x + other.x) / 2, (self.y + other.y) / 2)
    }

    fn index(self) -> Option<usize> {
        self.on_board()
            .then(|| (self.y * BOARD_DIM + self.x) as usize)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub player: Player,
    pub rank: Rank,
}

impl Piece {
    pub const fn pawn(player: Player) -> Self {
        Self {
            player,
            rank: Rank::Pawn,
        }
    }

    pub const fn king(player: Player) -> Self {
        Self {
            player,
            rank: Rank::King,
        }
    }

    pub fn is_king(self) -> bool {
        self.rank == Rank::King
    }

    /// Lowercase for pawns, uppercase for kings.
    pub fn to_char(self) -> char {
        let c = self.player.to_char();
        match self.rank {
            Rank::Pawn => c,
            Rank::King => c.to_ascii_uppercase(),
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let player = Player::from_char(c.to_ascii_lowercase())?;
        let rank = if c.is_ascii_uppercase() {
            Rank::King
        } else {
            Rank::Pawn
        };
        Some(Self { player, rank })
    }
}

/// Row index `y` on which `player`'s pawns are crowned.
pub fn crowning_row(player: Player) -> i32 {
    match player {
        Player::Black => BOARD_DIM - 1,
        Player::Red => 0,
    }
}

/// Full board state. Row 0 is black's home side.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; (BOARD_DIM * BOARD_DIM) as usize],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [None; (BOARD_DIM * BOARD_DIM) as usize],
        }
    }

    /// Three rows of pawns per side on the dark squares, two empty rows between.
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for pos in Self::positions().filter(|p| p.is_dark()) {
            let piece = match pos.y {
                0..=2 => Some(Piece::pawn(Player::Black)),
                5..=7 => Some(Piece::pawn(Player::Red)),
                _ => None,
            };
            board.squares[(pos.y * BOARD_DIM + pos.x) as usize] = piece;
        }
        board
    }

    /// Every coordinate on the board, row by row.
    pub fn positions() -> impl Iterator<Item = Pos> {
        (0..BOARD_DIM).flat_map(|y| (0..BOARD_DIM).map(move |x| Pos::new(x, y)))
    }

    /// Piece on `pos`, or `None` when the square is empty or off the board.
    pub fn piece_at(&self, pos: Pos) -> Option<Piece> {
        pos.index().and_then(|i| self.squares[i])
    }

    pub fn is_empty_at(&self, pos: Pos) -> bool {
        self.piece_at(pos).is_none()
    }

    /// Place or clear a piece. Returns the previous occupant.
    ///
    /// Off-board positions are ignored; callers validate coordinates first.
    pub fn set(&mut self, pos: Pos, piece: Option<Piece>) -> Option<Piece> {
        match pos.index() {
            Some(i) => std::mem::replace(&mut self.squares[i], piece),
            None => None,
        }
    }

    pub fn take(&mut self, pos: Pos) -> Option<Piece> {
        self.set(pos, None)
    }

    /// Occupied squares in board order.
    pub fn pieces(&self) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        Self::positions().filter_map(|pos| self.piece_at(pos).map(|piece| (pos, piece)))
    }

    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.player == player)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_layout() {
        let board = Board::starting();
        assert_eq!(board.pieces_of(Player::Black).count(), 12);
        assert_eq!(board.pieces_of(Player::Red).count(), 12);
        assert_eq!(board.piece_at(Pos::new(1, 0)), Some(Piece::pawn(Player::Black)));
        assert_eq!(board.piece_at(Pos::new(0, 5)), Some(Piece::pawn(Player::Red)));
        assert_eq!(board.piece_at(Pos::new(0, 0)), None);
        assert!(board.pieces().all(|(pos, _)| pos.is_dark()));
    }

    #[test]
    fn test_off_board_access() {
        let mut board = Board::starting();
        assert_eq!(board.piece_at(Pos::new(-1, 0)), None);
        assert_eq!(board.piece_at(Pos::new(2, 55)), None);
        assert_eq!(board.set(Pos::new(8, 8), Some(Piece::king(Player::Red))), None);
        assert_eq!(board, Board::starting());
    }

    #[test]
    fn test_set_and_take() {
        let mut board = Board::empty();
        let pos = Pos::new(3, 4);
        assert_eq!(board.set(pos, Some(Piece::king(Player::Black))), None);
        assert_eq!(board.take(pos), Some(Piece::king(Player::Black)));
        assert!(board.is_empty_at(pos));
    }

    #[test]
    fn test_piece_chars() {
        assert_eq!(Piece::pawn(Player::Black).to_char(), 'b');
        assert_eq!(Piece::king(Player::Red).to_char(), 'R');
        assert_eq!(Piece::from_char('B'), Some(Piece::king(Player::Black)));
        assert_eq!(Piece::from_char('r'), Some(Piece::pawn(Player::Red)));
        assert_eq!(Piece::from_char('g'), None);
        assert_eq!(Piece::from_char('*'), None);
    }

    #[test]
    fn test_midpoint_and_parity() {
        assert_eq!(Pos::new(2, 3).midpoint(Pos::new(0, 5)), Pos::new(1, 4));
        assert!(Pos::new(1, 0).is_dark());
        assert!(!Pos::new(0, 0).is_dark());
        assert_eq!(crowning_row(Player::Black), 7);
        assert_eq!(crowning_row(Player::Red), 0);
    }
}
