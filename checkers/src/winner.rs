//! Terminal state detection.

use crate::board::Board;
use crate::rules::has_legal_move;
use crate::ruleset::{Ruleset, WinPolicy};
use crate::types::Player;

pub fn piece_count(board: &Board, player: Player) -> usize {
    board.pieces_of(player).count()
}

/// Decide whether the game on `board` is over.
///
/// `to_move` is the side that would move next. It only matters under
/// [`WinPolicy::NoLegalMoves`], where a side to move with no legal move loses.
pub fn winner(board: &Board, to_move: Player, rules: &Ruleset) -> Option<Player> {
    for player in Player::ALL {
        if piece_count(board, player) == 0 {
            return Some(player.opponent());
        }
    }

    match rules.win_policy {
        WinPolicy::PieceExhaustion => None,
        WinPolicy::NoLegalMoves => {
            (!has_legal_move(board, to_move, rules)).then(|| to_move.opponent())
        }
    }
}
