//! Plain-text board rendering for the terminal.

use checkers::{Board, Game, Player, Pos, BOARD_DIM};

const EMPTY_DARK: char = '.';
const LIGHT: char = ' ';

/// Render the board as a grid with x along the top and y down the side.
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("  ");
    for x in 0..BOARD_DIM {
        out.push_str(&format!(" {x}"));
    }
    out.push('\n');

    for y in 0..BOARD_DIM {
        out.push_str(&format!("{y} "));
        for x in 0..BOARD_DIM {
            let pos = Pos::new(x, y);
            let c = match board.piece_at(pos) {
                Some(piece) => piece.to_char(),
                None if pos.is_dark() => EMPTY_DARK,
                None => LIGHT,
            };
            out.push(' ');
            out.push(c);
        }
        out.push('\n');
    }
    out
}

fn player_name(player: Option<Player>) -> &'static str {
    player.map_or("none", Player::as_str)
}

/// Board plus a status line.
pub fn render_game(game: &Game) -> String {
    format!(
        "{}turn: {}  winner: {}\n",
        render_board(game.board()),
        game.turn(),
        player_name(game.winner())
    )
}
