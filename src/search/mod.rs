pub mod alphabeta;
pub mod minimax;

use crate::board::{Board, Move};
use alphabeta::Searcher;

/// Bound wider than any reachable utility; used for the root window.
pub const SCORE_INF: i32 = 10;

/// Minimax value and the first optimal move in row-major action order.
/// On a terminal board this is `(utility, None)`.
pub fn search(board: &Board) -> (i32, Option<Move>) {
    let res = Searcher::default().search(board);
    (res.value, res.bestmove)
}

/// Optimal move for the side to act, `None` if the game is over.
pub fn minimax(board: &Board) -> Option<Move> {
    search(board).1
}
