use crate::board::Board;
use crate::rules::{actions, result, terminal};
use rayon::prelude::*;

// Move sequences of exactly `depth` plies. Finished games have no continuations.
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    if terminal(board) { return 0; }
    let mut nodes = 0u64;
    for mv in actions(board) {
        let child = result(board, mv).expect("moves from actions() are always legal");
        nodes += perft(&child, depth - 1);
    }
    nodes
}

/// `perft` with the root moves counted in parallel on the current rayon pool.
pub fn perft_split(board: &Board, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    if terminal(board) { return 0; }
    actions(board)
        .par_iter()
        .map(|&mv| {
            let child = result(board, mv).expect("moves from actions() are always legal");
            perft(&child, depth - 1)
        })
        .sum()
}

/// Number of distinct complete games reachable from `board`.
pub fn count_games(board: &Board) -> u64 {
    if terminal(board) { return 1; }
    actions(board)
        .into_iter()
        .map(|mv| {
            let child = result(board, mv).expect("moves from actions() are always legal");
            count_games(&child)
        })
        .sum()
}
