// Unpruned minimax over the full game tree. Slow, but it is the reference
// value alpha-beta must reproduce.
use crate::board::{Board, Move, Player};
use crate::rules::{actions, player, result, terminal, utility};
use crate::search::SCORE_INF;

/// Returns `(value, bestmove, nodes)`; ties keep the first move in action order.
pub fn minimax(board: &Board) -> (i32, Option<Move>, u64) {
    let mut nodes = 0u64;
    let (value, bestmove) = if player(board) == Player::X {
        max_value(board, &mut nodes)
    } else {
        min_value(board, &mut nodes)
    };
    (value, bestmove, nodes)
}

pub fn minimax_value(board: &Board) -> i32 {
    minimax(board).0
}

fn max_value(board: &Board, nodes: &mut u64) -> (i32, Option<Move>) {
    *nodes += 1;
    if terminal(board) {
        return (utility(board), None);
    }
    let mut best = (-SCORE_INF, None);
    for mv in actions(board) {
        let child = result(board, mv).expect("moves from actions() are always legal");
        let (v, _) = min_value(&child, nodes);
        if v > best.0 {
            best = (v, Some(mv));
        }
    }
    best
}

fn min_value(board: &Board, nodes: &mut u64) -> (i32, Option<Move>) {
    *nodes += 1;
    if terminal(board) {
        return (utility(board), None);
    }
    let mut best = (SCORE_INF, None);
    for mv in actions(board) {
        let child = result(board, mv).expect("moves from actions() are always legal");
        let (v, _) = max_value(&child, nodes);
        if v < best.0 {
            best = (v, Some(mv));
        }
    }
    best
}
