use crate::board::{Board, Move, Player};
use crate::rules::{actions, player, result, terminal, utility};
use crate::search::minimax;
use crate::search::SCORE_INF;
use log::debug;
use rayon::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct SearchParams {
    /// Alpha-beta cutoffs; `false` walks the full tree.
    pub prune: bool,
    /// Root-split worker count; 1 searches on the calling thread.
    pub threads: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { prune: true, threads: 1 }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub value: i32,
    pub bestmove: Option<Move>,
    pub nodes: u64,
}

#[derive(Default)]
pub struct Searcher {
    pub(crate) nodes: u64,
    params: SearchParams,
}

impl Searcher {
    pub fn with_params(params: SearchParams) -> Self {
        Self { nodes: 0, params }
    }

    pub fn params(&self) -> SearchParams {
        self.params
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn search_with_params(&mut self, board: &Board, params: SearchParams) -> SearchResult {
        self.params = params;
        self.search(board)
    }

    pub fn search(&mut self, board: &Board) -> SearchResult {
        self.nodes = 0;
        let res = if !self.params.prune {
            let (value, bestmove, nodes) = minimax::minimax(board);
            self.nodes = nodes;
            SearchResult { value, bestmove, nodes }
        } else if self.params.threads > 1 && !terminal(board) {
            self.search_parallel(board)
        } else {
            let maximizing = player(board) == Player::X;
            let (value, bestmove) = self.alphabeta(board, -SCORE_INF, SCORE_INF, maximizing);
            SearchResult { value, bestmove, nodes: self.nodes }
        };
        debug!(
            "search {}: value={} bestmove={:?} nodes={}",
            board.encode(),
            res.value,
            res.bestmove.map(|m| m.to_string()),
            res.nodes
        );
        res
    }

    /// Fail-soft alpha-beta. The role is threaded through the recursion and
    /// flips each ply, matching `player()` on every child board.
    fn alphabeta(&mut self, board: &Board, mut alpha: i32, mut beta: i32, maximizing: bool) -> (i32, Option<Move>) {
        self.nodes += 1;
        if terminal(board) {
            return (utility(board), None);
        }

        let mut bestmove = None;
        if maximizing {
            let mut value = -SCORE_INF;
            for mv in actions(board) {
                let child = result(board, mv).expect("moves from actions() are always legal");
                let (v, _) = self.alphabeta(&child, alpha, beta, false);
                if v > value {
                    value = v;
                    bestmove = Some(mv);
                    // The minimizing parent already has something better
                    if value > beta { break; }
                    alpha = alpha.max(value);
                }
            }
            (value, bestmove)
        } else {
            let mut value = SCORE_INF;
            for mv in actions(board) {
                let child = result(board, mv).expect("moves from actions() are always legal");
                let (v, _) = self.alphabeta(&child, alpha, beta, true);
                if v < value {
                    value = v;
                    bestmove = Some(mv);
                    if value < alpha { break; }
                    beta = beta.min(value);
                }
            }
            (value, bestmove)
        }
    }

    /// Each root move is searched on its own board copy with a full window, so
    /// values are exact and the reduction picks the same move as the serial search.
    fn search_parallel(&mut self, board: &Board) -> SearchResult {
        let maximizing = player(board) == Player::X;
        let pool = rayon::ThreadPoolBuilder::new().num_threads(self.params.threads).build();
        let run = || -> Vec<(Move, i32, u64)> {
            actions(board)
                .par_iter()
                .map(|&mv| {
                    let child = result(board, mv).expect("moves from actions() are always legal");
                    let mut w = Searcher::with_params(self.params);
                    let (v, _) = w.alphabeta(&child, -SCORE_INF, SCORE_INF, !maximizing);
                    (mv, v, w.nodes)
                })
                .collect()
        };
        let results = match pool {
            Ok(pool) => pool.install(run),
            Err(_) => run(),
        };

        // Collection keeps row-major order; keep the first strict improvement
        let mut best: Option<(Move, i32)> = None;
        let mut total_nodes = 1u64;
        for (mv, v, n) in results {
            total_nodes += n;
            let better = match best {
                None => true,
                Some((_, bv)) => if maximizing { v > bv } else { v < bv },
            };
            if better { best = Some((mv, v)); }
        }
        self.nodes = total_nodes;
        let (bestmove, value) = match best {
            Some((mv, v)) => (Some(mv), v),
            None => (None, utility(board)),
        };
        SearchResult { value, bestmove, nodes: self.nodes }
    }
}
