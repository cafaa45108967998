use crate::board::{Board, Move, Player};
use crate::error::{Error, Result};
use crate::rules::{actions, initial_state, player, result, terminal, utility};
use crate::search::alphabeta::{SearchParams, Searcher};
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opponent {
    /// Both sides play the search engine's move.
    Engine,
    /// The side opposite `engine_side` picks a uniformly random legal move.
    Random,
}

impl FromStr for Opponent {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "engine" => Ok(Opponent::Engine),
            "random" => Ok(Opponent::Random),
            other => Err(format!("invalid opponent '{other}': use 'engine' or 'random'")),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub seed: u64,
    pub opponent: Opponent,
    pub engine_side: Player,
    pub threads: usize,
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 1, seed: 42, opponent: Opponent::Engine, engine_side: Player::X, threads: 1 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    pub result: i8, // 1 X win, 0 draw, -1 O win
}

impl GameRecord {
    pub fn final_board(&self) -> Result<Board> {
        crate::rules::replay(&self.moves)
    }
}

pub fn generate_games(params: &SelfPlayParams) -> Vec<GameRecord> {
    generate_games_with_progress(params, |_, _| {})
}

/// Same games as `generate_games`; `on_game` is called after each finished game
/// with its index.
pub fn generate_games_with_progress<F>(params: &SelfPlayParams, mut on_game: F) -> Vec<GameRecord>
where
    F: FnMut(usize, &GameRecord),
{
    let mut rng = SmallRng::seed_from_u64(params.seed);
    let search = SearchParams { threads: params.threads, ..SearchParams::default() };
    let mut games = Vec::with_capacity(params.games);
    for gi in 0..params.games {
        let record = play_game(params, search, &mut rng);
        debug!("game {gi}: result={} plies={}", record.result, record.moves.len());
        on_game(gi, &record);
        games.push(record);
    }
    let x_wins = games.iter().filter(|g| g.result > 0).count();
    let o_wins = games.iter().filter(|g| g.result < 0).count();
    info!("self-play finished: {} games, X={} O={} draws={}", games.len(), x_wins, o_wins, games.len() - x_wins - o_wins);
    games
}

fn play_game(params: &SelfPlayParams, search: SearchParams, rng: &mut SmallRng) -> GameRecord {
    let mut board = initial_state();
    let mut moves = Vec::new();
    while !terminal(&board) {
        let to_move = player(&board);
        let mv = if params.opponent == Opponent::Random && to_move != params.engine_side {
            select_random_move(&board, rng)
        } else {
            Searcher::with_params(search).search(&board).bestmove
        };
        let Some(mv) = mv else { break };
        board = result(&board, mv).expect("selected moves come from actions()");
        moves.push(mv);
    }
    GameRecord { moves, result: utility(&board) as i8 }
}

fn select_random_move(board: &Board, rng: &mut SmallRng) -> Option<Move> {
    let moves = actions(board);
    if moves.is_empty() { None } else { Some(moves[rng.gen_range(0..moves.len())]) }
}

/// One JSON object per line.
pub fn write_jsonl<P: AsRef<Path>>(games: &[GameRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        create_dir_all(dir).map_err(|source| Error::Io {
            operation: format!("create directory {}", dir.display()),
            source,
        })?;
    }
    let file = File::create(path).map_err(|source| Error::Io {
        operation: format!("create {}", path.display()),
        source,
    })?;
    let write_err = |source: std::io::Error| Error::Io {
        operation: format!("write {}", path.display()),
        source,
    };
    let mut w = BufWriter::new(file);
    for g in games {
        let line = serde_json::to_string(g)?;
        writeln!(w, "{line}").map_err(write_err)?;
    }
    w.flush().map_err(write_err)?;
    Ok(())
}

pub fn read_jsonl<P: AsRef<Path>>(path: P) -> Result<Vec<GameRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Io {
        operation: format!("open {}", path.display()),
        source,
    })?;
    let mut games = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| Error::Io {
            operation: format!("read {}", path.display()),
            source,
        })?;
        if line.trim().is_empty() { continue; }
        games.push(serde_json::from_str(&line)?);
    }
    Ok(games)
}
