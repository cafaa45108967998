use xobot::perft::{count_games, perft, perft_split};
use xobot::Board;

#[derive(clap::Parser, Debug)]
#[command(name = "perft", about = "Game-tree node counts for xobot")]
struct Args {
    /// Plies to count
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Nine-cell board string or "startpos"
    #[arg(value_name = "BOARD", default_value = "startpos")]
    board: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Also count complete games from the position
    #[arg(long, default_value_t = false)]
    games: bool,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use clap::Parser;
    use std::time::Instant;

    env_logger::init();
    let args = Args::parse();
    let base = if args.board == "startpos" {
        Board::empty()
    } else {
        args.board.parse::<Board>().with_context(|| format!("invalid board '{}'", args.board))?
    };

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build().context("thread pool")?;
    let (nodes, dt) = pool.install(|| {
        let t0 = Instant::now();
        let nodes = if args.threads <= 1 { perft(&base, args.depth) } else { perft_split(&base, args.depth) };
        (nodes, t0.elapsed().as_secs_f64())
    });

    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    if args.games { println!("games: {}", count_games(&base)); }
    Ok(())
}
