use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use xobot::selfplay::{generate_games_with_progress, write_jsonl, Opponent, SelfPlayParams};
use xobot::Player;

#[derive(Parser, Debug)]
#[command(name = "xobot-selfplay", about = "Play engine games and write them as JSON lines")]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// 'engine' or 'random'
    #[arg(long, default_value = "random")]
    opponent: Opponent,
    /// Side the engine plays against a random opponent
    #[arg(long, default_value = "x")]
    engine_side: Player,
    #[arg(long, default_value_t = 1)]
    threads: usize,
    #[arg(long, default_value = "out/games.jsonl")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();

    let pb = ProgressBar::new(a.games as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games ({elapsed})")?);

    let params = SelfPlayParams {
        games: a.games,
        seed: a.seed,
        opponent: a.opponent,
        engine_side: a.engine_side,
        threads: a.threads,
    };
    let games = generate_games_with_progress(&params, |_, _| pb.inc(1));
    pb.finish_and_clear();

    let x_wins = games.iter().filter(|g| g.result > 0).count();
    let o_wins = games.iter().filter(|g| g.result < 0).count();
    eprintln!("X wins: {x_wins}  O wins: {o_wins}  draws: {}", games.len() - x_wins - o_wins);
    write_jsonl(&games, &a.out)?;
    eprintln!("Wrote {} games to {}", games.len(), a.out.display());
    Ok(())
}
