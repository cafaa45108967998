use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::io::{self, Write};
use std::time::Instant;
use xobot::rules::{actions, player, result, terminal, winner};
use xobot::search::alphabeta::{SearchParams, Searcher};
use xobot::{Board, Move, Player};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play tic-tac-toe against a perfect alpha-beta engine", long_about = None)]
struct Args {
    /// Your side: 'x' (moves first) or 'o'
    #[arg(long, default_value = "x")]
    human: Player,

    /// Starting position, nine cells row-major, e.g. "X.O......"
    #[arg(long)]
    board: Option<String>,

    /// Print the engine's value and best move for the position, then exit
    #[arg(long)]
    analyze: bool,

    /// Worker threads for the root split
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Disable alpha-beta cutoffs (full minimax)
    #[arg(long)]
    no_prune: bool,

    /// Print search statistics
    #[arg(long)]
    verbose: bool,
}

fn get_human_move(board: &Board) -> Result<Option<Move>> {
    let legal = actions(board);
    loop {
        print!("Enter your move as row,col (or 'quit'): ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(None);
        }
        let input = input.trim();
        if input == "quit" {
            return Ok(None);
        }

        match input.parse::<Move>() {
            Ok(mv) if legal.contains(&mv) => return Ok(Some(mv)),
            Ok(_) => println!("That cell is taken!"),
            Err(e) => println!("{e}"),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut board = match &args.board {
        Some(s) => s.parse::<Board>().with_context(|| format!("invalid --board '{s}'"))?,
        None => Board::empty(),
    };
    let params = SearchParams { prune: !args.no_prune, threads: args.threads.max(1) };

    if args.analyze {
        let t0 = Instant::now();
        let res = Searcher::with_params(params).search(&board);
        print!("{board}");
        match res.bestmove {
            Some(mv) => println!("{} to move: value {} bestmove {}", player(&board), res.value, mv),
            None => println!("game over: value {}", res.value),
        }
        if args.verbose {
            println!("nodes: {} elapsed: {:.3}s", res.nodes, t0.elapsed().as_secs_f64());
        }
        return Ok(());
    }

    info!("starting game, human plays {}", args.human);
    while !terminal(&board) {
        let to_move = player(&board);
        println!("\n{to_move}'s turn");
        print!("{board}");

        let mv = if to_move == args.human {
            match get_human_move(&board)? {
                Some(mv) => mv,
                None => {
                    println!("Thanks for playing!");
                    return Ok(());
                }
            }
        } else {
            let t0 = Instant::now();
            let res = Searcher::with_params(params).search(&board);
            let mv = res.bestmove.context("engine returned no move on a live board")?;
            println!("Engine plays: {mv}");
            if args.verbose {
                println!("value: {} nodes: {} elapsed: {:.3}s", res.value, res.nodes, t0.elapsed().as_secs_f64());
            }
            mv
        };
        board = result(&board, mv)?;
    }

    print!("\n{board}");
    match winner(&board) {
        Some(p) if p == args.human => println!("You win!"),
        Some(p) => println!("{p} wins!"),
        None => println!("It's a draw!"),
    }
    Ok(())
}
