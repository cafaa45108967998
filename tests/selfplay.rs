use xobot::selfplay::{generate_games, generate_games_with_progress, Opponent, SelfPlayParams};
use xobot::rules::{terminal, utility};
use xobot::Player;

#[test]
fn engine_vs_engine_always_draws() {
    let params = SelfPlayParams { games: 2, seed: 1, opponent: Opponent::Engine, engine_side: Player::X, threads: 1 };
    for g in generate_games(&params) {
        assert_eq!(g.result, 0);
        assert_eq!(g.moves.len(), 9, "a perfect draw fills the board");
        let end = g.final_board().unwrap();
        assert!(terminal(&end));
    }
}

#[test]
fn engine_never_loses_to_random() {
    for side in [Player::X, Player::O] {
        let params = SelfPlayParams { games: 25, seed: 7, opponent: Opponent::Random, engine_side: side, threads: 1 };
        for g in generate_games(&params) {
            let end = g.final_board().unwrap();
            assert_eq!(utility(&end) as i8, g.result);
            match side {
                Player::X => assert!(g.result >= 0, "engine as X lost: {:?}", g.moves),
                Player::O => assert!(g.result <= 0, "engine as O lost: {:?}", g.moves),
            }
        }
    }
}

#[test]
fn selfplay_generates_games_deterministically() {
    let params = SelfPlayParams { games: 3, seed: 42, opponent: Opponent::Random, engine_side: Player::O, threads: 1 };
    let g1 = generate_games(&params);
    let g2 = generate_games(&params);
    assert_eq!(g1.len(), 3);
    assert_eq!(g1, g2);
}

#[test]
fn progress_callback_sees_every_game_of_one_seeded_run() {
    let params = SelfPlayParams { games: 5, seed: 9, opponent: Opponent::Random, engine_side: Player::X, threads: 1 };
    let mut seen = Vec::new();
    let games = generate_games_with_progress(&params, |gi, g| seen.push((gi, g.clone())));
    assert_eq!(seen.iter().map(|(gi, _)| *gi).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    assert_eq!(seen.into_iter().map(|(_, g)| g).collect::<Vec<_>>(), games);
    assert_eq!(games, generate_games(&params));
}
