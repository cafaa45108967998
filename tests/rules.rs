use pretty_assertions::assert_eq;
use xobot::board::{Board, Cell, Move, Player};
use xobot::rules::{actions, initial_state, player, replay, result, terminal, utility, winner, WINNING_LINES};
use xobot::Error;

fn line_board(line: [usize; 3], mark: Cell) -> Board {
    let mut cells = [Cell::Empty; 9];
    for idx in line { cells[idx] = mark; }
    Board::from_cells(cells)
}

#[test]
fn player_alternates_starting_with_x() {
    let moves = [(1, 1), (0, 0), (2, 2), (0, 2), (0, 1), (2, 1), (1, 0), (1, 2), (2, 0)];
    let mut b = initial_state();
    assert_eq!(player(&b), Player::X);
    let mut expected = Player::X;
    for (row, col) in moves {
        assert_eq!(player(&b), expected);
        b = result(&b, Move::new(row, col)).unwrap();
        expected = expected.opponent();
    }
    assert!(b.is_full());
}

#[test]
fn actions_shrink_by_one_per_move() {
    let mut b = initial_state();
    assert_eq!(actions(&b).len(), 9);
    for occupied in 0..9 {
        let acts = actions(&b);
        assert_eq!(acts.len(), 9 - occupied);
        assert_eq!(acts.len(), 9 - b.occupied());
        b = result(&b, acts[acts.len() / 2]).unwrap();
    }
    assert!(actions(&b).is_empty());
}

#[test]
fn actions_are_row_major() {
    let b: Board = ".X.O.....".parse().unwrap();
    let got = actions(&b);
    assert_eq!(got, vec![
        Move::new(0, 0), Move::new(0, 2), Move::new(1, 1), Move::new(1, 2),
        Move::new(2, 0), Move::new(2, 1), Move::new(2, 2),
    ]);
}

#[test]
fn result_does_not_mutate_input() {
    let b: Board = "X...O....".parse().unwrap();
    let before = b;
    let next = result(&b, Move::new(2, 2)).unwrap();
    assert_eq!(b, before);
    assert_eq!(b.cell(2, 2), Some(Cell::Empty));
    assert_eq!(next.cell(2, 2), Some(Cell::X));
    assert_eq!(next.occupied(), b.occupied() + 1);
}

#[test]
fn result_assigns_mark_of_player_to_move() {
    let b: Board = "X........".parse().unwrap();
    let next = result(&b, Move::new(1, 1)).unwrap();
    assert_eq!(next.cell(1, 1), Some(Cell::O));
}

#[test]
fn result_rejects_occupied_cell() {
    let b: Board = "X........".parse().unwrap();
    let err = result(&b, Move::new(0, 0)).unwrap_err();
    assert!(matches!(err, Error::InvalidMove { row: 0, col: 0 }), "got {err:?}");
}

#[test]
fn result_rejects_out_of_range() {
    let b = initial_state();
    for mv in [Move::new(3, 0), Move::new(0, 3), Move::new(7, 7), Move::new(usize::MAX, 0)] {
        let err = result(&b, mv).unwrap_err();
        assert!(matches!(err, Error::InvalidMove { .. }), "expected InvalidMove for {mv:?}, got {err:?}");
    }
}

#[test]
fn result_requires_a_move() {
    let b = initial_state();
    let err = result(&b, None::<Move>).unwrap_err();
    assert!(matches!(err, Error::MissingMove), "got {err:?}");
}

#[test]
fn full_board_without_line_is_a_terminal_draw() {
    let b: Board = "XOX/XOO/OXX".parse().unwrap();
    assert!(b.is_full());
    assert_eq!(winner(&b), None);
    assert!(terminal(&b));
    assert_eq!(utility(&b), 0);
}

#[test]
fn winner_finds_every_line() {
    for line in WINNING_LINES {
        let b = line_board(line, Cell::X);
        assert_eq!(winner(&b), Some(Player::X), "line {line:?}");
        assert!(terminal(&b));
        assert_eq!(utility(&b), 1);

        let b = line_board(line, Cell::O);
        assert_eq!(winner(&b), Some(Player::O), "line {line:?}");
        assert_eq!(utility(&b), -1);
    }
}

#[test]
fn winner_main_diagonal() {
    let b = initial_state()
        .place(Move::new(0, 0), Player::X)
        .place(Move::new(1, 1), Player::X)
        .place(Move::new(2, 2), Player::X);
    assert_eq!(winner(&b), Some(Player::X));
}

#[test]
fn open_board_is_not_terminal() {
    let b: Board = "XX.OO....".parse().unwrap();
    assert_eq!(winner(&b), None);
    assert!(!terminal(&b));
    assert_eq!(utility(&b), 0);
    assert!(!terminal(&initial_state()));
}

#[test]
fn two_lines_of_different_marks_do_not_crash() {
    let b: Board = "XXX/OOO/...".parse().unwrap();
    // Row order decides which line is reported first
    assert_eq!(winner(&b), Some(Player::X));
    assert!(terminal(&b));
}

#[test]
fn replay_stops_at_illegal_move() {
    let b = replay(&[Move::new(0, 0), Move::new(1, 1)]).unwrap();
    assert_eq!(b.encode(), "X...O....");
    assert!(matches!(replay(&[Move::new(0, 0), Move::new(0, 0)]), Err(Error::InvalidMove { .. })));
}
