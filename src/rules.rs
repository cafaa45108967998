//! Game rules as pure functions over a `Board`.
//!
//! Whose turn it is is never stored: it is derived from the number of
//! occupied cells, so it cannot drift out of sync with the grid.

use crate::board::{Board, Cell, Move, Player, CELLS};
use crate::error::{Error, Result};

/// Winning triples over the row-major flattening of the grid.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

pub fn initial_state() -> Board {
    Board::empty()
}

/// X on an even number of occupied cells, O otherwise.
pub fn player(board: &Board) -> Player {
    if board.occupied() % 2 == 0 { Player::X } else { Player::O }
}

/// Empty cells in row-major order. Empty iff the board is full.
pub fn actions(board: &Board) -> Vec<Move> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_empty())
        .map(|(idx, _)| Move::from_index(idx))
        .collect()
}

/// Board after `action` is played by whoever is to move.
///
/// Fails with `MissingMove` on `None`, and with `InvalidMove` when the target
/// is off the grid or already occupied. The input board is never modified.
pub fn result(board: &Board, action: impl Into<Option<Move>>) -> Result<Board> {
    let mv = action.into().ok_or(Error::MissingMove)?;
    match board.cell(mv.row, mv.col) {
        Some(Cell::Empty) => Ok(board.place(mv, player(board))),
        _ => Err(Error::InvalidMove { row: mv.row, col: mv.col }),
    }
}

/// Mark of the first line found with three equal non-empty cells.
pub fn winner(board: &Board) -> Option<Player> {
    let cells = board.cells();
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        if cells[a] == cells[b] && cells[b] == cells[c] {
            cells[a].player()
        } else {
            None
        }
    })
}

/// A win, or a full board (draw). A full board without a winner is still terminal.
pub fn terminal(board: &Board) -> bool {
    board.occupied() == CELLS || winner(board).is_some()
}

/// +1 if X won, -1 if O won, 0 otherwise. Only meaningful on terminal boards.
pub fn utility(board: &Board) -> i32 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Replays `moves` from the empty board.
pub fn replay(moves: &[Move]) -> Result<Board> {
    moves.iter().try_fold(initial_state(), |b, &mv| result(&b, mv))
}
