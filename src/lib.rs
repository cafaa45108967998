// Tic-tac-toe engine: value-type board, rules, exhaustive alpha-beta search
pub mod board;
pub mod error;
pub mod perft;
pub mod rules;
pub mod search;
pub mod selfplay;

pub use board::{Board, Cell, Move, Player};
pub use error::{Error, Result};
