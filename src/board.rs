//! Board value types: cells, players, moves and the 3x3 grid

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const SIZE: usize = 3;
pub const CELLS: usize = SIZE * SIZE;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The player owning this mark, `None` for an empty cell.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }
}

/// X always moves first and is the maximizing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

impl FromStr for Player {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "x" => Ok(Player::X),
            "o" => Ok(Player::O),
            other => Err(format!("invalid player '{other}': use 'x' or 'o'")),
        }
    }
}

/// Zero-based (row, col) target cell. Coordinates are not range-checked
/// here; `rules::result` rejects anything outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// Row-major index into the flattened grid. Only meaningful when in bounds.
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    pub fn from_index(idx: usize) -> Self {
        Self::new(idx / SIZE, idx % SIZE)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Move {
    type Err = Error;

    /// Accepts "r,c", "r c" or "rc".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: Vec<usize> = s
            .chars()
            .filter(|c| !matches!(c, ',' | ' ' | '(' | ')'))
            .map(|c| c.to_digit(10).map(|d| d as usize))
            .collect::<Option<Vec<usize>>>()
            .ok_or_else(|| Error::ParseMove { input: s.to_string() })?;
        match digits.as_slice() {
            &[row, col] if row < SIZE && col < SIZE => Ok(Move::new(row, col)),
            _ => Err(Error::ParseMove { input: s.to_string() }),
        }
    }
}

/// One game position. Nine one-byte cells, so copying is the derivation
/// strategy: a derived board never shares storage with its source.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; CELLS]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Cell at (row, col), `None` when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        let mv = Move::new(row, col);
        mv.in_bounds().then(|| self.cells[mv.index()])
    }

    /// New board with `mv` set to `player`'s mark; `self` is left untouched.
    ///
    /// # Panics
    ///
    /// If `mv` is out of bounds. Legality is checked by `rules::result`.
    pub fn place(&self, mv: Move, player: Player) -> Board {
        let mut next = *self;
        next.cells[mv.index()] = player.to_cell();
        next
    }

    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied() == CELLS
    }

    fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Compact row-major encoding, e.g. `"X.O......"`.
    pub fn encode(&self) -> String {
        self.cells.iter().map(|c| c.to_char()).collect()
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace() && *c != '/' && *c != '|').collect();
        if chars.len() != CELLS {
            return Err(Error::InvalidBoardLength {
                expected: CELLS,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELLS];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let board = Board { cells };
        let (x_count, o_count) = (board.count(Cell::X), board.count(Cell::O));
        if x_count != o_count && x_count != o_count + 1 {
            return Err(Error::InvalidPieceCounts { x_count, o_count });
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   0 1 2")?;
        for row in 0..SIZE {
            write!(f, "{row} ")?;
            for col in 0..SIZE {
                write!(f, " {}", self.cells[row * SIZE + col].to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
