use std::fmt;
use std::str::FromStr;

use super::types::Mark;

pub const CELL_COUNT: usize = 9;

/// Rows, columns and diagonals of the 3x3 grid, as row-major cell indices.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn get(&self, cell: usize) -> Mark {
        self.cells[cell]
    }

    /// Unchecked write used by the search, which only ever passes empty cells.
    pub fn set(&mut self, cell: usize, mark: Mark) {
        self.cells[cell] = mark;
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    /// Does not look for a winner: a full board can also hold a completed line.
    pub fn is_draw(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn is_winner(&self, mark: Mark) -> bool {
        WIN_LINES
            .iter()
            .any(|line| line.iter().all(|&cell| self.cells[cell] == mark))
    }

    pub fn available_moves(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Mark::Empty)
            .map(|(index, _)| index)
    }

    pub fn is_valid_move(&self, cell: usize) -> bool {
        cell < CELL_COUNT && self.cells[cell] == Mark::Empty
    }

    pub fn place_mark(&mut self, cell: usize, mark: Mark) -> Result<(), String> {
        if cell >= CELL_COUNT {
            return Err("Position out of bounds".to_string());
        }
        if self.cells[cell] != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }
        self.cells[cell] = mark;
        Ok(())
    }

    /// Places `mark` on `cell`, runs `f` against the board and clears the cell
    /// again before handing back `f`'s result.
    pub fn with_mark<R>(&mut self, cell: usize, mark: Mark, f: impl FnOnce(&mut Board) -> R) -> R {
        debug_assert_eq!(self.cells[cell], Mark::Empty);
        self.cells[cell] = mark;
        let result = f(self);
        self.cells[cell] = Mark::Empty;
        result
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for row in 0..3 {
            let base = row * 3;
            writeln!(
                f,
                "{} | {} | {}",
                self.cells[base],
                self.cells[base + 1],
                self.cells[base + 2]
            )?;
            if row < 2 {
                writeln!(f, "--+---+--")?;
            }
        }
        writeln!(f)
    }
}

/// Parses a layout such as `"XX_ XOO __O"`: `X`, `O` or `_` per cell, whitespace ignored.
impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut count = 0;
        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            if count == CELL_COUNT {
                return Err(format!("Board layout has more than {} cells", CELL_COUNT));
            }
            board.cells[count] = match ch {
                'X' | 'x' => Mark::X,
                'O' | 'o' => Mark::O,
                '_' | '.' => Mark::Empty,
                other => return Err(format!("Unexpected board character '{}'", other)),
            };
            count += 1;
        }
        if count != CELL_COUNT {
            return Err(format!("Board layout has {} cells, expected {}", count, CELL_COUNT));
        }
        Ok(board)
    }
}
