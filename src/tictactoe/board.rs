//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::{Line, LineAnalyzer};

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
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
            '.' | '-' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
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

/// An n×n board with incremental win tracking.
///
/// The winner is recorded by [`BoardState::place`] from the lines through the
/// placed cell only, so it cannot be recomputed cheaply. Search code that
/// undoes a placement must hand the value it saw beforehand back to
/// [`BoardState::retract`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    size: usize,
    cells: Vec<Cell>,
    winner: Option<Player>,
}

impl BoardState {
    /// Create an empty board with `size` rows and columns
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidBoardSize`] when `size` is zero.
    pub fn new(size: usize) -> Result<Self, crate::Error> {
        if size == 0 {
            return Err(crate::Error::InvalidBoardSize { size });
        }
        Ok(BoardState {
            size,
            cells: vec![Cell::Empty; size * size],
            winner: None,
        })
    }

    /// Build a position by placing each `(index, player)` mark in order.
    ///
    /// Marks go through [`BoardState::place`], so turn order is not enforced
    /// but a completed line still records its winner.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridline::tictactoe::{BoardState, Player};
    ///
    /// let board = BoardState::with_marks(3, &[(0, Player::X), (4, Player::X), (8, Player::X)])?;
    /// assert_eq!(board.winner(), Some(Player::X));
    /// # Ok::<(), gridline::Error>(())
    /// ```
    pub fn with_marks(size: usize, marks: &[(usize, Player)]) -> Result<Self, crate::Error> {
        let mut board = Self::new(size)?;
        for &(index, player) in marks {
            board.place(index, player)?;
        }
        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (n²)
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get cell at a flat index, `None` when out of range
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Player who completed a line, if any
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Indices of empty cells in ascending order
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of empty cells (full scan)
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Cell::Empty).count()
    }

    /// Whether any cell is still empty; stops at the first one found
    pub fn has_empty_squares(&self) -> bool {
        self.cells.contains(&Cell::Empty)
    }

    /// Whether no mark has been placed yet
    pub fn is_pristine(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Cell::Empty)
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some() || !self.has_empty_squares()
    }

    /// Place `player`'s mark on an empty cell.
    ///
    /// Only the row, column and diagonals through `index` are inspected for a
    /// completed line. The first completed line fixes the winner; later
    /// placements never replace it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] for an index outside the
    /// board and [`crate::Error::InvalidMove`] for an occupied cell. The
    /// board is unchanged in both cases.
    pub fn place(&mut self, index: usize, player: Player) -> Result<(), crate::Error> {
        match self.cells.get(index) {
            None => {
                return Err(crate::Error::InvalidPosition {
                    position: index,
                    cells: self.cells.len(),
                });
            }
            Some(Cell::Empty) => {}
            Some(_) => return Err(crate::Error::InvalidMove { position: index }),
        }

        self.cells[index] = player.to_cell();
        if self.winner.is_none() && self.completes_line(index, player) {
            self.winner = Some(player);
        }
        Ok(())
    }

    /// Undo a placement made by search backtracking.
    ///
    /// `prior_winner` must be the value of [`BoardState::winner`] captured
    /// just before the matching `place`; nothing is recomputed.
    pub fn retract(&mut self, index: usize, prior_winner: Option<Player>) {
        if let Some(cell) = self.cells.get_mut(index) {
            debug_assert_ne!(*cell, Cell::Empty, "retracting an empty cell");
            *cell = Cell::Empty;
        }
        self.winner = prior_winner;
    }

    fn completes_line(&self, index: usize, player: Player) -> bool {
        Line::through(self.size, index)
            .any(|line| LineAnalyzer::is_complete(&self.cells, self.size, line, player))
    }

    /// Render the board next to a grid of cell indices, one row per line
    pub fn render_with_indices(&self) -> String {
        let width = (self.cells.len() - 1).to_string().len();
        let mut out = String::new();
        for (r, row) in self.cells.chunks(self.size).enumerate() {
            let marks: Vec<String> = row
                .iter()
                .map(|&cell| match cell {
                    Cell::Empty => " ".repeat(width),
                    marked => format!("{:>width$}", marked.to_char()),
                })
                .collect();
            let indices: Vec<String> = (0..self.size)
                .map(|c| format!("{:>width$}", r * self.size + c))
                .collect();
            out.push_str(&format!(
                "| {} |    | {} |\n",
                marks.join(" | "),
                indices.join(" | ")
            ));
        }
        out
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.size).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for BoardState {
    type Err = crate::Error;

    /// Parse rows of `X`, `O` and `.`; `/`, `|` and whitespace are ignored.
    ///
    /// The size is inferred from the number of cells, which must be a
    /// perfect square. The winner is recovered with a full-line scan.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |message: String| crate::Error::InvalidBoard {
            input: s.to_string(),
            message,
        };

        let mut cells = Vec::new();
        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '/' && *c != '|') {
            let cell =
                Cell::from_char(c).ok_or_else(|| invalid(format!("invalid character '{c}'")))?;
            cells.push(cell);
        }

        let size = (1..=cells.len())
            .take_while(|n| n * n <= cells.len())
            .last()
            .filter(|n| n * n == cells.len())
            .ok_or_else(|| {
                invalid(format!(
                    "{} cells do not form a square board",
                    cells.len()
                ))
            })?;

        let x_wins = LineAnalyzer::has_won(&cells, size, Player::X);
        let o_wins = LineAnalyzer::has_won(&cells, size, Player::O);
        if x_wins && o_wins {
            return Err(invalid("both players cannot have winning lines".to_string()));
        }
        let winner = LineAnalyzer::winner(&cells, size);

        Ok(BoardState {
            size,
            cells,
            winner,
        })
    }
}
