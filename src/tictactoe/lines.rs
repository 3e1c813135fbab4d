//! Winning line analysis for n×n boards

use serde::{Deserialize, Serialize};

use super::{Cell, Player};

/// One of the 2n+2 lines of an n×n board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    Row(usize),
    Column(usize),
    MainDiagonal,
    AntiDiagonal,
}

impl Line {
    /// Flat indices covered by this line on a board of the given size
    pub fn indices(self, size: usize) -> impl Iterator<Item = usize> {
        (0..size).map(move |i| match self {
            Line::Row(r) => r * size + i,
            Line::Column(c) => i * size + c,
            Line::MainDiagonal => i * size + i,
            Line::AntiDiagonal => i * size + (size - 1 - i),
        })
    }

    /// All rows, then all columns, then both diagonals
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        (0..size)
            .map(Line::Row)
            .chain((0..size).map(Line::Column))
            .chain([Line::MainDiagonal, Line::AntiDiagonal])
    }

    /// Lines passing through `index`: its row and column, plus any diagonal it sits on
    pub fn through(size: usize, index: usize) -> impl Iterator<Item = Line> {
        let (r, c) = (index / size, index % size);
        let main = (r == c).then_some(Line::MainDiagonal);
        let anti = (r + c == size - 1).then_some(Line::AntiDiagonal);
        [Some(Line::Row(r)), Some(Line::Column(c)), main, anti]
            .into_iter()
            .flatten()
    }
}

/// Number of marks each player has in a line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCounts {
    pub x: usize,
    pub o: usize,
}

impl LineCounts {
    pub fn of(self, player: Player) -> usize {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}

/// Utility for full-board line scans.
///
/// [`BoardState::place`](super::BoardState::place) only inspects the lines through the placed cell; these
/// scans cover every line and are used for parsing, evaluation and checks.
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Count the marks of each player along `line`
    pub fn counts(cells: &[Cell], size: usize, line: Line) -> LineCounts {
        let mut counts = LineCounts::default();
        for idx in line.indices(size) {
            match cells[idx] {
                Cell::X => counts.x += 1,
                Cell::O => counts.o += 1,
                Cell::Empty => {}
            }
        }
        counts
    }

    /// Whether `line` is entirely filled by `player`
    pub fn is_complete(cells: &[Cell], size: usize, line: Line, player: Player) -> bool {
        let target = player.to_cell();
        line.indices(size).all(|idx| cells[idx] == target)
    }

    /// Check if a player owns any full row, column or diagonal
    pub fn has_won(cells: &[Cell], size: usize, player: Player) -> bool {
        Line::all(size).any(|line| Self::is_complete(cells, size, line, player))
    }

    /// The player owning a full line, if any. X is reported first when both do.
    pub fn winner(cells: &[Cell], size: usize) -> Option<Player> {
        [Player::X, Player::O]
            .into_iter()
            .find(|&player| Self::has_won(cells, size, player))
    }
}
