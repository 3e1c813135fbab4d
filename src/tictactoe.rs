//! n×n tic-tac-toe rules: board, lines and game records

pub mod board;
pub mod game;
pub mod lines;

pub use board::{BoardState, Cell, Player};
pub use game::{Game, GameOutcome, Move, Turn};
pub use lines::{Line, LineAnalyzer, LineCounts};
