//! Generalised n×n tic-tac-toe with a bounded alpha-beta search opponent
//!
//! This crate provides:
//! - A board with incremental win detection (n in a row on rows, columns and
//!   the two main diagonals)
//! - A minimax search engine with alpha-beta pruning, centre-first move
//!   ordering, a static line evaluator, a depth limit and a soft deadline
//! - Random and human participants, console observers and benchmarks
//!
//! # Examples
//!
//! ```
//! use gridline::{BoardState, Player, SearchConfig, SearchEngine};
//!
//! let mut board = BoardState::with_marks(3, &[(0, Player::X), (4, Player::X), (1, Player::O)])?;
//! let mut engine = SearchEngine::new(Player::X, SearchConfig::new())?;
//! assert_eq!(engine.select_move(&mut board)?, 8);
//! # Ok::<(), gridline::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{SearchConfig, SearchEngine};
pub use tictactoe::{BoardState, Cell, Player};
