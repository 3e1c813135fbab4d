//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{BoardState, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// The winning player, `None` for a draw
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(player),
            GameOutcome::Draw => None,
        }
    }
}

/// A game in progress or finished, with its move history.
///
/// X always moves first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: BoardState,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Start a game on an empty `size`×`size` board
    pub fn new(size: usize) -> Result<Self, crate::Error> {
        Ok(Game {
            board: BoardState::new(size)?,
            moves: Vec::new(),
            outcome: None,
        })
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Mutable access for participants that search in place.
    ///
    /// Callers must leave the board as they found it; moves go through
    /// [`Game::play`].
    pub fn board_mut(&mut self) -> &mut BoardState {
        &mut self.board
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Player whose turn it is
    pub fn to_move(&self) -> Player {
        if self.moves.len().is_multiple_of(2) {
            Player::X
        } else {
            Player::O
        }
    }

    /// Play a move for the side to move
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once an outcome is set, or the
    /// placement error when the cell is occupied or out of range.
    pub fn play(&mut self, position: usize) -> Result<Turn, crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let player = self.to_move();
        self.board.place(position, player)?;
        self.moves.push(Move { position, player });

        if let Some(winner) = self.board.winner() {
            self.outcome = Some(GameOutcome::Win(winner));
        } else if !self.board.has_empty_squares() {
            self.outcome = Some(GameOutcome::Draw);
        }

        Ok(match self.outcome {
            Some(outcome) => Turn::Finished(outcome),
            None => Turn::Next(self.to_move()),
        })
    }
}

/// Result of [`Game::play`]: either the game ended or the next player moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Finished(GameOutcome),
    Next(Player),
}
