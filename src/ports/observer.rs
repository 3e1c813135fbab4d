//! Observer port - hooks into games and match series
//!
//! Observers collect data or print progress without the driver knowing
//! about output formats.

use crate::{
    Result,
    tictactoe::{BoardState, GameOutcome, Move},
};

/// Observer trait for monitoring games.
///
/// Methods are called in this order:
/// 1. `on_series_start(total_games)` - once, when a series is run
/// 2. For each game:
///    - `on_game_start(game_num, board)`
///    - `on_move(game_num, mv, board)` - after each placement
///    - `on_game_end(game_num, outcome, board)`
/// 3. `on_series_end()` - once, when a series is run
///
/// Every method defaults to a no-op.
pub trait Observer {
    fn on_series_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    fn on_game_start(&mut self, _game_num: usize, _board: &BoardState) -> Result<()> {
        Ok(())
    }

    /// Called after `mv` has been placed; `board` shows the new position
    fn on_move(&mut self, _game_num: usize, _mv: Move, _board: &BoardState) -> Result<()> {
        Ok(())
    }

    fn on_game_end(
        &mut self,
        _game_num: usize,
        _outcome: GameOutcome,
        _board: &BoardState,
    ) -> Result<()> {
        Ok(())
    }

    fn on_series_end(&mut self) -> Result<()> {
        Ok(())
    }
}
