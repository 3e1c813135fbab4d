//! Participant port - anything that can choose a move on a board

use crate::{
    Result,
    tictactoe::{BoardState, Player},
};

/// A player seat in a game: human prompt, random baseline or search engine.
///
/// # Examples
///
/// ```no_run
/// use gridline::{
///     ports::Participant,
///     tictactoe::{BoardState, Player},
/// };
///
/// struct FirstFree(Player);
///
/// impl Participant for FirstFree {
///     fn name(&self) -> &str {
///         "First free"
///     }
///
///     fn player(&self) -> Player {
///         self.0
///     }
///
///     fn select_move(&mut self, board: &mut BoardState) -> gridline::Result<usize> {
///         board
///             .available_moves()
///             .first()
///             .copied()
///             .ok_or(gridline::Error::NoValidMoves)
///     }
/// }
/// ```
pub trait Participant {
    /// Name used in logs and reports
    fn name(&self) -> &str;

    /// Symbol this participant places
    fn player(&self) -> Player;

    /// Choose an empty cell for [`Participant::player`].
    ///
    /// The board is mutable so search can explore in place; it must be left
    /// exactly as it was received.
    ///
    /// # Errors
    ///
    /// Returns an error if no move can be produced (finished board, closed
    /// input).
    fn select_move(&mut self, board: &mut BoardState) -> Result<usize>;

    /// Seed the participant's internal random number generator.
    ///
    /// # Default Implementation
    ///
    /// Does nothing, for deterministic participants.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}

impl<P: Participant + ?Sized> Participant for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn player(&self) -> Player {
        (**self).player()
    }

    fn select_move(&mut self, board: &mut BoardState) -> Result<usize> {
        (**self).select_move(board)
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        (**self).set_rng_seed(seed)
    }
}
