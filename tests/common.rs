//! Common test utilities for the gridline test suite.

#![allow(dead_code)]

use gridline::{BoardState, Player};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Build a board from `(index, player)` marks, panicking on bad input.
pub fn build_state(size: usize, marks: &[(usize, Player)]) -> BoardState {
    BoardState::with_marks(size, marks).expect("test marks must be legal")
}

/// Play uniformly random alternating moves from an empty board until the
/// game ends or `max_moves` marks have been placed.
///
/// Returns the board together with every intermediate position, oldest first.
pub fn random_game(size: usize, seed: u64, max_moves: usize) -> (BoardState, Vec<BoardState>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = BoardState::new(size).expect("positive size");
    let mut history = vec![board.clone()];
    let mut player = Player::X;

    while !board.is_terminal() && history.len() <= max_moves {
        let moves = board.available_moves();
        let index = moves[rng.random_range(0..moves.len())];
        board.place(index, player).expect("available move");
        history.push(board.clone());
        player = player.opponent();
    }
    (board, history)
}
