//! Minimax search with alpha-beta pruning over a shared board.
//!
//! The engine never copies the board while recursing: each child is reached
//! by `place`, searched, and undone by `retract` with the winner captured
//! beforehand. The board handed to [`SearchEngine::select_move`] is returned
//! in exactly the state it was received.

use std::time::{Duration, Instant};

use log::{debug, trace, warn};
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use super::{
    config::SearchConfig,
    eval::evaluate,
    ordering::{opening_candidates, ordered_moves},
};
use crate::{
    Error, Result,
    ports::Participant,
    tictactoe::{BoardState, Player},
};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Result of one search frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Best move at this frame; `None` for leaves
    pub position: Option<usize>,
    pub score: i32,
}

impl SearchOutcome {
    fn leaf(score: i32) -> Self {
        Self {
            position: None,
            score,
        }
    }
}

/// Diagnostics recorded for one move decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveStats {
    pub position: usize,
    pub nodes: u64,
    pub elapsed: Duration,
    /// Depth searched; `None` when unbounded or when the opening rule fired
    pub depth: Option<u32>,
    /// Root score; `None` for the opening shortcut
    pub score: Option<i32>,
    pub opening: bool,
    pub timed_out: bool,
}

/// Search-based participant playing a fixed symbol.
pub struct SearchEngine {
    name: String,
    player: Player,
    config: SearchConfig,
    rng: StdRng,
    nodes: u64,
    last_elapsed: Duration,
    timed_out: bool,
    history: Vec<MoveStats>,
}

impl SearchEngine {
    /// Create an engine playing `player`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when the configuration does
    /// not validate.
    pub fn new(player: Player, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            name: format!("Search ({player})"),
            player,
            rng: build_rng(config.seed),
            config,
            nodes: 0,
            last_elapsed: Duration::ZERO,
            timed_out: false,
            history: Vec::new(),
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Nodes visited by the most recent decision
    pub fn nodes_explored(&self) -> u64 {
        self.nodes
    }

    /// Wall time spent on the most recent decision
    pub fn last_move_elapsed(&self) -> Duration {
        self.last_elapsed
    }

    /// One entry per decision, oldest first
    pub fn history(&self) -> &[MoveStats] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Reseed the opening tie-break
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Choose a move for this engine's player.
    ///
    /// The board is mutated during the search and restored before
    /// returning. A legal index is always returned while one exists, even
    /// when the time budget runs out.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] if the board already has a winner and
    /// [`Error::NoValidMoves`] if it is full.
    pub fn select_move(&mut self, board: &mut BoardState) -> Result<usize> {
        if board.winner().is_some() {
            return Err(Error::GameOver);
        }
        if !board.has_empty_squares() {
            return Err(Error::NoValidMoves);
        }

        self.nodes = 0;
        self.timed_out = false;
        let start = Instant::now();
        let deadline = self.config.effective_time_limit().map(|limit| start + limit);

        let (position, depth, score, opening) = if board.is_pristine() {
            let candidates = opening_candidates(board.size());
            let position = *candidates.choose(&mut self.rng).ok_or(Error::NoValidMoves)?;
            trace!("{}: opening move {position} without search", self.name);
            (position, None, None, true)
        } else {
            let depth = self.config.effective_depth(board.size());
            let outcome = self.minimax(board, self.player, i32::MIN, i32::MAX, depth, deadline);
            let position = match outcome.position {
                Some(position) => position,
                None => {
                    if self.timed_out {
                        warn!(
                            "{}: deadline expired before any move was searched, using ordering fallback",
                            self.name
                        );
                    } else {
                        debug!(
                            "{}: depth limit reached at the root, using ordering fallback",
                            self.name
                        );
                    }
                    self.candidate_moves(board)
                        .first()
                        .copied()
                        .ok_or(Error::NoValidMoves)?
                }
            };
            (position, depth, Some(outcome.score), false)
        };

        self.last_elapsed = start.elapsed();
        debug!(
            "{} chose {position}: {} nodes in {:?} (depth {depth:?}, score {score:?}, timed out {})",
            self.name, self.nodes, self.last_elapsed, self.timed_out
        );
        self.history.push(MoveStats {
            position,
            nodes: self.nodes,
            elapsed: self.last_elapsed,
            depth,
            score,
            opening,
            timed_out: self.timed_out,
        });
        Ok(position)
    }

    fn candidate_moves(&self, board: &BoardState) -> Vec<usize> {
        if self.config.move_ordering {
            ordered_moves(board)
        } else {
            board.available_moves()
        }
    }

    fn expired(&mut self, deadline: Option<Instant>) -> bool {
        let expired = deadline.is_some_and(|deadline| Instant::now() >= deadline);
        self.timed_out |= expired;
        expired
    }

    /// One frame of the search; `mover` is the player about to move.
    ///
    /// Checks run in a fixed order: deadline, previous mover's win, full
    /// board, depth. Leaves never return the alpha/beta sentinels.
    fn minimax(
        &mut self,
        board: &mut BoardState,
        mover: Player,
        mut alpha: i32,
        mut beta: i32,
        depth: Option<u32>,
        deadline: Option<Instant>,
    ) -> SearchOutcome {
        self.nodes += 1;

        if self.expired(deadline) {
            return SearchOutcome::leaf(evaluate(board, self.player));
        }

        let just_moved = mover.opponent();
        if board.winner() == Some(just_moved) {
            // Fewer empty cells means a later result: win fast, lose slow
            let magnitude = board.empty_count() as i32 + 1;
            let score = if just_moved == self.player {
                magnitude
            } else {
                -magnitude
            };
            return SearchOutcome::leaf(score);
        }

        if !board.has_empty_squares() {
            return SearchOutcome::leaf(0);
        }

        if depth == Some(0) {
            return SearchOutcome::leaf(evaluate(board, self.player));
        }

        let maximizing = mover == self.player;
        let mut best = SearchOutcome {
            position: None,
            score: if maximizing { i32::MIN } else { i32::MAX },
        };
        let child_depth = depth.map(|d| d - 1);

        for index in self.candidate_moves(board) {
            let prior_winner = board.winner();
            if board.place(index, mover).is_err() {
                continue;
            }
            let child = self.minimax(board, just_moved, alpha, beta, child_depth, deadline);
            board.retract(index, prior_winner);

            if maximizing {
                if child.score > best.score {
                    best = SearchOutcome {
                        position: Some(index),
                        score: child.score,
                    };
                }
                alpha = alpha.max(best.score);
            } else {
                if child.score < best.score {
                    best = SearchOutcome {
                        position: Some(index),
                        score: child.score,
                    };
                }
                beta = beta.min(best.score);
            }

            if self.config.pruning && beta <= alpha {
                break;
            }
            if self.expired(deadline) {
                break;
            }
        }

        best
    }
}

impl Participant for SearchEngine {
    fn name(&self) -> &str {
        &self.name
    }

    fn player(&self) -> Player {
        self.player
    }

    fn select_move(&mut self, board: &mut BoardState) -> Result<usize> {
        SearchEngine::select_move(self, board)
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.reseed(seed);
        Ok(())
    }
}
