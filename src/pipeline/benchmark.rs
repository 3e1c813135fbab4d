//! Search comparison benchmark: pruning and ordering on versus off
//!
//! Each mode makes one decision from a fixed set of mid-game positions and
//! reports node counts and timings, so the effect of alpha-beta cutoffs and
//! centre-first ordering can be read side by side.

use std::{fmt, time::Duration};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    search::{SearchConfig, SearchEngine},
    tictactoe::{BoardState, Player},
};

/// Search variant being measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchMode {
    /// Alpha-beta with centre-first ordering
    PruneOn,
    /// Alpha-beta over moves in index order
    OrderOff,
    /// Plain minimax, ordering on
    PruneOff,
}

impl SearchMode {
    pub const ALL: [SearchMode; 3] = [SearchMode::PruneOn, SearchMode::OrderOff, SearchMode::PruneOff];

    pub fn apply(self, config: SearchConfig) -> SearchConfig {
        match self {
            SearchMode::PruneOn => config.with_pruning(true).with_move_ordering(true),
            SearchMode::OrderOff => config.with_pruning(true).with_move_ordering(false),
            SearchMode::PruneOff => config.with_pruning(false).with_move_ordering(true),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SearchMode::PruneOn => "PRUNE_ON",
            SearchMode::OrderOff => "ORDER_OFF",
            SearchMode::PruneOff => "PRUNE_OFF",
        };
        f.pad(label)
    }
}

fn to_index(n: usize, r: usize, c: usize) -> usize {
    r * n + c
}

/// Deterministic start positions for a board of size `n` (n ≥ 3).
///
/// Odd boards vary the centre and corners; even boards vary the four
/// middle cells and the corners.
pub fn benchmark_positions(n: usize) -> Vec<Vec<(usize, Player)>> {
    use Player::{O, X};

    if !n.is_multiple_of(2) {
        let m = n / 2;
        let centre = to_index(n, m, m);
        vec![
            vec![(centre, O)],
            vec![(centre, X)],
            vec![(centre, O), (to_index(n, 0, 0), X)],
            vec![(centre, X), (to_index(n, 0, n - 1), O)],
            vec![(to_index(n, 0, 0), X), (to_index(n, n - 1, n - 1), O)],
            vec![(to_index(n, 0, 0), X), (to_index(n, m, m - 1), O)],
        ]
    } else {
        let (a, b) = (n / 2 - 1, n / 2);
        let centres = [
            to_index(n, a, a),
            to_index(n, a, b),
            to_index(n, b, a),
            to_index(n, b, b),
        ];
        vec![
            vec![(centres[0], O)],
            vec![(centres[1], X)],
            vec![(centres[0], X), (centres[3], O)],
            vec![(to_index(n, 0, 0), X), (centres[2], O)],
            vec![(to_index(n, 0, 0), X), (to_index(n, n - 1, n - 1), O)],
            vec![(to_index(n, 0, 0), O), (to_index(n, 0, n - 2), X)],
        ]
    }
}

/// Nodes and elapsed time for one decision by X from `start`
pub fn benchmark_one_move(
    n: usize,
    config: SearchConfig,
    start: &[(usize, Player)],
) -> Result<(u64, Duration)> {
    let mut board = BoardState::with_marks(n, start)?;
    let mut engine = SearchEngine::new(Player::X, config)?;
    engine.select_move(&mut board)?;
    Ok((engine.nodes_explored(), engine.last_move_elapsed()))
}

/// Settings for [`run_comparison`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonConfig {
    pub sizes: Vec<usize>,
    /// Search settings shared by every mode; pruning and ordering are overridden
    pub search: SearchConfig,
    /// Repetitions per start position
    pub repeats: usize,
}

/// Averages for one board size and mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub size: usize,
    pub depth: Option<u32>,
    pub time_limit_ms: u64,
    pub mode: SearchMode,
    pub avg_nodes: u64,
    pub avg_ms: f64,
    pub nodes_per_sec: f64,
}

/// Run every [`SearchMode`] over [`benchmark_positions`] for each size
///
/// # Errors
///
/// Returns [`Error::InvalidConfiguration`] for sizes below 3 or zero repeats.
pub fn run_comparison(config: &ComparisonConfig) -> Result<Vec<ComparisonRow>> {
    if config.repeats == 0 {
        return Err(Error::InvalidConfiguration {
            message: "repeats must be at least 1".to_string(),
        });
    }
    if let Some(&size) = config.sizes.iter().find(|&&size| size < 3) {
        return Err(Error::InvalidConfiguration {
            message: format!("benchmark positions need a board of at least 3x3, got {size}"),
        });
    }

    let mut rows = Vec::new();
    for &n in &config.sizes {
        let positions = benchmark_positions(n);
        for mode in SearchMode::ALL {
            let search = mode.apply(config.search.clone());
            let mut nodes = Vec::new();
            let mut millis = Vec::new();

            for start in &positions {
                for _ in 0..config.repeats {
                    let (count, elapsed) = benchmark_one_move(n, search.clone(), start)?;
                    nodes.push(count);
                    millis.push(elapsed.as_secs_f64() * 1000.0);
                }
            }

            let avg_nodes = nodes.iter().sum::<u64>() / nodes.len() as u64;
            let avg_ms = millis.iter().sum::<f64>() / millis.len() as f64;
            let nodes_per_sec = if avg_ms > 0.0 {
                avg_nodes as f64 / (avg_ms / 1000.0)
            } else {
                0.0
            };
            debug!("{n}x{n} {mode}: {avg_nodes} nodes, {avg_ms:.2} ms");

            rows.push(ComparisonRow {
                size: n,
                depth: search.effective_depth(n),
                time_limit_ms: search
                    .effective_time_limit()
                    .map_or(0, |limit| limit.as_millis() as u64),
                mode,
                avg_nodes,
                avg_ms,
                nodes_per_sec,
            });
        }
    }
    Ok(rows)
}
