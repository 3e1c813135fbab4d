//! Game-tree search: depth- and time-bounded minimax with alpha-beta pruning

pub mod config;
pub mod engine;
pub mod eval;
pub mod ordering;

pub use config::SearchConfig;
pub use engine::{MoveStats, SearchEngine, SearchOutcome};
pub use eval::evaluate;
pub use ordering::{centre_distance, opening_candidates, ordered_moves};
