//! Game driving and benchmarking on top of the search core
//!
//! This module provides:
//! - The turn-alternating game driver and search-vs-random series
//! - Random and human participants
//! - Console and progress-bar observers
//! - The pruning/ordering comparison benchmark

pub mod benchmark;
pub mod matches;
pub mod observers;
pub mod participants;

pub use benchmark::{
    ComparisonConfig, ComparisonRow, SearchMode, benchmark_one_move, benchmark_positions,
    run_comparison,
};
pub use matches::{GameRecord, SeriesConfig, SeriesResult, play_game, run_series};
pub use observers::{BoardPrinter, ProgressObserver};
pub use participants::{HumanParticipant, RandomParticipant};

pub use crate::ports::{Observer, Participant};
