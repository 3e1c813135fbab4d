//! Command-line interface: interactive games and search benchmarks

pub mod commands;
pub mod config;
pub mod output;
