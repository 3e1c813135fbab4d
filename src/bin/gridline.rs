//! gridline CLI - n×n tic-tac-toe against an alpha-beta search engine
//!
//! This CLI provides:
//! - Interactive games between humans, random players and the engine
//! - Search-vs-random match series across board sizes
//! - Pruning and move-ordering comparisons

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

#[derive(Parser)]
#[command(name = "gridline")]
#[command(version, about = "Generalised tic-tac-toe with a bounded search opponent", long_about = None)]
struct Cli {
    /// Log search decisions (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game
    Play(gridline::cli::commands::play::PlayArgs),

    /// Benchmark the search engine
    Bench(gridline::cli::commands::bench::BenchArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    match cli.command {
        Commands::Play(args) => gridline::cli::commands::play::execute(args),
        Commands::Bench(args) => gridline::cli::commands::bench::execute(args),
    }
}
