//! Bench command - Match series against a random player and search comparisons

use std::{path::PathBuf, time::Duration};

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};

use crate::{
    cli::{
        config::SearchArgs,
        output::{export_json, format_depth, format_number, print_kv, print_section},
    },
    pipeline::{
        ComparisonConfig, Observer, ProgressObserver, SeriesConfig, SeriesResult, run_comparison,
        run_series,
    },
    tictactoe::Player,
};

/// Time budget per benchmarked decision when none is given
pub const DEFAULT_COMPARE_TIME_LIMIT_MS: u64 = 1000;

#[derive(Parser, Debug)]
#[command(about = "Benchmark the search engine")]
pub struct BenchArgs {
    #[command(subcommand)]
    pub command: BenchCommand,
}

#[derive(Subcommand, Debug)]
pub enum BenchCommand {
    /// Play the search engine against a random player, as X and as O
    Matches {
        /// Board sizes to test
        #[arg(long, value_delimiter = ',', default_value = "3,4,5,6,7,8,9,10")]
        sizes: Vec<usize>,

        /// Games per size per role
        #[arg(long, short = 'g', default_value_t = 50)]
        games: usize,

        #[command(flatten)]
        search: SearchArgs,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,

        /// Export results to JSON
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Compare node counts and timings with pruning and ordering toggled
    Compare {
        /// Board sizes to test (at least 3)
        #[arg(long, value_delimiter = ',', default_value = "3,4,5,6,7,8,9,10")]
        sizes: Vec<usize>,

        #[command(flatten)]
        search: SearchArgs,

        /// Repetitions per start position
        #[arg(long, short = 'r', default_value_t = 5)]
        repeats: usize,

        /// Export results to JSON
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

pub fn execute(args: BenchArgs) -> Result<()> {
    match args.command {
        BenchCommand::Matches {
            sizes,
            games,
            search,
            no_progress,
            export,
        } => run_matches(&sizes, games, &search, no_progress, export),
        BenchCommand::Compare {
            sizes,
            search,
            repeats,
            export,
        } => run_compare(sizes, &search, repeats, export),
    }
}

fn run_matches(
    sizes: &[usize],
    games: usize,
    search: &SearchArgs,
    no_progress: bool,
    export: Option<PathBuf>,
) -> Result<()> {
    if sizes.contains(&0) {
        return Err(anyhow!("Board sizes must be at least 1"));
    }
    let config = search.to_config(None)?;

    print_section("Search vs Random");
    print_kv("Games per role", &games.to_string());
    print_kv(
        "Time limit",
        &config
            .effective_time_limit()
            .map_or_else(|| "none".to_string(), |t| format!("{} ms", t.as_millis())),
    );

    let mut results: Vec<SeriesResult> = Vec::new();
    for &size in sizes {
        for search_player in [Player::X, Player::O] {
            let series = SeriesConfig {
                size,
                games,
                search_player,
                search: config.clone(),
                seed: config.seed,
            };
            let mut observers: Vec<Box<dyn Observer>> = Vec::new();
            if !no_progress {
                observers.push(Box::new(ProgressObserver::new()));
            }
            results.push(run_series(&series, &mut observers)?);
        }
    }

    println!();
    println!(
        "Size | Depth  | Role  | Games  | Wins  | Draws  | Losses  |  Win %  |  Draw % |  Loss %"
    );
    for r in &results {
        println!(
            "{:<4} | {:<6} | {:^5} | {:>6} | {:>5} | {:>6} | {:>7} | {:>6.2}% | {:>6.2}% | {:>6.2}%",
            r.size,
            format_depth(r.depth),
            r.search_player.to_string(),
            r.total_games,
            r.wins,
            r.draws,
            r.losses,
            r.win_rate * 100.0,
            r.draw_rate * 100.0,
            r.loss_rate * 100.0,
        );
    }

    if let Some(path) = export {
        export_json(&path, &results)?;
    }
    Ok(())
}

fn run_compare(
    sizes: Vec<usize>,
    search: &SearchArgs,
    repeats: usize,
    export: Option<PathBuf>,
) -> Result<()> {
    let mut config = search.to_config(Some(DEFAULT_COMPARE_TIME_LIMIT_MS))?;
    // Fixed seed so every mode faces the same openings
    if config.seed.is_none() {
        config = config.with_seed(0);
    }

    print_section("Pruning and Ordering Comparison");
    print_kv("Repeats", &repeats.to_string());
    print_kv(
        "Time limit",
        &format!(
            "{} ms",
            config
                .effective_time_limit()
                .unwrap_or(Duration::ZERO)
                .as_millis()
        ),
    );

    let rows = run_comparison(&ComparisonConfig {
        sizes,
        search: config,
        repeats,
    })?;

    println!();
    println!("Board | Depth | Time(ms) | Mode       | avg_nodes |  avg_ms | nodes/sec");
    let mut last_size = None;
    for row in &rows {
        if last_size.is_some_and(|size| size != row.size) {
            println!();
        }
        last_size = Some(row.size);
        println!(
            "{:<5} | {:>5} | {:>8} | {:10} | {:>9} | {:7.2} | {:>9}",
            format!("{0}x{0}", row.size),
            format_depth(row.depth),
            row.time_limit_ms,
            row.mode,
            format_number(row.avg_nodes),
            row.avg_ms,
            format_number(row.nodes_per_sec.round() as u64),
        );
    }

    if let Some(path) = export {
        export_json(&path, &rows)?;
    }
    Ok(())
}
