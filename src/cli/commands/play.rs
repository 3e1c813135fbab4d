//! Play command - Play a single game on an n×n board

use std::{io, time::Duration};

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::{
    cli::{
        config::{PlayerKind, SearchArgs, create_participant},
        output::print_kv,
    },
    pipeline::{BoardPrinter, Observer, Participant, play_game},
    tictactoe::{GameOutcome, Player},
};

/// Time budget for search players when none is given
pub const DEFAULT_PLAY_TIME_LIMIT_MS: u64 = 200;

#[derive(Parser, Debug)]
#[command(about = "Play one game between humans, random players and the search engine")]
pub struct PlayArgs {
    /// Board size n (n in a row wins)
    #[arg(long, short = 'n', default_value_t = 3)]
    pub size: usize,

    /// Who plays X
    #[arg(long, value_enum, default_value = "human")]
    pub x: PlayerKind,

    /// Who plays O
    #[arg(long, value_enum, default_value = "search")]
    pub o: PlayerKind,

    #[command(flatten)]
    pub search: SearchArgs,

    /// Pause after each move, in milliseconds
    #[arg(long, default_value_t = 0)]
    pub pause_ms: u64,

    /// Only print the result
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    if args.size == 0 {
        return Err(anyhow!("Board size must be at least 1"));
    }
    if args.quiet && (args.x == PlayerKind::Human || args.o == PlayerKind::Human) {
        return Err(anyhow!("--quiet hides the board, which a human player needs"));
    }

    let config = args.search.to_config(Some(DEFAULT_PLAY_TIME_LIMIT_MS))?;
    // Distinct streams for the two seats when seeded
    let o_config = match config.seed {
        Some(seed) => config.clone().with_seed(seed.wrapping_add(1)),
        None => config.clone(),
    };

    let mut x = create_participant(args.x, Player::X, &config)?;
    let mut o = create_participant(args.o, Player::O, &o_config)?;

    let mut observers: Vec<Box<dyn Observer>> = Vec::new();
    if !args.quiet {
        print_kv("X", x.name());
        print_kv("O", o.name());
        println!();
        observers.push(Box::new(
            BoardPrinter::new(io::stdout()).with_pause(Duration::from_millis(args.pause_ms)),
        ));
    }

    let record = play_game(args.size, &mut *x, &mut *o, &mut observers, 0)?;

    if args.quiet {
        match record.outcome {
            GameOutcome::Win(player) => println!("{player} wins!"),
            GameOutcome::Draw => println!("It's a tie!"),
        }
    }
    Ok(())
}
