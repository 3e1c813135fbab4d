//! Non-search participants: random baseline and interactive human

use std::io::{self, BufRead, Stdout, Write};

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    ports::Participant,
    tictactoe::{BoardState, Player},
};

/// Random policy participant (baseline)
pub struct RandomParticipant {
    name: String,
    player: Player,
    rng: StdRng,
}

impl RandomParticipant {
    /// Create a new random participant
    pub fn new(player: Player) -> Self {
        Self {
            name: format!("Random ({player})"),
            player,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random participant with a deterministic seed
    pub fn with_seed(player: Player, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ..Self::new(player)
        }
    }
}

impl Participant for RandomParticipant {
    fn name(&self) -> &str {
        &self.name
    }

    fn player(&self) -> Player {
        self.player
    }

    fn select_move(&mut self, board: &mut BoardState) -> Result<usize> {
        let moves = board.available_moves();
        if moves.is_empty() {
            return Err(Error::NoValidMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}

/// Participant that reads moves from a line-oriented input.
///
/// Unparsable or illegal entries are reported and the prompt repeats.
pub struct HumanParticipant<R, W> {
    name: String,
    player: Player,
    input: R,
    output: W,
}

impl HumanParticipant<io::StdinLock<'static>, Stdout> {
    /// Prompt on stdout and read from stdin
    pub fn stdio(player: Player) -> Self {
        Self::new(player, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanParticipant<R, W> {
    pub fn new(player: Player, input: R, output: W) -> Self {
        Self {
            name: format!("Human ({player})"),
            player,
            input,
            output,
        }
    }

    /// Consume the participant and return its output sink
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Participant for HumanParticipant<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn player(&self) -> Player {
        self.player
    }

    fn select_move(&mut self, board: &mut BoardState) -> Result<usize> {
        let moves = board.available_moves();
        if moves.is_empty() {
            return Err(Error::NoValidMoves);
        }
        let last = board.cell_count() - 1;

        loop {
            write!(
                self.output,
                "{}'s turn. Input move (0-{last}): ",
                self.player
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::InputClosed);
            }

            match line.trim().parse::<usize>() {
                Ok(index) if moves.contains(&index) => return Ok(index),
                _ => writeln!(self.output, "Invalid square. Try again.")?,
            }
        }
    }
}
