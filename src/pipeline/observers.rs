//! Observer implementations: console rendering and progress bars

use std::{io::Write, thread, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Result,
    ports::Observer,
    tictactoe::{BoardState, GameOutcome, Move, Player},
};

/// Prints each position next to its cell indices, then the result
pub struct BoardPrinter<W> {
    output: W,
    pause: Duration,
}

impl<W: Write> BoardPrinter<W> {
    pub fn new(output: W) -> Self {
        Self {
            output,
            pause: Duration::ZERO,
        }
    }

    /// Sleep after each move so a human can follow the game
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> Observer for BoardPrinter<W> {
    fn on_game_start(&mut self, _game_num: usize, board: &BoardState) -> Result<()> {
        let n = board.size();
        writeln!(self.output, "{n}x{n} board. Need {n} in a row to win.")?;
        write!(self.output, "{}", board.render_with_indices())?;
        writeln!(self.output)?;
        Ok(())
    }

    fn on_move(&mut self, _game_num: usize, mv: Move, board: &BoardState) -> Result<()> {
        writeln!(
            self.output,
            "{} makes a move to square {}",
            mv.player, mv.position
        )?;
        write!(self.output, "{}", board.render_with_indices())?;
        writeln!(self.output)?;
        self.output.flush()?;
        if !self.pause.is_zero() {
            thread::sleep(self.pause);
        }
        Ok(())
    }

    fn on_game_end(
        &mut self,
        _game_num: usize,
        outcome: GameOutcome,
        _board: &BoardState,
    ) -> Result<()> {
        match outcome {
            GameOutcome::Win(player) => writeln!(self.output, "{player} wins!")?,
            GameOutcome::Draw => writeln!(self.output, "It's a tie!")?,
        }
        self.output.flush()?;
        Ok(())
    }
}

/// Progress bar observer for match series
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    x_wins: usize,
    draws: usize,
    o_wins: usize,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            x_wins: 0,
            draws: 0,
            o_wins: 0,
        }
    }

    fn message(&self) -> String {
        format!("X:{} D:{} O:{}", self.x_wins, self.draws, self.o_wins)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_series_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(
        &mut self,
        game_num: usize,
        outcome: GameOutcome,
        _board: &BoardState,
    ) -> Result<()> {
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_series_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_printer_transcript() {
        let mut printer = BoardPrinter::new(Vec::new());
        let mut board = BoardState::new(3).unwrap();
        printer.on_game_start(0, &board).unwrap();

        board.place(4, Player::X).unwrap();
        let mv = Move {
            position: 4,
            player: Player::X,
        };
        printer.on_move(0, mv, &board).unwrap();
        printer.on_game_end(0, GameOutcome::Draw, &board).unwrap();

        let text = String::from_utf8(printer.into_inner()).unwrap();
        assert!(text.starts_with("3x3 board. Need 3 in a row to win.\n"));
        assert!(text.contains("X makes a move to square 4\n"));
        assert!(text.contains("|   | X |   |    | 3 | 4 | 5 |"));
        assert!(text.ends_with("It's a tie!\n"));
    }

    #[test]
    fn test_progress_observer_counts_without_bar() {
        let board = BoardState::new(3).unwrap();
        let mut progress = ProgressObserver::new();
        progress.on_game_end(0, GameOutcome::Win(Player::X), &board).unwrap();
        progress.on_game_end(1, GameOutcome::Draw, &board).unwrap();
        assert_eq!(progress.message(), "X:1 D:1 O:0");
    }
}
