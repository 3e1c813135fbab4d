//! Game driver and search-vs-random match series

use log::info;
use serde::{Deserialize, Serialize};

use super::participants::RandomParticipant;
use crate::{
    Error, Result,
    ports::{Observer, Participant},
    search::{SearchConfig, SearchEngine},
    tictactoe::{Game, GameOutcome, Move, Player, Turn},
};

/// A finished game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub size: usize,
    pub moves: Vec<Move>,
    pub outcome: GameOutcome,
}

/// Play one game on an empty `size`×`size` board, X first.
///
/// # Errors
///
/// Returns [`Error::InvalidConfiguration`] if the participants are not
/// seated as X and O, and propagates participant errors and illegal moves.
pub fn play_game(
    size: usize,
    x: &mut dyn Participant,
    o: &mut dyn Participant,
    observers: &mut [Box<dyn Observer>],
    game_num: usize,
) -> Result<GameRecord> {
    if x.player() != Player::X || o.player() != Player::O {
        return Err(Error::InvalidConfiguration {
            message: format!(
                "participants must play X and O, got {} and {}",
                x.player(),
                o.player()
            ),
        });
    }

    let mut game = Game::new(size)?;
    for observer in observers.iter_mut() {
        observer.on_game_start(game_num, game.board())?;
    }

    let outcome = loop {
        let player = game.to_move();
        let seat: &mut dyn Participant = match player {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let position = seat.select_move(game.board_mut())?;
        let turn = game.play(position)?;

        let mv = Move { position, player };
        for observer in observers.iter_mut() {
            observer.on_move(game_num, mv, game.board())?;
        }

        if let Turn::Finished(outcome) = turn {
            break outcome;
        }
    };

    for observer in observers.iter_mut() {
        observer.on_game_end(game_num, outcome, game.board())?;
    }

    Ok(GameRecord {
        size,
        moves: game.moves().to_vec(),
        outcome,
    })
}

/// Configuration for a search-vs-random series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesConfig {
    pub size: usize,
    pub games: usize,
    /// Side the search engine plays
    pub search_player: Player,
    pub search: SearchConfig,
    /// Base seed; game `i` uses `seed + i` for both participants
    pub seed: Option<u64>,
}

/// Aggregate result of a series, from the search engine's point of view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesResult {
    pub size: usize,
    pub depth: Option<u32>,
    pub search_player: Player,
    pub total_games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub draw_rate: f64,
    pub loss_rate: f64,
    /// Mean nodes per searched (non-opening) move
    pub avg_nodes: f64,
}

impl SeriesResult {
    fn new(config: &SeriesConfig, wins: usize, draws: usize, losses: usize, avg_nodes: f64) -> Self {
        let total_games = wins + draws + losses;
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            size: config.size,
            depth: config.search.effective_depth(config.size),
            search_player: config.search_player,
            total_games,
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
            avg_nodes,
        }
    }
}

/// Play `config.games` games of the search engine against a random player
pub fn run_series(
    config: &SeriesConfig,
    observers: &mut [Box<dyn Observer>],
) -> Result<SeriesResult> {
    for observer in observers.iter_mut() {
        observer.on_series_start(config.games)?;
    }

    let (mut wins, mut draws, mut losses) = (0, 0, 0);
    let (mut searched_moves, mut total_nodes) = (0u64, 0u64);

    for game_num in 0..config.games {
        let mut search_config = config.search.clone();
        let mut random = RandomParticipant::new(config.search_player.opponent());
        if let Some(seed) = config.seed {
            let game_seed = seed.wrapping_add(game_num as u64);
            search_config.seed = Some(game_seed);
            random.set_rng_seed(game_seed)?;
        }
        let mut engine = SearchEngine::new(config.search_player, search_config)?;

        let record = match config.search_player {
            Player::X => play_game(config.size, &mut engine, &mut random, observers, game_num)?,
            Player::O => play_game(config.size, &mut random, &mut engine, observers, game_num)?,
        };

        match record.outcome.winner() {
            Some(winner) if winner == config.search_player => wins += 1,
            Some(_) => losses += 1,
            None => draws += 1,
        }
        for stats in engine.history().iter().filter(|stats| !stats.opening) {
            searched_moves += 1;
            total_nodes += stats.nodes;
        }
    }

    for observer in observers.iter_mut() {
        observer.on_series_end()?;
    }

    let avg_nodes = if searched_moves > 0 {
        total_nodes as f64 / searched_moves as f64
    } else {
        0.0
    };
    let result = SeriesResult::new(config, wins, draws, losses, avg_nodes);
    info!(
        "{}x{} as {}: {} wins, {} draws, {} losses",
        result.size, result.size, result.search_player, wins, draws, losses
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::BoardState;

    /// Always plays the given index, legal or not
    struct Stubborn(Player, usize);

    impl Participant for Stubborn {
        fn name(&self) -> &str {
            "Stubborn"
        }

        fn player(&self) -> Player {
            self.0
        }

        fn select_move(&mut self, _board: &mut BoardState) -> Result<usize> {
            Ok(self.1)
        }
    }

    #[test]
    fn test_play_game_rejects_swapped_seats() {
        let mut x = RandomParticipant::with_seed(Player::O, 1);
        let mut o = RandomParticipant::with_seed(Player::X, 2);
        let result = play_game(3, &mut x, &mut o, &mut [], 0);
        assert!(matches!(result, Err(Error::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_play_game_surfaces_illegal_moves() {
        let mut x = Stubborn(Player::X, 4);
        let mut o = Stubborn(Player::O, 4);
        let result = play_game(3, &mut x, &mut o, &mut [], 0);
        assert!(matches!(result, Err(Error::InvalidMove { position: 4 })));
    }

    #[test]
    fn test_random_games_finish_with_consistent_records() {
        for seed in 0..10 {
            let mut x = RandomParticipant::with_seed(Player::X, seed);
            let mut o = RandomParticipant::with_seed(Player::O, seed + 100);
            let record = play_game(4, &mut x, &mut o, &mut [], 0).unwrap();

            let mut board = BoardState::new(4).unwrap();
            for (i, mv) in record.moves.iter().enumerate() {
                let expected = if i % 2 == 0 { Player::X } else { Player::O };
                assert_eq!(mv.player, expected);
                board.place(mv.position, mv.player).unwrap();
            }
            assert_eq!(record.outcome.winner(), board.winner());
        }
    }

    #[test]
    fn test_series_tallies_add_up() {
        let config = SeriesConfig {
            size: 3,
            games: 6,
            search_player: Player::O,
            search: SearchConfig::new(),
            seed: Some(11),
        };
        let result = run_series(&config, &mut []).unwrap();
        assert_eq!(result.total_games, 6);
        assert_eq!(result.wins + result.draws + result.losses, 6);
        // Perfect play on 3×3 never loses
        assert_eq!(result.losses, 0);
        assert!(result.avg_nodes > 0.0);
        assert_eq!(result.depth, None);
    }
}
