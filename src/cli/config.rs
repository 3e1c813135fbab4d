//! Shared argument types for CLI commands

use std::time::Duration;

use anyhow::Result;
use clap::{Args, ValueEnum};

use crate::{
    pipeline::{HumanParticipant, RandomParticipant},
    ports::Participant,
    search::{SearchConfig, SearchEngine, config::DEFAULT_SHALLOW_DEPTH},
    tictactoe::Player,
};

/// Who occupies a seat in `play`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayerKind {
    /// Reads moves from stdin
    Human,
    /// Uniformly random legal moves
    Random,
    /// Minimax with alpha-beta pruning
    Search,
}

/// Search settings accepted by every command that runs the engine.
///
/// Depth and time limit are taken as signed integers so that negative input
/// reaches [`SearchConfig::from_raw`] and is rejected there with a proper
/// message instead of a parse error.
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Search depth limit (default: exhaustive up to 3x3, shallow above)
    #[arg(long, allow_negative_numbers = true)]
    pub max_depth: Option<i64>,

    /// Per-move time budget in milliseconds (0 disables it)
    #[arg(long, allow_negative_numbers = true)]
    pub time_limit_ms: Option<i64>,

    /// Depth used above 3x3 when --max-depth is not given
    #[arg(long, default_value_t = DEFAULT_SHALLOW_DEPTH)]
    pub default_depth: u32,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SearchArgs {
    /// Build a [`SearchConfig`], falling back to `default_time_limit_ms` when
    /// no time limit was given on the command line
    pub fn to_config(&self, default_time_limit_ms: Option<u64>) -> Result<SearchConfig> {
        let mut config = SearchConfig::from_raw(self.max_depth, self.time_limit_ms)?
            .with_default_depth(self.default_depth);
        if self.time_limit_ms.is_none()
            && let Some(ms) = default_time_limit_ms
        {
            config = config.with_time_limit(Duration::from_millis(ms));
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config.validate()?;
        Ok(config)
    }
}

/// Create the participant for one seat
pub fn create_participant(
    kind: PlayerKind,
    player: Player,
    search: &SearchConfig,
) -> Result<Box<dyn Participant>> {
    let participant: Box<dyn Participant> = match kind {
        PlayerKind::Human => Box::new(HumanParticipant::stdio(player)),
        PlayerKind::Random => match search.seed {
            Some(seed) => Box::new(RandomParticipant::with_seed(player, seed)),
            None => Box::new(RandomParticipant::new(player)),
        },
        PlayerKind::Search => Box::new(SearchEngine::new(player, search.clone())?),
    };
    Ok(participant)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(max_depth: Option<i64>, time_limit_ms: Option<i64>) -> SearchArgs {
        SearchArgs {
            max_depth,
            time_limit_ms,
            default_depth: DEFAULT_SHALLOW_DEPTH,
            seed: Some(5),
        }
    }

    #[test]
    fn test_default_time_limit_applies_only_when_unset() {
        let config = args(None, None).to_config(Some(200)).unwrap();
        assert_eq!(config.time_limit, Some(Duration::from_millis(200)));
        assert_eq!(config.seed, Some(5));

        let config = args(None, Some(0)).to_config(Some(200)).unwrap();
        assert_eq!(config.effective_time_limit(), None);
    }

    #[test]
    fn test_negative_values_rejected() {
        assert!(args(Some(-1), None).to_config(None).is_err());
        assert!(args(None, Some(-5)).to_config(None).is_err());
    }

    #[test]
    fn test_zero_default_depth_rejected() {
        let mut search = args(None, None);
        search.default_depth = 0;
        assert!(search.to_config(None).is_err());
    }
}
