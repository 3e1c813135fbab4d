//! Configuration for the search engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Depth used on boards larger than 3×3 when no explicit depth is set
pub const DEFAULT_SHALLOW_DEPTH: u32 = 3;

/// Largest board size searched exhaustively when no explicit depth is set
pub const EXHAUSTIVE_MAX_SIZE: usize = 3;

/// Configuration for a [`SearchEngine`](super::SearchEngine).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use gridline::search::SearchConfig;
///
/// let config = SearchConfig::new()
///     .with_max_depth(4)
///     .with_time_limit(Duration::from_millis(200))
///     .with_seed(42);
/// assert_eq!(config.max_depth, Some(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Explicit depth limit; `None` selects the size-dependent default
    pub max_depth: Option<u32>,
    /// Soft wall-clock budget per move; `None` or zero disables it
    pub time_limit: Option<Duration>,
    /// Depth used for boards above 3×3 when `max_depth` is unset
    pub default_depth: u32,
    /// Alpha-beta cutoffs
    pub pruning: bool,
    /// Centre-first move ordering
    pub move_ordering: bool,
    /// Seed for the opening tie-break on even boards
    pub seed: Option<u64>,
}

impl SearchConfig {
    /// Unbounded on 3×3, depth 3 elsewhere, no deadline, pruning and ordering on.
    pub fn new() -> Self {
        Self {
            max_depth: None,
            time_limit: None,
            default_depth: DEFAULT_SHALLOW_DEPTH,
            pruning: true,
            move_ordering: true,
            seed: None,
        }
    }

    /// Build from untyped user input, rejecting negative values.
    ///
    /// A time limit of zero disables the deadline.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] when either value is
    /// negative or the depth does not fit in a `u32`.
    pub fn from_raw(max_depth: Option<i64>, time_limit_ms: Option<i64>) -> crate::Result<Self> {
        let mut config = Self::new();

        if let Some(depth) = max_depth {
            let depth = u32::try_from(depth).map_err(|_| crate::Error::InvalidConfiguration {
                message: format!("max depth must be a non-negative integer, got {depth}"),
            })?;
            config.max_depth = Some(depth);
        }

        if let Some(ms) = time_limit_ms {
            let ms = u64::try_from(ms).map_err(|_| crate::Error::InvalidConfiguration {
                message: format!("time limit must be non-negative, got {ms} ms"),
            })?;
            config.time_limit = Some(Duration::from_millis(ms));
        }

        Ok(config)
    }

    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn with_default_depth(mut self, depth: u32) -> Self {
        self.default_depth = depth;
        self
    }

    pub fn with_pruning(mut self, enabled: bool) -> Self {
        self.pruning = enabled;
        self
    }

    pub fn with_move_ordering(mut self, enabled: bool) -> Self {
        self.move_ordering = enabled;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Deadline budget, with zero treated as disabled
    pub fn effective_time_limit(&self) -> Option<Duration> {
        self.time_limit.filter(|limit| !limit.is_zero())
    }

    /// Depth to search on a board of `size`; `None` means search to terminal states
    pub fn effective_depth(&self, size: usize) -> Option<u32> {
        match self.max_depth {
            Some(depth) => Some(depth),
            None if size <= EXHAUSTIVE_MAX_SIZE => None,
            None => Some(self.default_depth),
        }
    }

    /// Check the configuration before an engine is built.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] when `default_depth`
    /// is zero, which would leave larger boards without any search.
    pub fn validate(&self) -> crate::Result<()> {
        if self.default_depth == 0 {
            return Err(crate::Error::InvalidConfiguration {
                message: "default depth must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_depth_policy() {
        let config = SearchConfig::new();
        assert_eq!(config.effective_depth(3), None);
        assert_eq!(config.effective_depth(2), None);
        assert_eq!(config.effective_depth(4), Some(DEFAULT_SHALLOW_DEPTH));
        assert_eq!(config.effective_depth(9), Some(DEFAULT_SHALLOW_DEPTH));

        let explicit = SearchConfig::new().with_max_depth(5);
        assert_eq!(explicit.effective_depth(3), Some(5));
        assert_eq!(explicit.effective_depth(7), Some(5));

        let tuned = SearchConfig::new().with_default_depth(4);
        assert_eq!(tuned.effective_depth(6), Some(4));
    }

    #[test]
    fn test_zero_time_limit_disables_deadline() {
        let config = SearchConfig::new().with_time_limit(Duration::ZERO);
        assert_eq!(config.effective_time_limit(), None);

        let config = SearchConfig::new().with_time_limit(Duration::from_millis(5));
        assert_eq!(config.effective_time_limit(), Some(Duration::from_millis(5)));
    }

    #[test]
    fn test_from_raw_rejects_negative_values() {
        assert!(matches!(
            SearchConfig::from_raw(Some(-1), None),
            Err(crate::Error::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            SearchConfig::from_raw(None, Some(-200)),
            Err(crate::Error::InvalidConfiguration { .. })
        ));

        let config = SearchConfig::from_raw(Some(4), Some(200)).unwrap();
        assert_eq!(config.max_depth, Some(4));
        assert_eq!(config.time_limit, Some(Duration::from_millis(200)));
    }

    #[test]
    fn test_validate_rejects_zero_default_depth() {
        assert!(SearchConfig::new().validate().is_ok());
        assert!(SearchConfig::new().with_default_depth(0).validate().is_err());
    }

    #[test]
    fn test_config_serializes() {
        let config = SearchConfig::new().with_max_depth(2).with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
