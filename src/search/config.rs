//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Alpha-beta search configuration.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum search depth in plies (0 = unbounded, exact search).
    ///
    /// The board game uses depth 4; Nim and the card game are searched
    /// exactly because their state spaces shrink fast enough.
    pub max_depth: u32,

    /// Seed for any randomized fallback a strategy carries.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 0,
            seed: 42,
        }
    }
}

impl SearchConfig {
    /// Set the depth bound.
    #[must_use]
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the fallback seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.max_depth, 0);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default().with_max_depth(4).with_seed(123);
        assert_eq!(config.max_depth, 4);
        assert_eq!(config.seed, 123);
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default().with_max_depth(6);
        let json = serde_json::to_string(&config).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.max_depth, 6);
    }
}
