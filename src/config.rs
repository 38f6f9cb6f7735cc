//! Game configuration
//!
//! Every field has a default, so an empty TOML document is a valid config:
//!
//! ```toml
//! max_attempts = 6
//! storage_key = "wordleop:streak"
//! seed = 42
//!
//! [tiers.easy]
//! min = 4
//! max = 5
//! ```

use crate::dictionary::LengthTiers;
use crate::game::MAX_ATTEMPTS;
use crate::streak::STREAK_STORAGE_KEY;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or validating a config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid {difficulty} tier: {reason}")]
    InvalidTier { difficulty: String, reason: String },
    #[error("max_attempts must be at least 1")]
    InvalidMaxAttempts,
    #[error("storage_key must not be empty")]
    EmptyStorageKey,
}

/// Session settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Guesses allowed per round
    pub max_attempts: usize,
    /// Word-length range for each difficulty
    pub tiers: LengthTiers,
    /// Key the streak is persisted under
    pub storage_key: String,
    /// Fixed seed for reproducible word selection
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            tiers: LengthTiers::default(),
            storage_key: STREAK_STORAGE_KEY.to_string(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML config
    ///
    /// # Errors
    /// Returns `ConfigError` if the TOML is malformed or a value is out of range.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::config::GameConfig;
    ///
    /// let config = GameConfig::from_toml_str("seed = 7\n[tiers.hard]\nmin = 7\nmax = 7").unwrap();
    /// assert_eq!(config.seed, Some(7));
    /// assert_eq!(config.tiers.hard.max, 7);
    /// assert_eq!(config.max_attempts, 6);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values are usable
    ///
    /// # Errors
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::InvalidMaxAttempts);
        }
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        self.tiers
            .check()
            .map_err(|(difficulty, reason)| ConfigError::InvalidTier {
                difficulty: difficulty.to_string(),
                reason,
            })
    }

    /// Random source for word selection: seeded if configured, OS entropy otherwise
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::TierRange;
    use rand::Rng;

    #[test]
    fn empty_document_is_default() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.storage_key, "wordleop:streak");
    }

    #[test]
    fn partial_tiers_keep_other_defaults() {
        let config = GameConfig::from_toml_str("[tiers.easy]\nmin = 5\nmax = 5\n").unwrap();
        assert_eq!(config.tiers.easy, TierRange::new(5, 5));
        assert_eq!(config.tiers.medium, TierRange::new(6, 6));
        assert_eq!(config.tiers.hard, TierRange::new(7, 8));
    }

    #[test]
    fn zero_attempts_rejected() {
        assert!(matches!(
            GameConfig::from_toml_str("max_attempts = 0"),
            Err(ConfigError::InvalidMaxAttempts)
        ));
    }

    #[test]
    fn blank_storage_key_rejected() {
        assert!(matches!(
            GameConfig::from_toml_str("storage_key = \"  \""),
            Err(ConfigError::EmptyStorageKey)
        ));
    }

    #[test]
    fn overlapping_tiers_rejected() {
        let err = GameConfig::from_toml_str("[tiers.medium]\nmin = 5\nmax = 6\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTier { ref difficulty, .. } if difficulty == "medium"));
    }

    #[test]
    fn malformed_toml_rejected() {
        assert!(matches!(
            GameConfig::from_toml_str("max_attempts = ["),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = GameConfig {
            seed: Some(99),
            ..GameConfig::default()
        };
        let first: Vec<u32> = config.rng().random_iter().take(5).collect();
        let second: Vec<u32> = config.rng().random_iter().take(5).collect();
        assert_eq!(first, second);
    }
}
