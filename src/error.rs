//! Error taxonomy for the game core

use crate::core::Difficulty;
use crate::game::RoundStatus;
use thiserror::Error;

/// Errors reported by game commands
///
/// Nothing here is fatal to a session: every variant leaves the round untouched and is
/// handed back to the caller, which decides how to surface it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no words available to select")]
    EmptyPool,

    #[error("no candidate words for difficulty '{0}'")]
    EmptyBucket(Difficulty),

    /// Invariant violation: the round validates length before evaluating.
    #[error("guess '{guess}' and solution '{solution}' differ in length")]
    LengthMismatch { guess: String, solution: String },

    #[error("not enough letters: this word needs {expected}, got {actual}")]
    IncompleteGuess { expected: usize, actual: usize },

    #[error("'{0}' is not in the word list")]
    UnknownWord(String),

    #[error("'{0}' was already guessed this round")]
    DuplicateGuess(String),

    #[error("round is not in progress (status: {0})")]
    NotPlaying(RoundStatus),

    #[error("no difficulty selected yet")]
    NoDifficultySelected,
}

impl GameError {
    /// Whether this is a rejected guess the player should be nudged about
    ///
    /// These are the expected validation failures that trigger the transient
    /// "invalid attempt" signal.
    #[must_use]
    pub const fn is_invalid_attempt(&self) -> bool {
        matches!(
            self,
            Self::IncompleteGuess { .. } | Self::UnknownWord(_) | Self::DuplicateGuess(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_attempt_classification() {
        assert!(
            GameError::IncompleteGuess {
                expected: 5,
                actual: 3
            }
            .is_invalid_attempt()
        );
        assert!(GameError::UnknownWord("xyzzy".into()).is_invalid_attempt());
        assert!(GameError::DuplicateGuess("crane".into()).is_invalid_attempt());

        assert!(!GameError::EmptyPool.is_invalid_attempt());
        assert!(!GameError::EmptyBucket(Difficulty::Hard).is_invalid_attempt());
        assert!(!GameError::NotPlaying(RoundStatus::Won).is_invalid_attempt());
    }

    #[test]
    fn messages_name_the_offending_input() {
        let err = GameError::IncompleteGuess {
            expected: 6,
            actual: 4,
        };
        assert_eq!(
            err.to_string(),
            "not enough letters: this word needs 6, got 4"
        );
        assert_eq!(
            GameError::EmptyBucket(Difficulty::Medium).to_string(),
            "no candidate words for difficulty 'medium'"
        );
    }
}
