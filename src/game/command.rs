//! Commands accepted by a session and what they produced

use super::round::RoundOutcome;
use crate::core::{Difficulty, GuessEvaluation};
use crate::streak::StreakState;
use std::fmt;

/// One player or collaborator action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Start a new round on a difficulty, abandoning any round in progress
    Start(Difficulty),
    /// Start again on the last selected difficulty
    PlayAgain,
    AppendLetter(char),
    DeleteLetter,
    SubmitGuess,
    /// End the active round as lost, e.g. when a timer expires
    ForceLose,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start(difficulty) => write!(f, "start({difficulty})"),
            Self::PlayAgain => f.write_str("play-again"),
            Self::AppendLetter(letter) => write!(f, "append({letter})"),
            Self::DeleteLetter => f.write_str("delete"),
            Self::SubmitGuess => f.write_str("submit"),
            Self::ForceLose => f.write_str("force-lose"),
        }
    }
}

/// Result of a successfully applied command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A round began
    Started {
        difficulty: Difficulty,
        word_length: usize,
    },
    /// The typed guess changed
    Edited,
    /// Nothing to do in the current state
    Ignored,
    /// A guess was accepted and the round continues
    Guessed(GuessEvaluation),
    /// The round ended; `evaluation` is the final guess, absent for a forced loss
    Finished {
        evaluation: Option<GuessEvaluation>,
        outcome: RoundOutcome,
        streak: StreakState,
    },
}

impl CommandOutcome {
    /// Whether this outcome closed the round
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Finished { .. })
    }
}
