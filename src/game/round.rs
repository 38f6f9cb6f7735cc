//! Round state machine
//!
//! A round moves `Idle -> Playing -> Won | Lost`. Starting a round is accepted from any
//! state and resets everything; nothing else leaves a terminal state.

use super::selector::{IndexSource, select_word};
use crate::core::{Difficulty, GuessEvaluation, LetterHints, WordEntry};
use crate::dictionary::DictionaryBuckets;
use crate::error::GameError;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, trace};

/// Attempts allowed per round
pub const MAX_ATTEMPTS: usize = 6;

/// Word length shown before any solution has been picked
pub const IDLE_WORD_LENGTH: usize = 5;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundStatus {
    #[default]
    Idle,
    Playing,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// Emitted once when a round reaches `Won` or `Lost`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundOutcome {
    pub won: bool,
    pub attempts: usize,
    pub solution: WordEntry,
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResult {
    pub evaluation: GuessEvaluation,
    pub outcome: Option<RoundOutcome>,
}

/// State of the current round
#[derive(Debug, Clone)]
pub struct Round {
    solution: Option<WordEntry>,
    difficulty: Option<Difficulty>,
    attempts: Vec<GuessEvaluation>,
    current_guess: String,
    status: RoundStatus,
    max_attempts: usize,
    invalid_row: Option<usize>,
}

impl Default for Round {
    fn default() -> Self {
        Self::new(MAX_ATTEMPTS)
    }
}

impl Round {
    /// An idle round allowing `max_attempts` guesses (at least one)
    #[must_use]
    pub fn new(max_attempts: usize) -> Self {
        Self {
            solution: None,
            difficulty: None,
            attempts: Vec::new(),
            current_guess: String::new(),
            status: RoundStatus::Idle,
            max_attempts: max_attempts.max(1),
            invalid_row: None,
        }
    }

    /// Start a fresh round on `difficulty`
    ///
    /// Picks a solution other than the previous one where possible and clears all
    /// attempts. Accepted in every state.
    ///
    /// # Errors
    /// Returns `GameError::EmptyBucket` if the difficulty has no words; the round is left
    /// untouched.
    pub fn start<S: IndexSource + ?Sized>(
        &mut self,
        difficulty: Difficulty,
        dictionary: &DictionaryBuckets,
        source: &mut S,
    ) -> Result<&WordEntry, GameError> {
        let previous = self.solution.as_ref().map(WordEntry::word);
        let solution = match select_word(dictionary.bucket(difficulty), previous, source) {
            Ok(entry) => entry.clone(),
            Err(GameError::EmptyPool) => return Err(GameError::EmptyBucket(difficulty)),
            Err(err) => return Err(err),
        };

        info!(%difficulty, length = solution.length(), "round started");

        self.difficulty = Some(difficulty);
        self.attempts.clear();
        self.current_guess.clear();
        self.status = RoundStatus::Playing;
        self.invalid_row = None;

        Ok(self.solution.insert(solution))
    }

    /// Add a letter to the guess being typed
    ///
    /// Returns whether the buffer changed. Ignored unless playing, when the buffer is
    /// full, or for anything but `a`-`z` (ASCII uppercase is folded).
    pub fn append_letter(&mut self, letter: char) -> bool {
        let letter = letter.to_ascii_lowercase();
        if self.status != RoundStatus::Playing
            || !letter.is_ascii_lowercase()
            || self.current_guess.len() >= self.word_length()
        {
            return false;
        }

        self.current_guess.push(letter);
        self.invalid_row = None;
        trace!(buffer = %self.current_guess, "letter appended");
        true
    }

    /// Remove the last typed letter; returns whether the buffer changed
    pub fn delete_letter(&mut self) -> bool {
        if self.status != RoundStatus::Playing {
            return false;
        }

        let removed = self.current_guess.pop().is_some();
        if removed {
            self.invalid_row = None;
            trace!(buffer = %self.current_guess, "letter deleted");
        }
        removed
    }

    /// Submit the typed guess
    ///
    /// On rejection the round is unchanged apart from the transient invalid-row marker.
    ///
    /// # Errors
    /// - `NotPlaying` outside an active round
    /// - `IncompleteGuess` if the buffer isn't exactly the word length
    /// - `UnknownWord` if the guess isn't in the dictionary
    /// - `DuplicateGuess` if the word was already tried this round
    pub fn submit_guess(&mut self, dictionary: &DictionaryBuckets) -> Result<SubmitResult, GameError> {
        let result = self.try_submit(dictionary);
        if let Err(err) = &result
            && err.is_invalid_attempt()
        {
            debug!(%err, "guess rejected");
            self.invalid_row = Some(self.attempts.len());
        }
        result
    }

    fn try_submit(&mut self, dictionary: &DictionaryBuckets) -> Result<SubmitResult, GameError> {
        let solution = self.active_solution()?;

        let expected = solution.length();
        if self.current_guess.len() != expected {
            return Err(GameError::IncompleteGuess {
                expected,
                actual: self.current_guess.len(),
            });
        }

        let guess = self.current_guess.to_ascii_lowercase();
        if !dictionary.is_known(&guess) {
            return Err(GameError::UnknownWord(guess));
        }
        if self.attempts.iter().any(|attempt| attempt.word() == guess) {
            return Err(GameError::DuplicateGuess(guess));
        }

        let evaluation = GuessEvaluation::evaluate(&guess, solution.word())?;

        self.attempts.push(evaluation.clone());
        self.current_guess.clear();
        self.invalid_row = None;
        debug!(%guess, row = %evaluation.to_emoji(), attempt = self.attempts.len(), "guess evaluated");

        let outcome = if guess == solution.word() {
            Some(self.finish(RoundStatus::Won, solution))
        } else if self.attempts.len() >= self.max_attempts {
            Some(self.finish(RoundStatus::Lost, solution))
        } else {
            None
        };

        Ok(SubmitResult {
            evaluation,
            outcome,
        })
    }

    /// End an active round as lost, e.g. when an external timer runs out
    ///
    /// # Errors
    /// Returns `GameError::NotPlaying` outside an active round.
    pub fn force_lose(&mut self) -> Result<RoundOutcome, GameError> {
        let solution = self.active_solution()?;
        self.current_guess.clear();
        self.invalid_row = None;
        Ok(self.finish(RoundStatus::Lost, solution))
    }

    /// Return to idle, forgetting the solution
    pub fn reset(&mut self) {
        *self = Self::new(self.max_attempts);
    }

    fn active_solution(&self) -> Result<WordEntry, GameError> {
        match (&self.solution, self.status) {
            (Some(solution), RoundStatus::Playing) => Ok(solution.clone()),
            _ => Err(GameError::NotPlaying(self.status)),
        }
    }

    fn finish(&mut self, status: RoundStatus, solution: WordEntry) -> RoundOutcome {
        self.status = status;

        info!(
            %status,
            attempts = self.attempts.len(),
            solution = solution.word(),
            "round finished"
        );

        RoundOutcome {
            won: status == RoundStatus::Won,
            attempts: self.attempts.len(),
            solution,
        }
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[GuessEvaluation] {
        &self.attempts
    }

    #[inline]
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Row flagged by the last rejected guess, cleared by the next accepted edit
    #[inline]
    #[must_use]
    pub const fn invalid_row(&self) -> Option<usize> {
        self.invalid_row
    }

    /// Letters in the current solution; [`IDLE_WORD_LENGTH`] before the first start
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.solution
            .as_ref()
            .map_or(IDLE_WORD_LENGTH, WordEntry::length)
    }

    /// The solution, but only once the round is over
    #[must_use]
    pub fn revealed_solution(&self) -> Option<&WordEntry> {
        self.solution
            .as_ref()
            .filter(|_| self.status.is_terminal())
    }

    #[must_use]
    pub fn letter_hints(&self) -> LetterHints {
        LetterHints::from_attempts(&self.attempts)
    }

    /// Read-only view for rendering
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            status: self.status,
            difficulty: self.difficulty,
            word_length: self.word_length(),
            max_attempts: self.max_attempts,
            attempts: self.attempts.clone(),
            current_guess: self.current_guess.clone(),
            invalid_row: self.invalid_row,
            revealed: self.revealed_solution().cloned(),
        }
    }

    /// The hidden solution, for assertions in tests
    #[cfg(test)]
    pub(crate) fn solution(&self) -> Option<&WordEntry> {
        self.solution.as_ref()
    }
}

/// Owned copy of a round's visible state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSnapshot {
    pub status: RoundStatus,
    pub difficulty: Option<Difficulty>,
    pub word_length: usize,
    pub max_attempts: usize,
    pub attempts: Vec<GuessEvaluation>,
    pub current_guess: String,
    pub invalid_row: Option<usize>,
    pub revealed: Option<WordEntry>,
}
