//! Guess evaluation against a hidden solution
//!
//! Each guessed letter is marked:
//! - Correct: right letter, right position
//! - Present: letter occurs elsewhere in the solution
//! - Absent: letter not in the solution (or all its occurrences are used up)

use crate::error::GameError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for a single letter
///
/// Variants are ordered by hint priority, so `max` picks the most informative status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    #[default]
    Pending,
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent | Self::Pending => '⬜',
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pending => "pending",
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        f.write_str(name)
    }
}

/// One evaluated letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterCell {
    pub letter: char,
    pub status: LetterStatus,
}

/// Per-letter feedback for one submitted guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessEvaluation {
    cells: Vec<LetterCell>,
}

impl GuessEvaluation {
    /// Evaluate `guess` against `solution`
    ///
    /// Duplicate letters are handled the Wordle way: every solution letter backs at most
    /// one non-absent status, and exact matches claim their letter first.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches correct; tally the unmatched solution letters
    /// 2. Second pass: mark present while the tally allows, absent otherwise
    ///
    /// # Errors
    /// Returns `GameError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{GuessEvaluation, LetterStatus::*};
    ///
    /// let evaluation = GuessEvaluation::evaluate("trace", "crane").unwrap();
    /// assert_eq!(
    ///     evaluation.statuses(),
    ///     vec![Absent, Correct, Correct, Present, Correct]
    /// );
    /// ```
    pub fn evaluate(guess: &str, solution: &str) -> Result<Self, GameError> {
        let guess_chars: Vec<char> = guess.chars().collect();
        let solution_chars: Vec<char> = solution.chars().collect();

        if guess_chars.len() != solution_chars.len() {
            return Err(GameError::LengthMismatch {
                guess: guess.to_string(),
                solution: solution.to_string(),
            });
        }

        let mut statuses = vec![LetterStatus::Absent; guess_chars.len()];
        let mut remaining: FxHashMap<char, usize> = FxHashMap::default();

        // First pass: greens, and the allowance left over for yellows
        for (i, (&g, &s)) in guess_chars.iter().zip(&solution_chars).enumerate() {
            if g == s {
                statuses[i] = LetterStatus::Correct;
            } else {
                *remaining.entry(s).or_insert(0) += 1;
            }
        }

        // Second pass: yellows
        for (status, letter) in statuses.iter_mut().zip(&guess_chars) {
            if *status == LetterStatus::Correct {
                continue;
            }

            if let Some(allowance) = remaining.get_mut(letter)
                && *allowance > 0
            {
                *status = LetterStatus::Present;
                *allowance -= 1;
            }
        }

        let cells = guess_chars
            .into_iter()
            .zip(statuses)
            .map(|(letter, status)| LetterCell { letter, status })
            .collect();

        Ok(Self { cells })
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[LetterCell] {
        &self.cells
    }

    #[must_use]
    pub fn statuses(&self) -> Vec<LetterStatus> {
        self.cells.iter().map(|cell| cell.status).collect()
    }

    /// The guessed word, reassembled from the cells
    #[must_use]
    pub fn word(&self) -> String {
        self.cells.iter().map(|cell| cell.letter).collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.cells.is_empty()
            && self
                .cells
                .iter()
                .all(|cell| cell.status == LetterStatus::Correct)
    }

    /// Render as a share row like "⬜🟩🟩🟨🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.cells.iter().map(|cell| cell.status.emoji()).collect()
    }
}

/// Evaluate `guess` against `solution`
///
/// Shorthand for [`GuessEvaluation::evaluate`].
///
/// # Errors
/// Returns `GameError::LengthMismatch` if the words differ in length.
pub fn evaluate(guess: &str, solution: &str) -> Result<GuessEvaluation, GameError> {
    GuessEvaluation::evaluate(guess, solution)
}
