//! Keyboard-wide letter hints
//!
//! Aggregates every attempt of a round into one status per letter of the alphabet, for
//! colouring an on-screen keyboard. Hints never affect gameplay.

use super::{GuessEvaluation, LetterStatus};

/// Best status seen for each letter `a`-`z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterHints {
    statuses: [LetterStatus; 26],
}

impl LetterHints {
    /// Aggregate all attempts of a round
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{GuessEvaluation, LetterHints, LetterStatus};
    ///
    /// let attempts = [
    ///     GuessEvaluation::evaluate("trace", "crane").unwrap(),
    ///     GuessEvaluation::evaluate("caper", "crane").unwrap(),
    /// ];
    /// let hints = LetterHints::from_attempts(&attempts);
    ///
    /// // 'c' was correct in the second guess, present in the first
    /// assert_eq!(hints.status_of('c'), LetterStatus::Correct);
    /// assert_eq!(hints.status_of('t'), LetterStatus::Absent);
    /// assert_eq!(hints.status_of('z'), LetterStatus::Pending);
    /// ```
    #[must_use]
    pub fn from_attempts(attempts: &[GuessEvaluation]) -> Self {
        let mut hints = Self::default();
        for evaluation in attempts {
            hints.record(evaluation);
        }
        hints
    }

    /// Fold one more attempt in; a letter is never downgraded
    pub fn record(&mut self, evaluation: &GuessEvaluation) {
        for cell in evaluation.cells() {
            if let Some(index) = letter_index(cell.letter) {
                let slot = &mut self.statuses[index];
                *slot = (*slot).max(cell.status);
            }
        }
    }

    /// Status for a letter; `Pending` for unseen or non-letter input
    #[must_use]
    pub fn status_of(&self, letter: char) -> LetterStatus {
        letter_index(letter.to_ascii_lowercase())
            .map_or(LetterStatus::Pending, |index| self.statuses[index])
    }

    /// Iterate `(letter, status)` pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        ('a'..='z').zip(self.statuses.iter().copied())
    }
}

fn letter_index(letter: char) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| (letter as u8 - b'a') as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(guess: &str, solution: &str) -> GuessEvaluation {
        GuessEvaluation::evaluate(guess, solution).unwrap()
    }

    #[test]
    fn empty_round_is_all_pending() {
        let hints = LetterHints::from_attempts(&[]);
        assert!(hints.iter().all(|(_, status)| status == LetterStatus::Pending));
        assert_eq!(hints.iter().count(), 26);
    }

    #[test]
    fn correct_is_never_downgraded() {
        // cocoa vs crane: second 'c' absent, 'a' present
        let attempts = [eval("crane", "crane"), eval("cocoa", "crane")];
        let hints = LetterHints::from_attempts(&attempts);
        assert_eq!(hints.status_of('c'), LetterStatus::Correct);
        assert_eq!(hints.status_of('a'), LetterStatus::Correct);
        assert_eq!(hints.status_of('o'), LetterStatus::Absent);
    }

    #[test]
    fn later_present_upgrades_absent() {
        let mut hints = LetterHints::default();
        hints.record(&eval("crane", "moist"));
        assert_eq!(hints.status_of('r'), LetterStatus::Absent);

        hints.record(&eval("crane", "nacre"));
        assert_eq!(hints.status_of('r'), LetterStatus::Present);
        assert_eq!(hints.status_of('e'), LetterStatus::Correct);
    }

    #[test]
    fn duplicate_absent_does_not_mask_present() {
        // In "eerie" vs "sheep" the third 'e' is absent but the first two are present
        let hints = LetterHints::from_attempts(&[eval("eerie", "sheep")]);
        assert_eq!(hints.status_of('e'), LetterStatus::Present);
    }

    #[test]
    fn lookup_is_case_insensitive_and_ignores_non_letters() {
        let hints = LetterHints::from_attempts(&[eval("crane", "crane")]);
        assert_eq!(hints.status_of('C'), LetterStatus::Correct);
        assert_eq!(hints.status_of('1'), LetterStatus::Pending);
    }
}
