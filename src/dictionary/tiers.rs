//! Word-length difficulty tiers
//!
//! Words are bucketed purely by length. The defaults are easy = 4-5 letters,
//! medium = 6, hard = 7-8.

use crate::core::{Difficulty, MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use serde::{Deserialize, Serialize};

/// Inclusive range of word lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierRange {
    pub min: usize,
    pub max: usize,
}

impl TierRange {
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn contains(self, length: usize) -> bool {
        self.min <= length && length <= self.max
    }

    const fn overlaps(self, other: Self) -> bool {
        self.min <= other.max && other.min <= self.max
    }
}

/// Length range for each difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LengthTiers {
    pub easy: TierRange,
    pub medium: TierRange,
    pub hard: TierRange,
}

impl Default for LengthTiers {
    fn default() -> Self {
        Self {
            easy: TierRange::new(MIN_WORD_LENGTH, 5),
            medium: TierRange::new(6, 6),
            hard: TierRange::new(7, MAX_WORD_LENGTH),
        }
    }
}

impl LengthTiers {
    #[must_use]
    pub const fn range(&self, difficulty: Difficulty) -> TierRange {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    /// Difficulty for a word of the given length, if any tier covers it
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Difficulty;
    /// use wordle_game::dictionary::LengthTiers;
    ///
    /// let tiers = LengthTiers::default();
    /// assert_eq!(tiers.categorize(4), Some(Difficulty::Easy));
    /// assert_eq!(tiers.categorize(6), Some(Difficulty::Medium));
    /// assert_eq!(tiers.categorize(8), Some(Difficulty::Hard));
    /// assert_eq!(tiers.categorize(9), None);
    /// ```
    #[must_use]
    pub fn categorize(&self, length: usize) -> Option<Difficulty> {
        Difficulty::ALL
            .into_iter()
            .find(|&difficulty| self.range(difficulty).contains(length))
    }

    /// Check ranges are ordered, within word bounds, and disjoint
    ///
    /// Returns a description of the first problem found.
    ///
    /// # Errors
    /// Returns the offending difficulty and a message when a tier is invalid.
    pub fn check(&self) -> Result<(), (Difficulty, String)> {
        for difficulty in Difficulty::ALL {
            let range = self.range(difficulty);
            if range.min > range.max {
                return Err((difficulty, format!("min {} > max {}", range.min, range.max)));
            }
            if range.min < MIN_WORD_LENGTH || range.max > MAX_WORD_LENGTH {
                return Err((
                    difficulty,
                    format!(
                        "{}-{} is outside {MIN_WORD_LENGTH}-{MAX_WORD_LENGTH}",
                        range.min, range.max
                    ),
                ));
            }
        }

        let pairs = [
            (Difficulty::Easy, Difficulty::Medium),
            (Difficulty::Easy, Difficulty::Hard),
            (Difficulty::Medium, Difficulty::Hard),
        ];
        for (a, b) in pairs {
            if self.range(a).overlaps(self.range(b)) {
                return Err((b, format!("overlaps the {a} tier")));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tiers_are_valid() {
        assert_eq!(LengthTiers::default().check(), Ok(()));
    }

    #[test]
    fn out_of_bounds_rejected() {
        let tiers = LengthTiers {
            easy: TierRange::new(3, 5),
            ..LengthTiers::default()
        };
        let (difficulty, _) = tiers.check().unwrap_err();
        assert_eq!(difficulty, Difficulty::Easy);
    }

    #[test]
    fn inverted_range_rejected() {
        let tiers = LengthTiers {
            hard: TierRange::new(8, 7),
            ..LengthTiers::default()
        };
        assert_eq!(tiers.check().unwrap_err().0, Difficulty::Hard);
    }

    #[test]
    fn overlap_rejected() {
        let tiers = LengthTiers {
            medium: TierRange::new(5, 6),
            ..LengthTiers::default()
        };
        let (difficulty, message) = tiers.check().unwrap_err();
        assert_eq!(difficulty, Difficulty::Medium);
        assert!(message.contains("easy"));
    }

    #[test]
    fn gaps_leave_lengths_uncategorized() {
        let tiers = LengthTiers {
            easy: TierRange::new(4, 4),
            medium: TierRange::new(6, 6),
            hard: TierRange::new(8, 8),
        };
        assert_eq!(tiers.check(), Ok(()));
        assert_eq!(tiers.categorize(5), None);
        assert_eq!(tiers.categorize(7), None);
    }
}
