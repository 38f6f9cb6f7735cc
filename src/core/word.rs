//! Dictionary word representation
//!
//! A `WordEntry` is a normalized lowercase word with its definition and difficulty tier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Shortest word the game accepts
pub const MIN_WORD_LENGTH: usize = 4;

/// Longest word the game accepts
pub const MAX_WORD_LENGTH: usize = 8;

/// Difficulty tier of a word bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers, easiest first
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(format!("Unknown difficulty: {other}")),
        }
    }
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be {MIN_WORD_LENGTH}-{MAX_WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    InvalidCharacters,
}

/// A dictionary word with its definition and difficulty tier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordEntry {
    word: String,
    definition: String,
    difficulty: Difficulty,
}

impl WordEntry {
    /// Create a new entry, normalizing the word to lowercase
    ///
    /// # Errors
    /// Returns `WordError` if the trimmed word is not 4-8 ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Difficulty, WordEntry};
    ///
    /// let entry = WordEntry::new("Crane", "a tall wading bird", Difficulty::Easy).unwrap();
    /// assert_eq!(entry.word(), "crane");
    /// assert_eq!(entry.length(), 5);
    ///
    /// assert!(WordEntry::new("cat", "", Difficulty::Easy).is_err());
    /// assert!(WordEntry::new("cr4ne", "", Difficulty::Easy).is_err());
    /// ```
    pub fn new(
        word: impl AsRef<str>,
        definition: impl Into<String>,
        difficulty: Difficulty,
    ) -> Result<Self, WordError> {
        let word = normalize(word.as_ref())?;

        Ok(Self {
            word,
            definition: definition.into().trim().to_string(),
            difficulty,
        })
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }

    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.word.len()
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}

/// Normalize raw text to a lowercase game word
///
/// # Errors
/// Returns `WordError` if the text is not 4-8 ASCII letters after trimming.
pub fn normalize(text: &str) -> Result<String, WordError> {
    let text = text.trim();

    if !text.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(WordError::InvalidCharacters);
    }

    // ASCII only from here, so bytes == chars
    if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&text.len()) {
        return Err(WordError::InvalidLength(text.len()));
    }

    Ok(text.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_creation_valid() {
        let entry = WordEntry::new("crane", "a bird", Difficulty::Easy).unwrap();
        assert_eq!(entry.word(), "crane");
        assert_eq!(entry.definition(), "a bird");
        assert_eq!(entry.difficulty(), Difficulty::Easy);
        assert_eq!(entry.length(), 5);
    }

    #[test]
    fn entry_creation_normalizes() {
        let entry = WordEntry::new("  GaRdEn ", "  a plot  ", Difficulty::Medium).unwrap();
        assert_eq!(entry.word(), "garden");
        assert_eq!(entry.definition(), "a plot");
    }

    #[test]
    fn entry_creation_invalid_length() {
        assert_eq!(
            WordEntry::new("cat", "", Difficulty::Easy),
            Err(WordError::InvalidLength(3))
        );
        assert_eq!(
            WordEntry::new("abcdefghi", "", Difficulty::Hard),
            Err(WordError::InvalidLength(9))
        );
        assert_eq!(
            WordEntry::new("", "", Difficulty::Easy),
            Err(WordError::InvalidLength(0))
        );
    }

    #[test]
    fn entry_creation_invalid_characters() {
        assert_eq!(
            WordEntry::new("cran3", "", Difficulty::Easy),
            Err(WordError::InvalidCharacters)
        );
        assert!(WordEntry::new("cr ne", "", Difficulty::Easy).is_err());
        assert!(WordEntry::new("café", "", Difficulty::Easy).is_err());
    }

    #[test]
    fn boundary_lengths_accepted() {
        assert!(WordEntry::new("tree", "", Difficulty::Easy).is_ok());
        assert!(WordEntry::new("absolute", "", Difficulty::Hard).is_ok());
    }

    #[test]
    fn difficulty_round_trips_through_text() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse::<Difficulty>(), Ok(difficulty));
        }
        assert_eq!(" HARD ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn difficulty_serializes_lowercase() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }

    #[test]
    fn entry_display() {
        let entry = WordEntry::new("slate", "", Difficulty::Easy).unwrap();
        assert_eq!(format!("{entry}"), "slate");
    }
}
