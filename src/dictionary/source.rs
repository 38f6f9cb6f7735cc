//! Dictionary collaborator contract
//!
//! The game never parses dictionary files itself; whatever owns the word data implements
//! [`DictionarySource`] and hands back ready-made buckets once per session.

use super::{DictionaryBuckets, LengthTiers};
use crate::core::{Difficulty, WordEntry};
use anyhow::Result;
use tracing::debug;

/// Supplies the categorized word list for a session
pub trait DictionarySource {
    /// Load the buckets and known-word set
    ///
    /// # Errors
    /// Returns an error if the underlying word data cannot be produced.
    fn load_dictionary(&self) -> Result<DictionaryBuckets>;
}

impl DictionarySource for DictionaryBuckets {
    fn load_dictionary(&self) -> Result<DictionaryBuckets> {
        Ok(self.clone())
    }
}

/// In-memory dictionary built from `(word, definition)` pairs
///
/// # Examples
/// ```
/// use wordle_game::core::Difficulty;
/// use wordle_game::dictionary::{DictionarySource, LengthTiers, StaticDictionary};
///
/// let source = StaticDictionary::from_pairs(
///     &[("crane", "a wading bird"), ("garden", "a plot of land")],
///     LengthTiers::default(),
/// );
/// let buckets = source.load_dictionary().unwrap();
/// assert_eq!(buckets.counts().get(Difficulty::Easy), 1);
/// assert_eq!(buckets.counts().get(Difficulty::Medium), 1);
/// ```
#[derive(Debug, Clone)]
pub struct StaticDictionary {
    entries: Vec<WordEntry>,
    tiers: LengthTiers,
}

impl StaticDictionary {
    /// Build from raw pairs, skipping any word that fails validation
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, &str)], tiers: LengthTiers) -> Self {
        let entries: Vec<WordEntry> = pairs
            .iter()
            .filter_map(|&(word, definition)| {
                // Placeholder tier; from_entries re-tiers by length
                WordEntry::new(word, definition, Difficulty::Easy).ok()
            })
            .collect();

        if entries.len() != pairs.len() {
            debug!(
                skipped = pairs.len() - entries.len(),
                "skipped invalid dictionary words"
            );
        }

        Self { entries, tiers }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DictionarySource for StaticDictionary {
    fn load_dictionary(&self) -> Result<DictionaryBuckets> {
        Ok(DictionaryBuckets::from_entries(
            self.entries.iter().cloned(),
            &self.tiers,
        ))
    }
}
