//! Difficulty buckets of candidate words

use super::LengthTiers;
use crate::core::{Difficulty, WordEntry};
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

/// Number of candidate words per difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BucketCounts {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

impl BucketCounts {
    #[must_use]
    pub const fn get(&self, difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

/// Candidate words grouped by difficulty, plus the set of every known word
///
/// Each bucket only holds entries of its own difficulty. The known-word set is the union
/// of all buckets and is what guesses are checked against.
#[derive(Debug, Clone, Default)]
pub struct DictionaryBuckets {
    easy: Vec<WordEntry>,
    medium: Vec<WordEntry>,
    hard: Vec<WordEntry>,
    all_words: FxHashSet<String>,
}

impl DictionaryBuckets {
    /// Build from pre-sorted buckets
    ///
    /// Entries whose difficulty doesn't match their bucket, or whose length falls outside
    /// that difficulty's tier, are dropped.
    #[must_use]
    pub fn new(
        easy: Vec<WordEntry>,
        medium: Vec<WordEntry>,
        hard: Vec<WordEntry>,
        tiers: &LengthTiers,
    ) -> Self {
        let mut buckets = Self {
            easy: retain_tier(easy, Difficulty::Easy, tiers),
            medium: retain_tier(medium, Difficulty::Medium, tiers),
            hard: retain_tier(hard, Difficulty::Hard, tiers),
            all_words: FxHashSet::default(),
        };
        buckets.rebuild_word_set();
        buckets
    }

    /// Categorize raw entries by word length
    ///
    /// Each entry is re-tiered from its length; words no tier covers are skipped,
    /// duplicates keep their first definition, and buckets are sorted alphabetically.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Difficulty, WordEntry};
    /// use wordle_game::dictionary::{DictionaryBuckets, LengthTiers};
    ///
    /// let entries = ["crane", "garden", "balloon"]
    ///     .map(|w| WordEntry::new(w, "", Difficulty::Easy).unwrap());
    /// let buckets = DictionaryBuckets::from_entries(entries, &LengthTiers::default());
    ///
    /// assert_eq!(buckets.bucket(Difficulty::Medium)[0].word(), "garden");
    /// assert_eq!(buckets.bucket(Difficulty::Hard)[0].difficulty(), Difficulty::Hard);
    /// assert!(buckets.is_known("crane"));
    /// ```
    #[must_use]
    pub fn from_entries<I>(entries: I, tiers: &LengthTiers) -> Self
    where
        I: IntoIterator<Item = WordEntry>,
    {
        let mut seen = FxHashSet::default();
        let mut buckets = Self::default();
        let mut skipped = 0usize;

        for entry in entries {
            let Some(difficulty) = tiers.categorize(entry.length()) else {
                skipped += 1;
                continue;
            };
            if !seen.insert(entry.word().to_string()) {
                continue;
            }

            // Length is already validated, so re-tiering cannot fail
            if let Ok(entry) = WordEntry::new(entry.word(), entry.definition(), difficulty) {
                buckets.bucket_mut(difficulty).push(entry);
            }
        }

        for difficulty in Difficulty::ALL {
            buckets
                .bucket_mut(difficulty)
                .sort_by(|a, b| a.word().cmp(b.word()));
        }
        buckets.rebuild_word_set();

        debug!(
            easy = buckets.easy.len(),
            medium = buckets.medium.len(),
            hard = buckets.hard.len(),
            skipped,
            "categorized dictionary"
        );
        buckets
    }

    /// Candidate words for a difficulty
    #[must_use]
    pub fn bucket(&self, difficulty: Difficulty) -> &[WordEntry] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    fn bucket_mut(&mut self, difficulty: Difficulty) -> &mut Vec<WordEntry> {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }

    /// Check a normalized (lowercase) word against every bucket
    #[must_use]
    pub fn is_known(&self, word: &str) -> bool {
        self.all_words.contains(word)
    }

    /// Union of all bucket words
    #[must_use]
    pub const fn known_words(&self) -> &FxHashSet<String> {
        &self.all_words
    }

    #[must_use]
    pub fn counts(&self) -> BucketCounts {
        BucketCounts {
            easy: self.easy.len(),
            medium: self.medium.len(),
            hard: self.hard.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }

    /// Every entry, easy bucket first
    pub fn entries(&self) -> impl Iterator<Item = &WordEntry> {
        self.easy.iter().chain(&self.medium).chain(&self.hard)
    }

    fn rebuild_word_set(&mut self) {
        self.all_words = self
            .entries()
            .map(|entry| entry.word().to_string())
            .collect();
    }
}

fn retain_tier(entries: Vec<WordEntry>, difficulty: Difficulty, tiers: &LengthTiers) -> Vec<WordEntry> {
    let range = tiers.range(difficulty);
    let before = entries.len();
    let kept: Vec<WordEntry> = entries
        .into_iter()
        .filter(|entry| entry.difficulty() == difficulty && range.contains(entry.length()))
        .collect();

    if kept.len() != before {
        warn!(
            %difficulty,
            dropped = before - kept.len(),
            "dropped entries that don't fit their difficulty tier"
        );
    }
    kept
}
