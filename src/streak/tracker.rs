//! Win streak tracking

use super::store::KeyValueStore;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Storage key used unless configured otherwise
pub const STREAK_STORAGE_KEY: &str = "wordleop:streak";

/// Consecutive wins, and the best run so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakState {
    pub current: u32,
    pub best: u32,
}

impl StreakState {
    /// Apply one round result
    #[must_use]
    pub fn after(self, won: bool) -> Self {
        if won {
            let current = self.current.saturating_add(1);
            Self {
                current,
                best: self.best.max(current),
            }
        } else {
            Self {
                current: 0,
                best: self.best,
            }
        }
    }

    /// Lenient parse of a stored record
    ///
    /// Malformed JSON yields the default; a field that isn't a non-negative integer reads
    /// as 0 without discarding the other.
    #[must_use]
    pub fn from_json(text: &str) -> Self {
        let Ok(value) = serde_json::from_str::<Value>(text) else {
            return Self::default();
        };

        let field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_u64)
                .map_or(0, |n| u32::try_from(n).unwrap_or(u32::MAX))
        };

        let current = field("current");
        Self {
            current,
            best: field("best").max(current),
        }
    }
}

/// Tracks the streak and persists it after every change
///
/// Storage problems never reach the caller: a bad or missing record starts from zero, and
/// failed writes are logged and dropped.
#[derive(Debug)]
pub struct StreakTracker<S: KeyValueStore> {
    store: S,
    key: String,
    state: StreakState,
}

impl<S: KeyValueStore> StreakTracker<S> {
    /// Load the persisted streak, falling back to zero
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let state = match store.get(&key) {
            Ok(Some(text)) => StreakState::from_json(&text),
            Ok(None) => StreakState::default(),
            Err(err) => {
                warn!(%err, %key, "failed to restore streak from storage");
                StreakState::default()
            }
        };

        debug!(current = state.current, best = state.best, "streak loaded");
        Self { store, key, state }
    }

    /// Record a finished round and persist the new state
    ///
    /// # Examples
    /// ```
    /// use wordle_game::streak::{MemoryStore, StreakTracker};
    ///
    /// let mut tracker = StreakTracker::load(MemoryStore::new(), "streak");
    /// tracker.record_outcome(true);
    /// let state = tracker.record_outcome(true);
    /// assert_eq!((state.current, state.best), (2, 2));
    ///
    /// let state = tracker.record_outcome(false);
    /// assert_eq!((state.current, state.best), (0, 2));
    /// ```
    pub fn record_outcome(&mut self, won: bool) -> StreakState {
        self.state = self.state.after(won);
        self.persist();
        self.state
    }

    /// Zero the streak and persist it
    pub fn reset(&mut self) -> StreakState {
        self.state = StreakState::default();
        self.persist();
        self.state
    }

    #[must_use]
    pub const fn state(&self) -> StreakState {
        self.state
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.state) {
            Ok(json) => json,
            Err(err) => {
                warn!(%err, "failed to encode streak");
                return;
            }
        };

        if let Err(err) = self.store.set(&self.key, &json) {
            warn!(%err, key = %self.key, "failed to persist streak");
        }
    }
}
