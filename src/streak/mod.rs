//! Streak persistence across rounds

mod store;
mod tracker;

pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use tracker::{STREAK_STORAGE_KEY, StreakState, StreakTracker};
