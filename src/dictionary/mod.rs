//! Word data consumed by the game
//!
//! Candidate words arrive already validated and grouped by difficulty. Grouping is by word
//! length only, using configurable [`LengthTiers`].

mod buckets;
mod source;
mod tiers;

pub use buckets::{BucketCounts, DictionaryBuckets};
pub use source::{DictionarySource, StaticDictionary};
pub use tiers::{LengthTiers, TierRange};
