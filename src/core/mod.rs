//! Core domain types for the game
//!
//! Pure, deterministic building blocks: words, guess evaluation and letter hints.
//! Nothing in here performs I/O or holds session state.

mod evaluation;
mod hints;
mod word;

pub use evaluation::{GuessEvaluation, LetterCell, LetterStatus, evaluate};
pub use hints::LetterHints;
pub use word::{Difficulty, MAX_WORD_LENGTH, MIN_WORD_LENGTH, WordEntry, WordError, normalize};
