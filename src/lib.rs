//! Wordle Game
//!
//! Headless core for a word-guessing game: guess evaluation, rounds with limited attempts,
//! difficulty-tiered word selection and a persisted win streak. Rendering and word-list
//! delivery belong to the host; the host feeds [`game::Command`]s (or raw keys) into a
//! [`game::Session`] and draws its snapshots.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_game::config::GameConfig;
//! use wordle_game::core::{Difficulty, LetterStatus};
//! use wordle_game::dictionary::{LengthTiers, StaticDictionary};
//! use wordle_game::game::{Command, CommandOutcome, Session};
//! use wordle_game::streak::MemoryStore;
//!
//! let words = StaticDictionary::from_pairs(
//!     &[("crane", "a wading bird"), ("trace", "a mark left behind")],
//!     LengthTiers::default(),
//! );
//! let mut session = Session::init(GameConfig::default(), &words, MemoryStore::new(), StdRng::seed_from_u64(3))?;
//! session.apply(Command::Start(Difficulty::Easy))?;
//!
//! for key in ["C", "R", "A", "N", "E", "Enter"] {
//!     session.handle_key(key);
//! }
//!
//! let snapshot = session.snapshot();
//! assert_eq!(snapshot.attempts.len(), 1);
//! assert_eq!(snapshot.attempts[0].cells()[2].status, LetterStatus::Correct);
//! # Ok::<(), anyhow::Error>(())
//! ```

// Words, evaluation, hints
pub mod core;

// Word buckets and the dictionary collaborator
pub mod dictionary;

// Selection, rounds, session
pub mod game;

// Streak persistence
pub mod streak;

// Key routing
pub mod input;

pub mod config;
pub mod error;
pub mod logging;

pub use config::GameConfig;
pub use error::GameError;
pub use game::{Command, CommandOutcome, Session};
