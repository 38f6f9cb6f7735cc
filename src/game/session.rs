//! Session context
//!
//! Owns the dictionary, the current round, the streak tracker and the random source.
//! Collaborators drive it through [`Session::apply`] and read it through snapshots; there
//! is no other way to mutate game state.

use super::command::{Command, CommandOutcome};
use super::round::{Round, RoundOutcome, RoundSnapshot, SubmitResult};
use crate::config::GameConfig;
use crate::core::{Difficulty, GuessEvaluation, LetterHints};
use crate::dictionary::{BucketCounts, DictionaryBuckets, DictionarySource};
use crate::error::GameError;
use crate::input::{route_key, route_key_event};
use crate::streak::{KeyValueStore, StreakState, StreakTracker};
use anyhow::{Context, Result};
use crossterm::event::KeyEvent;
use rand::Rng;
use rand::rngs::StdRng;
use tracing::{info, instrument, warn};

/// A player's game session
#[derive(Debug)]
pub struct Session<R: Rng, S: KeyValueStore> {
    config: GameConfig,
    dictionary: DictionaryBuckets,
    round: Round,
    streak: StreakTracker<S>,
    rng: R,
}

impl<S: KeyValueStore> Session<StdRng, S> {
    /// Initialize with the random source described by `config`
    ///
    /// # Errors
    /// See [`Session::init`].
    pub fn from_config(config: GameConfig, source: &impl DictionarySource, store: S) -> Result<Self> {
        let rng = config.rng();
        Self::init(config, source, store, rng)
    }
}

impl<R: Rng, S: KeyValueStore> Session<R, S> {
    /// Validate the config, load the dictionary once and restore the streak
    ///
    /// Loaded words are re-tiered by length with `config.tiers`, whatever grouping the
    /// source used.
    ///
    /// # Errors
    /// Returns an error if the config is invalid or the dictionary fails to load.
    /// A missing or unreadable streak is not an error.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_game::config::GameConfig;
    /// use wordle_game::core::Difficulty;
    /// use wordle_game::dictionary::{LengthTiers, StaticDictionary};
    /// use wordle_game::game::{Command, CommandOutcome, Session};
    /// use wordle_game::streak::MemoryStore;
    ///
    /// let words = StaticDictionary::from_pairs(&[("crane", "a bird"), ("slate", "a rock")], LengthTiers::default());
    /// let mut session = Session::init(GameConfig::default(), &words, MemoryStore::new(), StdRng::seed_from_u64(1))?;
    ///
    /// let started = session.apply(Command::Start(Difficulty::Easy))?;
    /// assert_eq!(started, CommandOutcome::Started { difficulty: Difficulty::Easy, word_length: 5 });
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn init(config: GameConfig, source: &impl DictionarySource, store: S, rng: R) -> Result<Self> {
        config.validate().context("invalid game config")?;
        let loaded = source
            .load_dictionary()
            .context("failed to load dictionary")?;
        let dictionary = DictionaryBuckets::from_entries(loaded.entries().cloned(), &config.tiers);

        let counts = dictionary.counts();
        if dictionary.is_empty() {
            warn!("dictionary is empty, no round can be started");
        }
        info!(
            easy = counts.easy,
            medium = counts.medium,
            hard = counts.hard,
            "session initialized"
        );

        let streak = StreakTracker::load(store, config.storage_key.clone());
        let round = Round::new(config.max_attempts);

        Ok(Self {
            config,
            dictionary,
            round,
            streak,
            rng,
        })
    }

    /// Return to idle and forget the last difficulty; the streak is kept
    pub fn reset(&mut self) {
        self.round.reset();
        info!("session reset");
    }

    /// Zero the persisted streak
    pub fn reset_streak(&mut self) -> StreakState {
        self.streak.reset()
    }

    /// Apply one command to the session
    ///
    /// Commands that make no sense in the current state (typing while idle, say) are
    /// [`CommandOutcome::Ignored`] rather than errors. A finished round updates and
    /// persists the streak before this returns.
    ///
    /// # Errors
    /// Returns the `GameError` describing why the command was rejected. The session is
    /// unchanged apart from the round's invalid-row marker.
    #[instrument(level = "debug", skip(self))]
    pub fn apply(&mut self, command: Command) -> Result<CommandOutcome, GameError> {
        match command {
            Command::Start(difficulty) => self.start(difficulty),
            Command::PlayAgain => {
                let difficulty = self
                    .round
                    .difficulty()
                    .ok_or(GameError::NoDifficultySelected)?;
                self.start(difficulty)
            }
            Command::AppendLetter(letter) => Ok(edited(self.round.append_letter(letter))),
            Command::DeleteLetter => Ok(edited(self.round.delete_letter())),
            Command::SubmitGuess => {
                let SubmitResult {
                    evaluation,
                    outcome,
                } = self.round.submit_guess(&self.dictionary)?;
                Ok(match outcome {
                    Some(outcome) => self.finish(Some(evaluation), outcome),
                    None => CommandOutcome::Guessed(evaluation),
                })
            }
            Command::ForceLose => {
                let outcome = self.round.force_lose()?;
                Ok(self.finish(None, outcome))
            }
        }
    }

    /// Route a virtual key name and apply the resulting command
    ///
    /// Returns `None` for keys that map to nothing.
    pub fn handle_key(&mut self, key: &str) -> Option<Result<CommandOutcome, GameError>> {
        route_key(key).map(|command| self.apply(command))
    }

    /// Route a terminal key event and apply the resulting command
    pub fn handle_key_event(&mut self, event: &KeyEvent) -> Option<Result<CommandOutcome, GameError>> {
        route_key_event(event).map(|command| self.apply(command))
    }

    fn start(&mut self, difficulty: Difficulty) -> Result<CommandOutcome, GameError> {
        let solution = self.round.start(difficulty, &self.dictionary, &mut self.rng)?;
        Ok(CommandOutcome::Started {
            difficulty,
            word_length: solution.length(),
        })
    }

    fn finish(&mut self, evaluation: Option<GuessEvaluation>, outcome: RoundOutcome) -> CommandOutcome {
        let streak = self.streak.record_outcome(outcome.won);
        info!(current = streak.current, best = streak.best, "streak updated");
        CommandOutcome::Finished {
            evaluation,
            outcome,
            streak,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        self.round.snapshot()
    }

    #[must_use]
    pub fn letter_hints(&self) -> LetterHints {
        self.round.letter_hints()
    }

    #[must_use]
    pub const fn streak(&self) -> StreakState {
        self.streak.state()
    }

    #[must_use]
    pub fn bucket_counts(&self) -> BucketCounts {
        self.dictionary.counts()
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn dictionary(&self) -> &DictionaryBuckets {
        &self.dictionary
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        self.streak.store()
    }
}

const fn edited(changed: bool) -> CommandOutcome {
    if changed {
        CommandOutcome::Edited
    } else {
        CommandOutcome::Ignored
    }
}
