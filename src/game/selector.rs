//! Solution word selection

use crate::core::WordEntry;
use crate::error::GameError;
use rand::Rng;

/// Extra draws allowed when a pick repeats the excluded word
pub const MAX_REDRAWS: usize = 5;

/// Source of uniformly distributed indices
///
/// Every [`rand::Rng`] is one; tests can script exact draws instead.
pub trait IndexSource {
    /// Uniform index in `0..len`; `len` is never zero
    fn next_index(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> IndexSource for R {
    fn next_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Pick a random entry from `pool`, trying to avoid `exclude`
///
/// A single-entry pool always yields that entry. Otherwise the draw is retried up to
/// [`MAX_REDRAWS`] times while it matches `exclude`, and the last draw is kept even if it
/// still matches.
///
/// # Errors
/// Returns `GameError::EmptyPool` if `pool` is empty.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_game::core::{Difficulty, WordEntry};
/// use wordle_game::game::select_word;
///
/// let pool = ["crane", "slate", "irate"].map(|w| WordEntry::new(w, "", Difficulty::Easy).unwrap());
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let picked = select_word(&pool, Some("crane"), &mut rng).unwrap();
/// assert!(pool.contains(picked));
/// ```
pub fn select_word<'a, S: IndexSource + ?Sized>(
    pool: &'a [WordEntry],
    exclude: Option<&str>,
    source: &mut S,
) -> Result<&'a WordEntry, GameError> {
    match pool {
        [] => Err(GameError::EmptyPool),
        [only] => Ok(only),
        _ => {
            let mut candidate = &pool[source.next_index(pool.len())];

            if let Some(exclude) = exclude {
                let mut redraws = 0;
                while candidate.word() == exclude && redraws < MAX_REDRAWS {
                    candidate = &pool[source.next_index(pool.len())];
                    redraws += 1;
                }
            }

            Ok(candidate)
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::Difficulty;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::VecDeque;

    /// Replays fixed indices, then repeats the last one
    pub(crate) struct Scripted {
        draws: VecDeque<usize>,
        last: usize,
        pub(crate) calls: usize,
    }

    impl Scripted {
        pub(crate) fn new(draws: &[usize]) -> Self {
            Self {
                draws: draws.iter().copied().collect(),
                last: 0,
                calls: 0,
            }
        }
    }

    impl IndexSource for Scripted {
        fn next_index(&mut self, len: usize) -> usize {
            self.calls += 1;
            if let Some(next) = self.draws.pop_front() {
                self.last = next;
            }
            self.last % len
        }
    }

    fn pool(words: &[&str]) -> Vec<WordEntry> {
        words
            .iter()
            .map(|w| WordEntry::new(w, "", Difficulty::Easy).unwrap())
            .collect()
    }

    #[test]
    fn empty_pool_fails() {
        let mut source = Scripted::new(&[]);
        assert_eq!(
            select_word(&[], None, &mut source),
            Err(GameError::EmptyPool)
        );
        assert_eq!(source.calls, 0);
    }

    #[test]
    fn single_entry_returned_even_if_excluded() {
        let words = pool(&["crane"]);
        let mut source = Scripted::new(&[]);
        let picked = select_word(&words, Some("crane"), &mut source).unwrap();
        assert_eq!(picked.word(), "crane");
        assert_eq!(source.calls, 0);
    }

    #[test]
    fn redraws_past_excluded_word() {
        let words = pool(&["crane", "slate", "irate"]);
        let mut source = Scripted::new(&[0, 0, 2]);
        let picked = select_word(&words, Some("crane"), &mut source).unwrap();
        assert_eq!(picked.word(), "irate");
        assert_eq!(source.calls, 3);
    }

    #[test]
    fn gives_up_after_bounded_redraws() {
        // Always lands on index 0
        let words = pool(&["crane", "slate", "irate"]);
        let mut source = Scripted::new(&[0]);
        let picked = select_word(&words, Some("crane"), &mut source).unwrap();
        assert_eq!(picked.word(), "crane");
        assert_eq!(source.calls, 1 + MAX_REDRAWS);
    }

    #[test]
    fn no_redraw_without_exclusion() {
        let words = pool(&["crane", "slate"]);
        let mut source = Scripted::new(&[0]);
        let picked = select_word(&words, None, &mut source).unwrap();
        assert_eq!(picked.word(), "crane");
        assert_eq!(source.calls, 1);
    }

    #[test]
    fn rng_draws_stay_in_pool() {
        let words = pool(&["crane", "slate", "irate"]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let picked = select_word(&words, Some("slate"), &mut rng).unwrap();
            assert!(words.contains(picked));
        }
    }
}
