//! Per-tier word lists used by the game engine

use super::loader::{load_from_file, words_from_slice};
use super::{EASY, HARD, MEDIUM, WordListError};
use crate::core::{Difficulty, Word};
use rand::Rng;
use std::path::Path;
use tracing::{debug, info};

/// Validated word lists for every tier
///
/// Construction is the only place lists are checked; once a `WordBank`
/// exists every tier is non-empty and every entry can be scrambled.
#[derive(Debug, Clone)]
pub struct WordBank {
    easy: Vec<Word>,
    medium: Vec<Word>,
    hard: Vec<Word>,
}

impl WordBank {
    /// Build a bank from the lists compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `WordListError` if a built-in list is empty or has an
    /// unplayable entry.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::new(
            words_from_slice(EASY, Difficulty::Easy)?,
            words_from_slice(MEDIUM, Difficulty::Medium)?,
            words_from_slice(HARD, Difficulty::Hard)?,
        )
    }

    /// Build a bank from `<dir>/easy.txt`, `<dir>/medium.txt` and `<dir>/hard.txt`
    ///
    /// A tier whose file does not exist keeps its built-in list.
    ///
    /// # Errors
    ///
    /// Returns `WordListError` if a present file cannot be read, is empty, or
    /// has an unplayable entry.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, WordListError> {
        let dir = dir.as_ref();
        let load = |difficulty: Difficulty, builtin: &[&str]| {
            let path = dir.join(format!("{}.txt", difficulty.id()));
            if path.is_file() {
                info!(tier = %difficulty, path = %path.display(), "loading word list");
                load_from_file(&path, difficulty)
            } else {
                debug!(tier = %difficulty, "no list file, using built-in words");
                words_from_slice(builtin, difficulty)
            }
        };

        Self::new(
            load(Difficulty::Easy, EASY)?,
            load(Difficulty::Medium, MEDIUM)?,
            load(Difficulty::Hard, HARD)?,
        )
    }

    /// Build a bank from already-validated words
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Empty` if any tier has no words.
    pub fn new(easy: Vec<Word>, medium: Vec<Word>, hard: Vec<Word>) -> Result<Self, WordListError> {
        for (difficulty, words) in [
            (Difficulty::Easy, &easy),
            (Difficulty::Medium, &medium),
            (Difficulty::Hard, &hard),
        ] {
            if words.is_empty() {
                return Err(WordListError::Empty { difficulty });
            }
        }

        Ok(Self { easy, medium, hard })
    }

    /// Words for a tier, in list order
    #[must_use]
    pub fn words(&self, difficulty: Difficulty) -> &[Word] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Pick a word uniformly at random, with replacement
    pub fn choose<R: Rng + ?Sized>(&self, difficulty: Difficulty, rng: &mut R) -> &Word {
        let words = self.words(difficulty);
        &words[rng.random_range(0..words.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;

    fn temp_dir(tag: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "word_unscramble_bank_{tag}_{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn embedded_bank_has_all_tiers() {
        let bank = WordBank::embedded().unwrap();
        for difficulty in Difficulty::ALL {
            assert_eq!(bank.words(difficulty).len(), 10);
        }
        assert_eq!(bank.words(Difficulty::Easy)[0].text(), "apple");
        assert_eq!(bank.words(Difficulty::Hard)[9].text(), "mysterious");
    }

    #[test]
    fn empty_tier_is_rejected() {
        let words = vec![Word::new("apple").unwrap()];
        let err = WordBank::new(words.clone(), Vec::new(), words).unwrap_err();
        assert!(matches!(
            err,
            WordListError::Empty {
                difficulty: Difficulty::Medium
            }
        ));
    }

    #[test]
    fn choose_draws_from_requested_tier() {
        let bank = WordBank::embedded().unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let word = bank.choose(Difficulty::Medium, &mut rng);
            assert!(bank.words(Difficulty::Medium).contains(word));
        }
    }

    #[test]
    fn from_dir_overrides_present_tiers_only() {
        let dir = temp_dir("override");
        fs::write(dir.join("easy.txt"), "fig\nplum\n").unwrap();

        let bank = WordBank::from_dir(&dir).unwrap();
        let easy: Vec<&str> = bank.words(Difficulty::Easy).iter().map(Word::text).collect();
        assert_eq!(easy, ["fig", "plum"]);
        assert_eq!(bank.words(Difficulty::Medium).len(), 10);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn from_dir_fails_fast_on_single_letter_word() {
        let dir = temp_dir("invalid");
        fs::write(dir.join("hard.txt"), "remarkable\nq\n").unwrap();

        let err = WordBank::from_dir(&dir).unwrap_err();
        assert!(matches!(
            err,
            WordListError::InvalidWord {
                difficulty: Difficulty::Hard,
                line: 2,
                ..
            }
        ));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn from_dir_rejects_comment_only_file() {
        let dir = temp_dir("empty");
        fs::write(dir.join("medium.txt"), "# nothing here\n").unwrap();

        let err = WordBank::from_dir(&dir).unwrap_err();
        assert!(matches!(err, WordListError::Empty { .. }));

        fs::remove_dir_all(&dir).unwrap();
    }
}
