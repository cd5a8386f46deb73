//! Word lists for the unscramble game
//!
//! Provides embedded per-tier word lists compiled into the binary, a loader
//! for custom lists, and the validated [`WordBank`] the engine draws from.

mod bank;
mod embedded;
pub mod loader;

pub use bank::WordBank;
pub use embedded::{EASY, EASY_COUNT, HARD, HARD_COUNT, MEDIUM, MEDIUM_COUNT};

use crate::core::{Difficulty, WordError};
use std::io;
use std::path::PathBuf;

/// Error raised while building word lists
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("the {difficulty} word list is empty")]
    Empty { difficulty: Difficulty },
    #[error("invalid entry in the {difficulty} word list at line {line}")]
    InvalidWord {
        difficulty: Difficulty,
        line: usize,
        #[source]
        source: WordError,
    },
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_consts() {
        assert_eq!(EASY.len(), EASY_COUNT);
        assert_eq!(MEDIUM.len(), MEDIUM_COUNT);
        assert_eq!(HARD.len(), HARD_COUNT);
    }

    #[test]
    fn expected_counts() {
        assert_eq!(EASY_COUNT, 10, "Expected 10 easy words");
        assert_eq!(MEDIUM_COUNT, 10, "Expected 10 medium words");
        assert_eq!(HARD_COUNT, 10, "Expected 10 hard words");
    }

    #[test]
    fn builtin_words_are_lowercase_ascii() {
        for &word in EASY.iter().chain(MEDIUM).chain(HARD) {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn builtin_easy_list() {
        assert_eq!(
            EASY,
            [
                "apple", "banana", "orange", "grape", "melon", "peach", "lemon", "cherry", "kiwi",
                "mango"
            ]
        );
    }

    #[test]
    fn error_messages_name_the_tier() {
        let err = WordListError::Empty {
            difficulty: Difficulty::Hard,
        };
        assert_eq!(err.to_string(), "the Hard word list is empty");
    }
}
