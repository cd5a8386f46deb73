//! Hint strategies
//!
//! Four fixed ways of revealing something about the target word. The engine
//! picks one uniformly at random per request; repeats are allowed.

use super::{Difficulty, Word};
use rand::Rng;
use std::fmt;

/// A single way of revealing information about the word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintKind {
    FirstLetter,
    LastLetter,
    WordLength,
    Category,
}

impl HintKind {
    /// All hint kinds, in the order they are drawn from
    pub const ALL: [Self; 4] = [
        Self::FirstLetter,
        Self::LastLetter,
        Self::WordLength,
        Self::Category,
    ];

    /// Draw a hint kind uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Format the hint text for a word of the given tier
    #[must_use]
    pub fn reveal(self, word: &Word, difficulty: Difficulty) -> String {
        match self {
            Self::FirstLetter => format!("The first letter is \"{}\"", word.first()),
            Self::LastLetter => format!("The last letter is \"{}\"", word.last()),
            Self::WordLength => format!("The word has {} letters", word.len()),
            Self::Category => format!("Category: {}", difficulty.category()),
        }
    }
}

impl fmt::Display for HintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FirstLetter => "First letter",
            Self::LastLetter => "Last letter",
            Self::WordLength => "Word length",
            Self::Category => "Word category",
        };
        f.write_str(name)
    }
}

/// A hint that has been handed out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub kind: HintKind,
    pub text: String,
}

impl Hint {
    #[must_use]
    pub fn new(kind: HintKind, word: &Word, difficulty: Difficulty) -> Self {
        Self {
            kind,
            text: kind.reveal(word, difficulty),
        }
    }
}
