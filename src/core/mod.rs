//! Core domain types for the unscramble game
//!
//! Tiers, words, scrambling, hints and scoring. Everything here is pure apart
//! from the caller-supplied RNG, so it can be tested deterministically.

mod difficulty;
mod hint;
mod scramble;
mod scoring;
mod word;

pub use difficulty::{Difficulty, ParseDifficultyError};
pub use hint::{Hint, HintKind};
pub use scramble::scramble;
pub use scoring::{MAX_LEVEL, POINTS_PER_LETTER, calculate_points, is_complete, progress_percent};
pub use word::{MIN_WORD_LEN, Word, WordError};
