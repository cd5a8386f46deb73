//! Word Unscramble
//!
//! A single-player word-unscramble game: pick a difficulty tier, unscramble
//! the word, spend hints, and climb ten levels.
//!
//! # Quick Start
//!
//! ```rust
//! use word_unscramble::core::Difficulty;
//! use word_unscramble::game::{GameEngine, GuessOutcome};
//! use word_unscramble::wordlists::WordBank;
//!
//! let bank = WordBank::embedded().unwrap();
//! let mut engine = GameEngine::seeded(bank, 42);
//! engine.select_difficulty(Difficulty::Easy);
//!
//! let answer = engine.session().current_word().unwrap().text().to_uppercase();
//! assert!(matches!(engine.submit_guess(&answer), GuessOutcome::Correct { .. }));
//! ```

// Core domain types
pub mod core;

// Session state and transitions
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
