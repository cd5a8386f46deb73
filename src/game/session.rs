//! Per-play session state
//!
//! Everything the presentation layer renders lives here. Fields are only
//! mutated by [`super::GameEngine`]; readers get accessors.

use crate::core::{Difficulty, Hint, Word, is_complete, progress_percent};

/// Hints granted at the start of a session
pub const STARTING_HINTS: u32 = 3;

/// Visual kind of a transient message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

/// A short-lived message shown under the guess input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

impl Message {
    pub fn new(text: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Mutable state of one play-through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub(super) difficulty: Option<Difficulty>,
    pub(super) current_word: Option<Word>,
    pub(super) scrambled_word: String,
    pub(super) level: u32,
    pub(super) score: u32,
    pub(super) hints: u32,
    pub(super) active_hint: Option<Hint>,
    pub(super) message: Option<Message>,
    pub(super) round: u64,
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            difficulty: None,
            current_word: None,
            scrambled_word: String::new(),
            level: 1,
            score: 0,
            hints: STARTING_HINTS,
            active_hint: None,
            message: None,
            round: 0,
        }
    }
}

impl GameSession {
    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Target word of the active round
    #[must_use]
    pub fn current_word(&self) -> Option<&Word> {
        self.current_word.as_ref()
    }

    #[must_use]
    pub fn scrambled_word(&self) -> &str {
        &self.scrambled_word
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn hints(&self) -> u32 {
        self.hints
    }

    #[must_use]
    pub fn active_hint(&self) -> Option<&Hint> {
        self.active_hint.as_ref()
    }

    #[must_use]
    pub fn active_hint_text(&self) -> Option<&str> {
        self.active_hint.as_ref().map(|hint| hint.text.as_str())
    }

    #[must_use]
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Identifier of the current round, bumped on every new word
    #[must_use]
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Whether a difficulty has been chosen and a round is on screen
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.difficulty.is_some() && self.current_word.is_some()
    }

    /// Whether the completion banner applies
    #[must_use]
    pub fn is_complete(&self) -> bool {
        is_complete(self.level)
    }

    #[must_use]
    pub fn progress_percent(&self) -> u16 {
        progress_percent(self.level)
    }
}
