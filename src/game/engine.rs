//! Game engine: session transitions driven by player actions and elapsed time

use super::schedule::{ScheduledTask, Scheduler, TaskAction};
use super::session::{GameSession, Message, MessageKind};
use crate::core::{Difficulty, Hint, HintKind, Word, calculate_points, scramble};
use crate::wordlists::WordBank;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::{debug, info, warn};

/// How long a success message stays up before the next word is dealt
pub const SUCCESS_DELAY: Duration = Duration::from_millis(3000);

/// How long an error message stays up
pub const ERROR_DELAY: Duration = Duration::from_millis(2000);

/// Message shown for a wrong guess
pub const TRY_AGAIN: &str = "Try again!";

/// Where the current round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No difficulty chosen yet
    Idle,
    /// Waiting for a guess
    RoundActive,
    /// Solved; the next word is dealt once the success delay runs out
    RoundResolved,
}

/// Result of submitting a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct { points: u32 },
    Incorrect,
    /// No round to guess in, or the round is already solved
    Ignored,
}

/// Transition applied by [`GameEngine::tick`] or [`GameEngine::settle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fired {
    MessageCleared,
    RoundAdvanced,
}

/// Owns the session and every source of randomness used to mutate it
pub struct GameEngine<R = StdRng> {
    bank: WordBank,
    session: GameSession,
    scheduler: Scheduler,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Engine seeded from OS entropy
    #[must_use]
    pub fn new(bank: WordBank) -> Self {
        Self::with_rng(bank, StdRng::from_os_rng())
    }

    /// Engine with a deterministic word, scramble and hint sequence
    #[must_use]
    pub fn seeded(bank: WordBank, seed: u64) -> Self {
        Self::with_rng(bank, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(bank: WordBank, rng: R) -> Self {
        Self {
            bank,
            session: GameSession::default(),
            scheduler: Scheduler::default(),
            rng,
        }
    }

    /// Read-only view for rendering
    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    #[must_use]
    pub fn pending_task(&self) -> Option<&ScheduledTask> {
        self.scheduler.pending()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if !self.session.is_started() {
            Phase::Idle
        } else if matches!(
            self.scheduler.pending(),
            Some(task) if task.action == TaskAction::Advance
        ) {
            Phase::RoundResolved
        } else {
            Phase::RoundActive
        }
    }

    /// Start a fresh session on `difficulty` and deal the first word
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        info!(tier = %difficulty, "starting session");

        self.scheduler.cancel();
        self.session = GameSession {
            difficulty: Some(difficulty),
            round: self.session.round,
            ..GameSession::default()
        };
        self.next_word();
    }

    /// Deal a random word from the session's tier and scramble it
    ///
    /// Clears the active hint and cancels anything scheduled for the
    /// previous round. Does nothing before a difficulty is chosen.
    pub fn next_word(&mut self) {
        let Some(difficulty) = self.session.difficulty else {
            warn!("next_word called before a difficulty was selected");
            return;
        };

        let word = self.bank.choose(difficulty, &mut self.rng).clone();
        self.start_round(word);
    }

    fn start_round(&mut self, word: Word) {
        if let Some(stale) = self.scheduler.cancel() {
            debug!(?stale, "cancelled task from previous round");
        }

        self.session.scrambled_word = scramble(&word, &mut self.rng);
        self.session.current_word = Some(word);
        self.session.active_hint = None;
        self.session.round += 1;

        debug!(
            round = self.session.round,
            scrambled = %self.session.scrambled_word,
            "dealt new word"
        );
    }

    /// Points the current word is worth on the session's tier
    #[must_use]
    pub fn calculate_points(&self) -> u32 {
        match (&self.session.current_word, self.session.difficulty) {
            (Some(word), Some(difficulty)) => calculate_points(word, difficulty),
            _ => 0,
        }
    }

    /// Compare `text` against the current word, ignoring case
    ///
    /// A correct guess scores immediately and schedules the advance to the
    /// next word; a wrong guess only shows a message. Guesses are ignored
    /// while a solved round waits for its advance.
    pub fn submit_guess(&mut self, text: &str) -> GuessOutcome {
        match self.phase() {
            Phase::Idle => {
                warn!("guess submitted before the game started");
                return GuessOutcome::Ignored;
            }
            Phase::RoundResolved => {
                debug!(round = self.session.round, "guess ignored, round already solved");
                return GuessOutcome::Ignored;
            }
            Phase::RoundActive => {}
        }

        let correct = self
            .session
            .current_word
            .as_ref()
            .is_some_and(|word| word.matches_guess(text));
        let round = self.session.round;

        if correct {
            let points = self.calculate_points();
            self.session.score = self.session.score.saturating_add(points);
            self.session.hints = self.session.hints.saturating_add(1);
            self.session.message = Some(Message::new(
                format!("Correct! +{points} points. You earned a hint!"),
                MessageKind::Success,
            ));
            self.scheduler
                .schedule(TaskAction::Advance, round, SUCCESS_DELAY);

            info!(round, points, score = self.session.score, "correct guess");
            GuessOutcome::Correct { points }
        } else {
            self.session.message = Some(Message::new(TRY_AGAIN, MessageKind::Error));
            self.scheduler
                .schedule(TaskAction::ClearMessage, round, ERROR_DELAY);

            debug!(round, "incorrect guess");
            GuessOutcome::Incorrect
        }
    }

    /// Spend a hint on a randomly chosen reveal
    ///
    /// Returns `None` and leaves the session untouched when no hints remain
    /// or no round is active.
    pub fn request_hint(&mut self) -> Option<&Hint> {
        if self.session.hints == 0 {
            debug!("hint requested with none left");
            return None;
        }

        let (Some(word), Some(difficulty)) =
            (&self.session.current_word, self.session.difficulty)
        else {
            warn!("hint requested before the game started");
            return None;
        };

        let kind = HintKind::random(&mut self.rng);
        let hint = Hint::new(kind, word, difficulty);
        self.session.hints -= 1;

        debug!(%kind, hints_left = self.session.hints, "hint used");
        self.session.active_hint = Some(hint);
        self.session.active_hint.as_ref()
    }

    /// Report elapsed time; runs the pending task once its delay is over
    pub fn tick(&mut self, elapsed: Duration) -> Option<Fired> {
        let task = self.scheduler.tick(elapsed)?;
        self.run(task)
    }

    /// Run the pending task now, regardless of its remaining delay
    pub fn settle(&mut self) -> Option<Fired> {
        let task = self.scheduler.cancel()?;
        self.run(task)
    }

    fn run(&mut self, task: ScheduledTask) -> Option<Fired> {
        if task.round != self.session.round {
            debug!(?task, current = self.session.round, "dropping stale task");
            return None;
        }

        self.session.message = None;

        match task.action {
            TaskAction::ClearMessage => Some(Fired::MessageCleared),
            TaskAction::Advance => {
                self.session.level = self.session.level.saturating_add(1);
                if self.session.is_complete() {
                    info!(level = self.session.level, "all levels completed");
                }
                self.next_word();
                Some(Fired::RoundAdvanced)
            }
        }
    }

    /// Put a specific word in play
    #[cfg(test)]
    pub(crate) fn force_word(&mut self, text: &str) {
        let word = Word::new(text).unwrap();
        self.start_round(word);
    }
}
