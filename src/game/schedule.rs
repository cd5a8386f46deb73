//! Delayed, cancelable session transitions
//!
//! Time only moves when the caller reports elapsed time through
//! [`Scheduler::tick`], so tests drive the clock explicitly. At most one task
//! is pending; scheduling a new one supersedes the old.

use std::time::Duration;

/// What to do when a task fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    /// Drop the transient message
    ClearMessage,
    /// Drop the message, bump the level and deal the next word
    Advance,
}

/// A task waiting for its delay to run out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTask {
    pub action: TaskAction,
    /// Round the task belongs to
    pub round: u64,
    pub remaining: Duration,
}

#[derive(Debug, Default, Clone)]
pub struct Scheduler {
    pending: Option<ScheduledTask>,
}

impl Scheduler {
    /// Schedule `action` for `round`, replacing any pending task
    pub fn schedule(&mut self, action: TaskAction, round: u64, delay: Duration) {
        self.pending = Some(ScheduledTask {
            action,
            round,
            remaining: delay,
        });
    }

    /// Drop the pending task, returning it if there was one
    pub fn cancel(&mut self) -> Option<ScheduledTask> {
        self.pending.take()
    }

    #[must_use]
    pub fn pending(&self) -> Option<&ScheduledTask> {
        self.pending.as_ref()
    }

    /// Advance the clock; returns the task if its delay ran out
    pub fn tick(&mut self, elapsed: Duration) -> Option<ScheduledTask> {
        let task = self.pending.as_mut()?;
        task.remaining = task.remaining.saturating_sub(elapsed);

        if task.remaining.is_zero() {
            self.pending.take()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn fires_after_delay() {
        let mut scheduler = Scheduler::default();
        scheduler.schedule(TaskAction::ClearMessage, 1, ms(2000));

        assert_eq!(scheduler.tick(ms(1500)), None);
        let fired = scheduler.tick(ms(500)).unwrap();
        assert_eq!(fired.action, TaskAction::ClearMessage);
        assert_eq!(fired.round, 1);
        assert!(scheduler.pending().is_none());
    }

    #[test]
    fn overshoot_still_fires_once() {
        let mut scheduler = Scheduler::default();
        scheduler.schedule(TaskAction::Advance, 3, ms(3000));

        assert!(scheduler.tick(ms(10_000)).is_some());
        assert!(scheduler.tick(ms(10_000)).is_none());
    }

    #[test]
    fn new_schedule_supersedes_pending() {
        let mut scheduler = Scheduler::default();
        scheduler.schedule(TaskAction::ClearMessage, 1, ms(2000));
        scheduler.tick(ms(1900));
        scheduler.schedule(TaskAction::ClearMessage, 1, ms(2000));

        assert_eq!(scheduler.tick(ms(200)), None);
        assert_eq!(scheduler.pending().unwrap().remaining, ms(1800));
    }

    #[test]
    fn cancel_clears_pending() {
        let mut scheduler = Scheduler::default();
        scheduler.schedule(TaskAction::Advance, 2, ms(3000));

        assert_eq!(scheduler.cancel().map(|t| t.round), Some(2));
        assert_eq!(scheduler.tick(ms(5000)), None);
    }

    #[test]
    fn tick_without_task_is_noop() {
        let mut scheduler = Scheduler::default();
        assert_eq!(scheduler.tick(ms(100)), None);
    }
}
