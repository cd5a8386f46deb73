//! Game engine and session state
//!
//! [`GameEngine`] is the only writer of [`GameSession`]. Presentation layers
//! read the session, call the engine operations, and feed elapsed time into
//! [`GameEngine::tick`] so delayed transitions can fire.

mod engine;
mod schedule;
mod session;

pub use engine::{ERROR_DELAY, Fired, GameEngine, GuessOutcome, Phase, SUCCESS_DELAY, TRY_AGAIN};
pub use schedule::{ScheduledTask, Scheduler, TaskAction};
pub use session::{GameSession, Message, MessageKind, STARTING_HINTS};
