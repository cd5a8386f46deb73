//! Full-screen terminal interface

mod app;
mod rendering;

pub use app::{App, LOADING_DELAY, Screen, run_tui};
