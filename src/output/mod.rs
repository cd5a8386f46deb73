//! Terminal output formatting
//!
//! Display utilities for text mode and listing commands.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_completion, print_message, print_round, print_scrambles, print_word_lists,
};
