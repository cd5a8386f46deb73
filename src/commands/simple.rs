//! Simple interactive CLI mode
//!
//! Line-based game on stdin/stdout without the TUI. There is no clock here,
//! so delayed transitions are settled right after each guess.

use crate::core::Difficulty;
use crate::game::GameEngine;
use crate::output::{print_banner, print_message, print_round};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// A line typed by the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextCommand {
    Hint,
    NewGame,
    Quit,
    Guess(String),
}

/// Interpret one input line
///
/// Only the line terminator is stripped; guesses are otherwise passed to the
/// engine exactly as typed.
#[must_use]
pub fn parse_line(line: &str) -> TextCommand {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);

    match line {
        "/hint" | "/h" | "?" => TextCommand::Hint,
        "/new" | "/n" => TextCommand::NewGame,
        "/quit" | "/q" | "/exit" => TextCommand::Quit,
        _ => TextCommand::Guess(line.to_string()),
    }
}

/// Run the simple interactive CLI mode
///
/// Prompts for a difficulty when `difficulty` is `None`.
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple<R: Rng>(engine: &mut GameEngine<R>, difficulty: Option<Difficulty>) -> Result<()> {
    print_banner();

    println!("Unscramble the letters to find the hidden word.");
    println!("Every correct answer scores (length × tier multiplier × 10) and earns a hint.\n");
    println!("Commands: '/hint' (or '?') for a hint, '/new' to change difficulty, '/quit' to exit\n");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let difficulty = match difficulty {
        Some(d) => d,
        None => match prompt_difficulty(&mut input)? {
            Some(d) => d,
            None => return Ok(()),
        },
    };
    engine.select_difficulty(difficulty);

    loop {
        print_round(engine.session());

        let Some(line) = read_line(&mut input, "Your guess")? else {
            break;
        };

        match parse_line(&line) {
            TextCommand::Quit => break,
            TextCommand::NewGame => match prompt_difficulty(&mut input)? {
                Some(d) => {
                    engine.select_difficulty(d);
                    println!("\n🔄 New game started!\n");
                }
                None => break,
            },
            TextCommand::Hint => {
                if engine.request_hint().is_none() {
                    println!("{}\n", "No hints left!".bright_black());
                }
            }
            TextCommand::Guess(guess) => {
                let outcome = engine.submit_guess(&guess);
                debug!(?outcome, "text-mode guess");

                if let Some(message) = engine.session().message() {
                    print_message(message);
                }
                engine.settle();
            }
        }
    }

    println!("\n👋 Thanks for playing! Final score: {}\n", engine.session().score());
    Ok(())
}

/// Ask for a tier until a valid one is given; `None` on quit or end of input
fn prompt_difficulty(input: &mut impl BufRead) -> Result<Option<Difficulty>> {
    loop {
        let Some(line) = read_line(input, "Select difficulty (easy / medium / hard)")? else {
            return Ok(None);
        };

        if parse_line(&line) == TextCommand::Quit {
            return Ok(None);
        }

        match line.parse::<Difficulty>() {
            Ok(difficulty) => return Ok(Some(difficulty)),
            Err(e) => println!("❌ {e}\n"),
        }
    }
}

/// Prompt and read one line; `None` at end of input
fn read_line(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read from stdin")?;

    Ok((read > 0).then_some(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_are_recognized() {
        assert_eq!(parse_line("/hint\n"), TextCommand::Hint);
        assert_eq!(parse_line("?\r\n"), TextCommand::Hint);
        assert_eq!(parse_line("/new"), TextCommand::NewGame);
        assert_eq!(parse_line("/q\n"), TextCommand::Quit);
    }

    #[test]
    fn guesses_keep_whitespace_and_case() {
        assert_eq!(
            parse_line(" Apple \n"),
            TextCommand::Guess(" Apple ".to_string())
        );
        assert_eq!(parse_line("\n"), TextCommand::Guess(String::new()));
    }

    #[test]
    fn read_line_reports_end_of_input() {
        let mut empty: &[u8] = b"";
        assert_eq!(read_line(&mut empty, "prompt").unwrap(), None);

        let mut one: &[u8] = b"kiwi\n";
        assert_eq!(
            read_line(&mut one, "prompt").unwrap(),
            Some("kiwi\n".to_string())
        );
    }

    #[test]
    fn prompt_difficulty_retries_until_valid() {
        let mut input: &[u8] = b"extreme\nhard\n";
        assert_eq!(
            prompt_difficulty(&mut input).unwrap(),
            Some(Difficulty::Hard)
        );

        let mut quit: &[u8] = b"/quit\n";
        assert_eq!(prompt_difficulty(&mut quit).unwrap(), None);
    }
}
