//! Display functions for the text-mode game and listing commands

use super::formatters::{letter_tiles, level_bar};
use crate::core::{Difficulty, MAX_LEVEL, Word};
use crate::game::{GameSession, Message, MessageKind};
use crate::wordlists::WordBank;
use colored::Colorize;

/// Print the title banner for text mode
pub fn print_banner() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Unscramble - Text Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
}

/// Print the status line and scrambled letters of the current round
pub fn print_round(session: &GameSession) {
    let Some(difficulty) = session.difficulty() else {
        return;
    };

    println!("{}", "─".repeat(60).cyan());
    println!(
        "Level {}  │  {} {}  │  Hints: {}  │  {}",
        session.level().to_string().bright_white().bold(),
        "★".bright_yellow(),
        session.score().to_string().bold(),
        session.hints(),
        tier_colored(difficulty)
    );
    println!(
        "Progress [{}] {}/{MAX_LEVEL}",
        level_bar(session.progress_percent(), 20).bright_magenta(),
        session.level()
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n   {}\n",
        letter_tiles(session.scrambled_word()).bright_magenta().bold()
    );

    if let Some(hint) = session.active_hint_text() {
        println!("   💡 {}\n", hint.bright_blue());
    }

    if session.is_complete() {
        print_completion();
    }
}

/// Print a transient message in its kind's color
pub fn print_message(message: &Message) {
    let text = match message.kind {
        MessageKind::Success => format!("✅ {}", message.text).green().bold(),
        MessageKind::Error => format!("❌ {}", message.text).red().bold(),
        MessageKind::Info => message.text.blue(),
    };
    println!("{text}\n");
}

/// Print the completion banner
pub fn print_completion() {
    println!(
        "{}\n",
        "🏆 Congratulations! You've completed all levels!"
            .bright_yellow()
            .bold()
    );
}

/// Print tiers with their category, multiplier and words
pub fn print_word_lists(bank: &WordBank, only: Option<Difficulty>) {
    let tiers: Vec<Difficulty> = only.map_or_else(|| Difficulty::ALL.to_vec(), |d| vec![d]);

    for difficulty in tiers {
        let words = bank.words(difficulty);
        println!(
            "\n📦 {} ({}, x{} points, {} words)",
            tier_colored(difficulty),
            difficulty.category(),
            difficulty.multiplier(),
            words.len()
        );
        let list = words.iter().map(Word::text).collect::<Vec<_>>().join(", ");
        println!("   {list}");
    }
    println!();
}

/// Print generated scrambles of a word
pub fn print_scrambles(word: &Word, scrambles: &[String]) {
    println!(
        "\nScrambles of {}:",
        word.text().to_uppercase().bright_yellow().bold()
    );
    for (i, scrambled) in scrambles.iter().enumerate() {
        println!(
            "  {}. {}",
            (i + 1).to_string().bright_black(),
            letter_tiles(scrambled)
        );
    }
    println!();
}

fn tier_colored(difficulty: Difficulty) -> colored::ColoredString {
    match difficulty {
        Difficulty::Easy => difficulty.label().green().bold(),
        Difficulty::Medium => difficulty.label().yellow().bold(),
        Difficulty::Hard => difficulty.label().red().bold(),
    }
}
