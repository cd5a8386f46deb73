//! Word Unscramble - CLI
//!
//! Word-unscramble game with TUI and simple text modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::info;
use word_unscramble::{
    commands::{run_simple, scramble_word},
    core::Difficulty,
    game::GameEngine,
    interactive::{App, run_tui},
    logging::{Fallback, init_tracing},
    output::{print_scrambles, print_word_lists},
    wordlists::WordBank,
};

#[derive(Parser)]
#[command(
    name = "word_unscramble",
    about = "Unscramble words across three difficulty tiers and ten levels",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for reproducible word choice and scrambles
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Directory with easy.txt, medium.txt and hard.txt overriding the built-in lists
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Append log output to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Skip the menu and start on this tier
        #[arg(short, long, value_enum)]
        difficulty: Option<Difficulty>,
    },

    /// Simple text mode on stdin/stdout
    Simple {
        /// Start on this tier instead of prompting
        #[arg(short, long, value_enum)]
        difficulty: Option<Difficulty>,
    },

    /// Print scrambles of a word
    Scramble {
        /// The word to scramble
        word: String,

        /// Number of scrambles to print
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,
    },

    /// List the words of each tier
    Words {
        /// Only list this tier
        #[arg(short, long, value_enum)]
        difficulty: Option<Difficulty>,
    },
}

/// Built-in lists, or the ones under `--words`
fn load_bank(dir: Option<&PathBuf>) -> Result<WordBank> {
    match dir {
        Some(dir) => WordBank::from_dir(dir)
            .with_context(|| format!("failed to load word lists from {}", dir.display())),
        None => WordBank::embedded().context("built-in word lists are invalid"),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            info!(seed, "using seeded rng");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { difficulty: None });

    let fallback = if matches!(command, Commands::Play { .. }) {
        Fallback::Discard
    } else {
        Fallback::Stderr
    };
    init_tracing(cli.log_file.as_deref(), fallback, cli.verbose)?;

    let bank = load_bank(cli.words.as_ref())?;
    let mut rng = make_rng(cli.seed);

    match command {
        Commands::Play { difficulty } => {
            let engine = GameEngine::with_rng(bank, rng);
            run_tui(App::new(engine, difficulty))
        }
        Commands::Simple { difficulty } => {
            let mut engine = GameEngine::with_rng(bank, rng);
            run_simple(&mut engine, difficulty)
        }
        Commands::Scramble { word, count } => {
            let result = scramble_word(&word, count, &mut rng)
                .with_context(|| format!("cannot scramble {word:?}"))?;
            print_scrambles(&result.word, &result.scrambles);
            Ok(())
        }
        Commands::Words { difficulty } => {
            print_word_lists(&bank, difficulty);
            Ok(())
        }
    }
}
