//! Word list loading utilities
//!
//! Parses word lists from text (one word per line) and validates every entry.
//! Unlike a lenient loader, any unplayable entry is an error: a bad list must
//! fail at startup, not when its word is drawn.

use super::WordListError;
use crate::core::{Difficulty, Word};
use std::fs;
use std::path::Path;

/// Parse a word list from text
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns `WordListError::InvalidWord` with the 1-based line number of the
/// first entry that is not a playable [`Word`].
///
/// # Examples
/// ```
/// use word_unscramble::core::Difficulty;
/// use word_unscramble::wordlists::loader::parse_words;
///
/// let words = parse_words("# fruit\napple\n\nkiwi\n", Difficulty::Easy).unwrap();
/// assert_eq!(words.len(), 2);
/// ```
pub fn parse_words(content: &str, difficulty: Difficulty) -> Result<Vec<Word>, WordListError> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Some((idx + 1, trimmed))
            }
        })
        .map(|(line, text)| {
            Word::new(text).map_err(|source| WordListError::InvalidWord {
                difficulty,
                line,
                source,
            })
        })
        .collect()
}

/// Load a word list from a file
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read, or
/// `WordListError::InvalidWord` for the first unplayable entry.
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    difficulty: Difficulty,
) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_words(&content, difficulty)
}

/// Convert an embedded string slice to validated words
///
/// Entries are numbered from 1 in error reports.
///
/// # Errors
///
/// Returns `WordListError::InvalidWord` for the first unplayable entry.
pub fn words_from_slice(slice: &[&str], difficulty: Difficulty) -> Result<Vec<Word>, WordListError> {
    slice
        .iter()
        .enumerate()
        .map(|(idx, &s)| {
            Word::new(s).map_err(|source| WordListError::InvalidWord {
                difficulty,
                line: idx + 1,
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordError;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["apple", "kiwi", "mango"];
        let words = words_from_slice(input, Difficulty::Easy).unwrap();

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "apple");
        assert_eq!(words[1].text(), "kiwi");
        assert_eq!(words[2].text(), "mango");
    }

    #[test]
    fn words_from_slice_rejects_short_entry() {
        let input = &["apple", "a", "mango"];
        let err = words_from_slice(input, Difficulty::Easy).unwrap_err();

        assert!(matches!(
            err,
            WordListError::InvalidWord {
                difficulty: Difficulty::Easy,
                line: 2,
                source: WordError::TooShort { len: 1, .. },
            }
        ));
    }

    #[test]
    fn parse_skips_comments_and_blank_lines() {
        let content = "# tech words\n\n  computer  \nnetwork\n# end\n";
        let words = parse_words(content, Difficulty::Medium).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "computer");
        assert_eq!(words[1].text(), "network");
    }

    #[test]
    fn parse_reports_file_line_numbers() {
        let content = "# header\nremarkable\n\nx\n";
        let err = parse_words(content, Difficulty::Hard).unwrap_err();

        assert!(matches!(err, WordListError::InvalidWord { line: 4, .. }));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load_from_file("/nonexistent/word_unscramble/easy.txt", Difficulty::Easy)
            .unwrap_err();
        assert!(matches!(err, WordListError::Io { .. }));
    }

    #[test]
    fn load_from_file_reads_words() {
        let dir = std::env::temp_dir().join(format!("word_unscramble_loader_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("medium.txt");
        fs::write(&path, "keyboard\nmonitor\n").unwrap();

        let words = load_from_file(&path, Difficulty::Medium).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "monitor");

        fs::remove_dir_all(&dir).unwrap();
    }
}
