//! Target word representation
//!
//! A Word is a validated, lowercased entry from a word list. Validation
//! guarantees the word has at least one arrangement different from itself,
//! which is what lets [`super::scramble`] terminate.

use rustc_hash::FxHashMap;
use std::fmt;

/// Minimum number of characters a playable word must have
pub const MIN_WORD_LEN: usize = 2;

/// A playable word with per-character access
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

/// Error type for words that cannot be played
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("word '{word}' has {len} letter(s), at least {MIN_WORD_LEN} are required")]
    TooShort { word: String, len: usize },
    #[error("word '{0}' repeats a single letter and cannot be scrambled")]
    NoDistinctPermutation(String),
    #[error("word '{0}' contains whitespace or control characters")]
    InvalidCharacters(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is lowercased. Leading or trailing whitespace is not stripped;
    /// callers loading from files trim lines first.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - It has fewer than [`MIN_WORD_LEN`] characters
    /// - It contains whitespace or control characters
    /// - Every character is the same, so no scramble can differ from it
    ///
    /// # Examples
    /// ```
    /// use word_unscramble::core::Word;
    ///
    /// let word = Word::new("Mango").unwrap();
    /// assert_eq!(word.text(), "mango");
    ///
    /// assert!(Word::new("a").is_err());
    /// assert!(Word::new("zz").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();
        let chars: Vec<char> = text.chars().collect();

        if chars.len() < MIN_WORD_LEN {
            return Err(WordError::TooShort {
                len: chars.len(),
                word: text,
            });
        }

        if chars.iter().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(WordError::InvalidCharacters(text));
        }

        if chars.iter().all(|&c| c == chars[0]) {
            return Err(WordError::NoDistinctPermutation(text));
        }

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's characters
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: validation rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// First character
    #[inline]
    #[must_use]
    pub fn first(&self) -> char {
        self.chars[0]
    }

    /// Last character
    #[inline]
    #[must_use]
    pub fn last(&self) -> char {
        self.chars[self.chars.len() - 1]
    }

    /// Case-insensitive exact comparison against a typed guess
    ///
    /// No trimming is applied: `" kiwi"` does not match `"kiwi"`.
    #[must_use]
    pub fn matches_guess(&self, guess: &str) -> bool {
        guess.to_lowercase() == self.text
    }

    /// Check whether `other` uses exactly the same multiset of characters
    #[must_use]
    pub fn is_permutation_of(&self, other: &str) -> bool {
        let mut counts = self.char_counts();
        for c in other.chars() {
            match counts.get_mut(&c) {
                Some(n) if *n > 0 => *n -= 1,
                _ => return false,
            }
        }
        counts.values().all(|&n| n == 0)
    }

    /// Get the count of each character in the word
    pub(crate) fn char_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("kiwi").unwrap();
        assert_eq!(word.text(), "kiwi");
        assert_eq!(word.len(), 4);
        assert_eq!(word.chars(), &['k', 'i', 'w', 'i']);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("BANANA").unwrap();
        assert_eq!(word.text(), "banana");

        let word2 = Word::new("BaNaNa").unwrap();
        assert_eq!(word, word2);
    }

    #[test]
    fn word_creation_too_short() {
        assert!(matches!(
            Word::new(""),
            Err(WordError::TooShort { len: 0, .. })
        ));
        assert!(matches!(
            Word::new("a"),
            Err(WordError::TooShort { len: 1, .. })
        ));
    }

    #[test]
    fn word_creation_single_repeated_letter() {
        assert!(matches!(
            Word::new("aaa"),
            Err(WordError::NoDistinctPermutation(_))
        ));
        assert!(Word::new("ab").is_ok());
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("ice cream"),
            Err(WordError::InvalidCharacters(_))
        ));
        assert!(Word::new("tab\there").is_err());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let word = Word::new("café").unwrap();
        assert_eq!(word.len(), 4);
        assert_eq!(word.last(), 'é');
    }

    #[test]
    fn first_and_last() {
        let word = Word::new("mango").unwrap();
        assert_eq!(word.first(), 'm');
        assert_eq!(word.last(), 'o');
    }

    #[test]
    fn guess_matching_is_case_insensitive() {
        let word = Word::new("apple").unwrap();
        assert!(word.matches_guess("apple"));
        assert!(word.matches_guess("APPLE"));
        assert!(word.matches_guess("aPpLe"));
        assert!(!word.matches_guess("appl"));
    }

    #[test]
    fn guess_matching_does_not_trim() {
        let word = Word::new("apple").unwrap();
        assert!(!word.matches_guess(" apple"));
        assert!(!word.matches_guess("apple\n"));
    }

    #[test]
    fn permutation_check() {
        let word = Word::new("cherry").unwrap();
        assert!(word.is_permutation_of("rrehcy"));
        assert!(word.is_permutation_of("cherry"));
        assert!(!word.is_permutation_of("chery"));
        assert!(!word.is_permutation_of("cherryy"));
        assert!(!word.is_permutation_of("cherrz"));
    }

    #[test]
    fn char_counts_with_duplicates() {
        let word = Word::new("banana").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&'a'), Some(&3));
        assert_eq!(counts.get(&'n'), Some(&2));
        assert_eq!(counts.get(&'b'), Some(&1));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn word_display() {
        let word = Word::new("melon").unwrap();
        assert_eq!(format!("{word}"), "melon");
    }
}
