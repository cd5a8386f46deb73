//! Letter scrambling
//!
//! Shuffles a word's characters with Fisher-Yates until the arrangement
//! differs from the input word. [`Word`] validation guarantees such an
//! arrangement exists, so the loop always terminates.

use super::Word;
use rand::Rng;
use rand::seq::SliceRandom;

/// Scramble a word's letters
///
/// Returns a permutation of `word`'s characters that is never equal to the
/// word itself. Each attempt is a uniform shuffle of the previous attempt.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use word_unscramble::core::{Word, scramble};
///
/// let word = Word::new("grape").unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
/// let scrambled = scramble(&word, &mut rng);
/// assert_ne!(scrambled, "grape");
/// assert!(word.is_permutation_of(&scrambled));
/// ```
pub fn scramble<R: Rng + ?Sized>(word: &Word, rng: &mut R) -> String {
    let mut letters = word.chars().to_vec();

    loop {
        letters.shuffle(rng);
        if letters.as_slice() != word.chars() {
            return letters.into_iter().collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{EASY, HARD, MEDIUM};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scramble_never_returns_input() {
        let mut rng = StdRng::seed_from_u64(42);

        for &text in EASY.iter().chain(MEDIUM).chain(HARD) {
            let word = Word::new(text).unwrap();
            for _ in 0..50 {
                let scrambled = scramble(&word, &mut rng);
                assert_ne!(scrambled, word.text(), "scramble of '{text}' equals input");
                assert!(
                    word.is_permutation_of(&scrambled),
                    "'{scrambled}' is not a permutation of '{text}'"
                );
            }
        }
    }

    #[test]
    fn two_letter_word_is_swapped() {
        let word = Word::new("ab").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            assert_eq!(scramble(&word, &mut rng), "ba");
        }
    }

    #[test]
    fn mostly_repeated_letters_terminate() {
        let word = Word::new("aaaab").unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let scrambled = scramble(&word, &mut rng);
        assert_ne!(scrambled, "aaaab");
        assert_eq!(scrambled.chars().filter(|&c| c == 'b').count(), 1);
    }

    #[test]
    fn same_seed_same_scramble() {
        let word = Word::new("algorithm").unwrap();
        let a = scramble(&word, &mut StdRng::seed_from_u64(2024));
        let b = scramble(&word, &mut StdRng::seed_from_u64(2024));
        assert_eq!(a, b);
    }

    #[test]
    fn output_length_matches_input() {
        let word = Word::new("extraordinary").unwrap();
        let scrambled = scramble(&word, &mut StdRng::seed_from_u64(3));
        assert_eq!(scrambled.chars().count(), word.len());
    }
}
