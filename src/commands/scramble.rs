//! Scramble command
//!
//! Produces scrambles of an arbitrary word, validated the same way as word
//! list entries.

use crate::core::{Word, WordError, scramble};
use rand::Rng;

/// Result of scrambling a word several times
pub struct ScrambleResult {
    pub word: Word,
    pub scrambles: Vec<String>,
}

/// Scramble `text` `count` times
///
/// # Errors
///
/// Returns `WordError` if `text` could never be scrambled (too short, a
/// single repeated letter, or containing whitespace).
pub fn scramble_word<R: Rng + ?Sized>(
    text: &str,
    count: usize,
    rng: &mut R,
) -> Result<ScrambleResult, WordError> {
    let word = Word::new(text)?;
    let scrambles = (0..count).map(|_| scramble(&word, &mut *rng)).collect();

    Ok(ScrambleResult { word, scrambles })
}
