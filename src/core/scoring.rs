//! Scoring and level progression

use super::{Difficulty, Word};

/// Points per letter before the tier multiplier
pub const POINTS_PER_LETTER: u32 = 10;

/// Level at which the game counts as complete
pub const MAX_LEVEL: u32 = 10;

/// Points awarded for unscrambling `word` on the given tier
///
/// `len(word) * multiplier * 10`
#[must_use]
pub fn calculate_points(word: &Word, difficulty: Difficulty) -> u32 {
    let len = u32::try_from(word.len()).unwrap_or(u32::MAX);
    len.saturating_mul(difficulty.multiplier())
        .saturating_mul(POINTS_PER_LETTER)
}

/// Progress toward [`MAX_LEVEL`] as a percentage, clamped to 100
#[must_use]
pub fn progress_percent(level: u32) -> u16 {
    level.saturating_mul(100 / MAX_LEVEL).min(100) as u16
}

/// Whether the completion banner should be shown
///
/// Play continues past this point; the level keeps rising.
#[inline]
#[must_use]
pub const fn is_complete(level: u32) -> bool {
    level >= MAX_LEVEL
}
