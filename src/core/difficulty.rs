//! Difficulty tiers
//!
//! Each tier is bound to a category label and a score multiplier. The word
//! lists themselves live in [`crate::wordlists`].

use std::fmt;
use std::str::FromStr;

/// One of the three difficulty tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers in menu order
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Score multiplier applied to every correct guess
    #[inline]
    #[must_use]
    pub const fn multiplier(self) -> u32 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    /// Category label revealed by the category hint
    #[must_use]
    pub const fn category(self) -> &'static str {
        match self {
            Self::Easy => "Fruits",
            Self::Medium => "Technology",
            Self::Hard => "Descriptive Words",
        }
    }

    /// Lowercase identifier, also used as the word-list file stem
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Capitalized name for display
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for an unrecognized tier name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "e" | "1" => Ok(Self::Easy),
            "medium" | "m" | "2" => Ok(Self::Medium),
            "hard" | "h" | "3" => Ok(Self::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipliers() {
        assert_eq!(Difficulty::Easy.multiplier(), 1);
        assert_eq!(Difficulty::Medium.multiplier(), 2);
        assert_eq!(Difficulty::Hard.multiplier(), 3);
    }

    #[test]
    fn categories() {
        assert_eq!(Difficulty::Easy.category(), "Fruits");
        assert_eq!(Difficulty::Medium.category(), "Technology");
        assert_eq!(Difficulty::Hard.category(), "Descriptive Words");
    }

    #[test]
    fn parse_names_and_shortcuts() {
        assert_eq!("easy".parse(), Ok(Difficulty::Easy));
        assert_eq!("MEDIUM".parse(), Ok(Difficulty::Medium));
        assert_eq!(" h ".parse(), Ok(Difficulty::Hard));
        assert_eq!("2".parse(), Ok(Difficulty::Medium));
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn display_is_capitalized() {
        assert_eq!(Difficulty::Hard.to_string(), "Hard");
        assert_eq!(Difficulty::Easy.id(), "easy");
    }
}
