//! Formatting utilities for terminal output

/// Render scrambled letters as uppercase tiles, e.g. `[K] [I] [W] [I]`
#[must_use]
pub fn letter_tiles(scrambled: &str) -> String {
    scrambled
        .chars()
        .map(|c| format!("[{}]", c.to_uppercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress bar for a percentage in `0..=100`
#[must_use]
pub fn level_bar(percent: u16, width: usize) -> String {
    create_progress_bar(f64::from(percent), 100.0, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_are_uppercase() {
        assert_eq!(letter_tiles("iwki"), "[I] [W] [K] [I]");
    }

    #[test]
    fn tiles_empty() {
        assert_eq!(letter_tiles(""), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_overflow_clamped() {
        let bar = create_progress_bar(250.0, 100.0, 4);
        assert_eq!(bar, "████");
    }

    #[test]
    fn level_bar_half() {
        assert_eq!(level_bar(50, 10), "█████░░░░░");
    }
}
