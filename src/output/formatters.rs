//! Formatting utilities for terminal output

use crate::core::{GuessRecord, Hint, LetterStat};
use colored::{ColoredString, Colorize};

/// Format a guessed letter as a coloured tile, e.g. ` G `
#[must_use]
pub fn letter_tile(stat: &LetterStat) -> ColoredString {
    let tile = format!(" {} ", stat.symbol);
    match stat.hint() {
        Hint::Correct => tile.black().on_green().bold(),
        Hint::Present => tile.black().on_yellow().bold(),
        Hint::Absent => tile.white().on_red(),
    }
}

/// Format a whole guess as a row of tiles
#[must_use]
pub fn guess_row(record: &GuessRecord) -> String {
    record
        .letters()
        .iter()
        .map(|stat| letter_tile(stat).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how many chances are left
#[must_use]
pub fn remaining_bar(remaining: u32, chances: u32, width: usize) -> String {
    create_progress_bar(f64::from(remaining), f64::from(chances), width)
}
