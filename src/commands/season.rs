//! Show the previous season without playing

use crate::storage::{GameStorage, KeyValueStore};
use anyhow::Result;
use colored::Colorize;
use std::io::Write;

/// Print the last recorded game, as text or as JSON
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn show_season<S: KeyValueStore>(
    storage: &GameStorage<S>,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let season = storage.previous_season();

    if json {
        serde_json::to_writer_pretty(&mut *out, &season)?;
        writeln!(out)?;
        return Ok(());
    }

    match &season.last_secret_word {
        Some(word) => {
            writeln!(out, "{}", "Previous season".bright_cyan().bold())?;
            writeln!(out, "  Word:  {}", word.bright_yellow().bold())?;
            writeln!(out, "  Score: {}", season.last_game_score)?;
        }
        None => writeln!(out, "No previous season recorded yet.")?,
    }
    Ok(())
}
