//! Line-based renderer for the simple CLI mode

use super::formatters::{guess_row, remaining_bar};
use crate::core::GameStats;
use crate::session::{Rejection, Renderer};
use crate::storage::SeasonLog;
use colored::Colorize;
use std::io::{self, Write};

/// Renders the game as plain terminal lines
pub struct TerminalRenderer<W> {
    out: W,
}

impl TerminalRenderer<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render_previous_season(&mut self, season: &SeasonLog) -> io::Result<()> {
        writeln!(
            self.out,
            "{} {}",
            "Previous season:".bright_black(),
            season.to_string().bright_black()
        )
    }

    fn render_game_state(&mut self, stats: &GameStats) -> io::Result<()> {
        writeln!(self.out, "\n{}", "─".repeat(40).cyan())?;
        writeln!(
            self.out,
            "Chances: {}   Remaining: {}   {}",
            stats.chances,
            stats.remaining_chances(),
            remaining_bar(stats.remaining_chances(), stats.chances, 12).green()
        )?;

        if !stats.guess_history.is_empty() {
            writeln!(self.out, "{}", "Your Guesses:".bright_cyan().bold())?;
        }
        for (i, record) in stats.guess_history.iter().enumerate() {
            writeln!(
                self.out,
                "  {}. {}",
                (i + 1).to_string().bright_black(),
                guess_row(record)
            )?;
        }
        self.out.flush()
    }

    fn display_win_message(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n{}", "You Won !!!".bright_green().bold())
    }

    fn display_lost_message(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n{}", "You Lost !!!".bright_red().bold())
    }

    fn render_correct_word(&mut self, word: &str) -> io::Result<()> {
        writeln!(self.out, "correct word: {}", word.bright_yellow().bold())
    }

    fn render_score(&mut self, stats: &GameStats) -> io::Result<()> {
        writeln!(
            self.out,
            "Score: {}",
            stats.score.to_string().bright_cyan().bold()
        )?;
        self.out.flush()
    }

    fn display_rejection(&mut self, rejection: &Rejection) -> io::Result<()> {
        let message = match rejection {
            Rejection::WrongLength { expected, actual } => {
                format!("❌ Guess must be {expected} letters (got {actual})")
            }
            Rejection::GameOver => "❌ The game is over".to_string(),
            Rejection::NotAWord(e) => format!("❌ {e}"),
        };
        writeln!(self.out, "{}", message.red())?;
        self.out.flush()
    }
}
