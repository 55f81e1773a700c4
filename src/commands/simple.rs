//! Simple interactive CLI mode
//!
//! Text-based game without TUI

use crate::config::GameConfig;
use crate::core::GameState;
use crate::output::TerminalRenderer;
use crate::session::{GuessInput, Renderer, Session};
use crate::storage::KeyValueStore;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Reads one guess per line from a buffered reader
pub struct StdinInput<B> {
    reader: B,
    prompt: String,
}

impl StdinInput<io::StdinLock<'static>> {
    #[must_use]
    pub fn new(secret_length: usize) -> Self {
        Self::from_reader(io::stdin().lock(), secret_length)
    }
}

impl<B: BufRead> StdinInput<B> {
    pub fn from_reader(reader: B, secret_length: usize) -> Self {
        let mut input = Self {
            reader,
            prompt: String::new(),
        };
        input.set_secret_length(secret_length);
        input
    }

    /// Update the prompt for a game with a different secret length
    pub fn set_secret_length(&mut self, secret_length: usize) {
        self.prompt = format!("Guess ({secret_length} letters)");
    }

    /// Read one trimmed line, `None` at end of input
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{prompt}: ");
        io::stdout().flush()?;

        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }
}

impl<B: BufRead> GuessInput for StdinInput<B> {
    fn next_guess(&mut self) -> io::Result<Option<String>> {
        let prompt = self.prompt.clone();
        match self.read_line(&prompt)? {
            Some(line) if is_quit(&line) => Ok(None),
            other => Ok(other),
        }
    }
}

fn is_quit(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit" | ":q")
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the word list or season file cannot be loaded, or
/// there's an I/O error reading input or writing output.
pub fn run_simple(config: &GameConfig) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the secret word. After each guess every letter is marked:\n");
    println!("  - {} correct letter, correct position", " G ".black().on_green());
    println!("  - {} letter is in the word elsewhere", " Y ".black().on_yellow());
    println!("  - {} letter is not in the word", " R ".white().on_red());
    println!("\nCommands: 'quit' to exit\n");

    let words = config.load_words()?;
    let storage = config.open_storage()?;
    let game = config.new_game(&words)?;
    let mut input = StdinInput::new(game.secret_word_length());

    let mut session = Session::new(game, TerminalRenderer::stdout(), storage);
    session.start()?;

    play_rounds(&mut session, &mut input, || config.new_game(&words))?;
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Play games until input ends or the player declines another round
///
/// The same reader is kept across games. Returns the number of finished
/// games.
fn play_rounds<B, R, S>(
    session: &mut Session<R, S>,
    input: &mut StdinInput<B>,
    mut next_game: impl FnMut() -> Result<GameState>,
) -> Result<usize>
where
    B: BufRead,
    R: Renderer,
    S: KeyValueStore,
{
    let mut finished = 0;
    loop {
        if session.run(input)?.is_none() {
            // Input ended or the player quit mid-game
            return Ok(finished);
        }
        finished += 1;

        match input.read_line("\nPlay again? (yes/no)")?.as_deref() {
            Some("yes" | "y") => {
                session.new_game(next_game()?)?;
                input.set_secret_length(session.game().secret_word_length());
                println!("\n🔄 New game started!\n");
            }
            _ => return Ok(finished),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Outcome;
    use crate::storage::{GameStorage, MemoryStore};

    #[test]
    fn reads_guesses_line_by_line() {
        let mut input = StdinInput::from_reader("hover\n great \n".as_bytes(), 5);

        assert_eq!(input.next_guess().unwrap().as_deref(), Some("hover"));
        assert_eq!(input.next_guess().unwrap().as_deref(), Some("great"));
        assert_eq!(input.next_guess().unwrap(), None);
    }

    #[test]
    fn quit_ends_input() {
        let mut input = StdinInput::from_reader("QUIT\ngreat\n".as_bytes(), 5);
        assert_eq!(input.next_guess().unwrap(), None);
    }

    #[test]
    fn scripted_game_through_session() {
        let mut input = StdinInput::from_reader("toolong\nhover\ngreat\n".as_bytes(), 5);
        let mut session = Session::new(
            GameState::with_chances("great", 6).unwrap(),
            TerminalRenderer::new(Vec::new()),
            GameStorage::new(MemoryStore::new()),
        );

        session.start().unwrap();
        assert_eq!(session.run(&mut input).unwrap(), Some(Outcome::Won));
        assert_eq!(session.game().stats().score, 50);
        assert_eq!(session.storage().last_game_score(), 50);
    }

    #[test]
    fn quit_words() {
        assert!(is_quit("q"));
        assert!(is_quit("Exit"));
        assert!(!is_quit("quilt"));
    }

    #[test]
    fn play_again_reuses_the_reader() {
        let mut input =
            StdinInput::from_reader("great\nyes\nhover\ngreat\nno\n".as_bytes(), 5);
        let mut session = Session::new(
            GameState::with_chances("great", 6).unwrap(),
            TerminalRenderer::new(Vec::new()),
            GameStorage::new(MemoryStore::new()),
        );
        session.start().unwrap();

        let finished = play_rounds(&mut session, &mut input, || {
            Ok(GameState::with_chances("great", 6)?)
        })
        .unwrap();

        assert_eq!(finished, 2);
        assert_eq!(session.game().stats().attempts, 2);
        assert_eq!(session.storage().last_game_score(), 50);
    }

    #[test]
    fn quitting_mid_game_ends_rounds() {
        let mut input = StdinInput::from_reader("great\ny\nquit\n".as_bytes(), 5);
        let mut session = Session::new(
            GameState::with_chances("great", 6).unwrap(),
            TerminalRenderer::new(Vec::new()),
            GameStorage::new(MemoryStore::new()),
        );

        let finished = play_rounds(&mut session, &mut input, || {
            Ok(GameState::with_chances("hover", 6)?)
        })
        .unwrap();

        assert_eq!(finished, 1);
        assert_eq!(session.game().secret_word(), "HOVER");
        assert!(!session.game().is_game_over());
    }

    #[test]
    fn prompt_follows_secret_length() {
        let mut input = StdinInput::from_reader("".as_bytes(), 5);
        assert_eq!(input.prompt, "Guess (5 letters)");

        input.set_secret_length(7);
        assert_eq!(input.prompt, "Guess (7 letters)");
    }
}
