//! Game session controller
//!
//! Connects a [`GameState`] to its collaborators: a [`Renderer`] that shows
//! the game, a [`GuessInput`] that produces guesses, and [`GameStorage`] for
//! the previous season. All of them are passed in explicitly.

use crate::core::{GameState, GameStats, Outcome, RegisterError, WordError};
use crate::storage::{GameStorage, KeyValueStore, SeasonLog, StorageError};
use std::io;
use thiserror::Error;

/// Something that shows the game to the player
pub trait Renderer {
    /// # Errors
    /// Returns an I/O error if output fails.
    fn render_previous_season(&mut self, season: &SeasonLog) -> io::Result<()>;

    /// # Errors
    /// Returns an I/O error if output fails.
    fn render_game_state(&mut self, stats: &GameStats) -> io::Result<()>;

    /// # Errors
    /// Returns an I/O error if output fails.
    fn display_win_message(&mut self) -> io::Result<()>;

    /// # Errors
    /// Returns an I/O error if output fails.
    fn display_lost_message(&mut self) -> io::Result<()>;

    /// # Errors
    /// Returns an I/O error if output fails.
    fn render_correct_word(&mut self, word: &str) -> io::Result<()>;

    /// # Errors
    /// Returns an I/O error if output fails.
    fn render_score(&mut self, stats: &GameStats) -> io::Result<()>;

    /// Clear whatever the player typed; called before each accepted guess
    ///
    /// # Errors
    /// Returns an I/O error if output fails.
    fn reset_guess_input(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Tell the player a submission was ignored
    ///
    /// # Errors
    /// Returns an I/O error if output fails.
    fn display_rejection(&mut self, _rejection: &Rejection) -> io::Result<()> {
        Ok(())
    }
}

/// Source of submitted guesses, one per call
pub trait GuessInput {
    /// Next submitted guess, `Ok(None)` once input is exhausted
    ///
    /// # Errors
    /// Returns an I/O error if reading input fails.
    fn next_guess(&mut self) -> io::Result<Option<String>>;
}

impl<I: Iterator<Item = String>> GuessInput for I {
    fn next_guess(&mut self) -> io::Result<Option<String>> {
        Ok(self.next())
    }
}

/// Why a submission did not reach the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    WrongLength { expected: usize, actual: usize },
    GameOver,
    NotAWord(WordError),
}

impl From<RegisterError> for Rejection {
    fn from(err: RegisterError) -> Self {
        match err {
            RegisterError::LengthMismatch { expected, actual } => {
                Self::WrongLength { expected, actual }
            }
            RegisterError::GameOver => Self::GameOver,
            RegisterError::InvalidWord(e) => Self::NotAWord(e),
        }
    }
}

/// Result of submitting one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Guess registered, game still running
    Continue,
    /// Guess registered and it ended the game
    Finished(Outcome),
    /// Nothing happened
    Rejected(Rejection),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Rendering failed: {0}")]
    Render(#[from] io::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// One game played against a renderer and a season store
pub struct Session<R, S> {
    game: GameState,
    renderer: R,
    storage: GameStorage<S>,
}

impl<R: Renderer, S: KeyValueStore> Session<R, S> {
    pub const fn new(game: GameState, renderer: R, storage: GameStorage<S>) -> Self {
        Self {
            game,
            renderer,
            storage,
        }
    }

    #[must_use]
    pub const fn game(&self) -> &GameState {
        &self.game
    }

    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub const fn storage(&self) -> &GameStorage<S> {
        &self.storage
    }

    /// Show the previous season and the empty board
    ///
    /// # Errors
    /// Returns `SessionError::Render` if the renderer fails.
    pub fn start(&mut self) -> Result<(), SessionError> {
        let season = self.storage.previous_season();
        self.renderer.render_previous_season(&season)?;
        self.renderer.render_game_state(&self.game.stats())?;
        Ok(())
    }

    /// Submit a guess typed by the player
    ///
    /// Guesses of the wrong length, guesses that are not words, and guesses
    /// after the game has ended are ignored. When a guess ends the game the
    /// result is shown and the season is recorded.
    ///
    /// # Errors
    /// Returns `SessionError` if rendering or persisting fails.
    pub fn submit(&mut self, guessed_word: &str) -> Result<Submission, SessionError> {
        let registered = self.game.register(guessed_word).map(|_| ());
        if let Err(e) = registered {
            return self.reject(guessed_word, Rejection::from(e));
        }

        self.renderer.reset_guess_input()?;
        let stats = self.game.stats();
        self.renderer.render_game_state(&stats)?;

        let Some(outcome) = self.game.outcome() else {
            return Ok(Submission::Continue);
        };

        match outcome {
            Outcome::Won => {
                self.renderer.display_win_message()?;
            }
            Outcome::Lost => {
                self.renderer.display_lost_message()?;
                if let Some(word) = self.game.revealed_secret() {
                    self.renderer.render_correct_word(word)?;
                }
            }
        }
        self.renderer.render_score(&stats)?;

        self.storage.record_season(&SeasonLog {
            last_game_score: stats.score,
            last_secret_word: Some(self.game.secret_word().to_string()),
        })?;

        Ok(Submission::Finished(outcome))
    }

    fn reject(
        &mut self,
        guessed_word: &str,
        rejection: Rejection,
    ) -> Result<Submission, SessionError> {
        log::debug!("ignored guess {guessed_word:?}: {rejection:?}");
        self.renderer.display_rejection(&rejection)?;
        Ok(Submission::Rejected(rejection))
    }

    /// Feed guesses from `input` until the game ends or input runs out
    ///
    /// # Errors
    /// Returns `SessionError` if reading input, rendering, or persisting
    /// fails.
    pub fn run(&mut self, input: &mut impl GuessInput) -> Result<Option<Outcome>, SessionError> {
        while !self.game.is_game_over() {
            let Some(guess) = input.next_guess()? else {
                break;
            };
            self.submit(&guess)?;
        }
        Ok(self.game.outcome())
    }

    /// Replace the current game with a fresh one and show it
    ///
    /// # Errors
    /// Returns `SessionError::Render` if the renderer fails.
    pub fn new_game(&mut self, game: GameState) -> Result<(), SessionError> {
        self.game = game;
        self.start()
    }
}
