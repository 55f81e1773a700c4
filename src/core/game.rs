//! Game state machine
//!
//! A `GameState` holds one secret word, a chance budget and the history of
//! scored guesses. It only changes through [`GameState::register`] and is
//! terminal once the word is guessed or the chances run out. A new game
//! needs a new `GameState`.

use super::{GuessRecord, Word, WordError, evaluate};
use thiserror::Error;

/// Points awarded per unused chance, counting the winning guess itself
pub const POINTS_PER_CHANCE: u32 = 10;

/// Error creating a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Invalid secret word: {0}")]
    InvalidSecret(#[from] WordError),
    #[error("A game needs at least one chance")]
    NoChances,
}

/// Reason a guess was not registered
///
/// The game is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error("Guess must be {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("The game is already over")]
    GameOver,
    #[error("Invalid guess: {0}")]
    InvalidWord(#[from] WordError),
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Read-only snapshot of a game, detached from the live state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    pub guess_history: Vec<GuessRecord>,
    pub chances: u32,
    pub attempts: u32,
    pub score: u32,
}

impl GameStats {
    #[must_use]
    pub const fn remaining_chances(&self) -> u32 {
        self.chances.saturating_sub(self.attempts)
    }
}

/// A single Wordle game
#[derive(Debug, Clone)]
pub struct GameState {
    secret: Word,
    chances: u32,
    history: Vec<GuessRecord>,
    attempts: u32,
    current_guess: Option<Word>,
    is_game_over: bool,
    score: u32,
}

impl GameState {
    /// Chance budget used by [`GameState::new`]
    pub const DEFAULT_CHANCES: u32 = 1;

    /// Create a game with [`Self::DEFAULT_CHANCES`] chances
    ///
    /// # Errors
    /// Returns `GameError::InvalidSecret` if the secret word is empty or not
    /// alphabetic.
    pub fn new(secret_word: &str) -> Result<Self, GameError> {
        Self::with_chances(secret_word, Self::DEFAULT_CHANCES)
    }

    /// Create a game with an explicit chance budget
    ///
    /// # Errors
    /// Returns `GameError` if the secret word is invalid or `chances` is 0.
    ///
    /// # Examples
    /// ```
    /// use wordle_season::core::GameState;
    ///
    /// let mut game = GameState::with_chances("great", 6).unwrap();
    /// assert_eq!(game.secret_word_length(), 5);
    ///
    /// game.register("great").unwrap();
    /// assert!(game.is_game_over());
    /// assert_eq!(game.stats().score, 60);
    /// ```
    pub fn with_chances(secret_word: &str, chances: u32) -> Result<Self, GameError> {
        if chances == 0 {
            return Err(GameError::NoChances);
        }

        Ok(Self {
            secret: Word::new(secret_word)?,
            chances,
            history: Vec::new(),
            attempts: 0,
            current_guess: None,
            is_game_over: false,
            score: 0,
        })
    }

    /// Letters a guess must have
    #[inline]
    #[must_use]
    pub fn secret_word_length(&self) -> usize {
        self.secret.letter_count()
    }

    /// The normalized secret word
    ///
    /// Callers should only show this once [`Self::is_game_over`] is true;
    /// see [`Self::revealed_secret`].
    #[inline]
    #[must_use]
    pub fn secret_word(&self) -> &str {
        self.secret.text()
    }

    /// The secret word, but only after the game is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&str> {
        self.is_game_over.then_some(self.secret.text())
    }

    #[inline]
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// Check if the most recent guess was the secret word
    #[must_use]
    pub fn has_guessed_correctly(&self) -> bool {
        self.current_guess.as_ref() == Some(&self.secret)
    }

    #[inline]
    #[must_use]
    pub const fn remaining_chances(&self) -> u32 {
        self.chances.saturating_sub(self.attempts)
    }

    /// `None` while the game is still running
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_game_over {
            None
        } else if self.has_guessed_correctly() {
            Some(Outcome::Won)
        } else {
            Some(Outcome::Lost)
        }
    }

    const fn out_of_chances(&self) -> bool {
        self.attempts >= self.chances
    }

    /// Score and record a guess
    ///
    /// The guess is normalized the same way as the secret word. On success
    /// the feedback is appended to the history, the attempt count goes up,
    /// and the game-over flag and score are recomputed.
    ///
    /// # Errors
    /// Returns `RegisterError` without changing any state if the game is
    /// already over, the guess is not a valid word, or its length differs
    /// from the secret word.
    pub fn register(&mut self, guessed_word: &str) -> Result<&GuessRecord, RegisterError> {
        if self.is_game_over {
            return Err(RegisterError::GameOver);
        }

        let guess = Word::new(guessed_word)?;
        if guess.letter_count() != self.secret_word_length() {
            return Err(RegisterError::LengthMismatch {
                expected: self.secret_word_length(),
                actual: guess.letter_count(),
            });
        }

        let record = evaluate(&self.secret, &guess);
        log::debug!(
            "attempt {}/{}: {guess} {}",
            self.attempts + 1,
            self.chances,
            record.to_emoji()
        );

        self.current_guess = Some(guess);
        self.history.push(record);
        self.attempts += 1;
        self.is_game_over = self.has_guessed_correctly() || self.out_of_chances();
        self.update_score();

        if let Some(outcome) = self.outcome() {
            log::info!(
                "game over: {outcome:?} after {} attempts, score {}",
                self.attempts,
                self.score
            );
        }

        // history was pushed to just above
        Ok(&self.history[self.history.len() - 1])
    }

    fn update_score(&mut self) {
        if self.has_guessed_correctly() {
            self.score = (self.chances - self.attempts + 1) * POINTS_PER_CHANCE;
        }
    }

    /// Snapshot of the history, chances, attempts and score
    #[must_use]
    pub fn stats(&self) -> GameStats {
        GameStats {
            guess_history: self.history.clone(),
            chances: self.chances,
            attempts: self.attempts,
            score: self.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(secret: &str, chances: u32) -> GameState {
        GameState::with_chances(secret, chances).unwrap()
    }

    #[test]
    fn new_game_initial_state() {
        let game = game("there", 6);
        let stats = game.stats();

        assert_eq!(game.secret_word(), "THERE");
        assert_eq!(game.secret_word_length(), 5);
        assert!(!game.is_game_over());
        assert!(!game.has_guessed_correctly());
        assert_eq!(game.outcome(), None);
        assert!(stats.guess_history.is_empty());
        assert_eq!(stats.chances, 6);
        assert_eq!(stats.attempts, 0);
        assert_eq!(stats.score, 0);
    }

    #[test]
    fn default_chances_is_one() {
        let mut game = GameState::new("hello").unwrap();
        assert_eq!(game.stats().chances, 1);

        game.register("world").unwrap();
        assert!(game.is_game_over());
        assert_eq!(game.outcome(), Some(Outcome::Lost));
    }

    #[test]
    fn creation_errors() {
        assert_eq!(
            GameState::with_chances("", 6).unwrap_err(),
            GameError::InvalidSecret(WordError::Empty)
        );
        assert_eq!(
            GameState::with_chances("great", 0).unwrap_err(),
            GameError::NoChances
        );
    }

    #[test]
    fn winning_guess_ends_game_regardless_of_chances() {
        let mut game = game("great", 6);
        game.register("great").unwrap();

        assert!(game.has_guessed_correctly());
        assert!(game.is_game_over());
        assert_eq!(game.outcome(), Some(Outcome::Won));
        assert_eq!(game.remaining_chances(), 5);
    }

    #[test]
    fn guess_is_case_insensitive() {
        let mut game = game("Great", 3);
        let record = game.register("gReAt").unwrap();

        assert!(record.is_solved());
        assert!(game.has_guessed_correctly());
    }

    #[test]
    fn out_of_chances_ends_game() {
        let mut game = game("great", 3);

        for guess in ["hover", "earth", "break"] {
            assert!(!game.is_game_over());
            game.register(guess).unwrap();
        }

        assert!(game.is_game_over());
        assert!(!game.has_guessed_correctly());
        assert_eq!(game.outcome(), Some(Outcome::Lost));
        assert_eq!(game.stats().attempts, 3);
        assert_eq!(game.stats().score, 0);
    }

    #[test]
    fn score_first_attempt_is_maximum() {
        let mut game = game("great", 6);
        game.register("great").unwrap();
        assert_eq!(game.stats().score, 60);
    }

    #[test]
    fn score_last_attempt_is_minimum() {
        let mut game = game("great", 6);
        for guess in ["hover", "earth", "break", "glare", "delta"] {
            game.register(guess).unwrap();
        }
        game.register("great").unwrap();

        assert_eq!(game.stats().attempts, 6);
        assert_eq!(game.stats().score, 10);
    }

    #[test]
    fn score_decreases_linearly() {
        for k in 1..=6u32 {
            let mut game = game("great", 6);
            for _ in 1..k {
                game.register("token").unwrap();
            }
            game.register("great").unwrap();
            assert_eq!(game.stats().score, (6 - k + 1) * 10, "win on attempt {k}");
        }
    }

    #[test]
    fn register_records_feedback_in_order() {
        let mut game = game("great", 6);
        game.register("gater").unwrap();
        game.register("eerie").unwrap();

        let history = game.stats().guess_history;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].word(), "GATER");
        assert_eq!(history[1].word(), "EERIE");
        assert_eq!(history[0].to_emoji(), "🟩🟨🟨🟨🟨");
    }

    #[test]
    fn register_after_game_over_is_rejected() {
        let mut game = game("great", 6);
        game.register("great").unwrap();

        assert_eq!(game.register("token"), Err(RegisterError::GameOver));
        assert_eq!(game.stats().attempts, 1);
        assert_eq!(game.stats().score, 60);
    }

    #[test]
    fn register_wrong_length_is_rejected_without_change() {
        let mut game = game("great", 6);

        assert_eq!(
            game.register("grate s").unwrap_err(),
            RegisterError::InvalidWord(WordError::InvalidCharacters(' '))
        );
        assert_eq!(
            game.register("greats"),
            Err(RegisterError::LengthMismatch {
                expected: 5,
                actual: 6
            })
        );
        assert_eq!(game.stats().attempts, 0);
        assert!(game.stats().guess_history.is_empty());
    }

    #[test]
    fn stats_is_a_snapshot() {
        let mut game = game("great", 6);
        game.register("token").unwrap();

        let mut stats = game.stats();
        stats.guess_history.clear();
        stats.attempts = 99;

        assert_eq!(game.stats().guess_history.len(), 1);
        game.register("great").unwrap();
        assert_eq!(game.stats().attempts, 2);
        assert_eq!(game.stats().score, 50);
    }

    #[test]
    fn secret_only_revealed_after_game_over() {
        let mut game = game("watch", 2);
        assert_eq!(game.revealed_secret(), None);

        game.register("books").unwrap();
        assert_eq!(game.revealed_secret(), None);

        game.register("bloom").unwrap();
        assert_eq!(game.revealed_secret(), Some("WATCH"));
    }

    #[test]
    fn stats_remaining_chances() {
        let mut game = game("glass", 4);
        game.register("guess").unwrap();
        assert_eq!(game.stats().remaining_chances(), 3);
    }
}
