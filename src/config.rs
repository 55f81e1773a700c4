//! Game configuration
//!
//! Settings gathered from the command line before a game starts.

use crate::core::{GameState, Word};
use crate::storage::{GameStorage, JsonFileStore, KeyValueStore, MemoryStore, StorageError};
use crate::wordlists::WORDS;
use crate::wordlists::loader::{load_from_file, pick_random, words_from_slice};
use anyhow::{Context, Result, bail};
use std::path::PathBuf;

/// Chances per game unless overridden
pub const DEFAULT_CHANCES: u32 = 6;

/// Upper bound on `--chances`
pub const MAX_CHANCES: u32 = 100;

/// Season file used unless overridden
pub const DEFAULT_SEASON_FILE: &str = ".wordle_season.json";

/// Where secret words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// The list compiled into the binary
    Embedded,
    /// One word per line in a file
    File(PathBuf),
    /// Always the same word
    Fixed(String),
}

/// Settings for a run of games
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub chances: u32,
    pub words: WordSource,
    /// `None` keeps the season in memory only
    pub season_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            chances: DEFAULT_CHANCES,
            words: WordSource::Embedded,
            season_file: Some(PathBuf::from(DEFAULT_SEASON_FILE)),
        }
    }
}

impl GameConfig {
    /// Check the settings before any game is created
    ///
    /// # Errors
    /// Returns an error if the chances are outside `1..=MAX_CHANCES` or the
    /// fixed word is invalid.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_CHANCES).contains(&self.chances) {
            bail!("--chances must be between 1 and {MAX_CHANCES}");
        }
        if let WordSource::Fixed(word) = &self.words {
            Word::new(word).with_context(|| format!("Invalid secret word {word:?}"))?;
        }
        Ok(())
    }

    /// Load the candidate secret words
    ///
    /// # Errors
    /// Returns an error if the word file cannot be read or yields no words.
    pub fn load_words(&self) -> Result<Vec<Word>> {
        let words = match &self.words {
            WordSource::Embedded => words_from_slice(WORDS),
            WordSource::File(path) => load_from_file(path)
                .with_context(|| format!("Failed to read word list {}", path.display()))?,
            WordSource::Fixed(word) => vec![Word::new(word)?],
        };

        if words.is_empty() {
            bail!("Word list is empty");
        }
        Ok(words)
    }

    /// Start a new game with a random word from `words`
    ///
    /// # Errors
    /// Returns an error if `words` is empty or the chance budget is invalid.
    pub fn new_game(&self, words: &[Word]) -> Result<GameState> {
        let secret = pick_random(words, &mut rand::rng()).context("Word list is empty")?;
        log::debug!("new game: {} letters, {} chances", secret.letter_count(), self.chances);
        Ok(GameState::with_chances(secret.text(), self.chances)?)
    }

    /// Open the season store this configuration points at
    ///
    /// # Errors
    /// Returns `StorageError` if the season file exists but cannot be read.
    pub fn open_storage(&self) -> Result<GameStorage<SeasonStore>, StorageError> {
        let store = match &self.season_file {
            Some(path) => SeasonStore::File(JsonFileStore::open(path)?),
            None => SeasonStore::Memory(MemoryStore::new()),
        };
        Ok(GameStorage::new(store))
    }
}

/// Either kind of season store, picked at runtime
#[derive(Debug)]
pub enum SeasonStore {
    File(JsonFileStore),
    Memory(MemoryStore),
}

impl KeyValueStore for SeasonStore {
    fn get_item(&self, key: &str) -> Option<String> {
        match self {
            Self::File(store) => store.get_item(key),
            Self::Memory(store) => store.get_item(key),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            Self::File(store) => store.set_item(key, value),
            Self::Memory(store) => store.set_item(key, value),
        }
    }
}
