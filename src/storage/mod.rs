//! Persistence of the previous season
//!
//! Storage is a flat string key-value store, the same shape as browser local
//! storage. [`GameStorage`] puts typed accessors for the two keys the game
//! uses on top of any [`KeyValueStore`].

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Key holding the score of the last finished game
pub const LAST_GAME_SCORE_KEY: &str = "lastGameScore";

/// Key holding the secret word of the last finished game
pub const LAST_SECRET_WORD_KEY: &str = "lastSecretWord";

/// Error reading or writing persisted data
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed season file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Synchronous string key-value store
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;

    /// # Errors
    /// Returns `StorageError` if the value could not be persisted.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Score and secret word of the last finished game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonLog {
    pub last_game_score: u32,
    /// `None` when no game has been recorded yet
    pub last_secret_word: Option<String>,
}

impl fmt::Display for SeasonLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "word {}, score {}",
            self.last_secret_word.as_deref().unwrap_or("-"),
            self.last_game_score
        )
    }
}

/// Typed access to the persisted season
#[derive(Debug)]
pub struct GameStorage<S> {
    store: S,
}

impl<S: KeyValueStore> GameStorage<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Score of the last game, 0 if none was stored or the value is unreadable
    #[must_use]
    pub fn last_game_score(&self) -> u32 {
        let Some(raw) = self.store.get_item(LAST_GAME_SCORE_KEY) else {
            return 0;
        };

        raw.trim().parse().unwrap_or_else(|e| {
            log::warn!("ignoring malformed {LAST_GAME_SCORE_KEY} {raw:?}: {e}");
            0
        })
    }

    /// Secret word of the last game, `None` if none was stored
    #[must_use]
    pub fn last_secret_word(&self) -> Option<String> {
        self.store
            .get_item(LAST_SECRET_WORD_KEY)
            .map(|word| word.trim().to_string())
            .filter(|word| !word.is_empty())
    }

    /// # Errors
    /// Returns `StorageError` if the store cannot persist the value.
    pub fn store_game_score(&mut self, game_score: u32) -> Result<(), StorageError> {
        self.store
            .set_item(LAST_GAME_SCORE_KEY, &game_score.to_string())
    }

    /// # Errors
    /// Returns `StorageError` if the store cannot persist the value.
    pub fn store_secret_word(&mut self, secret_word: &str) -> Result<(), StorageError> {
        self.store.set_item(LAST_SECRET_WORD_KEY, secret_word)
    }

    #[must_use]
    pub fn previous_season(&self) -> SeasonLog {
        SeasonLog {
            last_game_score: self.last_game_score(),
            last_secret_word: self.last_secret_word(),
        }
    }

    /// Persist both fields of a finished game
    ///
    /// # Errors
    /// Returns `StorageError` if either field cannot be persisted.
    pub fn record_season(&mut self, season: &SeasonLog) -> Result<(), StorageError> {
        self.store_game_score(season.last_game_score)?;
        if let Some(word) = &season.last_secret_word {
            self.store_secret_word(word)?;
        }
        log::info!("recorded season: {season}");
        Ok(())
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}
