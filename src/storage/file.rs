//! JSON file backed key-value store
//!
//! The file holds one flat JSON object of string values, e.g.
//! `{"lastGameScore": "40", "lastSecretWord": "GREAT"}`.

use super::{KeyValueStore, StorageError};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Key-value store persisted to a JSON file
///
/// The whole file is read once on open and rewritten on every `set_item`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`
    ///
    /// A missing file is treated as an empty store; it is created on the
    /// first write.
    ///
    /// # Errors
    /// Returns `StorageError` if the file exists but cannot be read or is not
    /// a JSON object of strings.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();

        let items = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => {
                serde_json::from_str(&content).map_err(|source| StorageError::Json {
                    path: path.clone(),
                    source,
                })?
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StorageError::Io { path, source }),
        };

        log::debug!("opened season file {} ({} keys)", path.display(), items.len());
        Ok(Self { path, items })
    }

    fn flush(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(&self.items).map_err(|source| {
            StorageError::Json {
                path: self.path.clone(),
                source,
            }
        })?;

        // Replace via a sibling temp file so readers never see a partial write
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .and_then(|()| fs::rename(&tmp, &self.path))
            .map_err(|source| StorageError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{GameStorage, SeasonLog};

    fn temp_path(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wordle_season_{}_{name}.json",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn missing_file_is_empty_store() {
        let path = temp_path("missing");
        let store = JsonFileStore::open(&path).unwrap();

        assert_eq!(store.get_item("lastGameScore"), None);
        assert!(!path.exists());
    }

    #[test]
    fn writes_survive_reopen() {
        let path = temp_path("reopen");
        {
            let mut storage = GameStorage::new(JsonFileStore::open(&path).unwrap());
            storage
                .record_season(&SeasonLog {
                    last_game_score: 20,
                    last_secret_word: Some("BROOM".to_string()),
                })
                .unwrap();
        }

        let storage = GameStorage::new(JsonFileStore::open(&path).unwrap());
        assert_eq!(storage.last_game_score(), 20);
        assert_eq!(storage.last_secret_word().as_deref(), Some("BROOM"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn file_is_flat_string_object() {
        let path = temp_path("flat");
        let mut store = JsonFileStore::open(&path).unwrap();
        store.set_item("lastGameScore", "50").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: BTreeMap<String, String> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.get("lastGameScore").map(String::as_str), Some("50"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = temp_path("malformed");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            JsonFileStore::open(&path),
            Err(StorageError::Json { .. })
        ));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn empty_file_is_empty_store() {
        let path = temp_path("blank");
        fs::write(&path, "\n").unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get_item("lastSecretWord"), None);

        fs::remove_file(&path).unwrap();
    }
}
