//! Key-value persistence for the live game, the history log and preferences
use crate::constants::{GAME_HISTORY_KEY, GAME_STATE_KEY, LANGUAGE_KEY};
use crate::history::GameHistoryEntry;
use crate::language::Language;
use crate::player::GameState;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::convert::Infallible;
use std::rc::Rc;
use thiserror::Error;

/// Flat string-keyed blob store.
/// Platform-specific implementations should provide this
pub trait KeyValueStore {
    type Error: std::error::Error + 'static;

    /// Read a blob
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Write a blob, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the write is rejected (quota, disabled storage).
    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Delete a blob
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store rejects the removal.
    fn remove(&self, key: &str) -> Result<(), Self::Error>;
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("storage is read-only")]
pub struct ReadOnlyError;

/// In-process store; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blobs: Rc<RefCell<HashMap<String, String>>>,
    read_only: Rc<Cell<bool>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every subsequent write, like a full or disabled browser store.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }

    /// Raw blob access for inspection and fault injection.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.blobs.borrow().get(key).cloned()
    }

    pub fn put_raw(&self, key: &str, value: &str) {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStore for MemoryStore {
    type Error = ReadOnlyError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        if self.read_only.get() {
            return Err(ReadOnlyError);
        }
        self.put_raw(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        if self.read_only.get() {
            return Err(ReadOnlyError);
        }
        self.blobs.borrow_mut().remove(key);
        Ok(())
    }
}

/// Store that keeps nothing, for contexts without durable storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl KeyValueStore for NullStore {
    type Error = Infallible;

    fn get(&self, _key: &str) -> Result<Option<String>, Self::Error> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// JSON encode/decode layer over a [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct Persistence<S> {
    storage: S,
}

impl<S: KeyValueStore> Persistence<S> {
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), PersistError> {
        let json = serde_json::to_string(value)?;
        self.storage
            .set(key, &json)
            .map_err(|e| PersistError::Storage(e.to_string()))
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, PersistError> {
        let raw = self
            .storage
            .get(key)
            .map_err(|e| PersistError::Storage(e.to_string()))?;
        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Save the live game
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be encoded or written.
    pub fn save_state(&self, state: &GameState) -> Result<(), PersistError> {
        self.write(GAME_STATE_KEY, state)
    }

    /// Load the live game; absent or unreadable blobs yield an empty state.
    #[must_use]
    pub fn load_state(&self) -> GameState {
        match self.read::<GameState>(GAME_STATE_KEY) {
            Ok(state) => state.unwrap_or_default(),
            Err(err) => {
                log::error!("Failed to load game state: {err}");
                GameState::default()
            }
        }
    }

    /// Prepend an entry to the history log
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be encoded or written.
    pub fn append_history(&self, entry: GameHistoryEntry) -> Result<(), PersistError> {
        let mut log = self.load_history();
        log.insert(0, entry);
        self.write(GAME_HISTORY_KEY, &log)
    }

    /// Every archived game, newest first; unreadable logs yield an empty list.
    #[must_use]
    pub fn load_history(&self) -> Vec<GameHistoryEntry> {
        match self.read::<Vec<GameHistoryEntry>>(GAME_HISTORY_KEY) {
            Ok(log) => log.unwrap_or_default(),
            Err(err) => {
                log::error!("Failed to load game history: {err}");
                Vec::new()
            }
        }
    }

    /// Drop the whole history log
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the removal.
    pub fn clear_history(&self) -> Result<(), PersistError> {
        self.storage
            .remove(GAME_HISTORY_KEY)
            .map_err(|e| PersistError::Storage(e.to_string()))
    }

    /// Saved interface language, falling back to the default.
    #[must_use]
    pub fn load_language(&self) -> Language {
        match self.storage.get(LANGUAGE_KEY) {
            Ok(Some(code)) => Language::from_code(&code).unwrap_or_default(),
            Ok(None) => Language::default(),
            Err(err) => {
                log::warn!("Failed to read language preference: {err}");
                Language::default()
            }
        }
    }

    /// Persist the interface language as its bare code
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    pub fn save_language(&self, language: Language) -> Result<(), PersistError> {
        self.storage
            .set(LANGUAGE_KEY, language.code())
            .map_err(|e| PersistError::Storage(e.to_string()))
    }
}
