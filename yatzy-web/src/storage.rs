//! `localStorage`-backed blob store for the game engine.
use thiserror::Error;
use yatzy_game::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowserStorageError {
    #[error("localStorage is unavailable")]
    Unavailable,
    #[error("localStorage rejected the operation: {0}")]
    Rejected(String),
}

/// Stateless handle; every call resolves `window.localStorage` afresh, so
/// storage disabled mid-session degrades instead of holding a dead handle.
/// Hosts without a DOM report [`BrowserStorageError::Unavailable`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, BrowserStorageError> {
    crate::dom::local_storage().map_err(|_| BrowserStorageError::Unavailable)
}

#[cfg(target_arch = "wasm32")]
fn rejected(err: &wasm_bindgen::JsValue) -> BrowserStorageError {
    BrowserStorageError::Rejected(crate::dom::js_error_message(err))
}

impl KeyValueStore for BrowserStorage {
    type Error = BrowserStorageError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?.get_item(key).map_err(|e| rejected(&e))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Err(BrowserStorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| rejected(&e))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
            Err(BrowserStorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?.remove_item(key).map_err(|e| rejected(&e))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Err(BrowserStorageError::Unavailable)
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use yatzy_game::Persistence;

    #[test]
    fn native_hosts_report_unavailable() {
        assert_eq!(BrowserStorage.get("k"), Err(BrowserStorageError::Unavailable));
        assert_eq!(
            BrowserStorage.set("k", "v"),
            Err(BrowserStorageError::Unavailable)
        );
        assert_eq!(BrowserStorage.remove("k"), Err(BrowserStorageError::Unavailable));
    }

    #[test]
    fn persistence_degrades_to_defaults() {
        let persistence = Persistence::new(BrowserStorage);
        assert!(persistence.load_state().is_empty());
        assert!(persistence.load_history().is_empty());
        assert_eq!(persistence.load_language(), yatzy_game::Language::default());
        assert!(
            persistence
                .save_state(&yatzy_game::GameState::default())
                .is_err()
        );
    }
}
