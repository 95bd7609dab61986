// ============================================================================
// STORAGE - Durable key/value flag (localStorage in the browser)
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::utils::constants::AUTH_FLAG_VALUE;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Durable boolean flags that survive page reloads
pub trait FlagStore {
    fn read_flag(&self, key: &str) -> Result<bool, StorageError>;
    fn write_flag(&self, key: &str) -> Result<(), StorageError>;
    fn clear_flag(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory flag store. Clones share the same entries, so a clone handed to
/// a freshly built console behaves like the same browser after a reload.
#[derive(Clone, Default)]
pub struct MemoryFlagStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Writes an arbitrary value, as another tab or a devtools user could
    pub fn set_raw(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

impl FlagStore for MemoryFlagStore {
    fn read_flag(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.raw(key).as_deref() == Some(AUTH_FLAG_VALUE))
    }

    fn write_flag(&self, key: &str) -> Result<(), StorageError> {
        self.set_raw(key, AUTH_FLAG_VALUE);
        Ok(())
    }

    fn clear_flag(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// localStorage-backed flags; stores the literal string "true"
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct BrowserFlagStore;

#[cfg(target_arch = "wasm32")]
impl FlagStore for BrowserFlagStore {
    fn read_flag(&self, key: &str) -> Result<bool, StorageError> {
        use gloo_storage::{LocalStorage, Storage};

        let value = LocalStorage::raw()
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?;
        Ok(value.as_deref() == Some(AUTH_FLAG_VALUE))
    }

    fn write_flag(&self, key: &str) -> Result<(), StorageError> {
        use gloo_storage::{LocalStorage, Storage};

        LocalStorage::raw()
            .set_item(key, AUTH_FLAG_VALUE)
            .map_err(|e| StorageError::Operation(format!("{:?}", e)))
    }

    fn clear_flag(&self, key: &str) -> Result<(), StorageError> {
        use gloo_storage::{LocalStorage, Storage};

        LocalStorage::raw()
            .remove_item(key)
            .map_err(|e| StorageError::Operation(format!("{:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::AUTH_FLAG_KEY;

    #[test]
    fn flag_round_trips_and_clears() {
        let store = MemoryFlagStore::new();
        assert_eq!(store.read_flag(AUTH_FLAG_KEY), Ok(false));

        store.write_flag(AUTH_FLAG_KEY).expect("write");
        assert_eq!(store.raw(AUTH_FLAG_KEY).as_deref(), Some("true"));
        assert_eq!(store.read_flag(AUTH_FLAG_KEY), Ok(true));

        store.clear_flag(AUTH_FLAG_KEY).expect("clear");
        assert_eq!(store.read_flag(AUTH_FLAG_KEY), Ok(false));
    }

    #[test]
    fn only_literal_true_counts_as_set() {
        let store = MemoryFlagStore::new();
        store.set_raw(AUTH_FLAG_KEY, "TRUE");
        assert_eq!(store.read_flag(AUTH_FLAG_KEY), Ok(false));
        store.set_raw(AUTH_FLAG_KEY, "1");
        assert_eq!(store.read_flag(AUTH_FLAG_KEY), Ok(false));
    }

    #[test]
    fn clones_share_entries() {
        let store = MemoryFlagStore::new();
        let reloaded = store.clone();
        store.write_flag(AUTH_FLAG_KEY).expect("write");
        assert_eq!(reloaded.read_flag(AUTH_FLAG_KEY), Ok(true));
    }
}
