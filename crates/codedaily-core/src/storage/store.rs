//! The profile storage port.
//!
//! Two scalar values survive reloads: the username and the credit counter.
//! The port keeps the state machine independent of any concrete store, so
//! tests run against [`MemoryStore`] and the CLI against SQLite.

use std::collections::BTreeMap;

use crate::error::StoreError;

/// Key for the persisted display name.
pub const USERNAME_KEY: &str = "code_daily_username";
/// Key for the persisted credit balance (decimal string).
pub const CREDITS_KEY: &str = "code_daily_credits";

/// Durable key-value storage for profile scalars.
pub trait ProfileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Username, if one is stored and non-empty after trimming.
pub fn load_username(store: &dyn ProfileStore) -> Result<Option<String>, StoreError> {
    Ok(store
        .get(USERNAME_KEY)?
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

/// Credit balance; absent or unparsable values count as zero.
pub fn load_credits(store: &dyn ProfileStore) -> Result<u64, StoreError> {
    Ok(store
        .get(CREDITS_KEY)?
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0))
}

pub fn save_credits(store: &mut dyn ProfileStore, credits: u64) -> Result<(), StoreError> {
    store.set(CREDITS_KEY, &credits.to_string())
}

/// In-memory store for tests and embedders without durable storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl ProfileStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credits_roundtrip() {
        let mut store = MemoryStore::default();
        save_credits(&mut store, 130).unwrap();
        assert_eq!(load_credits(&store).unwrap(), 130);
    }

    #[test]
    fn missing_credits_count_as_zero() {
        let store = MemoryStore::default();
        assert_eq!(load_credits(&store).unwrap(), 0);
    }

    #[test]
    fn garbage_credits_count_as_zero() {
        let mut store = MemoryStore::default();
        store.set(CREDITS_KEY, "???").unwrap();
        assert_eq!(load_credits(&store).unwrap(), 0);
    }

    #[test]
    fn blank_username_reads_as_absent() {
        let mut store = MemoryStore::default();
        store.set(USERNAME_KEY, "   ").unwrap();
        assert_eq!(load_username(&store).unwrap(), None);
        store.set(USERNAME_KEY, "ada").unwrap();
        assert_eq!(load_username(&store).unwrap().as_deref(), Some("ada"));
    }

    #[test]
    fn remove_clears_the_entry() {
        let mut store = MemoryStore::default();
        store.set(USERNAME_KEY, "ada").unwrap();
        store.remove(USERNAME_KEY).unwrap();
        assert_eq!(store.get(USERNAME_KEY).unwrap(), None);
    }
}
