//! Key-value persistence seam.
//!
//! The page only ever keeps two entries in browser-local storage. Callers go
//! through [`KeyValueStore`] so the same logic runs against `localStorage` in
//! the browser and [`MemoryStore`] in tests.

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Key holding the plan picked in the pricing section.
pub const SELECTED_PLAN_KEY: &str = "selectedPlan";
/// Key holding the JSON array of contact submissions.
pub const CONTACT_MESSAGES_KEY: &str = "contactMessages";

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store refused the write (quota, private mode, missing API).
    #[error("storage backend rejected write to `{key}`: {reason}")]
    Backend { key: String, reason: String },
    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Minimal string key-value store, shaped after the Web Storage API.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store. Used by tests and as the fallback when the browser has
/// no usable `localStorage`.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
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

/// Read a JSON value, falling back to `T::default()` when the key is absent
/// or the stored text does not parse.
pub fn read_json_or_default<T, S>(store: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key) else {
        return T::default();
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "discarding unreadable stored value");
            T::default()
        }
    }
}

pub fn write_json<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn memory_store_get_set_remove() {
        let mut store = MemoryStore::default();
        assert!(store.is_empty());

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
        assert_eq!(store.len(), 1);

        store.remove("k").unwrap();
        assert_eq!(store.get("k"), None);
        // removing a missing key is fine
        store.remove("k").unwrap();
    }

    #[test]
    fn missing_key_reads_as_default() {
        let store = MemoryStore::default();
        let list: Vec<String> = read_json_or_default(&store, "nope");
        assert!(list.is_empty());
    }

    #[test]
    fn garbage_reads_as_default() {
        let mut store = MemoryStore::default();
        store.set(CONTACT_MESSAGES_KEY, "{not json").unwrap();
        let list: Vec<String> = read_json_or_default(&store, CONTACT_MESSAGES_KEY);
        assert!(list.is_empty());

        // valid JSON of the wrong shape is treated the same way
        store.set(CONTACT_MESSAGES_KEY, r#"{"a":1}"#).unwrap();
        let list: Vec<String> = read_json_or_default(&store, CONTACT_MESSAGES_KEY);
        assert!(list.is_empty());
    }

    #[test]
    fn write_then_read_json() {
        let mut store = MemoryStore::default();
        write_json(&mut store, "list", &["a", "b"]).unwrap();
        assert_eq!(store.get("list").as_deref(), Some(r#"["a","b"]"#));

        let list: Vec<String> = read_json_or_default(&store, "list");
        assert_eq!(list, vec!["a".to_string(), "b".to_string()]);
    }
}
