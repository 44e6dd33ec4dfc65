//! Form Autosave
//!
//! Persists field values under `<prefix><field name>` keys so a reload can
//! restore a half-filled form.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage operation failed: {0}")]
    Backend(String),
}

/// String key-value storage (browser `localStorage` or an in-memory map)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store, used in tests and as a fallback when storage is blocked
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// A saved field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    fn encode(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Checked(checked) => checked.to_string(),
        }
    }
}

pub const DEFAULT_PREFIX: &str = "autosave_";

/// Autosave bound to one store and key prefix
pub struct Autosave<S> {
    store: S,
    prefix: String,
}

impl<S: KeyValueStore> Autosave<S> {
    pub fn new(store: S, prefix: impl Into<String>) -> Self {
        Self { store, prefix: prefix.into() }
    }

    pub fn key(&self, field_name: &str) -> String {
        format!("{}{}", self.prefix, field_name)
    }

    pub fn save(&self, field_name: &str, value: &FieldValue) -> Result<(), StorageError> {
        self.store.set(&self.key(field_name), &value.encode())
    }

    /// Saved text for a field. Empty saved values count as nothing saved.
    pub fn load_text(&self, field_name: &str) -> Result<Option<String>, StorageError> {
        Ok(self.store.get(&self.key(field_name))?.filter(|v| !v.is_empty()))
    }

    /// Saved checkbox state for a field
    pub fn load_checked(&self, field_name: &str) -> Result<Option<bool>, StorageError> {
        Ok(self.load_text(field_name)?.map(|v| v == "true"))
    }

    /// Remove the saved values of every listed field
    pub fn clear<'a>(&self, field_names: impl IntoIterator<Item = &'a str>) -> Result<(), StorageError> {
        for name in field_names {
            self.store.remove(&self.key(name))?;
        }
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn autosave() -> Autosave<MemoryStore> {
        Autosave::new(MemoryStore::new(), DEFAULT_PREFIX)
    }

    #[test]
    fn test_keys_use_prefix_and_field_name() {
        assert_eq!(autosave().key("destination"), "autosave_destination");
    }

    #[test]
    fn test_text_round_trip() {
        let a = autosave();
        a.save("destination", &FieldValue::Text("Leh Ladakh".into())).unwrap();
        assert_eq!(a.load_text("destination").unwrap().as_deref(), Some("Leh Ladakh"));
        assert_eq!(a.store().get("autosave_destination").unwrap().as_deref(), Some("Leh Ladakh"));
    }

    #[test]
    fn test_checkbox_round_trip() {
        let a = autosave();
        a.save("interests", &FieldValue::Checked(true)).unwrap();
        assert_eq!(a.load_checked("interests").unwrap(), Some(true));
        a.save("interests", &FieldValue::Checked(false)).unwrap();
        assert_eq!(a.load_checked("interests").unwrap(), Some(false));
    }

    #[test]
    fn test_nothing_saved_loads_none() {
        let a = autosave();
        assert_eq!(a.load_text("budget").unwrap(), None);
        a.save("budget", &FieldValue::Text(String::new())).unwrap();
        assert_eq!(a.load_text("budget").unwrap(), None);
    }

    #[test]
    fn test_clear_removes_every_form_key() {
        let a = autosave();
        for name in ["destination", "start_date", "budget"] {
            a.save(name, &FieldValue::Text("x".into())).unwrap();
        }
        a.store().set("unrelated", "keep").unwrap();

        a.clear(["destination", "start_date", "budget"]).unwrap();

        assert_eq!(a.store().len(), 1);
        assert_eq!(a.store().get("unrelated").unwrap().as_deref(), Some("keep"));
    }
}
