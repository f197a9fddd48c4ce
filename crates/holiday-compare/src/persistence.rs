//! Load/save boundary between the selection set and durable client storage.
//!
//! The stored value is a JSON array of full package records under one key, the
//! same shape the browser front-end writes to local storage. Reads never fail:
//! missing or malformed values decode as an empty selection.
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use holiday_catalog::Package;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage key '{0}' is empty or contains characters outside [A-Za-z0-9._-]")]
    InvalidKey(String),
    #[error("failed to encode selection: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// String key-value medium the selection is mirrored into.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-local store for tests and embedding hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryKeyValueStore {
    values: BTreeMap<String, String>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key under `root`, replaced atomically on write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-'));
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        Ok(holiday_core::read_text_if_exists(&path)?)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        holiday_core::write_text_atomic(&path, value)?;
        Ok(())
    }
}

/// Extracts package ids from a persisted selection value.
///
/// Returns `None` when `raw` is not a JSON array. Elements without a usable id
/// are skipped; numeric ids from older records are stringified.
pub fn decode_persisted_ids(raw: &str) -> Option<Vec<String>> {
    let value = serde_json::from_str::<Value>(raw).ok()?;
    let records = value.as_array()?;
    let ids = records
        .iter()
        .filter_map(|record| match record.get("id")? {
            Value::String(id) if !id.trim().is_empty() => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        })
        .collect();
    Some(ids)
}

/// Persistence adapter for the comparison selection.
#[derive(Debug)]
pub struct SelectionPersistence<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SelectionPersistence<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Ids of the stored records, in stored order; empty when absent or unreadable.
    pub fn load(&self) -> Vec<String> {
        let Some(raw) = self.read_raw() else {
            return Vec::new();
        };
        match decode_persisted_ids(&raw) {
            Some(ids) => ids,
            None => {
                tracing::warn!(key = %self.key, "persisted selection is malformed; starting empty");
                Vec::new()
            }
        }
    }

    /// Stored records that decode as packages; other elements are skipped.
    pub fn load_packages(&self) -> Vec<Package> {
        let Some(raw) = self.read_raw() else {
            return Vec::new();
        };
        let Ok(Value::Array(records)) = serde_json::from_str::<Value>(&raw) else {
            tracing::warn!(key = %self.key, "persisted selection is malformed; starting empty");
            return Vec::new();
        };
        records
            .into_iter()
            .filter_map(|record| serde_json::from_value::<Package>(record).ok())
            .collect()
    }

    /// Overwrites the stored value with the full records of `packages`.
    pub fn save<'a, I>(&mut self, packages: I) -> Result<(), StorageError>
    where
        I: IntoIterator<Item = &'a Package>,
    {
        let records = packages.into_iter().collect::<Vec<_>>();
        let encoded = serde_json::to_string(&records)?;
        self.store.write(&self.key, &encoded)?;
        tracing::debug!(key = %self.key, packages = records.len(), "persisted selection");
        Ok(())
    }

    fn read_raw(&self) -> Option<String> {
        match self.store.read(&self.key) {
            Ok(raw) => raw,
            Err(error) => {
                tracing::warn!(key = %self.key, %error, "failed to read persisted selection");
                None
            }
        }
    }
}
