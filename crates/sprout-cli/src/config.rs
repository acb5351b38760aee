// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Config service and its filesystem storage adapter.
//!
//! [`ConfigStore`] moves raw blobs keyed by logical name; [`ConfigService`]
//! layers JSON (de)serialization on top. [`FsConfigStore`] keeps one
//! `<key>.json` file per key under a base directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Storage port for raw config blobs (keyed by logical name).
pub trait ConfigStore {
    /// Load a raw config blob. Returns `NotFound` when missing.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Persist a raw config blob.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Error type for config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No document stored under the key.
    #[error("config document not found")]
    NotFound,
    /// Reading or writing the backing file failed.
    #[error("config i/o failed: {0}")]
    Io(#[from] io::Error),
    /// The document is not valid JSON for the requested type.
    #[error("config document is malformed: {0}")]
    Serde(#[from] serde_json::Error),
    /// Anything else, e.g. no resolvable home directory.
    #[error("config unavailable: {0}")]
    Other(String),
}

/// Serializes config values and delegates storage to a `ConfigStore`.
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Wraps `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S> ConfigService<S>
where
    S: ConfigStore,
{
    /// Load and deserialize the value for `key`. Returns `Ok(None)` if missing
    /// or empty.
    pub fn load<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: DeserializeOwned,
    {
        match self.store.load_raw(key) {
            Ok(bytes) if bytes.is_empty() => Ok(None),
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(ConfigError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Serialize and persist the value for `key`.
    pub fn save<T>(&self, key: &str, value: &T) -> Result<(), ConfigError>
    where
        T: Serialize,
    {
        let data = serde_json::to_vec_pretty(value)?;
        self.store.save_raw(key, &data)
    }
}

/// Stores configs as JSON files under a base directory.
pub struct FsConfigStore {
    base: PathBuf,
}

impl FsConfigStore {
    /// Store rooted at the user config directory (e.g. `~/.config/sprout`).
    pub fn new() -> Result<Self, ConfigError> {
        let proj = ProjectDirs::from("dev", "sprout-engine", "sprout")
            .ok_or_else(|| ConfigError::Other("could not resolve config dir".into()))?;
        Self::at(proj.config_dir())
    }

    /// Store rooted at `base`, created if missing.
    pub fn at(base: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let base = base.as_ref().to_path_buf();
        fs::create_dir_all(&base)?;
        Ok(Self { base })
    }

    /// Directory the store writes into.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// File backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl ConfigStore for FsConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(ConfigError::NotFound),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        level: u8,
    }

    #[derive(Default)]
    struct MemStore {
        blobs: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl ConfigStore for MemStore {
        fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
            self.blobs
                .borrow()
                .get(key)
                .cloned()
                .ok_or(ConfigError::NotFound)
        }

        fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
            self.blobs.borrow_mut().insert(key.to_owned(), data.to_vec());
            Ok(())
        }
    }

    #[test]
    fn missing_key_loads_as_none() {
        let svc = ConfigService::new(MemStore::default());
        let loaded: Option<Sample> = svc.load("absent").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn empty_blob_loads_as_none() {
        let svc = ConfigService::new(MemStore::default());
        svc.store().save_raw("blank", b"").unwrap();
        let loaded: Option<Sample> = svc.load("blank").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn save_then_load_through_service() {
        let svc = ConfigService::new(MemStore::default());
        let value = Sample {
            name: "sprout".into(),
            level: 3,
        };
        svc.save("sample", &value).unwrap();
        assert_eq!(svc.load::<Sample>("sample").unwrap(), Some(value));
    }

    #[test]
    fn malformed_blob_is_a_serde_error() {
        let svc = ConfigService::new(MemStore::default());
        svc.store().save_raw("bad", b"{not json").unwrap();
        let err = svc.load::<Sample>("bad").unwrap_err();
        assert!(matches!(err, ConfigError::Serde(_)), "{err}");
    }

    #[test]
    fn fs_store_writes_one_file_per_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsConfigStore::at(dir.path().join("nested")).unwrap();
        assert!(store.base().is_dir());
        assert!(matches!(store.load_raw("cli"), Err(ConfigError::NotFound)));

        store.save_raw("cli", br#"{"precision":2}"#).unwrap();
        assert!(store.path_for("cli").ends_with("cli.json"));
        assert_eq!(store.load_raw("cli").unwrap(), br#"{"precision":2}"#);
    }
}
