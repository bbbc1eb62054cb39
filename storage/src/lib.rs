pub mod repository;
pub mod settings;

#[cfg(test)]
mod tests;

pub use repository::{IdeaRepository, IDEAS_KEY};
pub use settings::{
    SettingsStore, CREDENTIAL_KEY, DEFAULT_POPULATE_URL, DEFAULT_WEBHOOK_URL, POPULATE_URL_KEY,
    WEBHOOK_URL_KEY,
};

use ideapad_core::{CoreError, StorageError};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::debug;

/// The persistence boundary. Every persisted piece of state is an
/// independent string entry under a fixed key, written whole on every
/// change. Injected so the repository, settings store and access gate can
/// be tested against the in-memory implementation.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
    fn remove(&self, key: &str) -> Result<(), CoreError>;
}

/// File-per-key store under a data directory. Concurrent writers to the
/// same directory are last-writer-wins; only one app instance is expected
/// to write.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        debug!("Using data directory {}", dir.display());
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CoreError::Storage(StorageError::ReadFailed {
                key: key.to_string(),
                reason: e.to_string(),
            })),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        std::fs::write(self.path_for(key), value).map_err(|e| {
            CoreError::Storage(StorageError::WriteFailed {
                key: key.to_string(),
                reason: e.to_string(),
            })
        })
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CoreError::Storage(StorageError::WriteFailed {
                key: key.to_string(),
                reason: e.to_string(),
            })),
        }
    }
}

/// In-memory substitute used by tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self
            .entries
            .lock()
            .expect("memory store lock")
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        self.entries
            .lock()
            .expect("memory store lock")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        self.entries.lock().expect("memory store lock").remove(key);
        Ok(())
    }
}
