//! Record-store backends behind one trait.
//!
//! Every failure reaches the caller as a `StoreError`; nothing is swallowed,
//! since badges can only be rendered from a record that was actually read.

mod file;
mod memory;
mod rest;

use std::io;
use std::path::Path;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use rest::{parse_rows, RestStore};

use tracing::warn;

use super::{NewRegistration, Registration, ValidationError};
use crate::settings::{StoreBackend, StoreSettings};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("registration not found: {0}")]
    NotFound(String),
    #[error("invalid registration: {0}")]
    Invalid(#[from] ValidationError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("corrupt store file: {0}")]
    Corrupt(String),
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("store configuration error: {0}")]
    Config(String),
}

/// Create/read/update/delete/list over the registration collection.
pub trait RegistrationStore {
    /// Validate and store a new record, returning it with id and timestamp.
    fn create(&mut self, new: NewRegistration) -> Result<Registration, StoreError>;

    fn get(&self, id: &str) -> Result<Registration, StoreError>;

    /// Validate and replace the editable fields of an existing record.
    fn update(&mut self, id: &str, changes: NewRegistration) -> Result<Registration, StoreError>;

    fn delete(&mut self, id: &str) -> Result<(), StoreError>;

    /// All records, newest first.
    fn list(&self) -> Result<Vec<Registration>, StoreError>;
}

/// Normalize and validate form input before it reaches a backend.
pub(crate) fn prepare(new: NewRegistration) -> Result<NewRegistration, StoreError> {
    let new = new.normalized();
    new.validate()?;
    Ok(new)
}

/// Open the backend named in settings. `path_override` replaces the
/// configured snapshot path of the file backend.
pub fn open_store(
    cfg: &StoreSettings,
    path_override: Option<&Path>,
) -> Result<Box<dyn RegistrationStore>, StoreError> {
    if path_override.is_some() && cfg.backend != StoreBackend::File {
        warn!(backend = ?cfg.backend, "store path override ignored");
    }
    match cfg.backend {
        StoreBackend::Memory => Ok(Box::new(MemoryStore::new())),
        StoreBackend::File => {
            let path = match (path_override, cfg.path.as_deref()) {
                (Some(p), _) => p.to_path_buf(),
                (None, Some(p)) => Path::new(p).to_path_buf(),
                (None, None) => {
                    return Err(StoreError::Config("store.path is not set".to_string()))
                }
            };
            Ok(Box::new(FileStore::open(&path)?))
        }
        StoreBackend::Rest => {
            let url = cfg
                .url
                .as_deref()
                .ok_or_else(|| StoreError::Config("store.url is not set".to_string()))?;
            let api_key = std::env::var(&cfg.api_key_env).map_err(|_| {
                StoreError::Config(format!("environment variable {} is not set", cfg.api_key_env))
            })?;
            Ok(Box::new(RestStore::new(url, &cfg.table, api_key)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(backend: StoreBackend) -> StoreSettings {
        StoreSettings {
            backend,
            path: None,
            url: None,
            table: "sangat_registrations".into(),
            api_key_env: "SANGAT_TEST_KEY_THAT_IS_NOT_SET".into(),
        }
    }

    #[test]
    fn memory_backend_opens_empty() {
        let store = open_store(&cfg(StoreBackend::Memory), None).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn file_backend_uses_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("regs.sgrg");
        let store = open_store(&cfg(StoreBackend::File), Some(&path)).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn file_backend_without_path_is_config_error() {
        let err = open_store(&cfg(StoreBackend::File), None).err().unwrap();
        assert!(matches!(err, StoreError::Config(_)));
    }

    #[test]
    fn rest_backend_requires_api_key() {
        let mut c = cfg(StoreBackend::Rest);
        c.url = Some("https://example.test".into());
        let err = open_store(&c, None).err().unwrap();
        assert!(err.to_string().contains("SANGAT_TEST_KEY_THAT_IS_NOT_SET"));
    }
}
