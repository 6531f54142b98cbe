use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use super::{MemoryStore, RegistrationStore, StoreError};
use crate::registration::{NewRegistration, Registration};

const MAGIC: &[u8; 4] = b"SGRG";
const VERSION: u8 = 1;
/// magic + version + crc32
const HEADER_LEN: usize = 9;

#[derive(Serialize, Deserialize)]
struct Snapshot {
    records: Vec<Registration>,
}

/// Snapshot-file store. Every mutation rewrites the whole file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl FileStore {
    /// Open from file, starting empty if the file doesn't exist.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let _span = debug_span!("FileStore::open", path = %path.display()).entered();
        let records = match fs::read(path) {
            Ok(bytes) => from_bytes(&bytes)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        debug!(records = records.len(), "store loaded");
        Ok(Self {
            path: path.to_path_buf(),
            inner: MemoryStore::from_records(records),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `f` to a copy, persist it, then swap it in. A failed write
    /// leaves the in-memory state untouched.
    fn commit<T>(
        &mut self,
        f: impl FnOnce(&mut MemoryStore) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut next = self.inner.clone();
        let out = f(&mut next)?;
        save(&self.path, next.records())?;
        self.inner = next;
        Ok(out)
    }
}

impl RegistrationStore for FileStore {
    fn create(&mut self, new: NewRegistration) -> Result<Registration, StoreError> {
        self.commit(|s| s.create(new))
    }

    fn get(&self, id: &str) -> Result<Registration, StoreError> {
        self.inner.get(id)
    }

    fn update(&mut self, id: &str, changes: NewRegistration) -> Result<Registration, StoreError> {
        self.commit(|s| s.update(id, changes))
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        self.commit(|s| s.delete(id))
    }

    fn list(&self) -> Result<Vec<Registration>, StoreError> {
        self.inner.list()
    }
}

fn to_bytes(records: &[Registration]) -> Result<Vec<u8>, StoreError> {
    let snapshot = Snapshot {
        records: records.to_vec(),
    };
    let body = bincode::serialize(&snapshot).map_err(|e| StoreError::Corrupt(e.to_string()))?;
    let crc = crc32fast::hash(&body);

    let mut buf = Vec::with_capacity(HEADER_LEN + body.len());
    buf.extend_from_slice(MAGIC);
    buf.push(VERSION);
    buf.extend_from_slice(&crc.to_le_bytes());
    buf.extend_from_slice(&body);
    Ok(buf)
}

fn from_bytes(bytes: &[u8]) -> Result<Vec<Registration>, StoreError> {
    if bytes.len() < HEADER_LEN {
        return Err(StoreError::Corrupt("too short".into()));
    }
    if &bytes[0..4] != MAGIC {
        return Err(StoreError::Corrupt("bad magic".into()));
    }
    if bytes[4] != VERSION {
        return Err(StoreError::Corrupt(format!(
            "unsupported version {}",
            bytes[4]
        )));
    }
    let stored = u32::from_le_bytes([bytes[5], bytes[6], bytes[7], bytes[8]]);
    let body = &bytes[HEADER_LEN..];
    if crc32fast::hash(body) != stored {
        return Err(StoreError::Corrupt("checksum mismatch".into()));
    }
    let snapshot: Snapshot =
        bincode::deserialize(body).map_err(|e| StoreError::Corrupt(e.to_string()))?;
    Ok(snapshot.records)
}

/// Atomic write: write to .tmp then rename.
fn save(path: &Path, records: &[Registration]) -> Result<(), StoreError> {
    let bytes = to_bytes(records)?;
    let tmp = path.with_extension("tmp");
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&tmp, &bytes)?;
    fs::rename(&tmp, path)?;
    debug!(path = %path.display(), records = records.len(), "store saved");
    Ok(())
}
