//! File Store Module
//!
//! Directory-backed persistent backend, one file per record.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{Store, StoreError};

const RECORD_EXTENSION: &str = "rec";
/// Longest hex run used as a single path component
const SEGMENT_LEN: usize = 128;

// == File Store ==
/// Persists each record as a file under a root directory.
///
/// Keys are hex encoded, so any string key maps to a collision-free path.
/// Encodings longer than [`SEGMENT_LEN`] are split into nested directories to
/// stay under file name limits; directory segments carry no extension, so
/// they never clash with a record file. Records survive process restarts.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    // == Constructor ==
    /// Opens (creating if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        debug!(root = %root.display(), "opened file store");
        Ok(Self { root })
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, key: &str) -> PathBuf {
        let hex: String = key.bytes().map(|b| format!("{:02x}", b)).collect();
        let mut path = self.root.clone();

        let mut rest = hex.as_str();
        while rest.len() > SEGMENT_LEN {
            let (segment, tail) = rest.split_at(SEGMENT_LEN);
            path.push(segment);
            rest = tail;
        }
        path.push(format!("{}.{}", rest, RECORD_EXTENSION));
        path
    }
}

impl Store for FileStore {
    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        match fs::metadata(self.record_path(key)) {
            Ok(meta) => Ok(meta.is_file()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn get(&self, key: &str) -> Result<String, StoreError> {
        fs::read_to_string(self.record_path(key)).map_err(|err| match err.kind() {
            ErrorKind::NotFound => StoreError::NotFound(key.to_string()),
            _ => StoreError::Io(err),
        })
    }

    fn put(&self, key: &str, value: String) -> Result<(), StoreError> {
        let path = self.record_path(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Write then rename so readers never see a half-written record
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.record_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
