//! File-backed key-value store.
//!
//! One file per key under a data directory, so stored collections survive
//! restarts the way `localStorage` survives page reloads. Writes go
//! through a temp file and an atomic rename.

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::storage::traits::KvStore;

/// Key-value store persisting each key as `{root}/{encoded_key}.json`.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    root: PathBuf,
}

impl FileKvStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create data directory {:?}", root))?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys carry identity strings with arbitrary characters. The
        // encoding must be injective: distinct keys map to distinct
        // files, or two identities would share a collection. Alphanumerics
        // and '-' pass through, every other byte (including '_', the
        // escape lead-in) becomes "_xx" hex.
        let mut safe = String::with_capacity(key.len());
        for byte in key.bytes() {
            match byte {
                b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z' | b'-' => safe.push(byte as char),
                _ => safe.push_str(&format!("_{:02x}", byte)),
            }
        }
        self.root.join(format!("{}.json", safe))
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {:?}", path))?;
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, value)
            .with_context(|| format!("Failed to write {:?}", temp_path))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to replace {:?}", path))?;

        debug!("Wrote {} bytes under key {}", value.len(), key);
        Ok(())
    }
}
