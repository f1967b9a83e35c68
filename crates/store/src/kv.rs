//! String key-value backends.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::StoreError;

pub trait KvBackend {
    /// Read a value; `Ok(None)` when the key was never written
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryKv {
    entries: HashMap<String, String>,
}

impl MemoryKv {
    /// Borrow a raw value (for inspection in tests and tooling)
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl KvBackend for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One file per key inside a directory.
///
/// `:` and path separators in keys become `_` so file names stay portable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileKv {
    dir: PathBuf,
}

impl FileKv {
    /// Open (and create if needed) the backing directory
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| match c {
                ':' | '/' | '\\' => '_',
                c => c,
            })
            .collect();
        self.dir.join(name)
    }
}

impl KvBackend for FileKv {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // Readers never observe a partially written record.
        let path = self.path_for(key);
        let mut tmp = path.clone().into_os_string();
        tmp.push(".tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_kv_missing_key_is_none() {
        let kv = MemoryKv::default();
        assert_eq!(kv.get("nope").unwrap(), None);
    }

    #[test]
    fn file_kv_round_trip_and_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut kv = FileKv::open(dir.path().join("nested")).unwrap();

        assert_eq!(kv.get("app:best").unwrap(), None);
        kv.set("app:best", "64").unwrap();
        assert_eq!(kv.get("app:best").unwrap().as_deref(), Some("64"));
        assert!(kv.path_for("app:best").ends_with("app_best"));
    }
}
