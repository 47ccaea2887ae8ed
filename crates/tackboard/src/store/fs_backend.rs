use super::backend::StorageBackend;
use crate::error::{Result, TackboardError};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Reject keys that cannot name a plain file inside the root: empty keys,
/// keys starting with `.` and keys containing a path separator.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() || key.starts_with('.') || key.contains(['/', '\\']) {
        return Err(TackboardError::Store(format!("Invalid storage key: {:?}", key)));
    }
    Ok(())
}

/// Stores each key as `{root}/{key}.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn blob_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(TackboardError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.blob_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(TackboardError::Io)?;
        Ok(Some(content))
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        let target = self.blob_path(key)?;
        self.ensure_dir()?;

        // Atomic write
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, payload).map_err(TackboardError::Io)?;
        if let Err(e) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(TackboardError::Io(e));
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.blob_path(key)?;
        if path.exists() {
            fs::remove_file(path).map_err(TackboardError::Io)?;
        }
        Ok(())
    }

    /// The path `key` maps to. Not validated: for a key [`validate_key`]
    /// rejects, this is where the blob would be, not where it can be.
    fn location(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}
