use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw keyed storage.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `BoardStore` handles the "what" (encoding and failure policy).
pub trait StorageBackend {
    /// Read the payload stored under `key`.
    /// Returns Ok(None) if nothing is stored there.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Store `payload` under `key`, replacing any previous value.
    /// MUST be atomic: readers see the old or the new payload, never a mix.
    fn write(&self, key: &str, payload: &str) -> Result<()>;

    /// Remove whatever is stored under `key`. Removing a missing key is fine.
    fn remove(&self, key: &str) -> Result<()>;

    /// Where `key` lives. A real path for `FsBackend`, a virtual one for
    /// `MemBackend`.
    fn location(&self, key: &str) -> PathBuf;
}
