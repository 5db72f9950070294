use crate::error::Result;
use std::path::{Path, PathBuf};

/// Abstract interface for raw storage I/O inside a single flat directory.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while NoteStore handles the "what" (naming rules, validation, trimming).
pub trait StorageBackend {
    /// The directory all file names are relative to.
    fn root(&self) -> &Path;

    /// Point the backend at another directory.
    /// Fails with `InvalidPath` unless `root` is an existing directory.
    fn set_root(&mut self, root: PathBuf) -> Result<()>;

    /// Names of all regular files in the root, in no particular order.
    /// Fails with `StoreUnavailable` if the root is missing or unreadable.
    fn list_file_names(&self) -> Result<Vec<String>>;

    /// Read a file. Returns Ok(None) if it does not exist.
    fn read(&self, file_name: &str) -> Result<Option<String>>;

    /// Write a file, replacing any previous content.
    /// MUST NOT expose a partially written file (write to tmp then rename).
    fn write(&self, file_name: &str, content: &str) -> Result<()>;

    /// Remove a file. Returns Ok(false) if it did not exist.
    fn remove(&self, file_name: &str) -> Result<bool>;

    /// Where a file lives. For MemBackend, a virtual path.
    fn path_of(&self, file_name: &str) -> PathBuf {
        self.root().join(file_name)
    }
}
