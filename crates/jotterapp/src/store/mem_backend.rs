use super::backend::StorageBackend;
use crate::error::{JotterError, Result};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

const DEFAULT_ROOT: &str = "memory://notes";

/// In-memory storage backend for testing.
///
/// Directories are simulated: only roots registered through
/// [`MemBackend::with_dir`] (plus the default root) count as existing.
/// Uses `RefCell` for interior mutability since the store is single-threaded.
pub struct MemBackend {
    root: PathBuf,
    dirs: RefCell<HashMap<PathBuf, BTreeMap<String, String>>>,
    simulate_write_error: RefCell<bool>,
}

impl Default for MemBackend {
    fn default() -> Self {
        let root = PathBuf::from(DEFAULT_ROOT);
        let mut dirs = HashMap::new();
        dirs.insert(root.clone(), BTreeMap::new());
        Self {
            root,
            dirs: RefCell::new(dirs),
            simulate_write_error: RefCell::new(false),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register another simulated directory.
    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.dirs.borrow_mut().entry(path.into()).or_default();
        self
    }

    /// Drop a simulated directory and everything in it.
    pub fn remove_dir(&self, path: &Path) {
        self.dirs.borrow_mut().remove(path);
    }

    /// Place a file directly, bypassing the store's naming rules.
    pub fn put_file(&self, dir: &Path, file_name: &str, content: &str) {
        self.dirs
            .borrow_mut()
            .entry(dir.to_path_buf())
            .or_default()
            .insert(file_name.to_string(), content.to_string());
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    fn unavailable(&self) -> JotterError {
        JotterError::StoreUnavailable(self.root.clone())
    }
}

impl StorageBackend for MemBackend {
    fn root(&self) -> &Path {
        &self.root
    }

    fn set_root(&mut self, root: PathBuf) -> Result<()> {
        if !self.dirs.borrow().contains_key(&root) {
            return Err(JotterError::InvalidPath(root));
        }
        self.root = root;
        Ok(())
    }

    fn list_file_names(&self) -> Result<Vec<String>> {
        let dirs = self.dirs.borrow();
        let files = dirs.get(&self.root).ok_or_else(|| self.unavailable())?;
        Ok(files.keys().cloned().collect())
    }

    fn read(&self, file_name: &str) -> Result<Option<String>> {
        let dirs = self.dirs.borrow();
        Ok(dirs
            .get(&self.root)
            .and_then(|files| files.get(file_name))
            .cloned())
    }

    fn write(&self, file_name: &str, content: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(JotterError::Io(std::io::Error::other(
                "Simulated write error",
            )));
        }
        let mut dirs = self.dirs.borrow_mut();
        let files = dirs.get_mut(&self.root).ok_or_else(|| self.unavailable())?;
        files.insert(file_name.to_string(), content.to_string());
        Ok(())
    }

    fn remove(&self, file_name: &str) -> Result<bool> {
        let mut dirs = self.dirs.borrow_mut();
        Ok(dirs
            .get_mut(&self.root)
            .map(|files| files.remove(file_name).is_some())
            .unwrap_or(false))
    }
}
