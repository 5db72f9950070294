use super::backend::StorageBackend;
use crate::error::{JotterError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.is_dir() {
            return Err(JotterError::StoreUnavailable(self.root.clone()));
        }
        Ok(())
    }
}

/// Write `content` to `tmp_path`, then rename it over `target_path`.
/// The temporary file never outlives a failure.
fn write_atomic(tmp_path: &Path, target_path: &Path, content: &str) -> Result<()> {
    let written = fs::write(tmp_path, content).and_then(|()| fs::rename(tmp_path, target_path));
    if let Err(e) = written {
        if let Err(cleanup) = fs::remove_file(tmp_path) {
            if cleanup.kind() != ErrorKind::NotFound {
                tracing::warn!(
                    path = %tmp_path.display(),
                    error = %cleanup,
                    "could not remove temporary file"
                );
            }
        }
        return Err(JotterError::Io(e));
    }
    Ok(())
}

impl StorageBackend for FsBackend {
    fn root(&self) -> &Path {
        &self.root
    }

    fn set_root(&mut self, root: PathBuf) -> Result<()> {
        if !root.is_dir() {
            return Err(JotterError::InvalidPath(root));
        }
        self.root = root;
        Ok(())
    }

    fn list_file_names(&self) -> Result<Vec<String>> {
        let entries =
            fs::read_dir(&self.root).map_err(|_| JotterError::StoreUnavailable(self.root.clone()))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(JotterError::Io)?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => tracing::debug!(?raw, "skipping non UTF-8 file name"),
            }
        }
        Ok(names)
    }

    fn read(&self, file_name: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.root.join(file_name)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(JotterError::Io(e)),
        }
    }

    fn write(&self, file_name: &str, content: &str) -> Result<()> {
        self.ensure_root()?;

        let target_path = self.root.join(file_name);
        let tmp_path = self
            .root
            .join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));
        write_atomic(&tmp_path, &target_path, content)
    }

    fn remove(&self, file_name: &str) -> Result<bool> {
        match fs::remove_file(self.root.join(file_name)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(JotterError::Io(e)),
        }
    }
}
