use super::backend::StorageBackend;
use super::fs_backend::FsBackend;
use super::mem_backend::MemBackend;
use super::DataStore;
use crate::error::{JotterError, Result};
use crate::model::{DraftOutcome, NoteId, NOTE_EXT};
use std::path::{Path, PathBuf};

pub struct NoteStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> NoteStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl NoteStore<FsBackend> {
    /// A store over an existing directory. The directory is not created here;
    /// see [`crate::init::initialize`].
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self::with_backend(FsBackend::new(root))
    }
}

impl NoteStore<MemBackend> {
    pub fn new() -> Self {
        Self::with_backend(MemBackend::new())
    }
}

impl Default for NoteStore<MemBackend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: StorageBackend> DataStore for NoteStore<B> {
    fn root(&self) -> &Path {
        self.backend.root()
    }

    fn set_root(&mut self, path: &Path) -> Result<()> {
        self.backend.set_root(path.to_path_buf())?;
        tracing::info!(root = %path.display(), "notes directory changed");
        Ok(())
    }

    fn list_identifiers(&self) -> Result<Vec<NoteId>> {
        let mut ids: Vec<NoteId> = self
            .backend
            .list_file_names()?
            .iter()
            .filter_map(|name| {
                let id = NoteId::from_file_name(name);
                if id.is_none() && name.ends_with(NOTE_EXT) {
                    tracing::debug!(file = %name, "skipping file with an invalid note name");
                }
                id
            })
            .filter(|id| !id.is_draft())
            .collect();
        ids.sort();
        Ok(ids)
    }

    fn save(&mut self, identifier: &str, body: &str) -> Result<NoteId> {
        let id = NoteId::new(identifier)?;
        let body = body.trim();
        if body.is_empty() {
            return Err(JotterError::EmptyContent);
        }

        self.backend.write(&id.file_name(), body)?;
        tracing::debug!(note = %id, bytes = body.len(), "note saved");
        Ok(id)
    }

    fn load(&self, identifier: &str) -> Result<String> {
        let id = NoteId::new(identifier)?;
        self.backend
            .read(&id.file_name())?
            .ok_or_else(|| JotterError::NotFound(id.name().to_string()))
    }

    fn delete(&mut self, identifier: &str) -> Result<()> {
        let id = NoteId::new(identifier)?;
        if !self.backend.remove(&id.file_name())? {
            return Err(JotterError::NotFound(id.name().to_string()));
        }
        tracing::debug!(note = %id, "note deleted");
        Ok(())
    }

    fn save_draft(&mut self, identifier: &str, body: &str) -> Result<DraftOutcome> {
        let identifier = identifier.trim();
        let body = body.trim();
        if identifier.is_empty() || body.is_empty() {
            return Ok(DraftOutcome::Skipped);
        }

        let id = NoteId::new(identifier)?.as_draft();
        self.backend.write(&id.file_name(), body)?;
        tracing::debug!(note = %id, bytes = body.len(), "draft saved");
        Ok(DraftOutcome::Written)
    }

    fn load_draft(&self, identifier: &str) -> Result<String> {
        let id = NoteId::new(identifier)?.as_draft();
        self.backend
            .read(&id.file_name())?
            .ok_or_else(|| JotterError::NotFound(id.file_name()))
    }

    fn note_path(&self, id: &NoteId) -> PathBuf {
        self.backend.path_of(&id.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    fn names(ids: &[NoteId]) -> Vec<&str> {
        ids.iter().map(|id| id.name()).collect()
    }

    #[test]
    fn save_trims_and_load_returns_raw() {
        let mut store = InMemoryStore::new();
        store.save("note", "  hello world \n").unwrap();
        assert_eq!(store.load("note").unwrap(), "hello world");

        let root = store.root().to_path_buf();
        store
            .backend
            .put_file(&root, "raw.txt", "  untouched \n");
        assert_eq!(store.load("raw").unwrap(), "  untouched \n");
    }

    #[test]
    fn save_overwrites() {
        let mut store = InMemoryStore::new();
        store.save("note", "first").unwrap();
        store.save("note", "second").unwrap();
        assert_eq!(store.load("note").unwrap(), "second");
        assert_eq!(names(&store.list_identifiers().unwrap()), vec!["note"]);
    }

    #[test]
    fn list_excludes_drafts_and_sorts() {
        let mut store = InMemoryStore::new();
        store.save("b", "x").unwrap();
        store.save("a", "x").unwrap();
        store.save_draft("c", "draft only").unwrap();
        store.save_draft("a", "draft of a").unwrap();

        assert_eq!(names(&store.list_identifiers().unwrap()), vec!["a", "b"]);
    }

    #[test]
    fn list_skips_files_with_invalid_names() {
        let mut store = InMemoryStore::new();
        store.save("kept", "x").unwrap();
        let root = store.root().to_path_buf();
        for name in [" padded.txt", ".hidden.txt", "twice_draft_draft.txt", "notes.md"] {
            store.backend.put_file(&root, name, "external");
        }

        assert_eq!(names(&store.list_identifiers().unwrap()), vec!["kept"]);
    }

    #[test]
    fn list_fails_when_root_disappears() {
        let store = InMemoryStore::new();
        let root = store.root().to_path_buf();
        store.backend.remove_dir(&root);
        assert!(matches!(
            store.list_identifiers(),
            Err(JotterError::StoreUnavailable(_))
        ));
    }

    #[test]
    fn rejects_bad_input() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            store.save("", "text"),
            Err(JotterError::InvalidIdentifier { .. })
        ));
        assert!(matches!(
            store.save("note", "   "),
            Err(JotterError::EmptyContent)
        ));
        assert!(matches!(
            store.save("../escape", "text"),
            Err(JotterError::InvalidIdentifier { .. })
        ));
        assert!(matches!(
            store.save("todo_draft", "text"),
            Err(JotterError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn load_and_delete_missing_are_not_found() {
        let mut store = InMemoryStore::new();
        assert!(matches!(store.load("nope"), Err(JotterError::NotFound(n)) if n == "nope"));
        assert!(matches!(store.delete("nope"), Err(JotterError::NotFound(_))));
    }

    #[test]
    fn delete_keeps_draft() {
        let mut store = InMemoryStore::new();
        store.save("note", "body").unwrap();
        store.save_draft("note", "draft body").unwrap();
        store.delete("note").unwrap();

        assert!(store.list_identifiers().unwrap().is_empty());
        assert_eq!(store.load_draft("note").unwrap(), "draft body");
    }

    #[test]
    fn save_draft_skips_empty_input() {
        let mut store = InMemoryStore::new();
        assert_eq!(store.save_draft("", "text").unwrap(), DraftOutcome::Skipped);
        assert_eq!(store.save_draft("note", " \n ").unwrap(), DraftOutcome::Skipped);
        assert_eq!(store.save_draft("  ", "text").unwrap(), DraftOutcome::Skipped);
        assert!(store.backend.list_file_names().unwrap().is_empty());
    }

    #[test]
    fn set_root_requires_existing_dir() {
        let backend = MemBackend::new().with_dir("/other");
        let mut store = NoteStore::with_backend(backend);

        assert!(matches!(
            store.set_root(Path::new("/missing")),
            Err(JotterError::InvalidPath(_))
        ));

        store.backend.put_file(Path::new("/other"), "foo.txt", "hi");
        store.set_root(Path::new("/other")).unwrap();
        assert_eq!(names(&store.list_identifiers().unwrap()), vec!["foo"]);
    }

    #[test]
    fn write_errors_propagate() {
        let mut store = InMemoryStore::new();
        store.backend.set_simulate_write_error(true);
        assert!(matches!(store.save("note", "x"), Err(JotterError::Io(_))));
        assert!(matches!(
            store.save_draft("note", "x"),
            Err(JotterError::Io(_))
        ));
    }
}
