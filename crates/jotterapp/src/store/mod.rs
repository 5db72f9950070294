//! # Storage Layer
//!
//! This module defines the storage abstraction for jotter. The [`DataStore`] trait
//! allows the application to work with different storage backends.
//!
//! ## One File per Note
//!
//! The notes directory (the *store root*) is the whole database:
//!
//! ```text
//! notes/
//! ├── {title}.txt          # Note body, verbatim, no header
//! └── {title}_draft.txt    # Last auto-saved draft of {title}
//! ```
//!
//! - **Files are Truth**: there is no metadata cache. Listing reads the directory
//!   every time, so notes added or removed by other programs show up on the next
//!   refresh.
//! - **Overwrite, never append**: saving replaces the whole file. Writes go to a
//!   temporary `.{file}-{uuid}.tmp` in the same directory and are renamed into
//!   place, so readers never see half a note.
//! - **Drafts are independent**: deleting a note leaves its draft alone, and
//!   drafts are never listed as notes.
//!
//! ## Layers
//!
//! - [`backend::StorageBackend`]: raw file I/O inside one flat directory.
//!   - [`fs_backend::FsBackend`]: production, real filesystem.
//!   - [`mem_backend::MemBackend`]: testing, simulated directories.
//! - [`note_store::NoteStore`]: naming rules, validation and trimming on top of
//!   any backend. Implements [`DataStore`].
//!
//! ## Root Changes
//!
//! The root can be redirected at runtime with [`DataStore::set_root`]. Nothing is
//! migrated; callers holding a list of identifiers must re-enumerate.

use crate::error::Result;
use crate::model::{DraftOutcome, NoteId};
use std::path::{Path, PathBuf};

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod note_store;

pub use note_store::NoteStore;

/// Production store over a real directory.
pub type FileStore = NoteStore<fs_backend::FsBackend>;

/// Store for testing logic without filesystem I/O.
pub type InMemoryStore = NoteStore<mem_backend::MemBackend>;

/// Abstract interface for note storage.
///
/// All operations are stateless with respect to the store root: they act on
/// whatever directory is current at call time.
pub trait DataStore {
    /// Current store root
    fn root(&self) -> &Path;

    /// Redirect the store to another existing directory
    fn set_root(&mut self, path: &Path) -> Result<()>;

    /// All note identifiers, drafts excluded, sorted ascending
    fn list_identifiers(&self) -> Result<Vec<NoteId>>;

    /// Create or overwrite a note with the trimmed body
    fn save(&mut self, identifier: &str, body: &str) -> Result<NoteId>;

    /// Raw content of a note
    fn load(&self, identifier: &str) -> Result<String>;

    /// Remove a note file (its draft stays)
    fn delete(&mut self, identifier: &str) -> Result<()>;

    /// Create or overwrite the draft of a note; empty input is a no-op
    fn save_draft(&mut self, identifier: &str, body: &str) -> Result<DraftOutcome>;

    /// Raw content of a note's draft
    fn load_draft(&self, identifier: &str) -> Result<String>;

    /// Where the file for `id` lives (or would live)
    fn note_path(&self, id: &NoteId) -> PathBuf;
}
