//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for all jotter operations, regardless of the UI being used.
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic (that belongs in `commands/*.rs`), no I/O of its own
//! and no formatting.
//!
//! ## Generic Over DataStore
//!
//! `JotterApi<S: DataStore>` is generic over the storage backend:
//! - Production: `JotterApi<FileStore>`
//! - Testing: `JotterApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::store::DataStore;
use std::path::Path;

/// The main API facade for jotter operations.
pub struct JotterApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> JotterApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_notes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn search_notes(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, query)
    }

    pub fn save_note(&mut self, title: &str, body: &str) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store, title, body)
    }

    pub fn load_note(&self, title: &str) -> Result<commands::CmdResult> {
        commands::load::run(&self.store, title)
    }

    pub fn delete_note(&mut self, title: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, title)
    }

    pub fn save_draft(&mut self, title: &str, body: &str) -> Result<commands::CmdResult> {
        commands::draft::save(&mut self.store, title, body)
    }

    pub fn load_draft(&self, title: &str) -> Result<commands::CmdResult> {
        commands::draft::load(&self.store, title)
    }

    pub fn set_root(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::root::run(&mut self.store, path)
    }

    pub fn note_paths(&self, title: Option<&str>) -> Result<commands::CmdResult> {
        commands::paths::run(&self.store, title)
    }

    pub fn text_stats(&self, body: &str) -> commands::CmdResult {
        commands::stats::run(body)
    }

    pub fn root(&self) -> &Path {
        self.store.root()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, TextStats};
