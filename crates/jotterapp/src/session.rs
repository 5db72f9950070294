//! # Editing Session
//!
//! A [`Session`] is the state a note-taking UI keeps between user actions: the
//! title and body being edited, the search query, the last known list of notes
//! and a one-line status message. It is UI agnostic; a terminal shell, a GUI or
//! a test drives it the same way.
//!
//! The buffers are transient copies. Nothing here assumes they still match the
//! files on disk; the store stays the only owner of note contents.
//!
//! ## Status Line
//!
//! Every operation leaves a human readable status behind, success or failure.
//! Failures are also returned as errors so the UI can raise a warning, except for
//! [`Session::autosave_tick`], which never fails: a draft that could not be
//! written only shows up in the status line and the log.

use crate::api::{CmdResult, JotterApi, TextStats};
use crate::autosave::DraftSnapshot;
use crate::error::Result;
use crate::index::NoteIndex;
use crate::model::{DraftOutcome, NoteId};
use crate::store::DataStore;
use chrono::Local;
use std::path::Path;

pub const READY: &str = "Ready";
pub const CLEARED: &str = "Cleared";

pub struct Session<S: DataStore> {
    api: JotterApi<S>,
    index: NoteIndex,
    title: String,
    body: String,
    query: String,
    status: String,
}

impl<S: DataStore> Session<S> {
    pub fn new(api: JotterApi<S>) -> Self {
        Self {
            api,
            index: NoteIndex::default(),
            title: String::new(),
            body: String::new(),
            query: String::new(),
            status: READY.to_string(),
        }
    }

    pub fn api(&self) -> &JotterApi<S> {
        &self.api
    }

    pub fn index(&self) -> &NoteIndex {
        &self.index
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    pub fn push_body_line(&mut self, line: &str) {
        if !self.body.is_empty() {
            self.body.push('\n');
        }
        self.body.push_str(line);
    }

    pub fn snapshot(&self) -> DraftSnapshot {
        DraftSnapshot::new(self.title.clone(), self.body.clone())
    }

    /// Notes matching the current query, derived from the last refresh.
    pub fn visible(&self) -> Vec<NoteId> {
        self.index.filter(&self.query)
    }

    pub fn set_query(&mut self, query: impl Into<String>) -> Vec<NoteId> {
        self.query = query.into();
        self.visible()
    }

    /// Re-enumerate the store.
    pub fn refresh(&mut self) -> Result<Vec<NoteId>> {
        if let Err(e) = self.index.refresh(self.api.store()) {
            self.status = e.to_string();
            return Err(e);
        }
        Ok(self.visible())
    }

    pub fn save(&mut self) -> Result<CmdResult> {
        let title = self.title.trim().to_string();
        let result = self.api.save_note(&title, &self.body);
        let result = self.record(result)?;
        self.reindex();
        Ok(result)
    }

    pub fn open(&mut self, title: &str) -> Result<CmdResult> {
        let result = self.api.load_note(title);
        let result = self.record(result)?;
        if let Some(note) = &result.note {
            self.title = note.id.name().to_string();
            self.body = note.body.clone();
        }
        Ok(result)
    }

    /// Load a note's draft into the buffers. Only ever done on request.
    pub fn recover(&mut self, title: &str) -> Result<CmdResult> {
        let result = self.api.load_draft(title);
        let result = self.record(result)?;
        if let Some(note) = &result.note {
            self.title = note.id.name().to_string();
            self.body = note.body.clone();
        }
        Ok(result)
    }

    /// Delete a note. The caller is responsible for having asked the user.
    pub fn delete(&mut self, title: &str) -> Result<CmdResult> {
        let result = self.api.delete_note(title);
        let result = self.record(result)?;
        self.title.clear();
        self.body.clear();
        self.reindex();
        Ok(result)
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.body.clear();
        self.status = CLEARED.to_string();
    }

    pub fn change_root(&mut self, path: &Path) -> Result<CmdResult> {
        let result = self.api.set_root(path);
        let result = self.record(result)?;
        self.reindex();
        Ok(result)
    }

    pub fn stats(&mut self) -> TextStats {
        let result = self.api.text_stats(&self.body);
        if let Some(status) = result.status() {
            self.status = status.to_string();
        }
        result.stats.unwrap_or_default()
    }

    /// One auto-save timer tick. Never fails and never touches the buffers.
    pub fn autosave_tick(&mut self) -> Option<DraftOutcome> {
        let snapshot = self.snapshot();
        match self.api.save_draft(&snapshot.title, &snapshot.body) {
            Ok(result) => {
                if let Some(status) = result.status() {
                    self.status = format!("{} ({})", status, Local::now().format("%H:%M:%S"));
                }
                result.draft
            }
            Err(e) => {
                tracing::warn!(error = %e, title = %snapshot.title, "draft auto-save failed");
                self.status = format!("Auto-save failed: {}", e);
                None
            }
        }
    }

    fn record(&mut self, result: Result<CmdResult>) -> Result<CmdResult> {
        match result {
            Ok(result) => {
                if let Some(status) = result.status() {
                    self.status = status.to_string();
                }
                Ok(result)
            }
            Err(e) => {
                self.status = e.to_string();
                Err(e)
            }
        }
    }

    /// Refresh after a successful write, keeping the write's status.
    fn reindex(&mut self) {
        if let Err(e) = self.index.refresh(self.api.store()) {
            tracing::warn!(error = %e, "could not refresh note list");
        }
    }
}
