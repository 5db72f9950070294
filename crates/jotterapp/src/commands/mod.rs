use crate::error::JotterError;
use crate::model::{DraftOutcome, Note, NoteId};
use std::path::PathBuf;

pub mod delete;
pub mod draft;
pub mod list;
pub mod load;
pub mod paths;
pub mod root;
pub mod save;
pub mod search;
pub mod stats;

pub use stats::TextStats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }

    /// A failed operation as shown to the user. Problems with the notes
    /// directory or configuration are errors; everything the user can fix by
    /// retyping is a warning.
    pub fn from_error(error: &JotterError) -> Self {
        match error {
            JotterError::StoreUnavailable(_) | JotterError::Io(_) | JotterError::Config(_) => {
                Self::error(format!("Error: {}", error))
            }
            _ => Self::warning(format!("Warning: {}", error)),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<NoteId>,
    pub listed: Vec<NoteId>,
    pub note: Option<Note>,
    pub draft: Option<DraftOutcome>,
    pub stats: Option<TextStats>,
    pub paths: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, ids: Vec<NoteId>) -> Self {
        self.affected = ids;
        self
    }

    pub fn with_listed(mut self, ids: Vec<NoteId>) -> Self {
        self.listed = ids;
        self
    }

    pub fn with_note(mut self, note: Note) -> Self {
        self.note = Some(note);
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    /// Text of the last message, if any. This is what a status line shows.
    pub fn status(&self) -> Option<&str> {
        self.messages.last().map(|m| m.content.as_str())
    }
}
