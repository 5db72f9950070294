//! # Notes and Identifiers
//!
//! A note is a named body of plain text. Its name (the [`NoteId`]) doubles as the
//! file name on disk, so the identifier rules are really file naming rules:
//!
//! ```text
//! notes/
//! ├── groceries.txt          # note "groceries"
//! ├── groceries_draft.txt    # auto-saved draft of "groceries"
//! └── meeting notes.txt      # note "meeting notes"
//! ```
//!
//! File names are decoded exactly once, in [`NoteId::from_file_name`], into a name
//! plus a draft flag. Everything above the storage layer works with `NoteId`
//! values and never slices file names again.
//!
//! ## Naming Rules
//!
//! - Not empty, no leading or trailing whitespace
//! - No path separators (`/`, `\`), NUL or other control characters
//! - Not `.`/`..` and not starting with `.` (hidden and temporary files)
//! - Must not end with the draft marker `_draft`
//!
//! The last rule settles the ambiguity between a note titled `foo_draft` and the
//! draft of a note titled `foo`: the marker is reserved, so `foo_draft.txt` is
//! always a draft.

use crate::error::{JotterError, Result};
use std::fmt;

/// Extension shared by note and draft files.
pub const NOTE_EXT: &str = ".txt";

/// Marker appended to a note's name to form its draft's file stem.
pub const DRAFT_MARKER: &str = "_draft";

/// Why a candidate note name was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// Name is empty
    Empty,
    /// Name has leading or trailing whitespace
    SurroundingWhitespace,
    /// Name contains a separator or control character
    InvalidCharacter(char),
    /// Name is `.`/`..` or starts with a dot
    LeadingDot,
    /// Name ends with the reserved draft marker
    ReservedSuffix,
}

impl fmt::Display for IdentifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierError::Empty => write!(f, "title cannot be empty"),
            IdentifierError::SurroundingWhitespace => {
                write!(f, "title cannot start or end with whitespace")
            }
            IdentifierError::InvalidCharacter(ch) => {
                write!(f, "title contains invalid character {:?}", ch)
            }
            IdentifierError::LeadingDot => write!(f, "title cannot start with '.'"),
            IdentifierError::ReservedSuffix => {
                write!(f, "titles ending in '{}' are reserved for drafts", DRAFT_MARKER)
            }
        }
    }
}

impl std::error::Error for IdentifierError {}

/// Validates a candidate note name.
///
/// ```
/// use jotterapp::model::{validate_identifier, IdentifierError};
///
/// assert!(validate_identifier("groceries").is_ok());
/// assert!(validate_identifier("meeting notes").is_ok());
///
/// assert_eq!(validate_identifier(""), Err(IdentifierError::Empty));
/// assert_eq!(validate_identifier("a/b"), Err(IdentifierError::InvalidCharacter('/')));
/// assert_eq!(validate_identifier(".."), Err(IdentifierError::LeadingDot));
/// assert_eq!(validate_identifier("todo_draft"), Err(IdentifierError::ReservedSuffix));
/// ```
pub fn validate_identifier(name: &str) -> std::result::Result<(), IdentifierError> {
    if name.is_empty() {
        return Err(IdentifierError::Empty);
    }

    if name.trim() != name {
        return Err(IdentifierError::SurroundingWhitespace);
    }

    if let Some(ch) = name.chars().find(|ch| !is_valid_identifier_char(*ch)) {
        return Err(IdentifierError::InvalidCharacter(ch));
    }

    // Covers "." and ".." as well as hidden and temporary files
    if name.starts_with('.') {
        return Err(IdentifierError::LeadingDot);
    }

    if name.ends_with(DRAFT_MARKER) {
        return Err(IdentifierError::ReservedSuffix);
    }

    Ok(())
}

fn is_valid_identifier_char(ch: char) -> bool {
    ch != '/' && ch != '\\' && !ch.is_control()
}

/// The name of a note, or of a note's draft.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId {
    name: String,
    draft: bool,
}

impl NoteId {
    /// Builds the identifier of a (non-draft) note, validating the name.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        match validate_identifier(&name) {
            Ok(()) => Ok(Self { name, draft: false }),
            Err(reason) => Err(JotterError::InvalidIdentifier { name, reason }),
        }
    }

    /// Decodes a file name from the store root.
    ///
    /// Returns `None` for anything that is not a note or draft file: other
    /// extensions, hidden files, temporaries and invalid names.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let stem = file_name.strip_suffix(NOTE_EXT)?;

        if let Some(base) = stem.strip_suffix(DRAFT_MARKER) {
            if validate_identifier(base).is_ok() {
                return Some(Self {
                    name: base.to_string(),
                    draft: true,
                });
            }
        }

        validate_identifier(stem).ok()?;
        Some(Self {
            name: stem.to_string(),
            draft: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_draft(&self) -> bool {
        self.draft
    }

    /// The draft belonging to this note.
    pub fn as_draft(&self) -> Self {
        Self {
            name: self.name.clone(),
            draft: true,
        }
    }

    pub fn file_name(&self) -> String {
        if self.draft {
            format!("{}{}{}", self.name, DRAFT_MARKER, NOTE_EXT)
        } else {
            format!("{}{}", self.name, NOTE_EXT)
        }
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A note as read back from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub body: String,
}

impl Note {
    pub fn new(id: NoteId, body: impl Into<String>) -> Self {
        Self {
            id,
            body: body.into(),
        }
    }
}

/// What a draft save did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftOutcome {
    Written,
    /// Title or body was empty, nothing to keep
    Skipped,
}
