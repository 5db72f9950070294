//! Draft snapshots.
//!
//! Drafts are recovery artifacts: written by the auto-save timer, never read back
//! unless the user explicitly asks for one with [`load`].

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{DraftOutcome, Note, NoteId};
use crate::store::DataStore;

pub fn save<S: DataStore>(store: &mut S, title: &str, body: &str) -> Result<CmdResult> {
    let outcome = store.save_draft(title, body)?;

    let mut result = CmdResult::default();
    if outcome == DraftOutcome::Written {
        result.add_message(CmdMessage::info("Auto-saved draft."));
    }
    result.draft = Some(outcome);
    Ok(result)
}

pub fn load<S: DataStore>(store: &S, title: &str) -> Result<CmdResult> {
    let body = store.load_draft(title)?;
    let id = NoteId::new(title)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Recovered draft: {}", id)));
    Ok(result.with_note(Note::new(id, body)))
}
