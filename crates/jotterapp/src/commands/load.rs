use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Note, NoteId};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, title: &str) -> Result<CmdResult> {
    let body = store.load(title)?;
    let id = NoteId::new(title)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Loaded: {}", id)));
    Ok(result.with_note(Note::new(id, body)))
}
