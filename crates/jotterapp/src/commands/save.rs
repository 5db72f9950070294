use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, title: &str, body: &str) -> Result<CmdResult> {
    let id = store.save(title, body)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Note saved: {}", id)));
    Ok(result.with_affected(vec![id]))
}
