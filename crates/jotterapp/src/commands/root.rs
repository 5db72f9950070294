use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use std::path::Path;

/// Redirects the store and returns the fresh listing of the new root.
pub fn run<S: DataStore>(store: &mut S, path: &Path) -> Result<CmdResult> {
    store.set_root(path)?;
    let ids = store.list_identifiers()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Notes directory: {}",
        store.root().display()
    )));
    Ok(result.with_listed(ids))
}
