use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let ids = store.list_identifiers()?;
    Ok(CmdResult::default().with_listed(ids))
}
