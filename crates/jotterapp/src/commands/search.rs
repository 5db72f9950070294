use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::filter;
use crate::store::DataStore;

/// Re-enumerates the store and filters by `query`.
pub fn run<S: DataStore>(store: &S, query: &str) -> Result<CmdResult> {
    let ids = store.list_identifiers()?;
    Ok(CmdResult::default().with_listed(filter(&ids, query)))
}
