use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::NoteId;
use crate::store::DataStore;

/// The store root, or the file backing a note when a title is given.
/// The note does not have to exist yet.
pub fn run<S: DataStore>(store: &S, title: Option<&str>) -> Result<CmdResult> {
    let path = match title {
        Some(title) => store.note_path(&NoteId::new(title)?),
        None => store.root().to_path_buf(),
    };
    Ok(CmdResult::default().with_paths(vec![path]))
}
