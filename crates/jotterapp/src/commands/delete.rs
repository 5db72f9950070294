use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteId;
use crate::store::DataStore;

/// Permanently removes a note file. Confirmation is the caller's job.
pub fn run<S: DataStore>(store: &mut S, title: &str) -> Result<CmdResult> {
    store.delete(title)?;
    let id = NoteId::new(title)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Deleted: {}", id)));
    Ok(result.with_affected(vec![id]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{draft, list, save};
    use crate::error::JotterError;
    use crate::store::InMemoryStore;

    #[test]
    fn removes_note_from_listing() {
        let mut store = InMemoryStore::new();
        save::run(&mut store, "todo", "x").unwrap();
        save::run(&mut store, "keep", "y").unwrap();

        let result = run(&mut store, "todo").unwrap();
        assert_eq!(result.status(), Some("Deleted: todo"));

        let listed = list::run(&store).unwrap().listed;
        assert_eq!(listed, vec![NoteId::new("keep").unwrap()]);
        assert!(matches!(store.load("todo"), Err(JotterError::NotFound(_))));
    }

    #[test]
    fn leaves_draft_behind() {
        let mut store = InMemoryStore::new();
        save::run(&mut store, "todo", "x").unwrap();
        draft::save(&mut store, "todo", "in progress").unwrap();

        run(&mut store, "todo").unwrap();
        assert_eq!(store.load_draft("todo").unwrap(), "in progress");
    }

    #[test]
    fn missing_note() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            run(&mut store, "todo"),
            Err(JotterError::NotFound(_))
        ));
    }
}
