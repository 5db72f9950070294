//! # Note Index and Search
//!
//! The index is nothing more than the sorted output of
//! [`DataStore::list_identifiers`] held in memory, and search is a
//! case-insensitive substring match over note names.
//!
//! ## Never Patched, Always Re-derived
//!
//! A [`NoteIndex`] is a snapshot. It is not updated in place when a note is saved
//! or deleted; callers [`NoteIndex::refresh`] it instead. Together with the
//! purity of [`filter`] this means the visible list is always
//! `filter(list_identifiers(), query)`, so changes made behind our back (another
//! program removing a file) show up on the next refresh.
//!
//! ## Matching
//!
//! - Case-insensitive for search, case-sensitive for identity
//! - Order of the input list is preserved
//! - An empty query matches everything

use crate::error::Result;
use crate::model::NoteId;
use crate::store::DataStore;

/// Identifiers whose name contains `query`, ignoring case, in input order.
pub fn filter(identifiers: &[NoteId], query: &str) -> Vec<NoteId> {
    if query.is_empty() {
        return identifiers.to_vec();
    }

    let query_lower = query.to_lowercase();
    identifiers
        .iter()
        .filter(|id| id.name().to_lowercase().contains(&query_lower))
        .cloned()
        .collect()
}

/// In-memory snapshot of the identifiers in a store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteIndex {
    ids: Vec<NoteId>,
}

impl NoteIndex {
    /// Enumerate the store.
    pub fn load<S: DataStore>(store: &S) -> Result<Self> {
        Ok(Self {
            ids: store.list_identifiers()?,
        })
    }

    /// Replace the snapshot with a fresh enumeration.
    ///
    /// On failure the index is emptied: a list from a store we can no longer
    /// read is not worth showing.
    pub fn refresh<S: DataStore>(&mut self, store: &S) -> Result<()> {
        match store.list_identifiers() {
            Ok(ids) => {
                self.ids = ids;
                Ok(())
            }
            Err(e) => {
                self.ids.clear();
                Err(e)
            }
        }
    }

    pub fn all(&self) -> &[NoteId] {
        &self.ids
    }

    pub fn filter(&self, query: &str) -> Vec<NoteId> {
        filter(&self.ids, query)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ids.iter().any(|id| id.name() == name)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    fn ids(names: &[&str]) -> Vec<NoteId> {
        names.iter().map(|n| NoteId::new(*n).unwrap()).collect()
    }

    #[test]
    fn matches_case_insensitively_in_order() {
        let input = ids(&["Alpha", "beta", "Gamma"]);
        assert_eq!(filter(&input, "a"), input);
        assert_eq!(filter(&input, "A"), input);
        assert_eq!(filter(&input, "ALP"), ids(&["Alpha"]));
        assert_eq!(filter(&input, "mm"), ids(&["Gamma"]));
    }

    #[test]
    fn empty_query_returns_input() {
        let input = ids(&["Alpha", "beta", "Gamma"]);
        assert_eq!(filter(&input, ""), input);
    }

    #[test]
    fn empty_input_returns_empty() {
        assert!(filter(&[], "x").is_empty());
    }

    #[test]
    fn no_match() {
        let input = ids(&["Alpha", "beta"]);
        assert!(filter(&input, "zeta").is_empty());
    }

    #[test]
    fn unicode_case_folding() {
        let input = ids(&["Über", "unter"]);
        assert_eq!(filter(&input, "über"), ids(&["Über"]));
    }

    #[test]
    fn index_reflects_store_after_refresh() {
        let mut store = InMemoryStore::new();
        store.save("one", "1").unwrap();

        let mut index = NoteIndex::load(&store).unwrap();
        assert_eq!(index.len(), 1);

        store.save("two", "2").unwrap();
        // Snapshot does not move on its own
        assert!(!index.contains("two"));

        index.refresh(&store).unwrap();
        assert!(index.contains("two"));
        assert_eq!(index.filter("TW"), ids(&["two"]));
    }

    #[test]
    fn refresh_failure_empties_index() {
        let mut store = InMemoryStore::new();
        store.save("one", "1").unwrap();
        let mut index = NoteIndex::load(&store).unwrap();

        let root = store.root().to_path_buf();
        store.backend().remove_dir(&root);

        assert!(index.refresh(&store).is_err());
        assert!(index.is_empty());
    }
}
