use std::collections::BTreeMap;

use super::{JsonBlob, KeyValueStore, NOTES_KEY};
use crate::Result;

/// Free-text notes keyed by company id. Last write wins; no history.
pub struct NotesRepository<'a> {
    blob: JsonBlob<'a, BTreeMap<String, String>>,
}

impl<'a> NotesRepository<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { blob: JsonBlob::new(store, NOTES_KEY) }
    }

    pub fn get(&self, company_id: &str) -> Result<Option<String>> {
        Ok(self.blob.load()?.remove(company_id))
    }

    pub fn put(&self, company_id: &str, note: &str) -> Result<()> {
        self.blob.update(|notes| {
            notes.insert(company_id.to_string(), note.to_string());
        })
    }

    /// Returns whether a note existed.
    pub fn delete(&self, company_id: &str) -> Result<bool> {
        self.blob.update(|notes| notes.remove(company_id).is_some())
    }

    pub fn all(&self) -> Result<BTreeMap<String, String>> {
        self.blob.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_last_write_wins() {
        let store = MemoryStore::new();
        let notes = NotesRepository::new(&store);

        assert_eq!(notes.get("stripe").unwrap(), None);
        notes.put("stripe", "first").unwrap();
        notes.put("stripe", "second").unwrap();
        assert_eq!(notes.get("stripe").unwrap().as_deref(), Some("second"));
        assert_eq!(notes.all().unwrap().len(), 1);
    }

    #[test]
    fn test_delete() {
        let store = MemoryStore::new();
        let notes = NotesRepository::new(&store);
        notes.put("a", "x").unwrap();
        assert!(notes.delete("a").unwrap());
        assert!(!notes.delete("a").unwrap());
        assert_eq!(notes.get("a").unwrap(), None);
    }
}
