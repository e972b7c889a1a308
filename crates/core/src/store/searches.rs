use time::OffsetDateTime;

use super::{JsonBlob, KeyValueStore, PendingSearchSlot, SEARCHES_KEY, new_id};
use crate::directory::ALL;
use crate::model::{PendingSearch, SavedSearch};
use crate::{Result, ScoutError};

/// Saved directory searches, newest first. Write-once, delete-only.
pub struct SavedSearchRepository<'a> {
    blob: JsonBlob<'a, Vec<SavedSearch>>,
}

impl<'a> SavedSearchRepository<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { blob: JsonBlob::new(store, SEARCHES_KEY) }
    }

    /// Saves the current directory filters.
    ///
    /// At least a query or one non-`All` filter is required.
    pub fn save(&self, query: &str, industry: &str, stage: &str) -> Result<SavedSearch> {
        if query.is_empty() && is_unfiltered(industry) && is_unfiltered(stage) {
            return Err(ScoutError::Validation(
                "Please enter a search term or apply a filter to save.".to_string(),
            ));
        }

        let search = SavedSearch {
            id: new_id("search"),
            query: query.to_string(),
            industry: or_all(industry),
            stage: or_all(stage),
            timestamp: OffsetDateTime::now_utc(),
        };
        self.blob.update(|searches| searches.insert(0, search.clone()))?;
        Ok(search)
    }

    pub fn all(&self) -> Result<Vec<SavedSearch>> {
        self.blob.load()
    }

    pub fn get(&self, id: &str) -> Result<Option<SavedSearch>> {
        Ok(self.blob.load()?.into_iter().find(|s| s.id == id))
    }

    /// Returns whether a search was removed.
    pub fn delete(&self, id: &str) -> Result<bool> {
        self.blob.update(|searches| {
            let before = searches.len();
            searches.retain(|s| s.id != id);
            searches.len() != before
        })
    }

    /// Hands the saved filters to the directory through `slot`.
    pub fn rerun(&self, id: &str, slot: &PendingSearchSlot<'_>) -> Result<PendingSearch> {
        let search = self
            .get(id)?
            .ok_or_else(|| ScoutError::NotFound { kind: "saved search", id: id.to_string() })?;
        let pending = PendingSearch::from(&search);
        slot.put(&pending)?;
        Ok(pending)
    }
}

fn is_unfiltered(filter: &str) -> bool {
    filter.is_empty() || filter == ALL
}

fn or_all(filter: &str) -> String {
    if filter.is_empty() { ALL.to_string() } else { filter.to_string() }
}
