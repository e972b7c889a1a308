//! Local persistence for notes, lists, saved searches, custom companies,
//! the enrichment cache and preferences.
//!
//! Every entity lives under one named key as a JSON blob. Repositories wrap
//! the "read with empty fallback, modify, overwrite the whole blob" cycle so
//! no caller touches raw keys. Writes are last-writer-wins; two processes
//! updating the same key concurrently can lose one update.

pub mod backend;
pub mod companies;
pub mod enrichment;
pub mod lists;
pub mod notes;
pub mod preferences;
pub mod searches;

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{Result, ScoutError};

pub use backend::{FileStore, MemoryStore};
pub use companies::{CompanyRepository, NewCompany};
pub use enrichment::EnrichmentCache;
pub use lists::{ListsRepository, resolve_companies};
pub use notes::NotesRepository;
pub use preferences::{PendingSearchSlot, ThemeRepository};
pub use searches::SavedSearchRepository;

/// Map of company id to note text.
pub const NOTES_KEY: &str = "vc_notes";
/// Map of list id to list.
pub const LISTS_KEY: &str = "vc_lists";
/// Saved searches, newest first.
pub const SEARCHES_KEY: &str = "vc_searches";
/// User-added companies, newest first.
pub const CUSTOM_COMPANIES_KEY: &str = "vc_custom_companies";
/// Map of company URL to enrichment.
pub const ENRICHMENT_KEY: &str = "vc_enrichment";
/// Theme name, stored as a bare string.
pub const THEME_KEY: &str = "vc_theme";
/// Session-scoped handoff from saved searches to the directory.
pub const PENDING_SEARCH_KEY: &str = "vc_pending_search";

/// A string key-value backend.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Typed view of one JSON blob.
///
/// A missing key reads as `T::default()`. A present blob that does not parse
/// is an error, so corrupt data is never silently overwritten.
pub(crate) struct JsonBlob<'a, T> {
    store: &'a dyn KeyValueStore,
    key: &'static str,
    _marker: PhantomData<T>,
}

impl<'a, T> JsonBlob<'a, T>
where
    T: Serialize + DeserializeOwned + Default,
{
    pub(crate) fn new(store: &'a dyn KeyValueStore, key: &'static str) -> Self {
        Self { store, key, _marker: PhantomData }
    }

    pub(crate) fn load(&self) -> Result<T> {
        match self.store.get(self.key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|source| ScoutError::CorruptEntry { key: self.key.to_string(), source }),
            None => Ok(T::default()),
        }
    }

    pub(crate) fn save(&self, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.store.set(self.key, &raw)
    }

    /// Read-modify-write of the whole blob.
    pub(crate) fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Result<R> {
        let mut value = self.load()?;
        let out = f(&mut value);
        self.save(&value)?;
        Ok(out)
    }
}

/// Generates a creation-ordered id such as `list_0190c6...`.
pub(crate) fn new_id(prefix: &str) -> String {
    format!("{}_{}", prefix, uuid::Uuid::now_v7().simple())
}
