use super::{JsonBlob, KeyValueStore, PENDING_SEARCH_KEY, THEME_KEY};
use crate::Result;
use crate::model::{PendingSearch, Theme};

/// Theme preference, stored as the bare string `dark` or `light`.
pub struct ThemeRepository<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> ThemeRepository<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Stored theme; unset or unrecognised values read as the default.
    pub fn get(&self) -> Result<Theme> {
        Ok(self
            .store
            .get(THEME_KEY)?
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or_default())
    }

    pub fn set(&self, theme: Theme) -> Result<()> {
        self.store.set(THEME_KEY, theme.as_str())
    }

    /// Flips the theme and returns the new value.
    pub fn toggle(&self) -> Result<Theme> {
        let next = self.get()?.toggled();
        self.set(next)?;
        Ok(next)
    }
}

/// One-shot handoff of filters from a saved search to the directory.
pub struct PendingSearchSlot<'a> {
    blob: JsonBlob<'a, Option<PendingSearch>>,
    store: &'a dyn KeyValueStore,
}

impl<'a> PendingSearchSlot<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { blob: JsonBlob::new(store, PENDING_SEARCH_KEY), store }
    }

    pub fn put(&self, pending: &PendingSearch) -> Result<()> {
        self.blob.save(&Some(pending.clone()))
    }

    /// Returns the pending search, if any, and clears it.
    pub fn take(&self) -> Result<Option<PendingSearch>> {
        let pending = self.blob.load()?;
        if pending.is_some() {
            self.store.remove(PENDING_SEARCH_KEY)?;
        }
        Ok(pending)
    }
}
