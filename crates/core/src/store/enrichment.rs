use std::collections::BTreeMap;

use super::{ENRICHMENT_KEY, JsonBlob, KeyValueStore};
use crate::Result;
use crate::model::EnrichmentData;

/// Enrichment results keyed by company URL.
///
/// A new enrichment replaces the previous entry; there is no merge and no
/// expiry.
pub struct EnrichmentCache<'a> {
    blob: JsonBlob<'a, BTreeMap<String, EnrichmentData>>,
}

impl<'a> EnrichmentCache<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { blob: JsonBlob::new(store, ENRICHMENT_KEY) }
    }

    pub fn get(&self, url: &str) -> Result<Option<EnrichmentData>> {
        Ok(self.blob.load()?.remove(url))
    }

    pub fn put(&self, url: &str, data: &EnrichmentData) -> Result<()> {
        self.blob.update(|cache| {
            cache.insert(url.to_string(), data.clone());
        })
    }

    pub fn remove(&self, url: &str) -> Result<bool> {
        self.blob.update(|cache| cache.remove(url).is_some())
    }

    pub fn all(&self) -> Result<BTreeMap<String, EnrichmentData>> {
        self.blob.load()
    }
}
