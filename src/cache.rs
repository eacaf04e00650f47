//! Lazy per-tag metadata cache

use crate::fetch::AssetFetcher;
use crate::types::{TagId, TagRecord};
use crate::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Memoizing store of per-tag metadata
///
/// Entries are fetched on first miss and never evicted or replaced; the
/// underlying asset store is static for the process lifetime. Concurrent
/// misses on the same uncached tag are not deduplicated: each fetch proceeds
/// independently and the last insert wins, which is benign because every
/// fetch observes the same source data.
pub struct TagCache {
    fetcher: Arc<dyn AssetFetcher>,
    records: RwLock<HashMap<TagId, TagRecord>>,
}

impl TagCache {
    pub fn new(fetcher: Arc<dyn AssetFetcher>) -> Self {
        Self {
            fetcher,
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Get the record for a tag, fetching it on first use
    ///
    /// A hit returns without touching the fetcher. Fetch errors propagate
    /// uncached, so a later call for the same tag retries.
    pub async fn get_record(&self, tag: &TagId) -> Result<TagRecord> {
        if let Some(record) = self.records.read().await.get(tag) {
            return Ok(record.clone());
        }

        let record = self.fetcher.fetch_record(tag).await?;
        tracing::debug!(
            tag = %tag,
            items = record.items.len(),
            co_tags = record.co_tags.len(),
            "Caching tag record"
        );
        self.records
            .write()
            .await
            .insert(tag.clone(), record.clone());
        Ok(record)
    }

    /// Number of cached records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    pub async fn contains(&self, tag: &TagId) -> bool {
        self.records.read().await.contains_key(tag)
    }
}
