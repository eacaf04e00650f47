//! Query resolution: compatible tags, matching items, random pick

use crate::cache::TagCache;
use crate::config::EngineConfig;
use crate::fetch::{AssetFetcher, HttpFetcher};
use crate::set_ops::{intersect, pick, shuffle};
use crate::types::{TagId, TagRecord};
use crate::{Error, Result};
use futures::future::try_join_all;
use std::sync::Arc;

/// The tag query engine
///
/// Holds the catalog of all known tags (populated by [`load`](Self::load))
/// and a lazy cache of per-tag records. Queries are pure functions of the
/// caller's selection and the cache contents; the only evolving state is the
/// cache's monotonic growth. The selection is caller-owned: the engine never
/// deduplicates or reorders it, and callers that change their selection while
/// a query is in flight are responsible for discarding the stale result.
pub struct QueryEngine {
    catalog: Vec<TagId>,
    cache: TagCache,
    fetcher: Arc<dyn AssetFetcher>,
    item_store: String,
}

impl QueryEngine {
    /// Create an engine over an injected fetcher
    ///
    /// Tests supply stub fetchers at this seam; production callers usually
    /// want [`with_http`](Self::with_http).
    pub fn new(config: &EngineConfig, fetcher: Arc<dyn AssetFetcher>) -> Self {
        Self {
            catalog: Vec::new(),
            cache: TagCache::new(Arc::clone(&fetcher)),
            fetcher,
            item_store: config.item_store.trim_end_matches('/').to_string(),
        }
    }

    /// Create an engine backed by the HTTP fetcher
    pub fn with_http(config: &EngineConfig) -> Result<Self> {
        let fetcher: Arc<dyn AssetFetcher> = Arc::new(HttpFetcher::new(config)?);
        Ok(Self::new(config, fetcher))
    }

    /// Populate the catalog of all known tags
    ///
    /// Callers must complete this before expecting empty-selection queries
    /// or random picks to see the full catalog; before load the catalog is
    /// empty, not an error. Calling again refreshes from the same source.
    pub async fn load(&mut self) -> Result<()> {
        let catalog = self.fetcher.fetch_catalog().await?;
        tracing::info!(tags = catalog.len(), "Catalog loaded");
        self.catalog = catalog;
        Ok(())
    }

    /// The loaded catalog (empty before [`load`](Self::load))
    pub fn catalog(&self) -> &[TagId] {
        &self.catalog
    }

    /// Tags co-occurring with every tag in the selection
    ///
    /// An empty selection means no constraint and returns the full catalog.
    /// Otherwise each selected tag's co-tag list is obtained concurrently
    /// through the cache and the lists are intersected. A selected tag is
    /// compatible with itself only if its own co-tag list says so; the
    /// literal intersection is preserved deliberately.
    pub async fn compatible_tags(&self, selection: &[TagId]) -> Result<Vec<TagId>> {
        if selection.is_empty() {
            return Ok(self.catalog.clone());
        }

        let records = self.fetch_selection(selection).await?;
        let co_tag_lists: Vec<Vec<TagId>> = records.into_iter().map(|r| r.co_tags).collect();
        let compatible = intersect(&co_tag_lists);
        tracing::debug!(
            selected = selection.len(),
            compatible = compatible.len(),
            "Resolved compatible tags"
        );
        Ok(compatible)
    }

    /// Item paths carrying every tag in the selection, freshly shuffled
    ///
    /// An empty selection means no query is active and yields `None`,
    /// distinct from a query that matched nothing (`Some` of an empty
    /// vector). The shuffle is re-rolled on every call, so identical
    /// selections may return different orderings.
    pub async fn matching_items(&self, selection: &[TagId]) -> Result<Option<Vec<String>>> {
        if selection.is_empty() {
            return Ok(None);
        }

        let records = self.fetch_selection(selection).await?;
        let item_lists: Vec<Vec<String>> = records
            .into_iter()
            .map(|record| self.item_paths(&record))
            .collect();

        let mut items = intersect(&item_lists);
        shuffle(&mut items, &mut rand::thread_rng());
        tracing::debug!(
            selected = selection.len(),
            matched = items.len(),
            "Resolved matching items"
        );
        Ok(Some(items))
    }

    /// Uniformly random tag among those compatible with the selection
    ///
    /// Signals [`Error::EmptyChoiceSet`] when no tag is compatible rather
    /// than indexing past the end of an empty list.
    pub async fn random_tag(&self, selection: &[TagId]) -> Result<TagId> {
        let candidates = self.compatible_tags(selection).await?;
        pick(&candidates, &mut rand::thread_rng())
            .cloned()
            .ok_or(Error::EmptyChoiceSet)
    }

    /// Fetch every selected tag's record concurrently
    ///
    /// All fetches are issued before any is awaited; the first failure
    /// aborts the join, so a failed query never yields a partial
    /// intersection.
    async fn fetch_selection(&self, selection: &[TagId]) -> Result<Vec<TagRecord>> {
        try_join_all(selection.iter().map(|tag| self.cache.get_record(tag))).await
    }

    /// Item references resolved against the configured item store
    fn item_paths(&self, record: &TagRecord) -> Vec<String> {
        record
            .items
            .iter()
            .map(|item| format!("{}/{}", self.item_store, item))
            .collect()
    }
}
