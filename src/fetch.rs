//! Asset fetching: typed JSON retrieval from the static asset store

use crate::config::EngineConfig;
use crate::types::{TagId, TagRecord};
use crate::{Error, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

const USER_AGENT: &str = concat!("tagdex/", env!("CARGO_PKG_VERSION"));

/// Read-only access to the asset store
///
/// Implementations retrieve and shape-validate one document per call; they
/// never retry, and they have no side effects beyond the read itself. Tests
/// substitute in-memory stubs at this seam.
#[async_trait]
pub trait AssetFetcher: Send + Sync {
    /// Retrieve the catalog of all known tags
    async fn fetch_catalog(&self) -> Result<Vec<TagId>>;

    /// Retrieve the metadata record for one tag
    async fn fetch_record(&self, tag: &TagId) -> Result<TagRecord>;
}

/// HTTP fetcher over the static JSON asset store
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(config: &EngineConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Fetch {
                path: config.base_url.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, asset: &str) -> String {
        format!("{}/{}", self.base_url, asset)
    }

    /// GET an asset and decode it as `T`
    ///
    /// Transport failures and non-success statuses are fetch errors; a body
    /// that does not decode as `T` is a malformed payload.
    async fn get_json<T: DeserializeOwned>(&self, asset: &str) -> Result<T> {
        let url = self.url_for(asset);
        tracing::debug!(url = %url, "Fetching asset");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Fetch {
                path: url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch {
                path: url,
                reason: format!("HTTP status {}", status),
            });
        }

        response.json::<T>().await.map_err(|e| Error::Malformed {
            path: url,
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl AssetFetcher for HttpFetcher {
    async fn fetch_catalog(&self) -> Result<Vec<TagId>> {
        self.get_json("all_tags.json").await
    }

    async fn fetch_record(&self, tag: &TagId) -> Result<TagRecord> {
        self.get_json(&format!("tags/{}.json", tag.as_str())).await
    }
}
