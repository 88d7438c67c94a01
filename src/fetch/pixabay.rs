//! Pixabay API fetcher

use super::SearchFetcher;
use crate::config::FeedConfig;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::types::{Image, ResultPage, PAGE_SIZE};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// Response envelope returned by the Pixabay search endpoint
#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    hits: Vec<Image>,
    #[serde(rename = "totalHits", default)]
    total_hits: u64,
}

/// Production [`SearchFetcher`] backed by the Pixabay HTTP API
pub struct PixabayFetcher {
    client: HttpClient,
    config: FeedConfig,
}

impl PixabayFetcher {
    /// Create a fetcher for the given config
    pub fn new(config: FeedConfig) -> Result<Self> {
        config.validate()?;

        let http_config = HttpClientConfig::builder()
            .base_url(&config.base_url)
            .timeout(config.timeout())
            .build();

        Ok(Self {
            client: HttpClient::with_config(http_config),
            config,
        })
    }

    fn request_config(&self, query: &str, page: u32) -> RequestConfig {
        RequestConfig::new()
            .query("key", &self.config.api_key)
            .query("q", query)
            .query("image_type", &self.config.search.image_type)
            .query("orientation", &self.config.search.orientation)
            .query("safesearch", self.config.search.safesearch.to_string())
            .query("page", page.to_string())
            .query("per_page", PAGE_SIZE.to_string())
    }
}

#[async_trait]
impl SearchFetcher for PixabayFetcher {
    async fn fetch(&self, query: &str, page: u32) -> Result<ResultPage> {
        let envelope: SearchEnvelope = self
            .client
            .get_json_with_config("", self.request_config(query, page))
            .await?;

        debug!(
            query,
            page,
            hits = envelope.hits.len(),
            total_hits = envelope.total_hits,
            "fetched search page"
        );

        Ok(ResultPage::new(envelope.hits, envelope.total_hits))
    }
}

impl std::fmt::Debug for PixabayFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixabayFetcher")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}
