//! Hacker News Firebase API client.
//!
//! Two read-only endpoints are used:
//! - `GET /topstories.json`: up to 500 ranked item ids
//! - `GET /item/{id}.json`: a single item, or `null` if it does not exist
//!
//! See: <https://github.com/HackerNews/API>

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::traits::ItemSource;
use crate::types::{Item, ItemId};
use crate::{QuietHnError, Result};

/// Default base URL for the Hacker News API
pub const DEFAULT_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Hacker News API.
///
/// Cloning is cheap; clones share one connection pool.
#[derive(Clone)]
pub struct HackerNewsClient {
    http: Client,
    base_url: String,
}

impl HackerNewsClient {
    /// Create a client against the public API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (for testing with wiremock).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom base URL and request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");

        let base_url: String = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| QuietHnError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuietHnError::Api {
                status: status.as_u16(),
                message: format!("Hacker News API error: {status}"),
            });
        }
        Ok(response)
    }

    /// GET `url` and decode the body. Bodies that are not the expected JSON
    /// surface as [`QuietHnError::Json`].
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self
            .get(url)
            .await?
            .bytes()
            .await
            .map_err(|e| QuietHnError::Http(e.to_string()))?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl Default for HackerNewsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemSource for HackerNewsClient {
    async fn top_items(&self) -> Result<Vec<ItemId>> {
        let url = format!("{}/topstories.json", self.base_url);
        self.get_json(&url).await
    }

    async fn item(&self, id: ItemId) -> Result<Item> {
        let url = format!("{}/item/{id}.json", self.base_url);
        let item: Option<Item> = self.get_json(&url).await?;
        item.ok_or(QuietHnError::EmptyResponse)
    }
}
