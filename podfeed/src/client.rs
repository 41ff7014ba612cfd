//! HTTP client for the episodes API
//!
//! This module provides a client for the JSON episodes API that backs the
//! listing pages: the most recent episodes, sorted by publication date, and
//! individual episode lookup.
//!
//! # Example
//!
//! ```no_run
//! use podfeed::EpisodeClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EpisodeClient::new().await?;
//!
//!     let episodes = client.latest_episodes().await?;
//!     for episode in &episodes {
//!         println!("{} ({})", episode.title, episode.duration_as_string);
//!     }
//!
//!     let detail = client.episode(&episodes[0].id).await?;
//!     println!("Playing: {}", detail.url);
//!
//!     Ok(())
//! }
//! ```

use crate::error::{Error, Result};
use crate::models::{Episode, WireEpisode};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Default episodes API base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent
pub const DEFAULT_USER_AGENT: &str = "Podarium/0.1.0 (podfeed)";

/// Default number of episodes fetched for the listing pages
pub const DEFAULT_EPISODE_LIMIT: usize = 12;

/// Episodes API HTTP client
///
/// The client is stateless and does not cache responses internally.
/// Caching is handled by higher layers (the page cache).
#[derive(Debug, Clone)]
pub struct EpisodeClient {
    pub(crate) client: Client,
    base_url: String,
    timeout: Duration,
    limit: usize,
}

impl EpisodeClient {
    /// Create a new client with default settings
    pub async fn new() -> Result<Self> {
        Self::builder().build().await
    }

    /// Create a builder for configuring the client
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client with a custom reqwest::Client
    ///
    /// Useful for sharing HTTP connection pools or custom proxy settings
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            limit: DEFAULT_EPISODE_LIMIT,
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the configured episode limit
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Get the internal HTTP client
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    /// Fetch the most recent episodes
    ///
    /// Asks the API for at most `limit` episodes, sorted by publication date
    /// in descending order. The order returned by the API is preserved.
    ///
    /// Any transport error, non-success status or malformed entry fails the
    /// whole call; partial lists are never returned.
    pub async fn latest_episodes(&self) -> Result<Vec<Episode>> {
        let mut url = Url::parse(&format!("{}/episodes", self.base_url))?;
        url.query_pairs_mut()
            .append_pair("_limit", &self.limit.to_string())
            .append_pair("_sort", "published_at")
            .append_pair("_order", "desc");

        tracing::debug!("Fetching latest episodes: {}", url);

        let response = self
            .client
            .get(url.as_str())
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!("Episodes list request failed: {}", response.status());
            return Err(Error::api_error(format!(
                "episodes list returned {}",
                response.status()
            )));
        }

        let wire: Vec<WireEpisode> = response.json().await?;
        wire.into_iter().map(Episode::from_wire).collect()
    }

    /// Fetch a single episode by its identifier
    ///
    /// Returns [`Error::EpisodeNotFound`] when the API answers 404.
    pub async fn episode(&self, id: &str) -> Result<Episode> {
        let url = Url::parse(&format!("{}/episodes/{}", self.base_url, id))?;

        tracing::debug!("Fetching episode: {}", url);

        let response = self
            .client
            .get(url.as_str())
            .timeout(self.timeout)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::EpisodeNotFound(id.to_string()));
        }
        if !response.status().is_success() {
            tracing::warn!("Episode {} request failed: {}", id, response.status());
            return Err(Error::api_error(format!(
                "episode {} returned {}",
                id,
                response.status()
            )));
        }

        let wire: WireEpisode = response.json().await?;
        Episode::from_wire(wire)
    }
}

/// Builder for configuring an EpisodeClient
#[derive(Debug)]
pub struct ClientBuilder {
    client: Option<Client>,
    base_url: String,
    timeout: Duration,
    user_agent: String,
    limit: usize,
    proxy: Option<String>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            client: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            limit: DEFAULT_EPISODE_LIMIT,
            proxy: None,
        }
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom HTTP client
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the number of episodes requested for listings
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set a proxy URL
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Build the client
    pub async fn build(self) -> Result<EpisodeClient> {
        let client = if let Some(client) = self.client {
            client
        } else {
            let mut builder = Client::builder()
                .user_agent(&self.user_agent)
                .timeout(self.timeout);

            if let Some(proxy_url) = &self.proxy {
                let proxy = reqwest::Proxy::all(proxy_url)
                    .map_err(|e| Error::other(format!("Invalid proxy: {}", e)))?;
                builder = builder.proxy(proxy);
            }

            builder.build()?
        };

        Ok(EpisodeClient {
            client,
            base_url: self.base_url,
            timeout: self.timeout,
            limit: self.limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Unit Tests (no network)
    // ========================================================================

    #[test]
    fn test_builder_defaults() {
        let builder = ClientBuilder::default();
        assert_eq!(builder.base_url, DEFAULT_BASE_URL);
        assert_eq!(builder.limit, DEFAULT_EPISODE_LIMIT);
        assert_eq!(
            builder.timeout,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
    }

    #[tokio::test]
    async fn test_builder_overrides() {
        let client = EpisodeClient::builder()
            .base_url("http://feeds.example.org")
            .limit(5)
            .timeout(Duration::from_secs(5))
            .build()
            .await
            .unwrap();

        assert_eq!(client.base_url(), "http://feeds.example.org");
        assert_eq!(client.limit(), 5);
    }

    #[tokio::test]
    async fn test_invalid_base_url_fails_on_request() {
        let client = EpisodeClient::builder()
            .base_url("not a url")
            .build()
            .await
            .unwrap();

        let result = client.latest_episodes().await;
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    // ========================================================================
    // Integration Tests (real API calls)
    //
    // Run with: cargo test -p podfeed -- --ignored
    // ========================================================================

    #[tokio::test]
    #[ignore = "Integration test - requires the episodes API running on localhost:3333"]
    async fn test_latest_episodes_live() {
        let client = EpisodeClient::new().await.expect("Failed to create client");
        let episodes = client
            .latest_episodes()
            .await
            .expect("Failed to fetch episodes");

        assert!(!episodes.is_empty(), "Expected at least one episode");
        assert!(episodes.len() <= DEFAULT_EPISODE_LIMIT);

        for episode in &episodes {
            assert!(!episode.id.is_empty());
            assert!(!episode.url.is_empty());
            assert!(episode.duration_as_string.len() >= 8);
        }
    }

    #[tokio::test]
    #[ignore = "Integration test - requires the episodes API running on localhost:3333"]
    async fn test_episode_not_found_live() {
        let client = EpisodeClient::new().await.expect("Failed to create client");
        let result = client.episode("definitely-not-an-episode").await;

        assert!(matches!(result, Err(Error::EpisodeNotFound(_))));
    }
}
