//! HTTP client for the remote price feed.
//!
//! The feed is a single fixed URL returning a JSON array of
//! `{currency, price}` objects. The client performs exactly one fetch per
//! call; retry and refresh policy (there is none) belongs to the caller.

use std::time::Duration;

use crate::domain::{PriceEntry, PriceMap};

/// Errors raised while retrieving or decoding the price feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The request could not be built or transported.
    #[error("price feed request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The feed answered with a non-success HTTP status.
    #[error("price feed returned HTTP {0}")]
    Status(u16),
}

/// One-shot price feed fetcher.
#[derive(Debug, Clone)]
pub struct PriceFeedClient {
    http: reqwest::Client,
    endpoint: String,
}

impl PriceFeedClient {
    /// Creates a client for the given endpoint with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns a [`FeedError`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// The configured feed URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches the feed once and builds a [`PriceMap`] from the payload.
    ///
    /// Individually malformed entries are dropped during map construction
    /// and are not an error; only transport failures, non-success HTTP
    /// statuses, and an undecodable payload are.
    ///
    /// # Errors
    ///
    /// Returns a [`FeedError`] on network failure, a non-2xx response, or
    /// a payload that is not a JSON array of objects.
    pub async fn fetch_once(&self) -> Result<PriceMap, FeedError> {
        let response = self.http.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }
        let entries: Vec<PriceEntry> = response.json().await?;
        tracing::debug!(entries = entries.len(), "price feed payload received");
        Ok(PriceMap::from_entries(entries))
    }
}
