//! Gateway configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::SocketAddr;

/// Default URL of the remote price feed.
pub const DEFAULT_PRICE_FEED_URL: &str = "https://interview.switcheo.com/prices.json";

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// URL of the remote price feed.
    pub price_feed_url: String,

    /// Per-request timeout in seconds for the price fetch.
    pub price_feed_timeout_secs: u64,

    /// Milliseconds before a swap confirmation message clears itself.
    pub message_ttl_ms: u64,
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()?;

        let price_feed_url = std::env::var("PRICE_FEED_URL")
            .unwrap_or_else(|_| DEFAULT_PRICE_FEED_URL.to_string());

        let price_feed_timeout_secs = parse_env("PRICE_FEED_TIMEOUT_SECS", 10);
        let message_ttl_ms = parse_env("SWAP_MESSAGE_TTL_MS", 3_500);

        Ok(Self {
            listen_addr,
            price_feed_url,
            price_feed_timeout_secs,
            message_ttl_ms,
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
