//! Shared feed state and the liveness-guarded handle.
//!
//! [`FeedHandle`] is the cheap-to-clone view of the single feed fetch:
//! readers take a snapshot of the current [`FeedState`], while the fetch
//! task applies its outcome through the handle. A liveness flag, cleared
//! on shutdown, guarantees that a result arriving after the consumer has
//! lost interest is discarded without observable effect.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;

use super::client::FeedError;
use crate::domain::PriceMap;

/// Lifecycle of the one price fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    /// No fetch has started yet.
    Idle,
    /// The fetch is in flight.
    Loading,
    /// The fetch succeeded and prices are available.
    Ready,
    /// The fetch failed; no prices are available.
    Error,
}

impl FeedStatus {
    /// Lowercase wire name of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Error => "error",
        }
    }

    /// Human-readable status line, when one is shown for this state.
    #[must_use]
    pub const fn status_line(&self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Loading => Some("Syncing prices"),
            Self::Ready => Some("All prices up to date"),
            Self::Error => Some("Price feed unavailable"),
        }
    }
}

/// Snapshot of the feed: status, cleaned price map, optional error text.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedState {
    /// Current lifecycle state.
    pub status: FeedStatus,
    /// Cleaned price map; empty unless `status` is [`FeedStatus::Ready`].
    pub prices: PriceMap,
    /// Human-readable failure description when `status` is
    /// [`FeedStatus::Error`].
    pub error: Option<String>,
}

impl FeedState {
    fn idle() -> Self {
        Self {
            status: FeedStatus::Idle,
            prices: PriceMap::new(),
            error: None,
        }
    }
}

/// Shared, liveness-guarded access to the feed state.
#[derive(Debug, Clone)]
pub struct FeedHandle {
    state: Arc<RwLock<FeedState>>,
    live: Arc<AtomicBool>,
}

impl FeedHandle {
    /// Creates a live handle in the idle state with no prices.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(FeedState::idle())),
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Returns a snapshot of the current feed state.
    pub async fn snapshot(&self) -> FeedState {
        self.state.read().await.clone()
    }

    /// Returns the current status.
    pub async fn status(&self) -> FeedStatus {
        self.state.read().await.status
    }

    /// Returns `true` while results are still wanted.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    /// Marks the consumer as gone. Any fetch result applied afterwards is
    /// discarded.
    pub fn shutdown(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Moves the state to [`FeedStatus::Loading`], clearing any prices.
    ///
    /// A no-op when the handle is no longer live.
    pub async fn mark_loading(&self) {
        if !self.is_live() {
            return;
        }
        let mut state = self.state.write().await;
        *state = FeedState {
            status: FeedStatus::Loading,
            prices: PriceMap::new(),
            error: None,
        };
    }

    /// Applies the fetch outcome, unless the handle has been shut down.
    ///
    /// Returns `true` when the result was applied, `false` when it was
    /// discarded as stale.
    pub async fn apply(&self, result: Result<PriceMap, FeedError>) -> bool {
        if !self.is_live() {
            tracing::debug!("late price feed result discarded");
            return false;
        }
        let mut state = self.state.write().await;
        *state = match result {
            Ok(prices) => {
                tracing::info!(entries = prices.len(), "price feed ready");
                FeedState {
                    status: FeedStatus::Ready,
                    prices,
                    error: None,
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "price feed fetch failed");
                FeedState {
                    status: FeedStatus::Error,
                    prices: PriceMap::new(),
                    error: Some(err.to_string()),
                }
            }
        };
        true
    }
}

impl Default for FeedHandle {
    fn default() -> Self {
        Self::new()
    }
}
