//! Price feed layer: the one-shot HTTP client and shared feed state.
//!
//! Exactly one fetch is attempted per process lifetime. There is no
//! retry, no polling, and no cache invalidation; a failed fetch leaves
//! the gateway serving an empty tradable set until restart.

pub mod client;
pub mod state;

pub use client::{FeedError, PriceFeedClient};
pub use state::{FeedHandle, FeedState, FeedStatus};
