//! # swap-gateway
//!
//! REST API gateway for a currency swap quoting service.
//!
//! The gateway fetches a price list once at startup, derives which
//! catalog tokens are tradable, and exposes the state machine of a swap
//! form — token selection, amount entry, flip, submit — over HTTP. All
//! conversion arithmetic is a pure price ratio; this service is a
//! coordination layer with no order execution.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── SwapService (service/)
//!     │
//!     ├── SwapForm, quote math (domain/)
//!     ├── TokenCatalog, PriceMap (domain/)
//!     │
//!     └── PriceFeedClient (feed/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod feed;
pub mod service;
