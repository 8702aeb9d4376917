//! Service layer: business logic orchestration.
//!
//! [`SwapService`] coordinates the swap form, delegates computation to
//! the pure quote functions in [`super::domain`], and reads prices
//! through the [`super::feed::FeedHandle`].

pub mod swap_service;

pub use swap_service::{FormSnapshot, SwapReceipt, SwapService};
