//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::SwapService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Swap service for all business logic.
    pub swap_service: Arc<SwapService>,
}
