//! System endpoints: health check and feed status.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Feed status response.
#[derive(Debug, Serialize, ToSchema)]
struct FeedStatusResponse {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_line: Option<String>,
    priced_symbols: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    checked_at: String,
}

/// `GET /feed/status` — State of the one-shot price feed fetch.
#[utoipa::path(
    get,
    path = "/feed/status",
    tag = "System",
    summary = "Price feed status",
    description = "Reports the price fetch lifecycle (idle, loading, ready, error), the number of priced symbols, and the failure message when the fetch failed. There is no retry; an error state persists until restart.",
    responses(
        (status = 200, description = "Feed status", body = FeedStatusResponse),
    )
)]
pub async fn feed_status_handler(State(state): State<AppState>) -> impl IntoResponse {
    let feed_state = state.swap_service.feed().snapshot().await;
    (
        StatusCode::OK,
        Json(FeedStatusResponse {
            status: feed_state.status.as_str().to_string(),
            status_line: feed_state
                .status
                .status_line()
                .map(ToString::to_string),
            priced_symbols: feed_state.prices.len(),
            error: feed_state.error,
            checked_at: Utc::now().to_rfc3339(),
        }),
    )
}

/// System routes mounted at the root level (not under /api/v1).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/feed/status", get(feed_status_handler))
}
