//! Token catalog endpoint handlers.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::TokenDto;
use crate::app_state::AppState;

/// `GET /tokens` — The full static token catalog.
#[utoipa::path(
    get,
    path = "/api/v1/tokens",
    tag = "Tokens",
    summary = "List catalog tokens",
    description = "Returns every token the gateway knows about, whether or not it currently has a price.",
    responses(
        (status = 200, description = "Token catalog", body = Vec<TokenDto>),
    )
)]
pub async fn list_tokens(State(state): State<AppState>) -> impl IntoResponse {
    let tokens: Vec<TokenDto> = state
        .swap_service
        .catalog()
        .iter()
        .map(TokenDto::from)
        .collect();
    Json(tokens)
}

/// `GET /tokens/tradable` — Catalog tokens with a known price.
#[utoipa::path(
    get,
    path = "/api/v1/tokens/tradable",
    tag = "Tokens",
    summary = "List tradable tokens",
    description = "Returns the catalog entries whose symbol has a price in the current price map. Empty until the feed is ready.",
    responses(
        (status = 200, description = "Tradable token set", body = Vec<TokenDto>),
    )
)]
pub async fn list_tradable_tokens(State(state): State<AppState>) -> impl IntoResponse {
    let tokens: Vec<TokenDto> = state
        .swap_service
        .tradable_tokens()
        .await
        .iter()
        .map(TokenDto::from)
        .collect();
    Json(tokens)
}

/// Token routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tokens", get(list_tokens))
        .route("/tokens/tradable", get(list_tradable_tokens))
}
