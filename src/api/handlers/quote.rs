//! Stateless quote endpoint handler.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{QuoteParams, QuoteResponse};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `GET /quote` — Quote an explicit pair and amount, bypassing the form.
///
/// # Errors
///
/// Returns [`GatewayError`] when either symbol is not in the catalog.
#[utoipa::path(
    get,
    path = "/api/v1/quote",
    tag = "Quotes",
    summary = "Get a stateless quote",
    description = "Computes rate and receive amount for an explicit (from, to, amount) triple against the current price map. The response carries any validation error instead of failing; only unknown symbols are a hard error.",
    params(
        ("from" = String, Query, description = "Source token symbol"),
        ("to" = String, Query, description = "Target token symbol"),
        ("amount" = Option<String>, Query, description = "Amount text, defaults to 1"),
    ),
    responses(
        (status = 200, description = "Quote computed", body = QuoteResponse),
        (status = 404, description = "Unknown token", body = ErrorResponse),
    )
)]
pub async fn get_quote(
    State(state): State<AppState>,
    Query(params): Query<QuoteParams>,
) -> Result<impl IntoResponse, GatewayError> {
    let (from, to, preview) = state
        .swap_service
        .quote(&params.from, &params.to, &params.amount)
        .await?;
    Ok(Json(QuoteResponse::assemble(
        &from,
        &to,
        params.amount,
        &preview,
    )))
}

/// Quote routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/quote", get(get_quote))
}
