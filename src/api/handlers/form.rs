//! Swap form endpoint handlers.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};

use crate::api::dto::{
    FlipResponse, FormStateResponse, SelectTokenRequest, SetAmountRequest, SubmitResponse,
};
use crate::app_state::AppState;
use crate::domain::SwapSide;
use crate::error::{ErrorResponse, GatewayError};

/// `GET /form` — Current form state with derived quote preview.
#[utoipa::path(
    get,
    path = "/api/v1/form",
    tag = "Form",
    summary = "Read the swap form",
    description = "Returns the current selection, raw amount text, derived rate and receive amount, validation state, and any active confirmation message.",
    responses(
        (status = 200, description = "Form state", body = FormStateResponse),
    )
)]
pub async fn get_form(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.swap_service.form_snapshot().await;
    Json(FormStateResponse::from(snapshot))
}

/// `PUT /form/token` — Assign a token to one side of the form.
///
/// # Errors
///
/// Returns [`GatewayError`] on an unknown side, an unknown symbol, or a
/// symbol without a price quote.
#[utoipa::path(
    put,
    path = "/api/v1/form/token",
    tag = "Form",
    summary = "Select a token",
    description = "Assigns a tradable token to the `from` or `to` side. No cross-field validation happens here; an identical pair surfaces as a validation error on read.",
    request_body = SelectTokenRequest,
    responses(
        (status = 200, description = "Updated form state", body = FormStateResponse),
        (status = 400, description = "Invalid side or untradable token", body = ErrorResponse),
        (status = 404, description = "Unknown token", body = ErrorResponse),
    )
)]
pub async fn select_token(
    State(state): State<AppState>,
    Json(req): Json<SelectTokenRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let side = parse_side(&req.side)?;
    state.swap_service.select_token(side, &req.symbol).await?;
    let snapshot = state.swap_service.form_snapshot().await;
    Ok(Json(FormStateResponse::from(snapshot)))
}

/// `PUT /form/amount` — Store the raw amount text.
#[utoipa::path(
    put,
    path = "/api/v1/form/amount",
    tag = "Form",
    summary = "Set the amount",
    description = "Stores the amount text verbatim. Intermediate input such as \"1.\" is accepted and only parsed when the quote is derived.",
    request_body = SetAmountRequest,
    responses(
        (status = 200, description = "Updated form state", body = FormStateResponse),
    )
)]
pub async fn set_amount(
    State(state): State<AppState>,
    Json(req): Json<SetAmountRequest>,
) -> impl IntoResponse {
    state.swap_service.set_amount(&req.amount).await;
    let snapshot = state.swap_service.form_snapshot().await;
    Json(FormStateResponse::from(snapshot))
}

/// `POST /form/flip` — Swap the two sides of the form.
#[utoipa::path(
    post,
    path = "/api/v1/form/flip",
    tag = "Form",
    summary = "Flip swap direction",
    description = "Atomically swaps the source and target tokens. A no-op while either side is unset.",
    responses(
        (status = 200, description = "Whether the flip was applied", body = FlipResponse),
    )
)]
pub async fn flip(State(state): State<AppState>) -> impl IntoResponse {
    let flipped = state.swap_service.flip().await;
    Json(FlipResponse { flipped })
}

/// `POST /form/submit` — Submit the swap form.
///
/// # Errors
///
/// Returns [`GatewayError`] while prices are not ready or when a
/// validation check fails; a rejected submit changes nothing.
#[utoipa::path(
    post,
    path = "/api/v1/form/submit",
    tag = "Form",
    summary = "Submit the swap",
    description = "Re-validates the form and, on success, produces a confirmation message that clears automatically after a fixed delay. Rejected submissions leave all state untouched.",
    responses(
        (status = 200, description = "Swap confirmation", body = SubmitResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 503, description = "Prices not ready", body = ErrorResponse),
    )
)]
pub async fn submit(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    let receipt = state.swap_service.submit().await?;
    Ok(Json(SubmitResponse::from(receipt)))
}

/// Form routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/form", get(get_form))
        .route("/form/token", put(select_token))
        .route("/form/amount", put(set_amount))
        .route("/form/flip", post(flip))
        .route("/form/submit", post(submit))
}

/// Parses a request side string into a [`SwapSide`].
fn parse_side(raw: &str) -> Result<SwapSide, GatewayError> {
    match raw.to_ascii_lowercase().as_str() {
        "from" => Ok(SwapSide::From),
        "to" => Ok(SwapSide::To),
        other => Err(GatewayError::InvalidRequest(format!(
            "side must be \"from\" or \"to\", got \"{other}\""
        ))),
    }
}
