//! Swap form DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::token_dto::TokenDto;
use crate::service::{FormSnapshot, SwapReceipt};

/// Request body for `PUT /form/token`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SelectTokenRequest {
    /// Which side to assign: `"from"` or `"to"`.
    pub side: String,
    /// Token symbol, any casing.
    pub symbol: String,
}

/// Request body for `PUT /form/amount`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetAmountRequest {
    /// Raw amount text, stored verbatim.
    pub amount: String,
}

/// Response body for `GET /form`: current selection plus everything
/// derived from it.
#[derive(Debug, Serialize, ToSchema)]
pub struct FormStateResponse {
    /// Feed lifecycle state: `idle`, `loading`, `ready`, or `error`.
    pub feed_status: String,
    /// Human-readable feed status line, when one applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_line: Option<String>,
    /// Selected source token.
    pub from: Option<TokenDto>,
    /// Selected target token.
    pub to: Option<TokenDto>,
    /// Raw amount text as last entered.
    pub amount: String,
    /// Target units per source unit; `0` when unavailable.
    pub rate: f64,
    /// Source units per target unit; `0` when unavailable.
    pub inverse_rate: f64,
    /// Estimated received amount; `0` unless amount and rate are positive.
    pub receive_amount: f64,
    /// USD value of the entered amount.
    pub from_value_usd: f64,
    /// USD value of the received amount.
    pub to_value_usd: f64,
    /// First failing validation check, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_error: Option<String>,
    /// Confirmation message from a recent submit, until it expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<FormSnapshot> for FormStateResponse {
    fn from(snapshot: FormSnapshot) -> Self {
        Self {
            feed_status: snapshot.feed_status.as_str().to_string(),
            status_line: snapshot
                .feed_status
                .status_line()
                .map(ToString::to_string),
            from: snapshot.from.as_ref().map(TokenDto::from),
            to: snapshot.to.as_ref().map(TokenDto::from),
            amount: snapshot.amount_text,
            rate: snapshot.preview.rate,
            inverse_rate: snapshot.preview.inverse_rate,
            receive_amount: snapshot.preview.receive_amount,
            from_value_usd: snapshot.preview.from_value_usd,
            to_value_usd: snapshot.preview.to_value_usd,
            validation_error: snapshot
                .preview
                .validation_error
                .map(|e| e.to_string()),
            message: snapshot.message,
        }
    }
}

/// Response body for `POST /form/flip`.
#[derive(Debug, Serialize, ToSchema)]
pub struct FlipResponse {
    /// `false` when the flip was a no-op because a side was unset.
    pub flipped: bool,
}

/// Response body for `POST /form/submit`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitResponse {
    /// Correlation id for this submission.
    pub receipt_id: String,
    /// Full confirmation message.
    pub message: String,
    /// Formatted input amount.
    pub amount_in: String,
    /// Source token symbol.
    pub from_symbol: String,
    /// Formatted estimated output amount.
    pub amount_out: String,
    /// Target token symbol.
    pub to_symbol: String,
    /// Submission timestamp.
    pub submitted_at: DateTime<Utc>,
}

impl From<SwapReceipt> for SubmitResponse {
    fn from(receipt: SwapReceipt) -> Self {
        Self {
            receipt_id: receipt.receipt_id,
            message: receipt.message,
            amount_in: receipt.amount_in,
            from_symbol: receipt.from_symbol.to_string(),
            amount_out: receipt.amount_out,
            to_symbol: receipt.to_symbol.to_string(),
            submitted_at: receipt.submitted_at,
        }
    }
}
