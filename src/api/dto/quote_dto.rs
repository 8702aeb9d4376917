//! Stateless quote DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{QuotePreview, TokenInfo};

/// Query parameters for `GET /quote`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuoteParams {
    /// Source token symbol, any casing.
    pub from: String,
    /// Target token symbol, any casing.
    pub to: String,
    /// Amount text to convert. Defaults to `"1"`.
    #[serde(default = "default_amount")]
    pub amount: String,
}

fn default_amount() -> String {
    "1".to_string()
}

/// Response body for `GET /quote`.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuoteResponse {
    /// Resolved source token symbol.
    pub from_symbol: String,
    /// Resolved target token symbol.
    pub to_symbol: String,
    /// Amount text the quote was computed for.
    pub amount: String,
    /// Target units per source unit; `0` when unavailable.
    pub rate: f64,
    /// Source units per target unit; `0` when unavailable.
    pub inverse_rate: f64,
    /// Estimated received amount.
    pub receive_amount: f64,
    /// USD value of the entered amount.
    pub from_value_usd: f64,
    /// USD value of the received amount.
    pub to_value_usd: f64,
    /// First failing validation check, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_error: Option<String>,
    /// Quote timestamp.
    pub quoted_at: DateTime<Utc>,
}

impl QuoteResponse {
    /// Assembles the response from resolved tokens and a computed preview.
    #[must_use]
    pub fn assemble(from: &TokenInfo, to: &TokenInfo, amount: String, preview: &QuotePreview) -> Self {
        Self {
            from_symbol: from.symbol.to_string(),
            to_symbol: to.symbol.to_string(),
            amount,
            rate: preview.rate,
            inverse_rate: preview.inverse_rate,
            receive_amount: preview.receive_amount,
            from_value_usd: preview.from_value_usd,
            to_value_usd: preview.to_value_usd,
            validation_error: preview.validation_error.map(|e| e.to_string()),
            quoted_at: Utc::now(),
        }
    }
}
