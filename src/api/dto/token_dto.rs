//! Token DTOs.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::TokenInfo;

/// Catalog token as returned by the token endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TokenDto {
    /// Canonical uppercase ticker.
    pub symbol: String,
    /// Human-readable display name.
    pub name: String,
    /// Chain label.
    pub chain: String,
    /// Icon asset URL.
    pub icon_url: String,
}

impl From<&TokenInfo> for TokenDto {
    fn from(token: &TokenInfo) -> Self {
        Self {
            symbol: token.symbol.to_string(),
            name: token.name.clone(),
            chain: token.chain.clone(),
            icon_url: token.icon_url.clone(),
        }
    }
}
