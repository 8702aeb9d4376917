//! REST endpoint handlers organized by resource.

pub mod form;
pub mod quote;
pub mod system;
pub mod tokens;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(tokens::routes())
        .merge(form::routes())
        .merge(quote::routes())
}
