//! Data Transfer Objects for REST request/response serialization.
//!
//! Derived numeric values are plain JSON numbers; formatted display
//! amounts (thousands separators, trimmed fraction digits) are strings.

pub mod form_dto;
pub mod quote_dto;
pub mod token_dto;

pub use form_dto::*;
pub use quote_dto::*;
pub use token_dto::*;
