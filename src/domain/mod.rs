//! Domain layer: token catalog, price map, quote math, and form state.
//!
//! This module contains the pure core of the gateway: token identity and
//! metadata, the cleaned-up price mapping, the conversion/validation
//! functions, and the swap form state machine. Nothing here performs I/O.

pub mod form;
pub mod price_map;
pub mod quote;
pub mod symbol;
pub mod token;

pub use form::{SwapForm, SwapSide};
pub use price_map::{PriceEntry, PriceMap};
pub use quote::{QuotePreview, ValidationError};
pub use symbol::TokenSymbol;
pub use token::{TokenCatalog, TokenInfo};
