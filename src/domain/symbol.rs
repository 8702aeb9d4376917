//! Type-safe token symbol.
//!
//! [`TokenSymbol`] is a newtype wrapper around an uppercase ticker string
//! providing type safety so that symbols cannot be confused with other
//! strings, and guaranteeing a single canonical (uppercase) form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical uppercase token ticker (e.g. `ETH`, `USDC`).
///
/// Construction normalizes the input: surrounding whitespace is trimmed
/// and the result is uppercased. Used as the key in the token catalog and
/// the price map, so equality and hashing are always case-insensitive by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TokenSymbol(String);

impl TokenSymbol {
    /// Creates a symbol from any string-like input, normalizing to the
    /// canonical uppercase form.
    #[must_use]
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_uppercase())
    }

    /// Returns the canonical ticker as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the symbol is empty after normalization.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TokenSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TokenSymbol {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for TokenSymbol {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<TokenSymbol> for String {
    fn from(symbol: TokenSymbol) -> Self {
        symbol.0
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn new_uppercases_and_trims() {
        let symbol = TokenSymbol::new("  eth ");
        assert_eq!(symbol.as_str(), "ETH");
    }

    #[test]
    fn equality_is_case_insensitive_by_construction() {
        assert_eq!(TokenSymbol::new("usdc"), TokenSymbol::new("USDC"));
    }

    #[test]
    fn display_is_canonical_form() {
        let symbol = TokenSymbol::new("swth");
        assert_eq!(format!("{symbol}"), "SWTH");
    }

    #[test]
    fn serde_round_trip() {
        let symbol = TokenSymbol::new("BTC");
        let json = serde_json::to_string(&symbol).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert_eq!(json, "\"BTC\"");
        let deserialized: TokenSymbol = serde_json::from_str("\"btc\"").ok().unwrap_or_else(|| {
            panic!("deserialization failed");
        });
        assert_eq!(symbol, deserialized);
    }

    #[test]
    fn hash_works_in_hashmap() {
        use std::collections::HashMap;
        let symbol = TokenSymbol::new("ATOM");
        let mut map = HashMap::new();
        map.insert(symbol.clone(), 1.0_f64);
        assert_eq!(map.get(&TokenSymbol::new("atom")), Some(&1.0));
    }

    #[test]
    fn empty_input_yields_empty_symbol() {
        assert!(TokenSymbol::new("   ").is_empty());
    }
}
