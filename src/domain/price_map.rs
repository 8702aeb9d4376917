//! Price mapping built from the raw feed payload.
//!
//! The feed delivers a JSON array of loosely-shaped entries. [`PriceMap`]
//! is the cleaned-up result: uppercase symbol to positive USD price, with
//! every malformed entry dropped during construction. Partial data is not
//! treated as a failure.

use std::collections::HashMap;

use serde::Deserialize;

use super::TokenSymbol;

/// One raw entry of the feed payload.
///
/// Both fields are optional at the wire level; unknown fields (the feed
/// also carries a `date` per entry) are ignored. Shape checks happen in
/// [`PriceMap::from_entries`], not during deserialization, so a single
/// bad entry can never fail the whole payload.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceEntry {
    /// Currency code as sent by the feed, any casing.
    #[serde(default)]
    pub currency: Option<String>,
    /// Price in USD.
    #[serde(default)]
    pub price: Option<f64>,
}

/// Mapping from canonical token symbol to a positive USD price.
///
/// Populated wholesale from a feed payload; never updated incrementally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceMap {
    prices: HashMap<TokenSymbol, f64>,
}

impl PriceMap {
    /// Creates an empty price map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a price map from raw feed entries.
    ///
    /// An entry is dropped when its currency code is missing or empty, or
    /// when its price is missing, non-finite, or not positive. When the
    /// payload repeats a currency, the last entry wins.
    #[must_use]
    pub fn from_entries(entries: Vec<PriceEntry>) -> Self {
        let mut prices = HashMap::with_capacity(entries.len());
        for entry in entries {
            let Some(currency) = entry.currency else {
                tracing::debug!("feed entry without currency dropped");
                continue;
            };
            let symbol = TokenSymbol::new(&currency);
            if symbol.is_empty() {
                tracing::debug!("feed entry with empty currency dropped");
                continue;
            }
            let Some(price) = entry.price else {
                tracing::debug!(%symbol, "feed entry without price dropped");
                continue;
            };
            if !price.is_finite() || price <= 0.0 {
                tracing::debug!(%symbol, price, "feed entry with unusable price dropped");
                continue;
            }
            prices.insert(symbol, price);
        }
        Self { prices }
    }

    /// Returns the USD price for `symbol`, if known.
    #[must_use]
    pub fn get(&self, symbol: &TokenSymbol) -> Option<f64> {
        self.prices.get(symbol).copied()
    }

    /// Returns `true` if a price is known for `symbol`.
    #[must_use]
    pub fn contains(&self, symbol: &TokenSymbol) -> bool {
        self.prices.contains_key(symbol)
    }

    /// Returns the number of priced symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Returns `true` if no prices are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}
