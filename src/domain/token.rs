//! Token metadata and the static token catalog.
//!
//! [`TokenCatalog`] is the hand-maintained list of assets the gateway
//! knows how to display. It is built once at startup and never mutated;
//! which of its entries are actually *tradable* depends on the price map
//! delivered by the feed.

use serde::Serialize;

use super::TokenSymbol;
use super::price_map::PriceMap;

/// Base URL for token icon assets.
const ICON_BASE: &str = "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens";

/// Static metadata for a single catalog asset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenInfo {
    /// Canonical ticker, unique within the catalog.
    pub symbol: TokenSymbol,
    /// Human-readable display name.
    pub name: String,
    /// Chain label shown alongside the token.
    pub chain: String,
    /// Icon asset URL.
    pub icon_url: String,
}

impl TokenInfo {
    /// Creates a new `TokenInfo` with the icon URL derived from the symbol.
    #[must_use]
    pub fn new(symbol: &str, name: &str, chain: &str) -> Self {
        let symbol = TokenSymbol::new(symbol);
        let icon_url = format!("{ICON_BASE}/{symbol}.svg");
        Self {
            symbol,
            name: name.to_string(),
            chain: chain.to_string(),
            icon_url,
        }
    }
}

/// Immutable, process-lifetime catalog of supported tokens.
///
/// Symbols are unique: when the input list contains duplicates, the first
/// occurrence wins and later ones are discarded. Catalog order is
/// preserved and drives default selection (first/second tradable token).
#[derive(Debug, Clone)]
pub struct TokenCatalog {
    tokens: Vec<TokenInfo>,
}

impl TokenCatalog {
    /// Builds a catalog from the given entries, discarding duplicate
    /// symbols (first occurrence wins).
    #[must_use]
    pub fn new(entries: Vec<TokenInfo>) -> Self {
        let mut tokens: Vec<TokenInfo> = Vec::with_capacity(entries.len());
        for entry in entries {
            if tokens.iter().any(|t| t.symbol == entry.symbol) {
                tracing::warn!(symbol = %entry.symbol, "duplicate catalog symbol discarded");
                continue;
            }
            tokens.push(entry);
        }
        Self { tokens }
    }

    /// Returns the catalog entry for `symbol`, if present.
    #[must_use]
    pub fn get(&self, symbol: &TokenSymbol) -> Option<&TokenInfo> {
        self.tokens.iter().find(|t| &t.symbol == symbol)
    }

    /// Iterates over all catalog entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &TokenInfo> {
        self.tokens.iter()
    }

    /// Returns the number of catalog entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the catalog entries whose symbol has a price in `prices`,
    /// in catalog order.
    ///
    /// This is the *tradable token set*: recomputed on demand from the
    /// current price map, never cached.
    #[must_use]
    pub fn tradable(&self, prices: &PriceMap) -> Vec<TokenInfo> {
        self.tokens
            .iter()
            .filter(|t| prices.contains(&t.symbol))
            .cloned()
            .collect()
    }
}

impl Default for TokenCatalog {
    /// The built-in nine-asset catalog.
    fn default() -> Self {
        Self::new(vec![
            TokenInfo::new("SWTH", "Switcheo", "Carbon"),
            TokenInfo::new("ETH", "Ethereum", "Ethereum"),
            TokenInfo::new("USDC", "USD Coin", "Ethereum"),
            TokenInfo::new("BTC", "Bitcoin", "Bitcoin"),
            TokenInfo::new("ATOM", "Cosmos", "Cosmos"),
            TokenInfo::new("SOL", "Solana", "Solana"),
            TokenInfo::new("BNB", "BNB", "BNB Chain"),
            TokenInfo::new("AVAX", "Avalanche", "Avalanche"),
            TokenInfo::new("LUNA", "Terra", "Terra"),
        ])
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_nine_unique_entries() {
        let catalog = TokenCatalog::default();
        assert_eq!(catalog.len(), 9);
        let mut symbols: Vec<&str> = catalog.iter().map(|t| t.symbol.as_str()).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), 9);
    }

    #[test]
    fn duplicate_symbols_are_discarded_first_wins() {
        let catalog = TokenCatalog::new(vec![
            TokenInfo::new("ETH", "Ethereum", "Ethereum"),
            TokenInfo::new("eth", "Other Ethereum", "Elsewhere"),
        ]);
        assert_eq!(catalog.len(), 1);
        let Some(entry) = catalog.get(&TokenSymbol::new("ETH")) else {
            panic!("expected ETH entry");
        };
        assert_eq!(entry.name, "Ethereum");
    }

    #[test]
    fn get_is_case_insensitive_through_symbol() {
        let catalog = TokenCatalog::default();
        assert!(catalog.get(&TokenSymbol::new("usdc")).is_some());
        assert!(catalog.get(&TokenSymbol::new("DOGE")).is_none());
    }

    #[test]
    fn icon_url_derived_from_symbol() {
        let token = TokenInfo::new("btc", "Bitcoin", "Bitcoin");
        assert!(token.icon_url.ends_with("/BTC.svg"));
    }

    #[test]
    fn tradable_filters_by_price_map_in_catalog_order() {
        let catalog = TokenCatalog::default();
        let json = r#"[
            {"currency": "USDC", "price": 1.0},
            {"currency": "ETH", "price": 2000.0}
        ]"#;
        let entries = serde_json::from_str(json).ok().unwrap_or_else(|| {
            panic!("entries should parse");
        });
        let prices = PriceMap::from_entries(entries);

        let tradable = catalog.tradable(&prices);
        let symbols: Vec<&str> = tradable.iter().map(|t| t.symbol.as_str()).collect();
        // Catalog order (ETH before USDC), not feed order.
        assert_eq!(symbols, vec!["ETH", "USDC"]);
    }

    #[test]
    fn tradable_is_empty_when_no_prices() {
        let catalog = TokenCatalog::default();
        assert!(catalog.tradable(&PriceMap::new()).is_empty());
    }
}
