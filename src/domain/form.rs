//! Swap form selection state machine.
//!
//! [`SwapForm`] holds the user-facing selection state: source token,
//! target token, and the raw amount text. It is a plain synchronous state
//! machine; locking, quote derivation, and the confirmation message live
//! in the service layer.

use super::token::TokenInfo;

/// Which side of the pair an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapSide {
    /// The token being paid.
    From,
    /// The token being received.
    To,
}

/// Mutable selection state of the swap form.
///
/// `amount_text` is stored verbatim: intermediate strings such as `"1."`
/// are legal form state and only parsed when a quote is derived.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapForm {
    from: Option<TokenInfo>,
    to: Option<TokenInfo>,
    amount_text: String,
}

impl SwapForm {
    /// Default amount text on a fresh form.
    pub const DEFAULT_AMOUNT: &'static str = "1.5";

    /// Creates a fresh form: no selections, default amount.
    #[must_use]
    pub fn new() -> Self {
        Self {
            from: None,
            to: None,
            amount_text: Self::DEFAULT_AMOUNT.to_string(),
        }
    }

    /// The currently selected source token.
    #[must_use]
    pub fn from(&self) -> Option<&TokenInfo> {
        self.from.as_ref()
    }

    /// The currently selected target token.
    #[must_use]
    pub fn to(&self) -> Option<&TokenInfo> {
        self.to.as_ref()
    }

    /// The raw amount text as last entered.
    #[must_use]
    pub fn amount_text(&self) -> &str {
        &self.amount_text
    }

    /// Assigns `token` to the given side. No cross-field validation is
    /// performed here; an identical pair is caught when the quote is
    /// derived.
    pub fn select(&mut self, side: SwapSide, token: TokenInfo) {
        match side {
            SwapSide::From => self.from = Some(token),
            SwapSide::To => self.to = Some(token),
        }
    }

    /// Stores the raw amount text verbatim.
    pub fn set_amount(&mut self, text: impl Into<String>) {
        self.amount_text = text.into();
    }

    /// Swaps the two sides atomically. Returns `false` (and changes
    /// nothing) when either side is unset.
    pub fn flip(&mut self) -> bool {
        if self.from.is_none() || self.to.is_none() {
            return false;
        }
        std::mem::swap(&mut self.from, &mut self.to);
        true
    }

    /// Reconciles the selection against a new tradable token set.
    ///
    /// Applied whenever the tradable set changes (in practice once, when
    /// the price fetch resolves). The fallback chain deliberately mirrors
    /// the established behavior:
    /// - empty set clears both sides;
    /// - `from` re-resolves by symbol, falling back to the first tradable
    ///   token;
    /// - `to` takes the second tradable token (then first) when unset or
    ///   when it matches the *first* tradable token, otherwise re-resolves
    ///   by symbol with the same second-then-first fallback.
    pub fn reconcile(&mut self, tradable: &[TokenInfo]) {
        let Some(first) = tradable.first() else {
            self.from = None;
            self.to = None;
            return;
        };
        let second_or_first = tradable.get(1).unwrap_or(first);

        self.from = match self.from.take() {
            None => Some(first.clone()),
            Some(current) => Some(
                find_by_symbol(tradable, &current)
                    .unwrap_or(first)
                    .clone(),
            ),
        };

        self.to = match self.to.take() {
            None => Some(second_or_first.clone()),
            Some(current) if current.symbol == first.symbol => Some(second_or_first.clone()),
            Some(current) => Some(
                find_by_symbol(tradable, &current)
                    .unwrap_or(second_or_first)
                    .clone(),
            ),
        };
    }
}

impl Default for SwapForm {
    fn default() -> Self {
        Self::new()
    }
}

fn find_by_symbol<'a>(tokens: &'a [TokenInfo], wanted: &TokenInfo) -> Option<&'a TokenInfo> {
    tokens.iter().find(|t| t.symbol == wanted.symbol)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn token(symbol: &str) -> TokenInfo {
        TokenInfo::new(symbol, symbol, "Test")
    }

    fn selected_symbols(form: &SwapForm) -> (Option<String>, Option<String>) {
        (
            form.from().map(|t| t.symbol.to_string()),
            form.to().map(|t| t.symbol.to_string()),
        )
    }

    #[test]
    fn fresh_form_has_default_amount_and_no_selection() {
        let form = SwapForm::new();
        assert_eq!(form.amount_text(), "1.5");
        assert!(form.from().is_none());
        assert!(form.to().is_none());
    }

    #[test]
    fn set_amount_stores_text_verbatim() {
        let mut form = SwapForm::new();
        form.set_amount("1.");
        assert_eq!(form.amount_text(), "1.");
        form.set_amount("not a number");
        assert_eq!(form.amount_text(), "not a number");
    }

    #[test]
    fn flip_is_noop_when_either_side_unset() {
        let mut form = SwapForm::new();
        assert!(!form.flip());

        form.select(SwapSide::From, token("ETH"));
        assert!(!form.flip());
        assert_eq!(
            selected_symbols(&form),
            (Some("ETH".to_string()), None)
        );
    }

    #[test]
    fn flip_twice_restores_selection() {
        let mut form = SwapForm::new();
        form.select(SwapSide::From, token("ETH"));
        form.select(SwapSide::To, token("USDC"));
        let before = form.clone();

        assert!(form.flip());
        assert_eq!(
            selected_symbols(&form),
            (Some("USDC".to_string()), Some("ETH".to_string()))
        );

        assert!(form.flip());
        assert_eq!(form, before);
    }

    #[test]
    fn reconcile_empty_set_clears_selection() {
        let mut form = SwapForm::new();
        form.select(SwapSide::From, token("ETH"));
        form.select(SwapSide::To, token("USDC"));

        form.reconcile(&[]);
        assert_eq!(selected_symbols(&form), (None, None));
    }

    #[test]
    fn reconcile_defaults_to_first_two_tradable_tokens() {
        let mut form = SwapForm::new();
        let tradable = vec![token("SWTH"), token("ETH"), token("USDC")];

        form.reconcile(&tradable);
        assert_eq!(
            selected_symbols(&form),
            (Some("SWTH".to_string()), Some("ETH".to_string()))
        );
    }

    #[test]
    fn reconcile_single_tradable_token_selects_it_twice() {
        let mut form = SwapForm::new();
        form.reconcile(&[token("ETH")]);
        assert_eq!(
            selected_symbols(&form),
            (Some("ETH".to_string()), Some("ETH".to_string()))
        );
    }

    #[test]
    fn reconcile_keeps_still_tradable_selection() {
        let mut form = SwapForm::new();
        form.select(SwapSide::From, token("USDC"));
        form.select(SwapSide::To, token("ATOM"));

        let tradable = vec![token("SWTH"), token("ETH"), token("USDC"), token("ATOM")];
        form.reconcile(&tradable);
        assert_eq!(
            selected_symbols(&form),
            (Some("USDC".to_string()), Some("ATOM".to_string()))
        );
    }

    #[test]
    fn reconcile_replaces_untradable_from_with_first() {
        let mut form = SwapForm::new();
        form.select(SwapSide::From, token("LUNA"));
        form.select(SwapSide::To, token("USDC"));

        let tradable = vec![token("SWTH"), token("ETH"), token("USDC")];
        form.reconcile(&tradable);
        assert_eq!(
            selected_symbols(&form),
            (Some("SWTH".to_string()), Some("USDC".to_string()))
        );
    }

    #[test]
    fn reconcile_moves_to_off_the_first_tradable_token() {
        // A target equal to the first tradable token is pushed to the
        // second, keeping the default pair distinct.
        let mut form = SwapForm::new();
        form.select(SwapSide::From, token("ETH"));
        form.select(SwapSide::To, token("SWTH"));

        let tradable = vec![token("SWTH"), token("ETH"), token("USDC")];
        form.reconcile(&tradable);
        assert_eq!(
            selected_symbols(&form),
            (Some("ETH".to_string()), Some("ETH".to_string()))
        );
    }

    #[test]
    fn reconcile_replaces_untradable_to_with_second() {
        let mut form = SwapForm::new();
        form.select(SwapSide::From, token("SWTH"));
        form.select(SwapSide::To, token("LUNA"));

        let tradable = vec![token("SWTH"), token("ETH"), token("USDC")];
        form.reconcile(&tradable);
        assert_eq!(
            selected_symbols(&form),
            (Some("SWTH".to_string()), Some("ETH".to_string()))
        );
    }
}
