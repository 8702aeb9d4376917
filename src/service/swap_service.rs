//! Swap service: composes catalog, feed state, and form state.
//!
//! [`SwapService`] owns the two shared locks (feed snapshot, swap form)
//! and the single-slot confirmation message. Every read derives the
//! tradable set and the quote preview fresh from current state; nothing
//! derived is cached across requests.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::quote::{format_amount, parse_amount};
use crate::domain::{
    QuotePreview, SwapForm, SwapSide, TokenCatalog, TokenInfo, TokenSymbol, ValidationError,
};
use crate::error::GatewayError;
use crate::feed::{FeedHandle, FeedStatus, PriceFeedClient};

/// Single-slot confirmation message with a generation counter.
///
/// Scheduling a clear is last-write-wins: each submit bumps the
/// generation, and an expiring timer only clears the slot when its
/// generation still matches.
#[derive(Debug, Default)]
struct MessageSlot {
    text: Option<String>,
    generation: u64,
}

/// Combined view of the form and everything derived from it.
#[derive(Debug, Clone)]
pub struct FormSnapshot {
    /// Selected source token.
    pub from: Option<TokenInfo>,
    /// Selected target token.
    pub to: Option<TokenInfo>,
    /// Raw amount text as last entered.
    pub amount_text: String,
    /// Derived conversion preview.
    pub preview: QuotePreview,
    /// Current confirmation message, if one has not yet expired.
    pub message: Option<String>,
    /// Current feed status.
    pub feed_status: FeedStatus,
}

/// Result of a successful submit.
#[derive(Debug, Clone)]
pub struct SwapReceipt {
    /// Correlation id for this submission.
    pub receipt_id: String,
    /// Full confirmation message as displayed.
    pub message: String,
    /// Formatted input amount.
    pub amount_in: String,
    /// Source token symbol.
    pub from_symbol: TokenSymbol,
    /// Formatted estimated output amount.
    pub amount_out: String,
    /// Target token symbol.
    pub to_symbol: TokenSymbol,
    /// Submission timestamp.
    pub submitted_at: DateTime<Utc>,
}

/// Orchestration layer for the swap form.
///
/// Owns the form lock and the message slot; reads the feed through a
/// [`FeedHandle`]. Mutation methods follow the pattern: acquire lock →
/// mutate → log → return result.
#[derive(Debug)]
pub struct SwapService {
    catalog: TokenCatalog,
    client: PriceFeedClient,
    feed: FeedHandle,
    form: RwLock<SwapForm>,
    message: Arc<RwLock<MessageSlot>>,
    message_ttl: Duration,
}

impl SwapService {
    /// Creates a new `SwapService` with a fresh form.
    #[must_use]
    pub fn new(
        catalog: TokenCatalog,
        client: PriceFeedClient,
        feed: FeedHandle,
        message_ttl: Duration,
    ) -> Self {
        Self {
            catalog,
            client,
            feed,
            form: RwLock::new(SwapForm::new()),
            message: Arc::new(RwLock::new(MessageSlot::default())),
            message_ttl,
        }
    }

    /// Returns a reference to the token catalog.
    #[must_use]
    pub fn catalog(&self) -> &TokenCatalog {
        &self.catalog
    }

    /// Returns a reference to the feed handle.
    #[must_use]
    pub fn feed(&self) -> &FeedHandle {
        &self.feed
    }

    /// Spawns the one price fetch of this process lifetime.
    ///
    /// Moves the feed to `loading`, performs the fetch, applies the
    /// outcome (unless the feed handle was shut down meanwhile), and
    /// reconciles default selections against the new tradable set.
    pub fn spawn_price_refresh(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            self.feed.mark_loading().await;
            let result = self.client.fetch_once().await;
            if self.feed.apply(result).await {
                self.reconcile_defaults().await;
            }
        })
    }

    /// Marks the service as shutting down; a fetch result arriving after
    /// this call is discarded.
    pub fn shutdown(&self) {
        self.feed.shutdown();
    }

    /// Returns the catalog entries that currently have a price, in
    /// catalog order.
    pub async fn tradable_tokens(&self) -> Vec<TokenInfo> {
        let prices = self.feed.snapshot().await.prices;
        self.catalog.tradable(&prices)
    }

    /// Returns the current form state with its derived preview.
    pub async fn form_snapshot(&self) -> FormSnapshot {
        let feed_state = self.feed.snapshot().await;
        let form = self.form.read().await.clone();
        let preview = QuotePreview::compute(
            &feed_state.prices,
            form.from(),
            form.to(),
            form.amount_text(),
        );
        let message = self.message.read().await.text.clone();
        FormSnapshot {
            from: form.from().cloned(),
            to: form.to().cloned(),
            amount_text: form.amount_text().to_string(),
            preview,
            message,
            feed_status: feed_state.status,
        }
    }

    /// Assigns a token to one side of the form.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::UnknownToken`] when the symbol is not in
    /// the catalog, or [`GatewayError::InvalidRequest`] when it has no
    /// price quote.
    pub async fn select_token(&self, side: SwapSide, symbol: &str) -> Result<(), GatewayError> {
        let symbol = TokenSymbol::new(symbol);
        let Some(token) = self.catalog.get(&symbol) else {
            return Err(GatewayError::UnknownToken(symbol.to_string()));
        };
        let prices = self.feed.snapshot().await.prices;
        if !prices.contains(&symbol) {
            return Err(GatewayError::InvalidRequest(format!(
                "token {symbol} has no price quote"
            )));
        }
        let token = token.clone();
        let mut form = self.form.write().await;
        form.select(side, token);
        tracing::debug!(side = ?side, %symbol, "token selected");
        Ok(())
    }

    /// Stores the raw amount text verbatim. Intermediate input like
    /// `"1."` is accepted; parsing happens on read.
    pub async fn set_amount(&self, text: &str) {
        let mut form = self.form.write().await;
        form.set_amount(text);
    }

    /// Swaps the two sides of the form. Returns `false` when either side
    /// is unset (no-op).
    pub async fn flip(&self) -> bool {
        let mut form = self.form.write().await;
        let flipped = form.flip();
        if flipped {
            tracing::debug!("swap direction flipped");
        }
        flipped
    }

    /// Submits the swap form.
    ///
    /// On success the confirmation message is stored in the single
    /// message slot and scheduled to clear after the configured TTL; a
    /// later submit supersedes any pending clear. A rejected submit
    /// changes nothing, including the current message.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::PricesNotReady`] while the feed is not
    /// ready, or [`GatewayError::Validation`] when one of the ordered
    /// validation checks fails.
    pub async fn submit(&self) -> Result<SwapReceipt, GatewayError> {
        let feed_state = self.feed.snapshot().await;
        if feed_state.status != FeedStatus::Ready {
            return Err(GatewayError::PricesNotReady {
                status: feed_state.status.as_str(),
            });
        }

        let form = self.form.read().await.clone();
        let preview = QuotePreview::compute(
            &feed_state.prices,
            form.from(),
            form.to(),
            form.amount_text(),
        );
        if let Some(err) = preview.validation_error {
            return Err(GatewayError::Validation(err));
        }
        // validate() has already rejected an unset side.
        let (Some(from), Some(to)) = (form.from(), form.to()) else {
            return Err(GatewayError::Validation(ValidationError::MissingSelection));
        };

        let amount_in = format_amount(parse_amount(form.amount_text()));
        let amount_out = format_amount(preview.receive_amount);
        let message = format!(
            "Swapped {amount_in} {} for approximately {amount_out} {}.",
            from.symbol, to.symbol
        );

        let generation = {
            let mut slot = self.message.write().await;
            slot.text = Some(message.clone());
            slot.generation = slot.generation.wrapping_add(1);
            slot.generation
        };
        let slot = Arc::clone(&self.message);
        let ttl = self.message_ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut slot = slot.write().await;
            // A later submit superseded this timer.
            if slot.generation == generation {
                slot.text = None;
            }
        });

        let receipt = SwapReceipt {
            receipt_id: uuid::Uuid::new_v4().to_string(),
            message,
            amount_in,
            from_symbol: from.symbol.clone(),
            amount_out,
            to_symbol: to.symbol.clone(),
            submitted_at: Utc::now(),
        };
        tracing::info!(
            receipt_id = %receipt.receipt_id,
            from = %receipt.from_symbol,
            to = %receipt.to_symbol,
            "swap submitted"
        );
        Ok(receipt)
    }

    /// Returns the current confirmation message, if any.
    pub async fn confirmation_message(&self) -> Option<String> {
        self.message.read().await.text.clone()
    }

    /// Computes a stateless quote for an explicit pair and amount,
    /// bypassing the form.
    ///
    /// The preview is returned even when it carries a validation error;
    /// only symbols missing from the catalog are an error.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::UnknownToken`] when either symbol is not
    /// in the catalog.
    pub async fn quote(
        &self,
        from: &str,
        to: &str,
        amount_text: &str,
    ) -> Result<(TokenInfo, TokenInfo, QuotePreview), GatewayError> {
        let from_symbol = TokenSymbol::new(from);
        let to_symbol = TokenSymbol::new(to);
        let Some(from) = self.catalog.get(&from_symbol).cloned() else {
            return Err(GatewayError::UnknownToken(from_symbol.to_string()));
        };
        let Some(to) = self.catalog.get(&to_symbol).cloned() else {
            return Err(GatewayError::UnknownToken(to_symbol.to_string()));
        };
        let prices = self.feed.snapshot().await.prices;
        let preview = QuotePreview::compute(&prices, Some(&from), Some(&to), amount_text);
        Ok((from, to, preview))
    }

    /// Re-resolves the form selection against the current tradable set.
    ///
    /// Called after every applied feed result; the fallback chain lives
    /// in [`SwapForm::reconcile`].
    pub async fn reconcile_defaults(&self) {
        let prices = self.feed.snapshot().await.prices;
        let tradable = self.catalog.tradable(&prices);
        let mut form = self.form.write().await;
        form.reconcile(&tradable);
        tracing::info!(
            tradable = tradable.len(),
            from = form.from().map_or("-", |t| t.symbol.as_str()),
            to = form.to().map_or("-", |t| t.symbol.as_str()),
            "default selection reconciled"
        );
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::PriceEntry;
    use crate::domain::PriceMap;

    fn make_service(message_ttl: Duration) -> Arc<SwapService> {
        let client = PriceFeedClient::new("http://127.0.0.1:1/prices.json", Duration::from_secs(1));
        let Ok(client) = client else {
            panic!("client construction failed");
        };
        Arc::new(SwapService::new(
            TokenCatalog::default(),
            client,
            FeedHandle::new(),
            message_ttl,
        ))
    }

    fn prices(pairs: &[(&str, f64)]) -> PriceMap {
        let entries = pairs
            .iter()
            .map(|(currency, price)| PriceEntry {
                currency: Some((*currency).to_string()),
                price: Some(*price),
            })
            .collect();
        PriceMap::from_entries(entries)
    }

    async fn make_ready(service: &Arc<SwapService>, pairs: &[(&str, f64)]) {
        service.feed().mark_loading().await;
        assert!(service.feed().apply(Ok(prices(pairs))).await);
        service.reconcile_defaults().await;
    }

    #[tokio::test]
    async fn idle_feed_yields_empty_selection_and_missing_selection_error() {
        let service = make_service(Duration::from_millis(100));
        assert!(service.tradable_tokens().await.is_empty());

        let snapshot = service.form_snapshot().await;
        assert!(snapshot.from.is_none());
        assert!(snapshot.to.is_none());
        assert_eq!(snapshot.feed_status, FeedStatus::Idle);
        assert_eq!(
            snapshot.preview.validation_error,
            Some(ValidationError::MissingSelection)
        );
    }

    #[tokio::test]
    async fn ready_feed_defaults_to_first_two_tradable_tokens() {
        let service = make_service(Duration::from_millis(100));
        make_ready(&service, &[("ETH", 2000.0), ("USDC", 1.0)]).await;

        let snapshot = service.form_snapshot().await;
        assert_eq!(
            snapshot.from.map(|t| t.symbol.to_string()),
            Some("ETH".to_string())
        );
        assert_eq!(
            snapshot.to.map(|t| t.symbol.to_string()),
            Some("USDC".to_string())
        );
        assert_eq!(snapshot.amount_text, "1.5");
        assert!((snapshot.preview.rate - 2000.0).abs() < f64::EPSILON);
        assert!((snapshot.preview.receive_amount - 3000.0).abs() < f64::EPSILON);
        assert_eq!(snapshot.preview.validation_error, None);
    }

    #[tokio::test]
    async fn submit_is_rejected_while_feed_not_ready() {
        let service = make_service(Duration::from_millis(100));
        let result = service.submit().await;
        let Err(GatewayError::PricesNotReady { status }) = result else {
            panic!("expected PricesNotReady");
        };
        assert_eq!(status, "idle");
        assert!(service.confirmation_message().await.is_none());
    }

    #[tokio::test]
    async fn submit_happy_path_formats_confirmation() {
        let service = make_service(Duration::from_millis(200));
        make_ready(&service, &[("ETH", 2000.0), ("USDC", 1.0)]).await;

        let receipt = service.submit().await;
        let Ok(receipt) = receipt else {
            panic!("submit failed");
        };
        assert_eq!(
            receipt.message,
            "Swapped 1.5 ETH for approximately 3,000 USDC."
        );
        assert_eq!(receipt.amount_in, "1.5");
        assert_eq!(receipt.amount_out, "3,000");
        assert_eq!(
            service.confirmation_message().await.as_deref(),
            Some("Swapped 1.5 ETH for approximately 3,000 USDC.")
        );
    }

    #[tokio::test]
    async fn rejected_submit_leaves_message_unchanged() {
        let service = make_service(Duration::from_secs(5));
        make_ready(&service, &[("ETH", 2000.0), ("USDC", 1.0)]).await;

        let first = service.submit().await;
        assert!(first.is_ok());
        let message_before = service.confirmation_message().await;
        assert!(message_before.is_some());

        // Same token on both sides fails validation.
        let selected = service.select_token(SwapSide::To, "ETH").await;
        assert!(selected.is_ok());
        let result = service.submit().await;
        let Err(GatewayError::Validation(ValidationError::SameToken)) = result else {
            panic!("expected SameToken validation error");
        };
        assert_eq!(service.confirmation_message().await, message_before);
    }

    #[tokio::test]
    async fn negative_amount_blocks_submit_with_zero_receive() {
        let service = make_service(Duration::from_millis(100));
        make_ready(&service, &[("ETH", 2000.0), ("USDC", 1.0)]).await;

        service.set_amount("-3").await;
        let snapshot = service.form_snapshot().await;
        assert_eq!(snapshot.preview.receive_amount, 0.0);
        assert_eq!(
            snapshot.preview.validation_error,
            Some(ValidationError::NonPositiveAmount)
        );

        let result = service.submit().await;
        let Err(GatewayError::Validation(ValidationError::NonPositiveAmount)) = result else {
            panic!("expected NonPositiveAmount validation error");
        };
        assert!(service.confirmation_message().await.is_none());
    }

    #[tokio::test]
    async fn message_clears_after_ttl() {
        let service = make_service(Duration::from_millis(50));
        make_ready(&service, &[("ETH", 2000.0), ("USDC", 1.0)]).await;

        let result = service.submit().await;
        assert!(result.is_ok());
        assert!(service.confirmation_message().await.is_some());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(service.confirmation_message().await.is_none());
    }

    #[tokio::test]
    async fn resubmit_supersedes_pending_clear() {
        let service = make_service(Duration::from_millis(200));
        make_ready(&service, &[("ETH", 2000.0), ("USDC", 1.0)]).await;

        assert!(service.submit().await.is_ok());
        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(service.submit().await.is_ok());

        // First timer has expired by now but was superseded.
        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(service.confirmation_message().await.is_some());

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(service.confirmation_message().await.is_none());
    }

    #[tokio::test]
    async fn flip_swaps_sides_and_is_noop_without_selection() {
        let service = make_service(Duration::from_millis(100));
        assert!(!service.flip().await);

        make_ready(&service, &[("ETH", 2000.0), ("USDC", 1.0)]).await;
        assert!(service.flip().await);

        let snapshot = service.form_snapshot().await;
        assert_eq!(
            snapshot.from.map(|t| t.symbol.to_string()),
            Some("USDC".to_string())
        );
        assert_eq!(
            snapshot.to.map(|t| t.symbol.to_string()),
            Some("ETH".to_string())
        );
    }

    #[tokio::test]
    async fn select_unknown_token_is_rejected() {
        let service = make_service(Duration::from_millis(100));
        make_ready(&service, &[("ETH", 2000.0), ("USDC", 1.0)]).await;

        let result = service.select_token(SwapSide::From, "DOGE").await;
        let Err(GatewayError::UnknownToken(symbol)) = result else {
            panic!("expected UnknownToken");
        };
        assert_eq!(symbol, "DOGE");
    }

    #[tokio::test]
    async fn select_catalog_token_without_price_is_rejected() {
        let service = make_service(Duration::from_millis(100));
        make_ready(&service, &[("ETH", 2000.0), ("USDC", 1.0)]).await;

        // BTC is in the catalog but has no quote in this feed payload.
        let result = service.select_token(SwapSide::From, "BTC").await;
        let Err(GatewayError::InvalidRequest(_)) = result else {
            panic!("expected InvalidRequest");
        };
    }

    #[tokio::test]
    async fn stateless_quote_bypasses_form() {
        let service = make_service(Duration::from_millis(100));
        make_ready(&service, &[("ETH", 2000.0), ("USDC", 1.0)]).await;

        let result = service.quote("usdc", "eth", "4000").await;
        let Ok((from, to, preview)) = result else {
            panic!("quote failed");
        };
        assert_eq!(from.symbol.as_str(), "USDC");
        assert_eq!(to.symbol.as_str(), "ETH");
        assert!((preview.rate - 0.0005).abs() < 1e-12);
        assert!((preview.receive_amount - 2.0).abs() < 1e-9);
        assert_eq!(preview.validation_error, None);

        let missing = service.quote("ETH", "DOGE", "1").await;
        assert!(matches!(missing, Err(GatewayError::UnknownToken(_))));
    }

    #[tokio::test]
    async fn failed_fetch_leaves_empty_tradable_set() {
        let service = make_service(Duration::from_millis(100));
        let refresh = Arc::clone(&service).spawn_price_refresh();
        // The endpoint points at a closed local port, so the fetch fails.
        let _ = refresh.await;

        assert_eq!(service.feed().status().await, FeedStatus::Error);
        assert!(service.tradable_tokens().await.is_empty());

        let snapshot = service.form_snapshot().await;
        assert!(snapshot.from.is_none());
        assert_eq!(
            snapshot.preview.validation_error,
            Some(ValidationError::MissingSelection)
        );
    }
}
