//! Swap quote computation and validation.
//!
//! Pure, total functions over the price map, the selected token pair, and
//! the raw amount text. Nothing here performs I/O or panics: unavailable
//! data folds to `0.0` and callers treat a zero rate as "no quote".

use serde::Serialize;

use super::TokenSymbol;
use super::price_map::PriceMap;
use super::token::TokenInfo;

/// Why a swap cannot be submitted.
///
/// Variants are ordered by precedence: the first failing check wins, so
/// the user always sees the most fundamental problem first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// One or both sides of the pair are unset.
    #[error("Choose two assets to start swapping.")]
    MissingSelection,

    /// Both sides reference the same token.
    #[error("Pick two different tokens.")]
    SameToken,

    /// The amount text does not parse to a positive number.
    #[error("Enter an amount greater than zero.")]
    NonPositiveAmount,

    /// No exchange rate is available for the pair.
    #[error("Exchange rate unavailable for the selected pair.")]
    RateUnavailable,
}

impl Serialize for ValidationError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Returns `price(from) / price(to)` when both prices are known and
/// positive, else `0.0`.
///
/// Division by zero is impossible by construction; callers must treat a
/// zero rate as "unavailable", never as a real quote.
#[must_use]
pub fn compute_rate(prices: &PriceMap, from: &TokenSymbol, to: &TokenSymbol) -> f64 {
    match (prices.get(from), prices.get(to)) {
        (Some(from_price), Some(to_price)) if from_price > 0.0 && to_price > 0.0 => {
            from_price / to_price
        }
        _ => 0.0,
    }
}

/// Parses user-entered amount text.
///
/// Returns `0.0` unless the trimmed text parses to a finite, strictly
/// positive number. Intermediate input like `"1."` parses as `1.0`.
#[must_use]
pub fn parse_amount(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

/// Returns `parsed_amount * rate`, or `0.0` when the amount does not pass
/// the positive-number gate.
#[must_use]
pub fn compute_receive_amount(amount_text: &str, rate: f64) -> f64 {
    parse_amount(amount_text) * rate
}

/// Validates a prospective swap, in precedence order.
///
/// Returns `None` when the swap is submittable.
#[must_use]
pub fn validate(
    from: Option<&TokenInfo>,
    to: Option<&TokenInfo>,
    amount_text: &str,
    rate: f64,
) -> Option<ValidationError> {
    let (Some(from), Some(to)) = (from, to) else {
        return Some(ValidationError::MissingSelection);
    };
    if from.symbol == to.symbol {
        return Some(ValidationError::SameToken);
    }
    if parse_amount(amount_text) <= 0.0 {
        return Some(ValidationError::NonPositiveAmount);
    }
    if rate <= 0.0 {
        return Some(ValidationError::RateUnavailable);
    }
    None
}

/// Everything the view needs about the current conversion, derived fresh
/// on every read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuotePreview {
    /// Units of the target token per unit of the source token. `0.0` when
    /// unavailable.
    pub rate: f64,
    /// Units of the source token per unit of the target token. `0.0` when
    /// the forward rate is unavailable.
    pub inverse_rate: f64,
    /// Estimated amount received. `0.0` unless amount and rate are both
    /// positive.
    pub receive_amount: f64,
    /// USD value of the entered amount, `0.0` when the source price is
    /// unknown.
    pub from_value_usd: f64,
    /// USD value of the received amount, `0.0` when the target price is
    /// unknown.
    pub to_value_usd: f64,
    /// First failing validation check, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_error: Option<ValidationError>,
}

impl QuotePreview {
    /// Computes the full preview for the given selection and amount text.
    #[must_use]
    pub fn compute(
        prices: &PriceMap,
        from: Option<&TokenInfo>,
        to: Option<&TokenInfo>,
        amount_text: &str,
    ) -> Self {
        let rate = match (from, to) {
            (Some(from), Some(to)) => compute_rate(prices, &from.symbol, &to.symbol),
            _ => 0.0,
        };
        let inverse_rate = if rate > 0.0 { 1.0 / rate } else { 0.0 };
        let amount = parse_amount(amount_text);
        let receive_amount = compute_receive_amount(amount_text, rate);
        let from_value_usd = from
            .and_then(|t| prices.get(&t.symbol))
            .map_or(0.0, |price| amount * price);
        let to_value_usd = to
            .and_then(|t| prices.get(&t.symbol))
            .map_or(0.0, |price| receive_amount * price);
        Self {
            rate,
            inverse_rate,
            receive_amount,
            from_value_usd,
            to_value_usd,
            validation_error: validate(from, to, amount_text, rate),
        }
    }
}

/// Formats a display amount: thousands separators, at most 4 fraction
/// digits for values of one or more, at most 8 below one, trailing zeros
/// trimmed.
#[must_use]
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let max_fraction_digits: usize = if value >= 1.0 { 4 } else { 8 };
    let fixed = format!("{value:.max_fraction_digits$}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };
    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 1);
    for (index, chunk) in digits.rchunks(3).rev().enumerate() {
        if index > 0 {
            grouped.push(',');
        }
        grouped.extend(chunk);
    }
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
