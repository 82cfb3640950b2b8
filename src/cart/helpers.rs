//! Money Helpers
//!
//! Small, pure functions for rounding and presenting monetary amounts.
//! Keeping them separated from the data models makes them trivial to test
//! and reuse across the pricing and operation-building stages.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to the currency's minor-unit precision (2 decimal
/// places) using round-half-up, and pins the scale so the value serializes
/// as e.g. `"10.00"` rather than `"10"`.
pub fn round_to_minor_units(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Returns the display symbol for well-known currency codes.
fn currency_symbol(currency_code: &str) -> Option<&'static str> {
    match currency_code {
        "USD" | "CAD" | "AUD" | "NZD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

/// Formats an amount for customer-facing text, e.g. `$5.00`.
///
/// Currencies without a known symbol fall back to the code prefix form
/// (`"SEK 5.00"`), which is still unambiguous in a line title.
pub fn format_money(amount: Decimal, currency_code: &str) -> String {
    let rounded = round_to_minor_units(amount);
    match currency_symbol(currency_code) {
        Some(symbol) => format!("{}{}", symbol, rounded),
        None => format!("{} {}", currency_code, rounded),
    }
}
