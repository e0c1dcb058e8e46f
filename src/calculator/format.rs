//! Result formatting.
//!
//! Numbers are shown as plain decimals: never in scientific notation, rounded
//! to a fixed number of fractional digits, without trailing zeros.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Default number of fractional digits kept in a displayed result.
pub const DEFAULT_PRECISION: u32 = 10;

/// Largest precision accepted by [`format_result`].
pub const MAX_PRECISION: u32 = 20;

/// Most fractional digits a `Decimal` can hold.
const DECIMAL_MAX_SCALE: usize = 28;

/// Beyond this magnitude every `f64` is a whole number and out of `Decimal`
/// range, so the shortest representation is printed as is.
const WHOLE_NUMBER_THRESHOLD: f64 = 1e28;

/// Format a result for display.
///
/// Returns `None` for NaN and infinities. Rounding is half-up (away from
/// zero) on the shortest decimal representation of `value`, so
/// `0.1 + 0.2` shows as `0.3`.
pub fn format_result(value: f64, precision: u32) -> Option<String> {
    if !value.is_finite() {
        return None;
    }

    if value.abs() >= WHOLE_NUMBER_THRESHOLD {
        return Some(format!("{value}"));
    }

    let shortest = truncate_fraction(&value.to_string(), DECIMAL_MAX_SCALE);
    let decimal = Decimal::from_str(&shortest).ok()?;

    let rounded = decimal
        .round_dp_with_strategy(
            precision.min(MAX_PRECISION),
            RoundingStrategy::MidpointAwayFromZero,
        )
        .normalize();

    Some(rounded.to_string())
}

/// Cut the fractional part of a plain decimal string to `max_digits`.
///
/// Dropping digits past the rounding position never flips a half-up
/// decision, so this is safe before rounding to fewer digits.
fn truncate_fraction(plain: &str, max_digits: usize) -> String {
    match plain.find('.') {
        Some(dot) if plain.len() - dot - 1 > max_digits => {
            plain[..dot + 1 + max_digits].to_string()
        }
        _ => plain.to_string(),
    }
}
