//! Currency rounding and display.
//!
//! Every monetary figure shown to a user passes through [`format_currency`].
//! Aggregation elsewhere in the crate works on raw `f64` values; rounding
//! only happens here, at the display boundary.

use crate::error::{Error, Result};

/// Symbol prefixed to every formatted amount.
pub const CURRENCY_SYMBOL: &str = "£";

/// Round `value` half-up to two decimal places.
///
/// `f64::EPSILON` is added before scaling so that amounts sitting on a
/// `.xx5` boundary are not pulled below it by binary representation error.
pub fn round_currency(value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::NonFiniteAmount { value });
    }

    let scaled = (value + f64::EPSILON) * 100.0;
    if !scaled.is_finite() {
        // Too large to carry a fractional part anyway.
        return Ok(value);
    }

    let rounded = (scaled + 0.5).floor() / 100.0;
    // Collapse -0.0 so it never renders with a sign.
    Ok(if rounded == 0.0 { 0.0 } else { rounded })
}

/// Format `value` as `£` followed by the amount with exactly two decimals.
///
/// # Examples
/// ```
/// use stargate_lib::format_currency;
///
/// assert_eq!(format_currency(10.0).unwrap(), "£10.00");
/// assert_eq!(format_currency(10.5).unwrap(), "£10.50");
/// assert_eq!(format_currency(10.555).unwrap(), "£10.56");
/// ```
///
/// # Errors
/// Returns [`Error::NonFiniteAmount`] for `NaN` and infinities.
pub fn format_currency(value: f64) -> Result<String> {
    format_currency_with_symbol(value, CURRENCY_SYMBOL)
}

/// Same rounding and padding as [`format_currency`] with a caller-chosen symbol.
pub fn format_currency_with_symbol(value: f64, symbol: &str) -> Result<String> {
    let rounded = round_currency(value)?;
    Ok(format!("{symbol}{rounded:.2}"))
}

/// Read an amount back out of a string produced by [`format_currency`].
///
/// The leading `£` is optional; surrounding whitespace is ignored.
pub fn parse_currency(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let amount = trimmed.strip_prefix(CURRENCY_SYMBOL).unwrap_or(trimmed);

    amount
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| Error::InvalidCurrencyText {
            text: text.to_string(),
        })
}
