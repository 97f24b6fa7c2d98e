//! Price rendering.
//!
//! Two consumers, two modes: the admin dashboard sums prices and needs the
//! bare number; the storefront only displays them and wants the grouped
//! rupiah string. The normalizer supports both and never picks silently.

use serde::Serialize;

/// Which rendering [`format_price`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceFormat {
    /// Numeric amount unchanged; the consumer does its own arithmetic.
    Raw,
    /// Grouped rupiah display string, e.g. `"Rp2.500.000"`.
    Idr,
}

/// A price as it appears in the output record: either the raw whole-rupiah
/// amount or its display rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PriceValue {
    Raw(i64),
    Formatted(String),
}

/// Renders a whole-rupiah amount per the id-ID locale: `Rp` prefix, `.` as
/// the thousands separator, zero fractional digits.
#[must_use]
pub fn format_idr(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}Rp{grouped}")
}

/// Applies the configured presentation mode to an amount.
#[must_use]
pub fn format_price(amount: i64, mode: PriceFormat) -> PriceValue {
    match mode {
        PriceFormat::Raw => PriceValue::Raw(amount),
        PriceFormat::Idr => PriceValue::Formatted(format_idr(amount)),
    }
}
