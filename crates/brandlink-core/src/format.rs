//! Display formatting for dates and money that arrive in loosely typed JSON.
//!
//! `parse_*` normalize a raw [`Value`] into a typed value or a
//! [`FormatError`]. The `format_safe_*` functions on top are total: every
//! failure becomes a short sentinel string instead of an error.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;
use thiserror::Error;

pub const NOT_AVAILABLE: &str = "N/A";
pub const INVALID_DATE: &str = "Invalid Date";
pub const DATE_ERROR: &str = "Date Error";
pub const INVALID_AMOUNT: &str = "Invalid Amount";
pub const AMOUNT_ERROR: &str = "Amount Error";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("value is empty")]
    Empty,

    #[error("could not parse '{0}'")]
    Unparseable(String),

    #[error("unsupported value shape: {0}")]
    Unsupported(&'static str),
}

fn shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

/// Accepts RFC 3339, `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` (UTC assumed), and
/// numbers as epoch milliseconds.
///
/// # Errors
///
/// [`FormatError::Empty`] for null or blank strings,
/// [`FormatError::Unparseable`] for strings and numbers that aren't dates,
/// [`FormatError::Unsupported`] for any other JSON shape.
pub fn parse_date(value: &Value) -> Result<DateTime<Utc>, FormatError> {
    match value {
        Value::Null => Err(FormatError::Empty),
        Value::String(raw) => parse_date_str(raw),
        Value::Number(n) => {
            #[allow(clippy::cast_possible_truncation)]
            let millis = n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64));
            millis
                .and_then(DateTime::from_timestamp_millis)
                .ok_or_else(|| FormatError::Unparseable(n.to_string()))
        }
        other => Err(FormatError::Unsupported(shape(other))),
    }
}

fn parse_date_str(raw: &str) -> Result<DateTime<Utc>, FormatError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(FormatError::Empty);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }
    Err(FormatError::Unparseable(s.to_string()))
}

/// `Jan 5, 2025`
#[must_use]
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y").to_string()
}

/// `Jan 5, 2025, 3:04 PM`
#[must_use]
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y, %-I:%M %p").to_string()
}

fn date_sentinel(err: &FormatError) -> String {
    match err {
        FormatError::Empty => NOT_AVAILABLE,
        FormatError::Unparseable(_) => INVALID_DATE,
        FormatError::Unsupported(_) => DATE_ERROR,
    }
    .to_string()
}

#[must_use]
pub fn format_safe_date(value: Option<&Value>) -> String {
    let Some(value) = value else {
        return NOT_AVAILABLE.to_string();
    };
    parse_date(value).map_or_else(|e| date_sentinel(&e), |dt| format_date(&dt))
}

#[must_use]
pub fn format_safe_datetime(value: Option<&Value>) -> String {
    let Some(value) = value else {
        return NOT_AVAILABLE.to_string();
    };
    parse_date(value).map_or_else(|e| date_sentinel(&e), |dt| format_datetime(&dt))
}

// ---------------------------------------------------------------------------
// Amounts
// ---------------------------------------------------------------------------

/// Accepts numbers, numeric strings (`$` and `,` ignored), decimal.js
/// `{s, e, d}` objects, and `{"$numberDecimal": ..}` / `{"value": ..}`
/// wrappers.
///
/// # Errors
///
/// Same classes as [`parse_date`].
pub fn parse_amount(value: &Value) -> Result<Decimal, FormatError> {
    match value {
        Value::Null => Err(FormatError::Empty),
        Value::Number(n) => parse_decimal_str(&n.to_string()),
        Value::String(raw) => {
            let cleaned: String = raw
                .trim()
                .chars()
                .filter(|c| !matches!(c, '$' | ',' | ' '))
                .collect();
            if cleaned.is_empty() {
                return Err(FormatError::Empty);
            }
            parse_decimal_str(&cleaned)
        }
        Value::Object(map) => {
            if let Some(inner) = map.get("$numberDecimal").or_else(|| map.get("value")) {
                return parse_amount(inner);
            }
            if map.contains_key("d") && map.contains_key("e") {
                return parse_decimal_js(map);
            }
            Err(FormatError::Unsupported("object"))
        }
        other => Err(FormatError::Unsupported(shape(other))),
    }
}

fn parse_decimal_str(s: &str) -> Result<Decimal, FormatError> {
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|_| FormatError::Unparseable(s.to_string()))
}

/// `Decimal` holds at most 28 fractional or 29 integral digits.
const MAX_DECIMAL_JS_EXPONENT: i64 = 28;

/// decimal.js serializes as `{s: sign, e: exponent of the leading digit,
/// d: base-1e7 digit chunks}`. Every chunk after the first is zero-padded to
/// seven digits.
fn parse_decimal_js(map: &serde_json::Map<String, Value>) -> Result<Decimal, FormatError> {
    let bad = || FormatError::Unparseable(Value::Object(map.clone()).to_string());

    let exponent = map
        .get("e")
        .and_then(Value::as_i64)
        .filter(|e| (-MAX_DECIMAL_JS_EXPONENT..=MAX_DECIMAL_JS_EXPONENT).contains(e))
        .ok_or_else(bad)?;
    let sign = map.get("s").and_then(Value::as_i64).unwrap_or(1);
    let chunks = map.get("d").and_then(Value::as_array).ok_or_else(bad)?;
    if chunks.is_empty() {
        return Err(bad());
    }

    let mut digits = String::new();
    for (i, chunk) in chunks.iter().enumerate() {
        let n = chunk.as_u64().filter(|n| *n < 10_000_000).ok_or_else(bad)?;
        if i == 0 {
            digits.push_str(&n.to_string());
        } else {
            digits.push_str(&format!("{n:07}"));
        }
    }

    let mantissa = i128::from_str(&digits).map_err(|_| bad())?;
    let len = i64::try_from(digits.len()).map_err(|_| bad())?;
    // value = 0.<digits> x 10^(exponent + 1)
    let scale = exponent
        .checked_add(1)
        .and_then(|e1| len.checked_sub(e1))
        .ok_or_else(bad)?;
    let mut value = if scale >= 0 {
        let scale = u32::try_from(scale).map_err(|_| bad())?;
        Decimal::try_from_i128_with_scale(mantissa, scale).map_err(|_| bad())?
    } else {
        let mut v = Decimal::try_from_i128_with_scale(mantissa, 0).map_err(|_| bad())?;
        for _ in 0..(-scale) {
            v = v.checked_mul(Decimal::TEN).ok_or_else(bad)?;
        }
        v
    };
    if sign < 0 {
        value.set_sign_negative(true);
    }
    Ok(value.normalize())
}

/// `$1,234.56`, rounded half away from zero to cents.
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${}.{cents}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[must_use]
pub fn format_safe_budget(value: Option<&Value>) -> String {
    let Some(value) = value else {
        return NOT_AVAILABLE.to_string();
    };
    match parse_amount(value) {
        Ok(amount) => format_currency(amount),
        Err(FormatError::Empty) => NOT_AVAILABLE.to_string(),
        Err(FormatError::Unparseable(_)) => INVALID_AMOUNT.to_string(),
        Err(FormatError::Unsupported(_)) => AMOUNT_ERROR.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Counts
// ---------------------------------------------------------------------------

/// Short engagement count: `999`, `1.2K`, `3.4M`, `1.0B`. Truncates rather
/// than rounds so `999_999` stays `999.9K`.
#[must_use]
pub fn format_compact_count(n: u64) -> String {
    const TIERS: [(u64, &str); 3] = [
        (1_000_000_000, "B"),
        (1_000_000, "M"),
        (1_000, "K"),
    ];
    for (unit, suffix) in TIERS {
        if n >= unit {
            let tenths = n / (unit / 10);
            return format!("{}.{}{suffix}", tenths / 10, tenths % 10);
        }
    }
    n.to_string()
}

#[cfg(test)]
#[path = "format_test.rs"]
mod tests;
