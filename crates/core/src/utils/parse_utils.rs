//! Liberal coercion of user-typed scalars.
//!
//! Inventory records and price fields are typed by hand into an editor that
//! guarantees no schema, so every numeric conversion here degrades to a
//! fallback instead of failing. Strings accept a comma as the decimal
//! separator ("72,5" -> 72.5).

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

/// Parses a user-typed numeric string, tolerating a comma decimal separator.
pub fn decimal_from_str(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim().replace(',', ".").as_str()).ok()
}

/// Coerces a scalar JSON value into a `Decimal`. `None` for null, missing,
/// unparseable, and non-scalar values.
pub fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        Value::String(s) => decimal_from_str(s),
        _ => None,
    }
}

/// Like [`decimal_from_value`], but over an optional value and defaulting to
/// zero. This is the coercion applied to every raw price field.
pub fn decimal_or_zero(value: Option<&Value>) -> Decimal {
    value.and_then(decimal_from_value).unwrap_or(Decimal::ZERO)
}

/// Coerces a scalar JSON value into a non-negative whole count (seat counts
/// and the like). Fractional input truncates; negative or unparseable input
/// is absent.
pub fn count_from_value(value: &Value) -> Option<u32> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().replace(',', ".").parse::<f64>().ok()?,
        _ => return None,
    };
    if n.is_finite() && n >= 0.0 && n <= f64::from(u32::MAX) {
        Some(n as u32)
    } else {
        None
    }
}

/// Stringifies a scalar JSON value the way the persisted records do. `None`
/// for null, missing, arrays, and objects; an empty string is kept as-is.
pub fn scalar_to_string(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    }
}
