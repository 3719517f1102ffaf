//! Field readers for untyped JSON employee records.
//!
//! Every reader names the offending field in its
//! [`EngineError::InvalidInput`] so callers can point at it.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::{EngineError, EngineResult};

/// Largest accepted hourly rate, bonus or deduction (one trillion).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Fails with `InvalidInput` when `value` is below zero or above [`MAX_AMOUNT`].
pub(crate) fn ensure_amount(field: &str, value: Decimal) -> EngineResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(EngineError::invalid_input(field, "must not be negative"));
    }
    if value > MAX_AMOUNT {
        return Err(EngineError::out_of_range(field));
    }
    Ok(())
}

/// Returns the field's value; missing and `null` both count as absent.
pub(crate) fn optional<'a>(record: &'a Value, name: &str) -> Option<&'a Value> {
    match record.get(name) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value),
    }
}

pub(crate) fn required<'a>(record: &'a Value, name: &str) -> EngineResult<&'a Value> {
    optional(record, name).ok_or_else(|| EngineError::invalid_input(name, "is missing"))
}

/// Fails unless `record` is a JSON object.
pub(crate) fn ensure_object(record: &Value) -> EngineResult<()> {
    if record.is_object() {
        Ok(())
    } else {
        Err(EngineError::invalid_input("body", "must be a JSON object"))
    }
}

/// Reads a money amount from a JSON number or numeric string.
pub(crate) fn decimal_value(name: &str, value: &Value) -> EngineResult<Decimal> {
    let parsed = match value {
        Value::Number(n) => Decimal::from_str(&n.to_string())
            .or_else(|_| Decimal::from_scientific(&n.to_string())),
        Value::String(s) => Decimal::from_str(s.trim()),
        _ => return Err(EngineError::invalid_input(name, "is not a number")),
    };
    let value = parsed.map_err(|_| EngineError::invalid_input(name, "is not a number"))?;
    ensure_amount(name, value)?;
    Ok(value)
}

/// Reads a whole, non-negative number of hours.
pub(crate) fn hours_value(name: &str, value: &Value) -> EngineResult<u32> {
    let Value::Number(n) = value else {
        return Err(EngineError::invalid_input(name, "is not a number"));
    };
    if let Some(hours) = n.as_u64() {
        return u32::try_from(hours).map_err(|_| EngineError::out_of_range(name));
    }
    if n.as_i64().is_some_and(|h| h < 0) || n.as_f64().is_some_and(|h| h < 0.0) {
        return Err(EngineError::invalid_input(name, "must not be negative"));
    }
    Err(EngineError::invalid_input(name, "must be a whole number of hours"))
}

pub(crate) fn text_value(name: &str, value: &Value) -> EngineResult<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| EngineError::invalid_input(name, "is not a string"))
}

pub(crate) fn optional_decimal(record: &Value, name: &str) -> EngineResult<Option<Decimal>> {
    optional(record, name)
        .map(|value| decimal_value(name, value))
        .transpose()
}

pub(crate) fn optional_hours(record: &Value, name: &str) -> EngineResult<Option<u32>> {
    optional(record, name)
        .map(|value| hours_value(name, value))
        .transpose()
}

pub(crate) fn optional_text(record: &Value, name: &str) -> EngineResult<Option<String>> {
    optional(record, name)
        .map(|value| text_value(name, value))
        .transpose()
}
