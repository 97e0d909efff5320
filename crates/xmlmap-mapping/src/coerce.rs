//! Text coercion for primitive kinds

use crate::config::NumericPolicy;
use crate::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;
use xmlmap_ir::Value;
use xmlmap_schema::PrimitiveKind;

/// Parse a boolean literal: exactly `0`/`false` or `1`/`true`
pub fn to_boolean(text: &str) -> Result<bool> {
    match text {
        "0" | "false" => Ok(false),
        "1" | "true" => Ok(true),
        _ => Err(Error::InvalidBooleanLiteral {
            text: text.to_string(),
        }),
    }
}

pub fn to_integer(text: &str, policy: NumericPolicy) -> Result<i64> {
    let trimmed = text.trim();
    match policy {
        NumericPolicy::Strict => trimmed
            .parse::<i64>()
            .map_err(|_| invalid(PrimitiveKind::Integer, text)),
        NumericPolicy::Lenient => {
            let prefix = numeric_prefix(trimmed);
            if let Ok(value) = prefix.parse::<i64>() {
                return Ok(value);
            }
            // saturating truncation toward zero
            #[allow(clippy::cast_possible_truncation)]
            let truncated = prefix.parse::<f64>().map_or(0, |value| value as i64);
            Ok(truncated)
        }
    }
}

pub fn to_float(text: &str, policy: NumericPolicy) -> Result<f64> {
    let trimmed = text.trim();
    match policy {
        NumericPolicy::Strict => {
            if !is_decimal_literal(trimmed) {
                return Err(invalid(PrimitiveKind::Float, text));
            }
            trimmed.parse::<f64>().map_err(|_| invalid(PrimitiveKind::Float, text))
        }
        NumericPolicy::Lenient => Ok(numeric_prefix(trimmed).parse::<f64>().unwrap_or(0.0)),
    }
}

/// Coerce text into the value of a primitive kind
pub fn to_primitive(text: &str, kind: PrimitiveKind, policy: NumericPolicy) -> Result<Value> {
    match kind {
        PrimitiveKind::String => Ok(Value::String(text.to_string())),
        PrimitiveKind::Integer => to_integer(text, policy).map(Value::Integer),
        PrimitiveKind::Float => to_float(text, policy).map(Value::Float),
        PrimitiveKind::Boolean => to_boolean(text).map(Value::Boolean),
    }
}

fn invalid(kind: PrimitiveKind, text: &str) -> Error {
    Error::InvalidNumber {
        kind,
        text: text.to_string(),
    }
}

/// Whole-string decimal literal check; rejects `inf`, `NaN` and friends
fn is_decimal_literal(text: &str) -> bool {
    !text.is_empty() && numeric_prefix(text).len() == text.len()
}

/// Leading `[+-]digits[.digits][e[+-]digits]`; the exponent is optional
static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
        .expect("numeric prefix pattern compiles")
});

/// Longest leading slice shaped like a decimal literal, or `""`
fn numeric_prefix(text: &str) -> &str {
    NUMERIC_PREFIX.find(text).map_or("", |m| m.as_str())
}
