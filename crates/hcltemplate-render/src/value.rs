//! Value conversion rules shared by the function registry and the
//! pipeline.
//!
//! These mirror the standard conversion rules of the template language's
//! type system: numbers render in canonical decimal form, booleans as
//! `true`/`false`, numeric strings convert to numbers, and lists/objects
//! never convert to primitives.

use hcl::{Number, Value};

/// Name of a value's type, used in error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

/// Canonical decimal rendering: integers without a fractional part,
/// floats in their shortest round-trip form.
pub fn format_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else if let Some(f) = n.as_f64() {
        f.to_string()
    } else {
        n.to_string()
    }
}

/// Converts a value to its string form.
///
/// Strings pass through, numbers and booleans render canonically; null,
/// lists, and objects do not convert.
pub fn to_string(value: &Value) -> Result<String, String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(format_number(n)),
        other => Err(format!("cannot convert {} to string", type_name(other))),
    }
}

/// Converts a value to a number. Numeric strings convert; everything else
/// is an error.
pub fn to_number(value: &Value) -> Result<Number, String> {
    match value {
        Value::Number(n) => Ok(n.clone()),
        Value::String(s) => parse_number(s.trim()),
        other => Err(format!("cannot convert {} to number", type_name(other))),
    }
}

/// Converts a value to a whole number, rejecting fractional values.
pub fn to_i64(value: &Value) -> Result<i64, String> {
    let n = to_number(value)?;
    if let Some(i) = n.as_i64() {
        return Ok(i);
    }
    if let Some(f) = n.as_f64() {
        if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
            return Ok(f as i64);
        }
    }
    Err(format!("{} is not a whole number in range", format_number(&n)))
}

/// Converts a value to a boolean. Only `true`/`false` strings convert.
pub fn to_bool(value: &Value) -> Result<bool, String> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) => match s.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(format!("cannot convert {other:?} to bool")),
        },
        other => Err(format!("cannot convert {} to bool", type_name(other))),
    }
}

fn parse_number(s: &str) -> Result<Number, String> {
    if let Ok(i) = s.parse::<i64>() {
        return Ok(Number::from(i));
    }
    if let Ok(u) = s.parse::<u64>() {
        return Ok(Number::from(u));
    }
    if let Ok(f) = s.parse::<f64>() {
        if f.is_finite() {
            if let Some(n) = Number::from_f64(f) {
                return Ok(n);
            }
        }
    }
    Err(format!("cannot convert {s:?} to number"))
}
