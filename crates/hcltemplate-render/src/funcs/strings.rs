//! String functions: `upper`, `lower`, `strlen`, `substr`.

use hcl::eval::FuncArgs;
use hcl::{Number, Value};

use crate::value;

pub(crate) fn upper(args: FuncArgs) -> Result<Value, String> {
    upper_impl(&args)
}

pub(crate) fn lower(args: FuncArgs) -> Result<Value, String> {
    lower_impl(&args)
}

pub(crate) fn strlen(args: FuncArgs) -> Result<Value, String> {
    strlen_impl(&args)
}

pub(crate) fn substr(args: FuncArgs) -> Result<Value, String> {
    substr_impl(&args)
}

fn upper_impl(args: &[Value]) -> Result<Value, String> {
    Ok(Value::String(value::to_string(&args[0])?.to_uppercase()))
}

fn lower_impl(args: &[Value]) -> Result<Value, String> {
    Ok(Value::String(value::to_string(&args[0])?.to_lowercase()))
}

fn strlen_impl(args: &[Value]) -> Result<Value, String> {
    let s = value::to_string(&args[0])?;
    Ok(Value::Number(Number::from(s.chars().count() as u64)))
}

/// Character-based substring. A negative offset counts from the end of
/// the string; a length of `-1` means "to the end".
fn substr_impl(args: &[Value]) -> Result<Value, String> {
    let s = value::to_string(&args[0])?;
    let offset = value::to_i64(&args[1])?;
    let length = value::to_i64(&args[2])?;
    if length < -1 {
        return Err("length should not be negative".to_string());
    }

    let chars: Vec<char> = s.chars().collect();
    let total = chars.len() as i64;
    let mut offset = offset;
    if offset < 0 {
        offset += total;
    }
    let start = offset.clamp(0, total) as usize;
    let end = if length == -1 {
        chars.len()
    } else {
        start.saturating_add(length as usize).min(chars.len())
    };

    Ok(Value::String(chars[start..end].iter().collect()))
}
