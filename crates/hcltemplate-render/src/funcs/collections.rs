//! Collection functions: `length`, `reverse`, `concat`, `coalesce`.

use hcl::eval::FuncArgs;
use hcl::{Number, Value};

use crate::value;

pub(crate) fn length(args: FuncArgs) -> Result<Value, String> {
    length_impl(&args)
}

pub(crate) fn reverse(args: FuncArgs) -> Result<Value, String> {
    reverse_impl(&args)
}

pub(crate) fn concat(args: FuncArgs) -> Result<Value, String> {
    concat_impl(&args)
}

pub(crate) fn coalesce(args: FuncArgs) -> Result<Value, String> {
    coalesce_impl(&args)
}

fn length_impl(args: &[Value]) -> Result<Value, String> {
    match &args[0] {
        Value::Array(items) => Ok(Value::Number(Number::from(items.len() as u64))),
        Value::Object(fields) => Ok(Value::Number(Number::from(fields.len() as u64))),
        other => Err(format!(
            "cannot take the length of {}; a list or object is required (use strlen for strings)",
            value::type_name(other)
        )),
    }
}

fn reverse_impl(args: &[Value]) -> Result<Value, String> {
    match &args[0] {
        Value::Array(items) => Ok(Value::Array(items.iter().rev().cloned().collect())),
        other => Err(format!(
            "cannot reverse {}; a list is required",
            value::type_name(other)
        )),
    }
}

fn concat_impl(args: &[Value]) -> Result<Value, String> {
    let mut out = Vec::new();
    for (i, arg) in args.iter().enumerate() {
        match arg {
            Value::Array(items) => out.extend(items.iter().cloned()),
            other => {
                return Err(format!(
                    "argument {} is {}, but all arguments must be lists",
                    i + 1,
                    value::type_name(other)
                ))
            }
        }
    }
    Ok(Value::Array(out))
}

fn coalesce_impl(args: &[Value]) -> Result<Value, String> {
    for arg in args {
        if !arg.is_null() {
            return Ok(arg.clone());
        }
    }
    Err("no non-null arguments were found".to_string())
}
