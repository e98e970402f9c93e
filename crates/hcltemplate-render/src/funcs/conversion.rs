//! Conversion and fallback functions: `convert`, `try`, `can`.
//!
//! The engine evaluates function arguments eagerly, so `try` and `can`
//! operate on evaluated values: `try` yields its first non-null argument
//! and `can` reports whether its argument is non-null. `convert` takes
//! the target type as a string name.

use hcl::eval::FuncArgs;
use hcl::Value;

use crate::value;

pub(crate) fn convert(args: FuncArgs) -> Result<Value, String> {
    convert_impl(&args)
}

pub(crate) fn try_fn(args: FuncArgs) -> Result<Value, String> {
    try_impl(&args)
}

pub(crate) fn can(args: FuncArgs) -> Result<Value, String> {
    can_impl(&args)
}

fn convert_impl(args: &[Value]) -> Result<Value, String> {
    let Value::String(target) = &args[1] else {
        return Err(format!(
            "type must be a string, not {}",
            value::type_name(&args[1])
        ));
    };
    match target.as_str() {
        "string" => Ok(Value::String(value::to_string(&args[0])?)),
        "number" => Ok(Value::Number(value::to_number(&args[0])?)),
        "bool" => Ok(Value::Bool(value::to_bool(&args[0])?)),
        other => Err(format!(
            "unsupported type {other:?}; must be \"string\", \"number\" or \"bool\""
        )),
    }
}

fn try_impl(args: &[Value]) -> Result<Value, String> {
    for arg in args {
        if !arg.is_null() {
            return Ok(arg.clone());
        }
    }
    Err("no non-null argument was found".to_string())
}

fn can_impl(args: &[Value]) -> Result<Value, String> {
    Ok(Value::Bool(!args[0].is_null()))
}
