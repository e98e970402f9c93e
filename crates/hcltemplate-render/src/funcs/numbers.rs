//! Numeric functions: `abs`, `int`, `max`, `min`, `range`.

use hcl::eval::FuncArgs;
use hcl::{Number, Value};

use crate::value;

/// Hard cap on how many values `range` may generate.
const RANGE_LIMIT: usize = 1024;

pub(crate) fn abs(args: FuncArgs) -> Result<Value, String> {
    abs_impl(&args)
}

pub(crate) fn int(args: FuncArgs) -> Result<Value, String> {
    int_impl(&args)
}

pub(crate) fn max(args: FuncArgs) -> Result<Value, String> {
    extreme(&args, true)
}

pub(crate) fn min(args: FuncArgs) -> Result<Value, String> {
    extreme(&args, false)
}

pub(crate) fn range(args: FuncArgs) -> Result<Value, String> {
    range_impl(&args)
}

fn abs_impl(args: &[Value]) -> Result<Value, String> {
    let n = value::to_number(&args[0])?;
    if let Some(i) = n.as_i64() {
        if let Some(magnitude) = i.checked_abs() {
            return Ok(Value::Number(Number::from(magnitude)));
        }
    } else if n.as_u64().is_some() {
        return Ok(Value::Number(n));
    }
    let f = n.as_f64().unwrap_or_default();
    number_from_f64(f.abs())
}

/// Truncates toward zero.
fn int_impl(args: &[Value]) -> Result<Value, String> {
    let n = value::to_number(&args[0])?;
    if n.as_i64().is_some() || n.as_u64().is_some() {
        return Ok(Value::Number(n));
    }
    let f = n.as_f64().unwrap_or_default().trunc();
    if f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Ok(Value::Number(Number::from(f as i64)))
    } else {
        number_from_f64(f)
    }
}

fn extreme(args: &[Value], prefer_greater: bool) -> Result<Value, String> {
    let mut best: Option<(f64, Number)> = None;
    for arg in args {
        let n = value::to_number(arg)?;
        let f = n.as_f64().unwrap_or_default();
        let replace = match &best {
            None => true,
            Some((current, _)) => {
                if prefer_greater {
                    f > *current
                } else {
                    f < *current
                }
            }
        };
        if replace {
            best = Some((f, n));
        }
    }
    match best {
        Some((_, n)) => Ok(Value::Number(n)),
        None => Err("at least one argument is required".to_string()),
    }
}

/// `range(end)`, `range(start, end)`, or `range(start, end, step)`.
fn range_impl(args: &[Value]) -> Result<Value, String> {
    let params = args
        .iter()
        .map(|arg| Ok(value::to_number(arg)?.as_f64().unwrap_or_default()))
        .collect::<Result<Vec<f64>, String>>()?;
    let (start, end, step) = match params.len() {
        1 => (0.0, params[0], 1.0),
        2 => (params[0], params[1], 1.0),
        3 => (params[0], params[1], params[2]),
        n => return Err(format!("between 1 and 3 arguments are required, got {n}")),
    };
    if step == 0.0 {
        return Err("step must not be zero".to_string());
    }

    let integral = start.fract() == 0.0 && end.fract() == 0.0 && step.fract() == 0.0;
    let mut out = Vec::new();
    let mut v = start;
    while (step > 0.0 && v < end) || (step < 0.0 && v > end) {
        if out.len() >= RANGE_LIMIT {
            return Err(format!(
                "more than {RANGE_LIMIT} values were generated; either decrease the \
                 difference between start and end or use a larger step"
            ));
        }
        if integral {
            out.push(Value::Number(Number::from(v as i64)));
        } else {
            out.push(number_from_f64(v)?);
        }
        v += step;
    }
    Ok(Value::Array(out))
}

fn number_from_f64(f: f64) -> Result<Value, String> {
    Number::from_f64(f)
        .map(Value::Number)
        .ok_or_else(|| format!("result {f} is not a representable number"))
}
