//! Codec functions: `jsondecode`, `jsonencode`, `csvdecode`.

use std::collections::HashSet;

use hcl::eval::FuncArgs;
use hcl::{Map, Value};

use crate::value;

pub(crate) fn jsondecode(args: FuncArgs) -> Result<Value, String> {
    jsondecode_impl(&args)
}

pub(crate) fn jsonencode(args: FuncArgs) -> Result<Value, String> {
    jsonencode_impl(&args)
}

pub(crate) fn csvdecode(args: FuncArgs) -> Result<Value, String> {
    csvdecode_impl(&args)
}

fn jsondecode_impl(args: &[Value]) -> Result<Value, String> {
    let src = value::to_string(&args[0])?;
    serde_json::from_str(&src).map_err(|err| format!("invalid JSON: {err}"))
}

fn jsonencode_impl(args: &[Value]) -> Result<Value, String> {
    serde_json::to_string(&args[0])
        .map(Value::String)
        .map_err(|err| format!("cannot encode value as JSON: {err}"))
}

/// Decodes CSV with a header row into a list of objects, one per data
/// row. All rows must have the same number of fields as the header.
fn csvdecode_impl(args: &[Value]) -> Result<Value, String> {
    let src = value::to_string(&args[0])?;
    let mut reader = csv::Reader::from_reader(src.as_bytes());

    let headers = reader
        .headers()
        .map_err(|err| format!("invalid CSV: {err}"))?
        .clone();
    if headers.is_empty() {
        return Err("missing header line".to_string());
    }
    let mut seen = HashSet::new();
    for name in headers.iter() {
        if !seen.insert(name) {
            return Err(format!("duplicate column name {name:?}"));
        }
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| format!("invalid CSV: {err}"))?;
        let mut row = Map::new();
        for (name, field) in headers.iter().zip(record.iter()) {
            row.insert(name.to_string(), Value::String(field.to_string()));
        }
        rows.push(Value::Object(row));
    }
    Ok(Value::Array(rows))
}
