//! Regular expression functions: `regex`, `regexall`.
//!
//! Match results depend on the pattern: with no capture groups the whole
//! match is returned as a string; with named groups, an object of the
//! named captures; otherwise a list of the numbered captures. Optional
//! groups that did not participate in a match come back as null.

use hcl::eval::FuncArgs;
use hcl::{Map, Value};
use regex::{Captures, Regex};

use crate::value;

pub(crate) fn regex(args: FuncArgs) -> Result<Value, String> {
    regex_impl(&args)
}

pub(crate) fn regexall(args: FuncArgs) -> Result<Value, String> {
    regexall_impl(&args)
}

fn regex_impl(args: &[Value]) -> Result<Value, String> {
    let re = compile(&args[0])?;
    let subject = value::to_string(&args[1])?;
    match re.captures(&subject) {
        Some(caps) => Ok(match_value(&re, &caps)),
        None => Err("pattern did not match any part of the given string".to_string()),
    }
}

fn regexall_impl(args: &[Value]) -> Result<Value, String> {
    let re = compile(&args[0])?;
    let subject = value::to_string(&args[1])?;
    Ok(Value::Array(
        re.captures_iter(&subject)
            .map(|caps| match_value(&re, &caps))
            .collect(),
    ))
}

fn compile(pattern: &Value) -> Result<Regex, String> {
    let pattern = value::to_string(pattern)?;
    Regex::new(&pattern).map_err(|err| format!("invalid regex pattern: {err}"))
}

fn match_value(re: &Regex, caps: &Captures) -> Value {
    let named: Vec<&str> = re.capture_names().flatten().collect();
    if re.captures_len() == 1 {
        Value::String(
            caps.get(0)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
        )
    } else if !named.is_empty() {
        let mut fields = Map::new();
        for name in named {
            let captured = caps
                .name(name)
                .map(|m| Value::String(m.as_str().to_string()))
                .unwrap_or(Value::Null);
            fields.insert(name.to_string(), captured);
        }
        Value::Object(fields)
    } else {
        Value::Array(
            (1..re.captures_len())
                .map(|i| {
                    caps.get(i)
                        .map(|m| Value::String(m.as_str().to_string()))
                        .unwrap_or(Value::Null)
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_match_without_groups() {
        let args = [Value::from("[a-z]+"), Value::from("123abc456")];
        assert_eq!(regex_impl(&args).unwrap(), Value::from("abc"));
    }

    #[test]
    fn test_numbered_groups_give_list() {
        let args = [Value::from(r"(\d+)-(\d+)"), Value::from("ranges: 10-20")];
        let expected: Value = serde_json::from_str(r#"["10", "20"]"#).unwrap();
        assert_eq!(regex_impl(&args).unwrap(), expected);
    }

    #[test]
    fn test_named_groups_give_object() {
        let args = [
            Value::from(r"(?P<major>\d+)\.(?P<minor>\d+)"),
            Value::from("v1.2"),
        ];
        let expected: Value =
            serde_json::from_str(r#"{"major": "1", "minor": "2"}"#).unwrap();
        assert_eq!(regex_impl(&args).unwrap(), expected);
    }

    #[test]
    fn test_unmatched_optional_group_is_null() {
        let args = [Value::from(r"(a)(b)?"), Value::from("a")];
        let expected = Value::Array(vec![Value::from("a"), Value::Null]);
        assert_eq!(regex_impl(&args).unwrap(), expected);
    }

    #[test]
    fn test_no_match_is_an_error() {
        let args = [Value::from("[a-z]+"), Value::from("12345")];
        let err = regex_impl(&args).unwrap_err();
        assert!(err.contains("did not match"));
    }

    #[test]
    fn test_invalid_pattern() {
        let args = [Value::from("("), Value::from("x")];
        assert!(regex_impl(&args).is_err());
    }

    #[test]
    fn test_regexall_collects_every_match() {
        let args = [Value::from("[a-z]+"), Value::from("a 1 bc 2 def")];
        let expected: Value = serde_json::from_str(r#"["a", "bc", "def"]"#).unwrap();
        assert_eq!(regexall_impl(&args).unwrap(), expected);
    }

    #[test]
    fn test_regexall_empty_on_no_match() {
        let args = [Value::from("[a-z]+"), Value::from("123")];
        assert_eq!(regexall_impl(&args).unwrap(), Value::Array(vec![]));
    }
}
