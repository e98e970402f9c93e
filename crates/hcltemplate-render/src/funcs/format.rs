//! The `format` function: `%`-verb string formatting.
//!
//! Supported verbs: `%s` (string), `%q` (quoted string), `%d` (whole
//! number), `%f` (decimal, default 6 digits), `%e` (scientific), `%t`
//! (boolean), `%v` (any value), and `%%` (literal percent). Verbs accept
//! an optional `-`/`0`/`+` flag set, a width, and a `.N` precision.
//! Arguments are consumed left to right; unconsumed arguments and missing
//! arguments are both errors.

use std::iter::Peekable;
use std::str::Chars;

use hcl::eval::FuncArgs;
use hcl::Value;

use crate::value;

pub(crate) fn format(args: FuncArgs) -> Result<Value, String> {
    format_impl(&args)
}

struct Verb {
    left: bool,
    zero: bool,
    plus: bool,
    width: Option<usize>,
    precision: Option<usize>,
    letter: char,
}

fn format_impl(args: &[Value]) -> Result<Value, String> {
    let spec = value::to_string(&args[0])?;
    let rest = &args[1..];

    let mut out = String::new();
    let mut used = 0;
    let mut chars = spec.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'%') {
            chars.next();
            out.push('%');
            continue;
        }
        let verb = parse_verb(&mut chars)?;
        let arg = rest
            .get(used)
            .ok_or_else(|| format!("not enough arguments for \"%{}\"", verb.letter))?;
        used += 1;
        out.push_str(&render(&verb, arg)?);
    }
    if used < rest.len() {
        return Err(format!(
            "too many arguments; no verb to consume argument {}",
            used + 2
        ));
    }
    Ok(Value::String(out))
}

fn parse_verb(chars: &mut Peekable<Chars<'_>>) -> Result<Verb, String> {
    let mut verb = Verb {
        left: false,
        zero: false,
        plus: false,
        width: None,
        precision: None,
        letter: '\0',
    };
    loop {
        match chars.peek() {
            Some('-') => {
                verb.left = true;
                chars.next();
            }
            Some('0') => {
                verb.zero = true;
                chars.next();
            }
            Some('+') => {
                verb.plus = true;
                chars.next();
            }
            Some(' ') | Some('#') => {
                chars.next();
            }
            _ => break,
        }
    }
    verb.width = parse_digits(chars);
    if chars.peek() == Some(&'.') {
        chars.next();
        verb.precision = Some(parse_digits(chars).unwrap_or(0));
    }
    match chars.next() {
        Some(letter) if "sqdfevt".contains(letter) => {
            verb.letter = letter;
            Ok(verb)
        }
        Some(letter) => Err(format!("unsupported format verb {letter:?}")),
        None => Err("invalid format string: missing verb after %".to_string()),
    }
}

fn parse_digits(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut digits = String::new();
    while let Some(c) = chars.peek() {
        if c.is_ascii_digit() {
            digits.push(*c);
            chars.next();
        } else {
            break;
        }
    }
    digits.parse().ok()
}

fn render(verb: &Verb, arg: &Value) -> Result<String, String> {
    let body = match verb.letter {
        's' => {
            let s = value::to_string(arg)?;
            match verb.precision {
                Some(p) => s.chars().take(p).collect(),
                None => s,
            }
        }
        'q' => {
            let s = value::to_string(arg)?;
            serde_json::to_string(&s).map_err(|err| format!("cannot quote string: {err}"))?
        }
        'd' => {
            let i = value::to_i64(arg)?;
            if verb.plus && i >= 0 {
                format!("+{i}")
            } else {
                i.to_string()
            }
        }
        'f' => {
            let f = value::to_number(arg)?.as_f64().unwrap_or_default();
            let precision = verb.precision.unwrap_or(6);
            if verb.plus && f.is_sign_positive() {
                format!("+{f:.precision$}")
            } else {
                format!("{f:.precision$}")
            }
        }
        'e' => {
            let f = value::to_number(arg)?.as_f64().unwrap_or_default();
            format!("{f:e}")
        }
        't' => value::to_bool(arg)?.to_string(),
        'v' => display(arg)?,
        other => return Err(format!("unsupported format verb {other:?}")),
    };
    Ok(pad(verb, body))
}

/// `%v` rendering: primitives in their string form, collections as JSON.
fn display(arg: &Value) -> Result<String, String> {
    match arg {
        Value::Null => Ok("null".to_string()),
        Value::String(s) => Ok(s.clone()),
        Value::Bool(_) | Value::Number(_) => value::to_string(arg),
        other => serde_json::to_string(other).map_err(|err| format!("cannot render value: {err}")),
    }
}

fn pad(verb: &Verb, body: String) -> String {
    let Some(width) = verb.width else {
        return body;
    };
    let len = body.chars().count();
    if len >= width {
        return body;
    }
    let fill = width - len;
    if verb.left {
        let mut out = body;
        out.extend(std::iter::repeat(' ').take(fill));
        out
    } else if verb.zero && matches!(verb.letter, 'd' | 'f' | 'e') {
        let (sign, digits) = match body.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => match body.strip_prefix('+') {
                Some(rest) => ("+", rest),
                None => ("", body.as_str()),
            },
        };
        format!("{sign}{}{digits}", "0".repeat(fill))
    } else {
        format!("{}{body}", " ".repeat(fill))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(args: &[Value]) -> String {
        match format_impl(args).expect("format") {
            Value::String(s) => s,
            other => panic!("non-string result: {other:?}"),
        }
    }

    #[test]
    fn test_plain_verbs() {
        assert_eq!(
            fmt(&[Value::from("Hello, %s!"), Value::from("World")]),
            "Hello, World!"
        );
        assert_eq!(fmt(&[Value::from("%d items"), Value::from(3)]), "3 items");
        assert_eq!(fmt(&[Value::from("%t"), Value::Bool(false)]), "false");
        assert_eq!(fmt(&[Value::from("100%%")]), "100%");
    }

    #[test]
    fn test_quoted() {
        assert_eq!(
            fmt(&[Value::from("%q"), Value::from("say \"hi\"")]),
            r#""say \"hi\"""#
        );
    }

    #[test]
    fn test_float_precision() {
        let half: Value = serde_json::from_str("0.5").unwrap();
        assert_eq!(fmt(&[Value::from("%.2f"), half.clone()]), "0.50");
        assert_eq!(fmt(&[Value::from("%f"), half]), "0.500000");
    }

    #[test]
    fn test_width_and_alignment() {
        assert_eq!(fmt(&[Value::from("%5d"), Value::from(42)]), "   42");
        assert_eq!(fmt(&[Value::from("%-5d|"), Value::from(42)]), "42   |");
        assert_eq!(fmt(&[Value::from("%05d"), Value::from(-42)]), "-0042");
    }

    #[test]
    fn test_plus_flag() {
        assert_eq!(fmt(&[Value::from("%+d"), Value::from(7)]), "+7");
        assert_eq!(fmt(&[Value::from("%+d"), Value::from(-7)]), "-7");
    }

    #[test]
    fn test_string_precision_truncates() {
        assert_eq!(fmt(&[Value::from("%.3s"), Value::from("abcdef")]), "abc");
    }

    #[test]
    fn test_v_renders_any_value() {
        let list: Value = serde_json::from_str(r#"[1, "x"]"#).unwrap();
        assert_eq!(fmt(&[Value::from("%v"), list]), r#"[1,"x"]"#);
        assert_eq!(fmt(&[Value::from("%v"), Value::Null]), "null");
    }

    #[test]
    fn test_argument_count_mismatches() {
        let err = format_impl(&[Value::from("%s %s"), Value::from("one")]).unwrap_err();
        assert!(err.contains("not enough arguments"));

        let err =
            format_impl(&[Value::from("%s"), Value::from("one"), Value::from("two")]).unwrap_err();
        assert!(err.contains("too many arguments"));
    }

    #[test]
    fn test_bad_specs() {
        assert!(format_impl(&[Value::from("%y"), Value::from(1)]).is_err());
        assert!(format_impl(&[Value::from("trailing %")]).is_err());
        assert!(format_impl(&[Value::from("%d"), Value::from("abc")]).is_err());
    }
}
