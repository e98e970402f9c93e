//! The `formatdate` function.
//!
//! Takes a format spec and an RFC 3339 timestamp and renders the
//! timestamp according to the spec's tokens:
//!
//! | token | meaning | token | meaning |
//! |---|---|---|---|
//! | `YYYY`/`YY` | 4-/2-digit year | `hh`/`h` | 24-hour, padded/bare |
//! | `MM`/`M` | 2-digit/bare month | `HH`/`H` | 12-hour, padded/bare |
//! | `MMM`/`MMMM` | month name, short/full | `AA`/`aa` | `AM`/`am` marker |
//! | `DD`/`D` | 2-digit/bare day | `mm`/`m` | minute, padded/bare |
//! | `EEE`/`EEEE` | weekday name, short/full | `ss`/`s` | second, padded/bare |
//! | `Z` | `Z` or `±hh:mm` | `ZZZZ`/`ZZZZZ` | `±hhmm` / `±hh:mm` |
//!
//! Text inside `'…'` is copied literally (`''` for a literal quote);
//! non-letter characters pass through unchanged; any other letter
//! sequence is an error.

use std::iter::Peekable;
use std::str::Chars;

use hcl::eval::FuncArgs;
use hcl::Value;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::value;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub(crate) fn formatdate(args: FuncArgs) -> Result<Value, String> {
    formatdate_impl(&args)
}

fn formatdate_impl(args: &[Value]) -> Result<Value, String> {
    let spec = value::to_string(&args[0])?;
    let stamp = value::to_string(&args[1])?;
    let when = OffsetDateTime::parse(&stamp, &Rfc3339)
        .map_err(|err| format!("not a valid RFC 3339 timestamp: {err}"))?;
    render(&spec, &when).map(Value::String)
}

fn render(spec: &str, when: &OffsetDateTime) -> Result<String, String> {
    let mut out = String::new();
    let mut chars = spec.chars().peekable();
    while let Some(&c) = chars.peek() {
        if c == '\'' {
            chars.next();
            literal(&mut chars, &mut out)?;
        } else if c.is_ascii_alphabetic() {
            let mut count = 0;
            while chars.peek() == Some(&c) {
                chars.next();
                count += 1;
            }
            out.push_str(&token(c, count, when)?);
        } else {
            chars.next();
            out.push(c);
        }
    }
    Ok(out)
}

fn literal(chars: &mut Peekable<Chars<'_>>, out: &mut String) -> Result<(), String> {
    loop {
        match chars.next() {
            Some('\'') => {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    out.push('\'');
                } else {
                    return Ok(());
                }
            }
            Some(c) => out.push(c),
            None => return Err("unterminated literal in date format string".to_string()),
        }
    }
}

fn token(letter: char, count: usize, when: &OffsetDateTime) -> Result<String, String> {
    let month = u8::from(when.month()) as usize;
    let weekday = when.weekday().number_days_from_monday() as usize;
    let hour12 = match when.hour() % 12 {
        0 => 12,
        h => h,
    };
    Ok(match (letter, count) {
        ('Y', 4) => format!("{:04}", when.year()),
        ('Y', 2) => format!("{:02}", when.year().rem_euclid(100)),
        ('M', 1) => month.to_string(),
        ('M', 2) => format!("{month:02}"),
        ('M', 3) => MONTHS[month - 1][..3].to_string(),
        ('M', 4) => MONTHS[month - 1].to_string(),
        ('D', 1) => when.day().to_string(),
        ('D', 2) => format!("{:02}", when.day()),
        ('E', 3) => WEEKDAYS[weekday][..3].to_string(),
        ('E', 4) => WEEKDAYS[weekday].to_string(),
        ('h', 1) => when.hour().to_string(),
        ('h', 2) => format!("{:02}", when.hour()),
        ('H', 1) => hour12.to_string(),
        ('H', 2) => format!("{hour12:02}"),
        ('A', 2) => if when.hour() < 12 { "AM" } else { "PM" }.to_string(),
        ('a', 2) => if when.hour() < 12 { "am" } else { "pm" }.to_string(),
        ('m', 1) => when.minute().to_string(),
        ('m', 2) => format!("{:02}", when.minute()),
        ('s', 1) => when.second().to_string(),
        ('s', 2) => format!("{:02}", when.second()),
        ('Z', 1) => {
            if when.offset().is_utc() {
                "Z".to_string()
            } else {
                offset(when, true)
            }
        }
        ('Z', 4) => offset(when, false),
        ('Z', 5) => offset(when, true),
        _ => {
            let seq: String = std::iter::repeat(letter).take(count).collect();
            return Err(format!("invalid date format verb {seq:?}"));
        }
    })
}

fn offset(when: &OffsetDateTime, colon: bool) -> String {
    let total_minutes = when.offset().whole_seconds() / 60;
    let sign = if total_minutes < 0 { '-' } else { '+' };
    let magnitude = total_minutes.abs();
    let hours = magnitude / 60;
    let minutes = magnitude % 60;
    if colon {
        format!("{sign}{hours:02}:{minutes:02}")
    } else {
        format!("{sign}{hours:02}{minutes:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(spec: &str, stamp: &str) -> Result<String, String> {
        let out = formatdate_impl(&[Value::from(spec), Value::from(stamp)])?;
        match out {
            Value::String(s) => Ok(s),
            other => Err(format!("non-string result: {other:?}")),
        }
    }

    #[test]
    fn test_date_tokens() {
        let stamp = "2023-02-05T07:09:04Z";
        assert_eq!(fmt("YYYY-MM-DD", stamp).unwrap(), "2023-02-05");
        assert_eq!(fmt("D MMMM YYYY", stamp).unwrap(), "5 February 2023");
        assert_eq!(fmt("MMM D, YY", stamp).unwrap(), "Feb 5, 23");
        assert_eq!(fmt("EEEE (EEE)", stamp).unwrap(), "Sunday (Sun)");
    }

    #[test]
    fn test_time_tokens() {
        let stamp = "2023-02-05T07:09:04Z";
        assert_eq!(fmt("hh:mm:ss", stamp).unwrap(), "07:09:04");
        assert_eq!(fmt("h:m:s", stamp).unwrap(), "7:9:4");
        assert_eq!(fmt("H AA", stamp).unwrap(), "7 AM");
        assert_eq!(fmt("HH aa", "2023-02-05T15:09:04Z").unwrap(), "03 pm");
        assert_eq!(fmt("H AA", "2023-02-05T00:30:00Z").unwrap(), "12 AM");
    }

    #[test]
    fn test_zone_tokens() {
        assert_eq!(fmt("Z", "2023-02-05T07:09:04Z").unwrap(), "Z");
        assert_eq!(fmt("Z", "2023-02-05T07:09:04+01:30").unwrap(), "+01:30");
        assert_eq!(fmt("ZZZZ", "2023-02-05T07:09:04+01:30").unwrap(), "+0130");
        assert_eq!(fmt("ZZZZZ", "2023-02-05T07:09:04-05:00").unwrap(), "-05:00");
    }

    #[test]
    fn test_literals_and_punctuation() {
        let stamp = "2023-02-05T07:09:04Z";
        assert_eq!(fmt("'year' YYYY", stamp).unwrap(), "year 2023");
        assert_eq!(fmt("h 'o''clock'", stamp).unwrap(), "7 o'clock");
        assert_eq!(fmt("YYYY/MM", stamp).unwrap(), "2023/02");
    }

    #[test]
    fn test_invalid_specs() {
        let stamp = "2023-02-05T07:09:04Z";
        assert!(fmt("YYY", stamp).is_err());
        assert!(fmt("x", stamp).is_err());
        assert!(fmt("'open", stamp).is_err());
    }

    #[test]
    fn test_invalid_timestamp() {
        assert!(fmt("YYYY", "yesterday").is_err());
        assert!(fmt("YYYY", "2023-02-05").is_err());
    }
}
