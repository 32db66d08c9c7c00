//! Serializes values as script literals that evaluate back to the same value.
//!
//! Strings are single-quoted with `%`, `'` and control characters
//! percent-encoded byte by byte. Lists render as `[ a b ]`, maps as
//! `{ 'k' v }` in key order, so the output is stable across calls.

use std::fmt::Write;

use crate::value::Value;

/// Returns the literal text of `value`.
///
/// ```rust
/// use stackbind::snapshot::snapshot;
/// use stackbind::value::Value;
/// let v = Value::List(vec![Value::Long(1), Value::Double(2.0), Value::from("it's")]);
/// assert_eq!(snapshot(&v), "[ 1 2.0 'it%27s' ]");
/// ```
pub fn snapshot(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

/// Appends the literal text of `value` to `out`.
pub fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Nil => out.push_str("NULL"),
        Value::Long(n) => {
            let _ = write!(out, "{}", n);
        }
        Value::Double(n) => write_double(out, *n),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::String(s) => write_string(out, s),
        Value::List(items) => {
            out.push_str("[ ");
            for item in items {
                write_value(out, item);
                out.push(' ');
            }
            out.push(']');
        }
        Value::Map(map) => {
            out.push_str("{ ");
            for (key, item) in map.iter() {
                write_string(out, key);
                out.push(' ');
                write_value(out, item);
                out.push(' ');
            }
            out.push('}');
        }
    }
}

fn write_double(out: &mut String, n: f64) {
    if n.is_nan() {
        out.push_str("NaN");
    } else if n.is_infinite() {
        out.push_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
    } else {
        // Debug keeps the fractional part (`2.0`), telling doubles from longs.
        let _ = write!(out, "{:?}", n);
    }
}

fn write_string(out: &mut String, s: &str) {
    out.push('\'');
    for c in s.chars() {
        if c == '%' || c == '\'' || c.is_control() {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                let _ = write!(out, "%{:02X}", byte);
            }
        } else {
            out.push(c);
        }
    }
    out.push('\'');
}
