use serde_json::{Number, Value};
use std::borrow::Cow;

/// Textual form of a scalar JSON value, used for loose equality.
/// Returns `None` for null, arrays and objects.
pub fn scalar_repr(v: &Value) -> Option<Cow<'_, str>> {
    match v {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Equality used by `where` conditions.
///
/// Identical JSON values always match. Two numbers match by numeric value,
/// so `1.0` matches a stored `1`. Otherwise scalars match when their
/// textual forms agree: `"2"` matches a stored `2`, but `"1.0"` does not
/// match a stored `1` because the texts differ.
pub fn values_match(stored: &Value, expected: &Value) -> bool {
    if stored == expected {
        return true;
    }
    if let (Value::Number(a), Value::Number(b)) = (stored, expected) {
        return numbers_equal(a, b);
    }
    match (scalar_repr(stored), scalar_repr(expected)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Short name of a value's JSON type, for error messages.
pub fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
