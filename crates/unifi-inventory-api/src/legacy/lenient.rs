// Field decoders for legacy records.
//
// Controllers are inconsistent about scalar types across firmware
// versions (`"state": "1"`, `"last_seen": 1.7e9`, `"is_wired": 1`). These
// accept any JSON value and coerce what they can. A value that cannot be
// coerced decodes as `None`; a field never fails its record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub(crate) fn opt_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

pub(crate) fn opt_i64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().and_then(whole_seconds)),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse().ok().or_else(|| s.parse().ok().and_then(whole_seconds))
        }
        _ => None,
    })
}

pub(crate) fn opt_bool<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::Number(n)) => n.as_i64().map(|v| v != 0),
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" | "" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// Truncate a float toward zero; non-finite values are rejected.
#[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
fn whole_seconds(v: f64) -> Option<i64> {
    v.is_finite().then(|| v.trunc() as i64)
}
