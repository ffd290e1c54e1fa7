//! Conversions between JSON nodes and runtime values
//!
//! Text nodes are probed, in order, as ISO instant, local date-time, local date
//! and local time. The first successful parse decides the type, so any text
//! that happens to look like a date is always treated as one. Only the
//! zero-padded ISO layouts count: `1:2` or `2012-4-3` stay text.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use serde_json::Value as JsonValue;

use super::core::Value;

impl Value {
    /// Converts a JSON node, inferring temporal types from text
    #[must_use]
    pub fn from_json(node: &JsonValue) -> Self {
        Self::from_json_with(node, true)
    }

    /// Converts a JSON node; `infer_temporal` switches the text probing on or off
    #[must_use]
    pub fn from_json_with(node: &JsonValue, infer_temporal: bool) -> Self {
        match node {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Boolean(*b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else {
                    // u64 beyond i64::MAX and every fractional number
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            JsonValue::String(s) => {
                if infer_temporal {
                    Self::infer_text(s)
                } else {
                    Value::Text(s.clone())
                }
            }
            JsonValue::Array(items) => Value::List(
                items
                    .iter()
                    .map(|item| Self::from_json_with(item, infer_temporal))
                    .collect(),
            ),
            JsonValue::Object(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), Self::from_json_with(v, infer_temporal)))
                    .collect(),
            ),
        }
    }

    /// Probes text for a temporal type, falling back to `Text`
    #[must_use]
    pub fn infer_text(text: &str) -> Self {
        if let Some(instant) = parse_instant(text) {
            Value::Instant(instant)
        } else if let Some(date_time) = parse_local_date_time(text) {
            Value::LocalDateTime(date_time)
        } else if let Some(date) = parse_local_date(text) {
            Value::LocalDate(date)
        } else if let Some(time) = parse_local_time(text) {
            Value::LocalTime(time)
        } else {
            Value::Text(text.to_string())
        }
    }

    /// Converts back to a JSON node; temporals become ISO-8601 text
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        match self {
            Value::Integer(i) => JsonValue::from(*i),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Value::Text(s) => JsonValue::String(s.clone()),
            Value::Boolean(b) => JsonValue::Bool(*b),
            Value::Instant(t) => {
                JsonValue::String(t.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Value::LocalDateTime(_) | Value::LocalDate(_) | Value::LocalTime(_) => {
                JsonValue::String(self.to_string())
            }
            Value::Null => JsonValue::Null,
            Value::List(items) => JsonValue::Array(items.iter().map(Value::to_json).collect()),
            Value::Object(fields) => JsonValue::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
            Value::MultiValue(multi) => {
                JsonValue::Array(multi.items.iter().map(Value::to_json).collect())
            }
        }
    }
}

fn parse_instant(text: &str) -> Option<DateTime<Utc>> {
    let (local, offset) = split_offset(text)?;
    if !is_date_time_shape(local) || !is_offset_shape(offset) {
        return None;
    }
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

fn parse_local_date_time(text: &str) -> Option<NaiveDateTime> {
    if !is_date_time_shape(text) {
        return None;
    }
    text.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M").ok())
}

fn parse_local_date(text: &str) -> Option<NaiveDate> {
    if !is_date_shape(text) {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

fn parse_local_time(text: &str) -> Option<NaiveTime> {
    if !is_time_shape(text) {
        return None;
    }
    NaiveTime::parse_from_str(text, "%H:%M:%S%.f")
        .ok()
        .or_else(|| NaiveTime::parse_from_str(text, "%H:%M").ok())
}

// chrono accepts unpadded fields and leap seconds, so the ISO layout is
// checked byte by byte before handing the text over.

fn all_digits(bytes: &[u8]) -> bool {
    !bytes.is_empty() && bytes.iter().all(u8::is_ascii_digit)
}

/// `yyyy-MM-dd`
fn is_date_shape(text: &str) -> bool {
    let b = text.as_bytes();
    b.len() == 10
        && all_digits(&b[0..4])
        && b[4] == b'-'
        && all_digits(&b[5..7])
        && b[7] == b'-'
        && all_digits(&b[8..10])
}

/// `HH:mm`, `HH:mm:ss` or `HH:mm:ss.f` with up to nine fraction digits
fn is_time_shape(text: &str) -> bool {
    let b = text.as_bytes();
    if b.len() < 5 || !all_digits(&b[0..2]) || b[2] != b':' || !all_digits(&b[3..5]) {
        return false;
    }
    match &b[5..] {
        [] => true,
        [b':', h, l, rest @ ..] => {
            if !h.is_ascii_digit() || !l.is_ascii_digit() || *h > b'5' {
                return false;
            }
            match rest {
                [] => true,
                [b'.', fraction @ ..] => all_digits(fraction) && fraction.len() <= 9,
                _ => false,
            }
        }
        _ => false,
    }
}

/// `yyyy-MM-ddTHH:mm[:ss[.f]]`
fn is_date_time_shape(text: &str) -> bool {
    match text.split_once('T') {
        Some((date, time)) => is_date_shape(date) && is_time_shape(time),
        None => false,
    }
}

/// `Z` or `+HH:mm` / `-HH:mm`
fn is_offset_shape(offset: &str) -> bool {
    let b = offset.as_bytes();
    b == b"Z"
        || (b.len() == 6
            && (b[0] == b'+' || b[0] == b'-')
            && all_digits(&b[1..3])
            && b[3] == b':'
            && all_digits(&b[4..6]))
}

fn split_offset(text: &str) -> Option<(&str, &str)> {
    if let Some(local) = text.strip_suffix('Z') {
        return Some((local, "Z"));
    }
    let at = text.len().checked_sub(6)?;
    if !text.is_char_boundary(at) {
        return None;
    }
    Some(text.split_at(at))
}
