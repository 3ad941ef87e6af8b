use std::collections::HashMap;

use chrono::{DateTime, Utc};

/// An untyped value as held by a preference store.
///
/// `RawValue` is the exchange type between the typed layer and a
/// [`PrefStore`](crate::PrefStore): every write lowers into one of these
/// variants, and every read starts from one. The variant set mirrors what a
/// text-origin property store can represent natively.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Boolean(bool),
    Integer(i64),
    Real(f64),
    String(String),
    Data(Vec<u8>),
    Date(DateTime<Utc>),
    Array(Vec<RawValue>),
    Dictionary(HashMap<String, RawValue>),
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Boolean(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Integer(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Real(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::String(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::String(value)
    }
}

impl From<Vec<u8>> for RawValue {
    fn from(value: Vec<u8>) -> Self {
        RawValue::Data(value)
    }
}

/// Boolean-ish reading of a string, as a text-origin store does it.
///
/// Accepts the usual property spellings ("true"/"false", "yes"/"no", case
/// insensitive) and integer strings (zero is false, anything else true).
/// Anything else is uninterpretable: `None`, not false.
pub(crate) fn parse_boolish(s: &str) -> Option<bool> {
    let t = s.trim();
    if t.eq_ignore_ascii_case("true") || t.eq_ignore_ascii_case("yes") {
        return Some(true);
    }
    if t.eq_ignore_ascii_case("false") || t.eq_ignore_ascii_case("no") {
        return Some(false);
    }
    t.parse::<i64>().ok().map(|n| n != 0)
}

/// String to integer, store-native rule: a present but unparseable string
/// reads as zero, never as missing.
pub(crate) fn parse_integer(s: &str) -> i64 {
    s.trim().parse::<i64>().unwrap_or(0)
}

/// String to real, same never-missing rule as [`parse_integer`].
pub(crate) fn parse_real(s: &str) -> f64 {
    s.trim().parse::<f64>().unwrap_or(0.0)
}
