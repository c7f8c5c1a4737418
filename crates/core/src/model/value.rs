// Scheme cell values and their textual code forms

use polars::prelude::AnyValue;
use std::fmt;

/// A single cell projected out of the reference table.
///
/// Matched values are coerced: integer-typed cells and integer-looking
/// strings become `Int`, nulls become `Missing`, everything else stays text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemeValue {
    Int(i64),
    Text(String),
    Missing,
}

impl SchemeValue {
    pub fn from_any(value: &AnyValue) -> SchemeValue {
        match value {
            AnyValue::Null => SchemeValue::Missing,
            AnyValue::Int64(v) => SchemeValue::Int(*v),
            AnyValue::Int32(v) => SchemeValue::Int(i64::from(*v)),
            AnyValue::Int16(v) => SchemeValue::Int(i64::from(*v)),
            AnyValue::Int8(v) => SchemeValue::Int(i64::from(*v)),
            AnyValue::UInt64(v) => SchemeValue::Int(*v as i64),
            AnyValue::UInt32(v) => SchemeValue::Int(i64::from(*v)),
            AnyValue::Float64(v) if v.fract() == 0.0 => SchemeValue::Int(*v as i64),
            AnyValue::Float32(v) if v.fract() == 0.0 => SchemeValue::Int(*v as i64),
            AnyValue::String(s) => coerce_text(s),
            AnyValue::StringOwned(s) => coerce_text(s.as_str()),
            other => SchemeValue::Text(other.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, SchemeValue::Missing)
    }

    /// The textual form, `None` for missing cells.
    pub fn as_text(&self) -> Option<String> {
        match self {
            SchemeValue::Int(v) => Some(v.to_string()),
            SchemeValue::Text(s) => Some(s.clone()),
            SchemeValue::Missing => None,
        }
    }
}

impl fmt::Display for SchemeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemeValue::Int(v) => write!(f, "{}", v),
            SchemeValue::Text(s) => write!(f, "{}", s),
            SchemeValue::Missing => write!(f, "null"),
        }
    }
}

fn coerce_text(s: &str) -> SchemeValue {
    match s.parse::<i64>() {
        Ok(v) => SchemeValue::Int(v),
        Err(_) => SchemeValue::Text(s.to_string()),
    }
}

/// Render a cell as the code string used for exact matching. Trailing
/// fractional suffixes ("840.0") collapse to the integer form; nulls have
/// no code form.
pub fn code_string(value: &AnyValue) -> Option<String> {
    match value {
        AnyValue::Null => None,
        AnyValue::String(s) => Some(strip_fraction(s)),
        AnyValue::StringOwned(s) => Some(strip_fraction(s.as_str())),
        AnyValue::Int64(v) => Some(v.to_string()),
        AnyValue::Int32(v) => Some(v.to_string()),
        AnyValue::Int16(v) => Some(v.to_string()),
        AnyValue::Int8(v) => Some(v.to_string()),
        AnyValue::UInt64(v) => Some(v.to_string()),
        AnyValue::UInt32(v) => Some(v.to_string()),
        AnyValue::Float64(v) if v.fract() == 0.0 => Some(((*v) as i64).to_string()),
        AnyValue::Float32(v) if v.fract() == 0.0 => Some(((*v) as i64).to_string()),
        other => Some(other.to_string()),
    }
}

fn strip_fraction(s: &str) -> String {
    match s.split_once('.') {
        Some((head, tail))
            if !head.is_empty()
                && head.chars().all(|c| c.is_ascii_digit())
                && tail.chars().all(|c| c.is_ascii_digit()) =>
        {
            head.to_string()
        }
        _ => s.to_string(),
    }
}
