//! Cell values and their deterministic ordering.

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde_json::Value;

/// The raw value a row yields for one field.
///
/// Cells exist between the row shape and the render pipeline: sorting
/// compares them, formatters turn them into wire scalars.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Timestamp carrying its UTC offset
    Timestamp(DateTime<FixedOffset>),
    /// Timestamp with no offset information
    LocalTimestamp(NaiveDateTime),
    /// Display-safe markup, exempt from further escaping
    Markup(String),
    /// Arbitrary structured value
    Json(Value),
}

impl Cell {
    /// Creates a text cell
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Creates a markup cell
    pub fn markup(value: impl Into<String>) -> Self {
        Cell::Markup(value.into())
    }

    /// Display string for this cell; null renders as the empty string
    pub fn display(&self) -> String {
        match self {
            Cell::Null => String::new(),
            Cell::Bool(b) => b.to_string(),
            Cell::Int(i) => i.to_string(),
            Cell::Float(f) => f.to_string(),
            Cell::Text(s) => s.clone(),
            Cell::Timestamp(ts) => ts.to_rfc3339(),
            Cell::LocalTimestamp(ts) => ts.to_string(),
            Cell::Markup(m) => m.clone(),
            Cell::Json(Value::Null) => String::new(),
            Cell::Json(Value::String(s)) => s.clone(),
            Cell::Json(v) => v.to_string(),
        }
    }

    /// Total, deterministic ordering across cell values.
    ///
    /// Ordering rules:
    /// - null < bool < number < timestamp < string < structured
    /// - Within a rank, natural ordering; int and float compare numerically
    /// - Timestamps with and without offsets compare on local wall time
    pub fn compare(&self, other: &Cell) -> Ordering {
        let rank = self.rank();
        let other_rank = other.rank();
        if rank != other_rank {
            return rank.cmp(&other_rank);
        }

        match (self, other) {
            (Cell::Bool(a), Cell::Bool(b)) => a.cmp(b),
            (Cell::Int(a), Cell::Int(b)) => a.cmp(b),
            (Cell::Float(a), Cell::Float(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Cell::Int(a), Cell::Float(b)) => (*a as f64).partial_cmp(b).unwrap_or(Ordering::Equal),
            (Cell::Float(a), Cell::Int(b)) => a.partial_cmp(&(*b as f64)).unwrap_or(Ordering::Equal),
            (Cell::Timestamp(a), Cell::Timestamp(b)) => a.cmp(b),
            (Cell::LocalTimestamp(a), Cell::LocalTimestamp(b)) => a.cmp(b),
            (Cell::Timestamp(a), Cell::LocalTimestamp(b)) => a.naive_local().cmp(b),
            (Cell::LocalTimestamp(a), Cell::Timestamp(b)) => a.cmp(&b.naive_local()),
            (Cell::Text(a) | Cell::Markup(a), Cell::Text(b) | Cell::Markup(b)) => a.cmp(b),
            (Cell::Json(a), Cell::Json(b)) => compare_json(a, b),
            _ => Ordering::Equal,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Cell::Null => 0,
            Cell::Bool(_) => 1,
            Cell::Int(_) | Cell::Float(_) => 2,
            Cell::Timestamp(_) | Cell::LocalTimestamp(_) => 3,
            Cell::Text(_) | Cell::Markup(_) => 4,
            Cell::Json(_) => 5,
        }
    }
}

/// Compares two JSON values: null < bool < number < string, with arrays
/// and objects treated as order-equal.
fn compare_json(a: &Value, b: &Value) -> Ordering {
    let type_order = |v: &Value| -> u8 {
        match v {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            Value::Array(_) => 4,
            Value::Object(_) => 5,
        }
    };

    let a_type = type_order(a);
    let b_type = type_order(b);
    if a_type != b_type {
        return a_type.cmp(&b_type);
    }

    match (a, b) {
        (Value::Bool(a_b), Value::Bool(b_b)) => a_b.cmp(b_b),
        (Value::Number(a_n), Value::Number(b_n)) => {
            let a_f = a_n.as_f64().unwrap_or(0.0);
            let b_f = b_n.as_f64().unwrap_or(0.0);
            a_f.partial_cmp(&b_f).unwrap_or(Ordering::Equal)
        }
        (Value::String(a_s), Value::String(b_s)) => a_s.cmp(b_s),
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_null_sorts_first() {
        assert_eq!(Cell::Null.compare(&Cell::Int(0)), Ordering::Less);
        assert_eq!(Cell::text("a").compare(&Cell::Null), Ordering::Greater);
        assert_eq!(Cell::Null.compare(&Cell::Null), Ordering::Equal);
    }

    #[test]
    fn test_numeric_comparison_across_variants() {
        assert_eq!(Cell::Int(2).compare(&Cell::Float(2.5)), Ordering::Less);
        assert_eq!(Cell::Float(3.0).compare(&Cell::Int(3)), Ordering::Equal);
    }

    #[test]
    fn test_string_comparison() {
        assert_eq!(Cell::text("alice").compare(&Cell::text("bob")), Ordering::Less);
        assert_eq!(Cell::markup("<b>x</b>").compare(&Cell::markup("<b>x</b>")), Ordering::Equal);
    }

    #[test]
    fn test_timestamp_comparison() {
        let earlier = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 1, 8, 0, 0)
            .unwrap();
        let later = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 6, 1, 8, 0, 0)
            .unwrap();
        assert_eq!(Cell::Timestamp(earlier).compare(&Cell::Timestamp(later)), Ordering::Less);
    }

    #[test]
    fn test_display_null_is_empty() {
        assert_eq!(Cell::Null.display(), "");
        assert_eq!(Cell::Json(Value::Null).display(), "");
    }

    #[test]
    fn test_display_scalars() {
        assert_eq!(Cell::Int(42).display(), "42");
        assert_eq!(Cell::Bool(true).display(), "true");
        assert_eq!(Cell::Json(json!("plain")).display(), "plain");
        assert_eq!(Cell::Json(json!([1, 2])).display(), "[1,2]");
    }
}
