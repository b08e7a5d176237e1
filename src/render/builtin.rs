//! Built-in formatters.
//!
//! Required evaluation order: offset-aware timestamp, local timestamp,
//! markup passthrough, then the universal fallback. The fallback accepts
//! every kind, so nothing pushed after it is ever consulted.

use chrono::Local;
use serde_json::Value;

use super::pipeline::{FormatError, Formatter};
use crate::columns::{Cell, ValueKind};

/// Short date/time layout used by the timestamp built-ins
pub const SHORT_DATE_TIME: &str = "%m/%d/%Y %H:%M";

pub(crate) fn builtins() -> Vec<Formatter> {
    vec![
        Formatter::for_kind(ValueKind::Timestamp, |cell| match cell {
            Cell::Timestamp(ts) => Ok(Value::String(
                ts.with_timezone(&Local).format(SHORT_DATE_TIME).to_string(),
            )),
            Cell::Null => Ok(Value::String(String::new())),
            other => Err(mismatch("timestamp", other)),
        }),
        Formatter::for_kind(ValueKind::LocalTimestamp, |cell| match cell {
            Cell::LocalTimestamp(ts) => Ok(Value::String(ts.format(SHORT_DATE_TIME).to_string())),
            Cell::Null => Ok(Value::String(String::new())),
            other => Err(mismatch("local timestamp", other)),
        }),
        Formatter::for_kind(ValueKind::Markup, |cell| match cell {
            Cell::Markup(raw) => Ok(Value::String(raw.clone())),
            Cell::Null => Ok(Value::String(String::new())),
            other => Err(mismatch("markup", other)),
        }),
        // Universal fallback: display string, empty string for null
        Formatter::new(|_| true, |cell| Ok(Value::String(cell.display()))),
    ]
}

fn mismatch(expected: &str, got: &Cell) -> FormatError {
    FormatError(format!("expected {expected} cell, got {got:?}"))
}
