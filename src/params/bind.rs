//! Request binding from a decoded parameter map.
//!
//! Transport plumbing stays outside this crate; the handler hands in the
//! already-decoded query or form parameters as a string map. Binding is
//! all-or-nothing: unless the full minimal key set is present the request
//! is not a grid request at all and the core is never invoked.

use std::collections::HashMap;

use serde_json::Value;

use super::request::{GridParams, SortDirection};
use crate::errors::{GridError, GridResult};

/// Keys that must all be present for the map to bind at all
const REQUIRED_KEYS: [&str; 5] = [
    "displayStart",
    "displayLength",
    "columnCount",
    "sortingColumnCount",
    "echoToken",
];

/// Binds grid parameters from a decoded parameter map.
///
/// Returns `Ok(None)` when any required key is missing, an error when a
/// present key is malformed, and the bound parameters otherwise. Sort
/// entries are read from `sortColumnIndex_<i>` / `sortDirection_<i>` for
/// each `i` below the declared sorting column count; a missing indexed key
/// is malformed, not an absent request.
pub fn bind_request(query: &HashMap<String, String>) -> GridResult<Option<GridParams>> {
    if REQUIRED_KEYS.iter().any(|key| !query.contains_key(*key)) {
        return Ok(None);
    }

    let display_start = parse_i64(query, "displayStart")?;
    let display_length = parse_i64(query, "displayLength")?;
    let column_count = parse_usize(query, "columnCount")?;
    let sorting_column_count = parse_usize(query, "sortingColumnCount")?;

    // Opaque round-trip value; binding never interprets it
    let echo_token = Value::String(query["echoToken"].clone());

    let mut sort_column_index = Vec::with_capacity(sorting_column_count);
    let mut sort_direction = Vec::with_capacity(sorting_column_count);
    for i in 0..sorting_column_count {
        let index_key = format!("sortColumnIndex_{i}");
        sort_column_index.push(parse_usize(query, &index_key)?);

        let direction_key = format!("sortDirection_{i}");
        let raw = required_value(query, &direction_key)?;
        let direction = SortDirection::parse(raw).ok_or_else(|| GridError::InvalidParam {
            key: direction_key,
            reason: format!("expected asc or desc, got '{raw}'"),
        })?;
        sort_direction.push(direction);
    }

    Ok(Some(GridParams {
        display_start,
        display_length,
        column_count,
        sort_column_index,
        sort_direction,
        echo_token,
    }))
}

fn required_value<'a>(query: &'a HashMap<String, String>, key: &str) -> GridResult<&'a str> {
    query.get(key).map(String::as_str).ok_or_else(|| GridError::InvalidParam {
        key: key.to_string(),
        reason: "missing".to_string(),
    })
}

fn parse_i64(query: &HashMap<String, String>, key: &str) -> GridResult<i64> {
    let raw = required_value(query, key)?;
    raw.parse().map_err(|_| GridError::InvalidParam {
        key: key.to_string(),
        reason: format!("expected integer, got '{raw}'"),
    })
}

fn parse_usize(query: &HashMap<String, String>, key: &str) -> GridResult<usize> {
    let raw = required_value(query, key)?;
    raw.parse().map_err(|_| GridError::InvalidParam {
        key: key.to_string(),
        reason: format!("expected non-negative integer, got '{raw}'"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_query() -> HashMap<String, String> {
        let mut query = HashMap::new();
        query.insert("displayStart".to_string(), "0".to_string());
        query.insert("displayLength".to_string(), "10".to_string());
        query.insert("columnCount".to_string(), "3".to_string());
        query.insert("sortingColumnCount".to_string(), "0".to_string());
        query.insert("echoToken".to_string(), "7".to_string());
        query
    }

    #[test]
    fn test_bind_minimal_request() {
        let params = bind_request(&minimal_query()).unwrap().unwrap();
        assert_eq!(params.display_start, 0);
        assert_eq!(params.display_length, 10);
        assert_eq!(params.column_count, 3);
        assert_eq!(params.sorting_column_count(), 0);
        assert_eq!(params.echo_token, json!("7"));
    }

    #[test]
    fn test_missing_required_key_binds_nothing() {
        let mut query = minimal_query();
        query.remove("echoToken");
        assert_eq!(bind_request(&query).unwrap(), None);
    }

    #[test]
    fn test_empty_echo_token_round_trips() {
        let mut query = minimal_query();
        query.insert("echoToken".to_string(), String::new());
        let params = bind_request(&query).unwrap().unwrap();
        assert_eq!(params.echo_token, json!(""));
    }

    #[test]
    fn test_bind_sort_entries() {
        let mut query = minimal_query();
        query.insert("sortingColumnCount".to_string(), "2".to_string());
        query.insert("sortColumnIndex_0".to_string(), "1".to_string());
        query.insert("sortDirection_0".to_string(), "desc".to_string());
        query.insert("sortColumnIndex_1".to_string(), "0".to_string());
        query.insert("sortDirection_1".to_string(), "asc".to_string());

        let params = bind_request(&query).unwrap().unwrap();
        let entries: Vec<_> = params.sort_entries().collect();
        assert_eq!(entries, vec![(1, SortDirection::Desc), (0, SortDirection::Asc)]);
    }

    #[test]
    fn test_missing_indexed_key_is_malformed() {
        let mut query = minimal_query();
        query.insert("sortingColumnCount".to_string(), "1".to_string());
        // sortColumnIndex_0 and sortDirection_0 deliberately absent
        let err = bind_request(&query).unwrap_err();
        assert!(matches!(err, GridError::InvalidParam { .. }));
    }

    #[test]
    fn test_malformed_integer_is_an_error_not_none() {
        let mut query = minimal_query();
        query.insert("displayStart".to_string(), "ten".to_string());
        let err = bind_request(&query).unwrap_err();
        assert!(err.is_request_fault());
    }

    #[test]
    fn test_bad_direction_rejected() {
        let mut query = minimal_query();
        query.insert("sortingColumnCount".to_string(), "1".to_string());
        query.insert("sortColumnIndex_0".to_string(), "0".to_string());
        query.insert("sortDirection_0".to_string(), "upwards".to_string());
        assert!(bind_request(&query).is_err());
    }
}
