//! Ordering specification built from client sort entries.
//!
//! The client addresses columns positionally; the data source wants named
//! sort fields. This module resolves each sort entry against the column
//! catalog, expands aliases, and emits a structured `OrderSpec` the source
//! consumes directly. No ordering text is ever interpolated into a query.

use crate::columns::ColumnSpec;
use crate::errors::{GridError, GridResult};
use crate::params::{alias_fields, GridOptions, GridParams, SortDirection};

/// One sort field with its direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub direction: SortDirection,
}

impl SortKey {
    /// Creates a sort key
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

/// Ordered sort keys: the first key is the primary ordering, later keys
/// break ties. An empty spec means natural source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderSpec {
    pub keys: Vec<SortKey>,
}

impl OrderSpec {
    /// True when no ordering was requested
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Builds the ordering specification for one request.
///
/// Each sort entry resolves to its column by index; an out-of-range index
/// is a request fault and is never clamped. A column with an alias expands
/// to one key per alias field, every expanded key inheriting the entry's
/// direction. Zero sort entries yield an empty spec, which is a valid
/// pass-through to natural order.
pub fn build_order(
    params: &GridParams,
    columns: &[ColumnSpec],
    options: &GridOptions,
) -> GridResult<OrderSpec> {
    let mut keys = Vec::with_capacity(params.sorting_column_count());

    for (index, direction) in params.sort_entries() {
        let column = columns.get(index).ok_or(GridError::InvalidSortColumnIndex {
            index,
            column_count: columns.len(),
        })?;

        match options.lookup(column.name) {
            Some(expression) => {
                let before = keys.len();
                for field in alias_fields(expression) {
                    keys.push(SortKey::new(field, direction));
                }
                // Options built through alias() validate at setup; a map
                // wrapped by from_aliases() is caught here at first use.
                if keys.len() == before {
                    return Err(GridError::AmbiguousAliasExpansion(column.name.to_string()));
                }
            }
            None => keys.push(SortKey::new(column.name, direction)),
        }
    }

    Ok(OrderSpec { keys })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::ValueKind;
    use serde_json::json;

    const COLUMNS: &[ColumnSpec] = &[
        ColumnSpec::new("Name", ValueKind::Text),
        ColumnSpec::new("Age", ValueKind::Integer),
        ColumnSpec::new("Hired", ValueKind::Timestamp),
    ];

    #[test]
    fn test_single_column_sort() {
        let params = GridParams::page(0, 10, 3, json!("1")).with_sort(1, SortDirection::Asc);
        let spec = build_order(&params, COLUMNS, &GridOptions::new()).unwrap();
        assert_eq!(spec.keys, vec![SortKey::new("Age", SortDirection::Asc)]);
    }

    #[test]
    fn test_no_sort_entries_yield_empty_spec() {
        let params = GridParams::page(0, 10, 3, json!("1"));
        let spec = build_order(&params, COLUMNS, &GridOptions::new()).unwrap();
        assert!(spec.is_empty());
    }

    #[test]
    fn test_alias_expands_with_shared_direction() {
        let options = GridOptions::new().alias("Name", "Surname,Forename").unwrap();
        let params = GridParams::page(0, 10, 3, json!("1")).with_sort(0, SortDirection::Desc);

        let spec = build_order(&params, COLUMNS, &options).unwrap();
        assert_eq!(
            spec.keys,
            vec![
                SortKey::new("Surname", SortDirection::Desc),
                SortKey::new("Forename", SortDirection::Desc),
            ]
        );
    }

    #[test]
    fn test_entry_order_is_preserved() {
        let params = GridParams::page(0, 10, 3, json!("1"))
            .with_sort(2, SortDirection::Asc)
            .with_sort(0, SortDirection::Desc);

        let spec = build_order(&params, COLUMNS, &GridOptions::new()).unwrap();
        assert_eq!(spec.keys[0].field, "Hired");
        assert_eq!(spec.keys[1].field, "Name");
    }

    #[test]
    fn test_unvalidated_blank_alias_faults_at_first_use() {
        let mut aliases = std::collections::HashMap::new();
        aliases.insert("Name".to_string(), " , ".to_string());
        let options = GridOptions::from_aliases(aliases);

        let params = GridParams::page(0, 10, 3, json!("1")).with_sort(0, SortDirection::Asc);
        let err = build_order(&params, COLUMNS, &options).unwrap_err();
        assert_eq!(err, GridError::AmbiguousAliasExpansion("Name".to_string()));
    }

    #[test]
    fn test_out_of_range_index_faults() {
        let params = GridParams::page(0, 10, 3, json!("1")).with_sort(5, SortDirection::Asc);
        let err = build_order(&params, COLUMNS, &GridOptions::new()).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidSortColumnIndex {
                index: 5,
                column_count: 3
            }
        );
    }
}
