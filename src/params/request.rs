//! Structured request parameters for a single grid page.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sort direction for a single sort entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parses `"asc"` / `"desc"` case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }

    /// Returns the wire spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// One page worth of client request parameters.
///
/// `sort_column_index` and `sort_direction` are parallel arrays; their shared
/// length is the sorting column count. Entry order is significant: the first
/// entry is the primary sort key, later entries break ties.
#[derive(Debug, Clone, PartialEq)]
pub struct GridParams {
    /// Number of records to skip. Validated at paging time; negative is a
    /// request fault, not a clamp.
    pub display_start: i64,
    /// Number of records to return, or -1 for everything past the offset
    pub display_length: i64,
    /// Number of columns the client rendered
    pub column_count: usize,
    /// Column index per sort entry, addressing the row shape's column list
    pub sort_column_index: Vec<usize>,
    /// Direction per sort entry
    pub sort_direction: Vec<SortDirection>,
    /// Opaque client value, returned unchanged so the client can discard
    /// stale responses
    pub echo_token: Value,
}

impl GridParams {
    /// Creates unsorted parameters for a single page
    pub fn page(display_start: i64, display_length: i64, column_count: usize, echo_token: Value) -> Self {
        Self {
            display_start,
            display_length,
            column_count,
            sort_column_index: Vec::new(),
            sort_direction: Vec::new(),
            echo_token,
        }
    }

    /// Appends a sort entry, keeping the parallel arrays in step
    pub fn with_sort(mut self, column_index: usize, direction: SortDirection) -> Self {
        self.sort_column_index.push(column_index);
        self.sort_direction.push(direction);
        self
    }

    /// Number of sort entries in this request
    pub fn sorting_column_count(&self) -> usize {
        self.sort_column_index.len()
    }

    /// Iterates sort entries in request order as (column index, direction)
    pub fn sort_entries(&self) -> impl Iterator<Item = (usize, SortDirection)> + '_ {
        self.sort_column_index
            .iter()
            .copied()
            .zip(self.sort_direction.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_direction_parse() {
        assert_eq!(SortDirection::parse("asc"), Some(SortDirection::Asc));
        assert_eq!(SortDirection::parse("DESC"), Some(SortDirection::Desc));
        assert_eq!(SortDirection::parse("sideways"), None);
    }

    #[test]
    fn test_sort_entries_preserve_order() {
        let params = GridParams::page(0, 10, 3, json!("1"))
            .with_sort(2, SortDirection::Desc)
            .with_sort(0, SortDirection::Asc);

        let entries: Vec<_> = params.sort_entries().collect();
        assert_eq!(entries, vec![(2, SortDirection::Desc), (0, SortDirection::Asc)]);
        assert_eq!(params.sorting_column_count(), 2);
    }

    #[test]
    fn test_unsorted_page() {
        let params = GridParams::page(20, -1, 4, json!(""));
        assert_eq!(params.sorting_column_count(), 0);
        assert_eq!(params.display_length, -1);
    }
}
