//! In-memory record source backed by a `Vec`.

use std::cmp::Ordering;

use super::query::{QueryShape, RecordSource};
use crate::columns::GridRow;
use crate::errors::GridResult;
use crate::params::SortDirection;

/// Record source over an owned vector of rows.
///
/// Sorting is stable, so ties keep their insertion order and an empty
/// ordering specification preserves the backing vector's order exactly.
#[derive(Debug, Clone)]
pub struct MemorySource<T> {
    rows: Vec<T>,
}

impl<T> MemorySource<T> {
    /// Wraps a vector of rows
    pub fn new(rows: Vec<T>) -> Self {
        Self { rows }
    }

    /// Number of backing rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the source holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T: GridRow + Clone> RecordSource for MemorySource<T> {
    type Row = T;

    fn count(&self) -> GridResult<u64> {
        Ok(self.rows.len() as u64)
    }

    fn fetch(&self, shape: &QueryShape) -> GridResult<Vec<T>> {
        let mut rows = self.rows.clone();

        if !shape.order.is_empty() {
            rows.sort_by(|a, b| {
                for key in &shape.order.keys {
                    let ordering = a.cell(&key.field).compare(&b.cell(&key.field));
                    let ordering = match key.direction {
                        SortDirection::Asc => ordering,
                        SortDirection::Desc => ordering.reverse(),
                    };
                    if ordering != Ordering::Equal {
                        return ordering;
                    }
                }
                Ordering::Equal
            });
        }

        Ok(shape.window.apply(rows))
    }
}
