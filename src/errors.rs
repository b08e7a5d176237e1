//! Crate-wide error taxonomy.
//!
//! Every fault is a deterministic input or configuration error: the core
//! never retries, it surfaces the fault to the immediate caller and lets
//! the request-handling layer decide the user-visible response.

use thiserror::Error;

/// Result type for grid operations
pub type GridResult<T> = Result<T, GridError>;

/// Faults raised while shaping, paging, or rendering a grid request
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GridError {
    /// A client-supplied sort index has no corresponding column.
    /// Never silently clamped.
    #[error("sort column index {index} out of range for {column_count} columns")]
    InvalidSortColumnIndex { index: usize, column_count: usize },

    /// The paging offset was negative
    #[error("paging offset must be non-negative, got {0}")]
    NegativePagingOffset(i64),

    /// The page length was neither -1 (unbounded) nor non-negative
    #[error("display length must be -1 or non-negative, got {0}")]
    InvalidDisplayLength(i64),

    /// A matched formatter failed while rendering a cell
    #[error("rendering column '{column}' failed: {reason}")]
    RowRenderingFault { column: String, reason: String },

    /// An alias expression expanded to zero usable sort fields
    #[error("alias for column '{0}' expands to no usable sort fields")]
    AmbiguousAliasExpansion(String),

    /// A request parameter was present but malformed
    #[error("invalid request parameter '{key}': {reason}")]
    InvalidParam { key: String, reason: String },

    /// The backing data source failed during count or fetch
    #[error("data source error: {0}")]
    Source(String),
}

impl GridError {
    /// Returns true for faults caused by the client request itself,
    /// as opposed to configuration or data-source failures.
    pub fn is_request_fault(&self) -> bool {
        matches!(
            self,
            GridError::InvalidSortColumnIndex { .. }
                | GridError::NegativePagingOffset(_)
                | GridError::InvalidDisplayLength(_)
                | GridError::InvalidParam { .. }
        )
    }
}
