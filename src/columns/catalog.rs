//! Column catalog: static per-shape column metadata.
//!
//! A row shape declares its columns once, in declaration order. That order
//! is load-bearing: it defines the index space the client's sort indices
//! address and the order projected rows serialize in. Alias indirection is
//! not part of the catalog; aliases arrive per request in `GridOptions`.

use super::cell::Cell;

/// Type tag for a column's values, consulted by formatter guards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Timestamp carrying a UTC offset
    Timestamp,
    /// Timestamp with no offset, taken as-is
    LocalTimestamp,
    /// Markup that is already display-safe and must pass through raw
    Markup,
    Text,
    Integer,
    Float,
    Bool,
    /// Arbitrary structured value
    Json,
}

/// One column of a row shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Column name, also the wire field name for projected rows
    pub name: &'static str,
    /// Declared value kind
    pub kind: ValueKind,
}

impl ColumnSpec {
    /// Creates a column spec
    pub const fn new(name: &'static str, kind: ValueKind) -> Self {
        Self { name, kind }
    }
}

/// A row shape the grid can sort, project, and render.
///
/// `columns()` returns a static slice, so the catalog is computed once per
/// shape by construction. `cell()` must answer for every declared column
/// name and for any field an alias expands to; unknown fields yield
/// [`Cell::Null`].
pub trait GridRow {
    /// Column list in declaration order
    fn columns() -> &'static [ColumnSpec]
    where
        Self: Sized;

    /// The raw value of a field on this row
    fn cell(&self, field: &str) -> Cell;
}
