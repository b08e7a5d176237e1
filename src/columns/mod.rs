//! Row shapes, column metadata, and cell values.

mod catalog;
mod cell;

pub use catalog::{ColumnSpec, GridRow, ValueKind};
pub use cell::Cell;
