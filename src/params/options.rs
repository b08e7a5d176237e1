//! Per-request configuration: sort alias indirection.
//!
//! A logical column may sort by several underlying fields (a composite
//! "full name" column ordering by surname then forename). Aliases map a
//! column name to a comma-separated list of sort fields; the client
//! protocol never sees the decomposition.

use std::collections::HashMap;

use crate::errors::{GridError, GridResult};

/// Grid configuration supplied alongside the request parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridOptions {
    aliases: HashMap<String, String>,
}

impl GridOptions {
    /// Creates options with no aliases
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing alias map without validating the expressions.
    /// A blank expression in the map faults on first use instead of here.
    pub fn from_aliases(aliases: HashMap<String, String>) -> Self {
        Self { aliases }
    }

    /// Adds a sort alias for a column name.
    ///
    /// The expression is a comma-separated list of sort fields. An
    /// expression with zero usable fields is a configuration fault and is
    /// rejected here, at setup time, rather than on first use.
    pub fn alias(mut self, column: impl Into<String>, expression: impl Into<String>) -> GridResult<Self> {
        let column = column.into();
        let expression = expression.into();
        if alias_fields(&expression).next().is_none() {
            return Err(GridError::AmbiguousAliasExpansion(column));
        }
        self.aliases.insert(column, expression);
        Ok(self)
    }

    /// Looks up the alias expression for a column name, if any
    pub fn lookup(&self, column: &str) -> Option<&str> {
        self.aliases.get(column).map(String::as_str)
    }
}

/// Splits an alias expression into its usable sort fields, in order
pub(crate) fn alias_fields(expression: &str) -> impl Iterator<Item = &str> {
    expression.split(',').map(str::trim).filter(|field| !field.is_empty())
}
