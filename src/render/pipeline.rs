//! Ordered chain of guarded formatters.

use serde_json::Value;
use thiserror::Error;

use crate::columns::{Cell, ValueKind};

/// A formatting failure inside a matched formatter
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct FormatError(pub String);

type GuardFn = Box<dyn Fn(ValueKind) -> bool + Send + Sync>;
type FormatFn = Box<dyn Fn(&Cell) -> Result<Value, FormatError> + Send + Sync>;

/// A (type guard, rendering function) pair
pub struct Formatter {
    guard: GuardFn,
    format: FormatFn,
}

impl Formatter {
    /// Creates a formatter from a guard over declared value kinds and a
    /// rendering function over cells
    pub fn new(
        guard: impl Fn(ValueKind) -> bool + Send + Sync + 'static,
        format: impl Fn(&Cell) -> Result<Value, FormatError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            guard: Box::new(guard),
            format: Box::new(format),
        }
    }

    /// Creates a formatter guarding exactly one value kind
    pub fn for_kind(
        kind: ValueKind,
        format: impl Fn(&Cell) -> Result<Value, FormatError> + Send + Sync + 'static,
    ) -> Self {
        Self::new(move |k| k == kind, format)
    }
}

/// Ordered, first-match-wins formatter chain.
///
/// Built once at startup and shared by reference into request processing;
/// it is never mutated while requests are in flight. Registration order is
/// precedence order: a formatter pushed after the universal fallback is
/// unreachable, so custom rules that must beat a built-in have to be pushed
/// before [`RenderPipeline::install_builtins`].
pub struct RenderPipeline {
    chain: Vec<Formatter>,
}

impl RenderPipeline {
    /// Creates an empty chain
    pub fn new() -> Self {
        Self { chain: Vec::new() }
    }

    /// Creates the standard chain: the built-ins in their required order
    pub fn with_builtins() -> Self {
        let mut pipeline = Self::new();
        pipeline.install_builtins();
        pipeline
    }

    /// Appends a formatter to the chain
    pub fn push(&mut self, formatter: Formatter) {
        self.chain.push(formatter);
    }

    /// Appends the built-in formatters: timestamp, local timestamp, markup,
    /// then the universal fallback. The fallback matches every kind, so it
    /// must stay last within the built-ins.
    pub fn install_builtins(&mut self) {
        for formatter in super::builtin::builtins() {
            self.push(formatter);
        }
    }

    /// Number of formatters in the chain
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// True when no formatters are registered
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Renders a cell through the chain.
    ///
    /// The first formatter whose guard accepts the declared kind wins; its
    /// failure propagates. A chain built without the universal fallback
    /// still renders unmatched cells as their display string.
    pub fn render(&self, kind: ValueKind, cell: &Cell) -> Result<Value, FormatError> {
        for formatter in &self.chain {
            if (formatter.guard)(kind) {
                return (formatter.format)(cell);
            }
        }
        Ok(Value::String(cell.display()))
    }
}

impl Default for RenderPipeline {
    fn default() -> Self {
        Self::with_builtins()
    }
}
