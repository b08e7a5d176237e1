//! The abstract query boundary.

use crate::errors::GridResult;
use crate::shaping::{OrderSpec, PageWindow};

/// The fully shaped query for one request: ordering first, then the page
/// window over the ordered result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryShape {
    pub order: OrderSpec,
    pub window: PageWindow,
}

/// An orderable, countable, windowable record collection.
///
/// The source may sit across a network; both methods are blocking calls
/// from the core's perspective, and the core issues at most one `count`
/// and one `fetch` per request regardless of row volume. The source owns
/// any timeout policy at that boundary.
pub trait RecordSource {
    type Row;

    /// Total records in the collection as handed to the core. If a
    /// filtering collaborator pre-narrowed the collection upstream, this
    /// count reflects the narrowed set.
    fn count(&self) -> GridResult<u64>;

    /// Materializes the shaped query: applies the ordering, then the
    /// window, and returns the surviving rows in result order. An empty
    /// ordering means the source's natural enumeration order.
    fn fetch(&self, shape: &QueryShape) -> GridResult<Vec<Self::Row>>;
}
