//! gridwire - server-side shaping for tabular grid requests
//!
//! Takes a client's paging/sorting/echo parameters and a record source,
//! and produces the windowed, sorted, projected, JSON-ready page the grid
//! protocol expects: column indices resolve through a per-shape catalog
//! (with alias indirection), ordering and paging shape a single fetch,
//! and every leaf value renders through an ordered, type-guarded
//! formatter chain.
//!
//! Transport is out of scope; [`params::bind_request`] accepts an
//! already-decoded parameter map and the caller serializes the returned
//! [`GridResponse`] however it serves JSON.

pub mod columns;
pub mod errors;
pub mod params;
pub mod render;
pub mod result;
pub mod shaping;
pub mod source;

pub use columns::{Cell, ColumnSpec, GridRow, ValueKind};
pub use errors::{GridError, GridResult};
pub use params::{bind_request, GridOptions, GridParams, SortDirection};
pub use render::{FormatError, Formatter, RenderPipeline};
pub use result::{assemble, respond, GridHandler, GridResponse};
pub use shaping::{build_order, OrderSpec, PageWindow, SortKey};
pub use source::{MemorySource, QueryShape, RecordSource};
