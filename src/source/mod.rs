//! Data source boundary and the in-memory implementation.

mod memory;
mod query;

pub use memory::MemorySource;
pub use query::{QueryShape, RecordSource};
