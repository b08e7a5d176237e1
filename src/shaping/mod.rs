//! Query shaping: ordering and paging.
//!
//! Shaping never materializes anything. It turns client sort entries into
//! a structured ordering specification and the paging fields into a
//! validated window; the data source applies both in one fetch.

mod order;
mod page;

pub use order::{build_order, OrderSpec, SortKey};
pub use page::PageWindow;
