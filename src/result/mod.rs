//! Result assembly and the wire record.
//!
//! Assembly order is strict: count once, shape the query, fetch once,
//! project and render each surviving row, package the page.

mod assemble;
mod dispatch;
mod response;

pub use assemble::assemble;
pub use dispatch::{respond, GridHandler};
pub use response::GridResponse;
