//! Value rendering: the guarded formatter chain.
//!
//! Every leaf value of every projected row passes through one pipeline on
//! its way to the wire. The pipeline is configuration: build it once at
//! startup, then share it by reference across requests.

mod builtin;
mod pipeline;

pub use builtin::SHORT_DATE_TIME;
pub use pipeline::{FormatError, Formatter, RenderPipeline};
