//! Request parameters, per-request options, and request binding.
//!
//! Binding is deliberately all-or-nothing: a parameter map that lacks any
//! of the minimal grid keys yields no parameters at all, so handlers can
//! fall through to their non-grid path instead of processing a half-bound
//! request.

mod bind;
mod options;
mod request;

pub use bind::bind_request;
pub use options::GridOptions;
pub use request::{GridParams, SortDirection};

pub(crate) use options::alias_fields;
