//! Type-erased front over the typed assembly path.
//!
//! Handlers that serve many grids from one code path hold sources as
//! `&dyn GridHandler` and never name the row type. The blanket impl routes
//! every source whose rows are a grid shape through [`assemble`] with the
//! identity transform; callers wanting a projection use `assemble`
//! directly.

use super::assemble::assemble;
use super::response::GridResponse;
use crate::columns::GridRow;
use crate::errors::GridResult;
use crate::params::{GridOptions, GridParams};
use crate::render::RenderPipeline;
use crate::source::RecordSource;

/// Object-safe entry point for serving one grid request
pub trait GridHandler {
    /// Shapes, fetches, and renders one page from this source
    fn respond(
        &self,
        params: &GridParams,
        options: &GridOptions,
        pipeline: &RenderPipeline,
    ) -> GridResult<GridResponse>;
}

impl<S> GridHandler for S
where
    S: RecordSource,
    S::Row: GridRow,
{
    fn respond(
        &self,
        params: &GridParams,
        options: &GridOptions,
        pipeline: &RenderPipeline,
    ) -> GridResult<GridResponse> {
        assemble(self, params, options, pipeline, |row| row)
    }
}

/// Serves one request through a type-erased handler
pub fn respond(
    source: &dyn GridHandler,
    params: &GridParams,
    options: &GridOptions,
    pipeline: &RenderPipeline,
) -> GridResult<GridResponse> {
    source.respond(params, options, pipeline)
}
