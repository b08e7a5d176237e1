//! Result assembly: the full shaping path for one request.

use serde_json::Value;
use tracing::debug;

use super::response::GridResponse;
use crate::columns::GridRow;
use crate::errors::{GridError, GridResult};
use crate::params::{GridOptions, GridParams};
use crate::render::RenderPipeline;
use crate::shaping::{build_order, PageWindow};
use crate::source::{QueryShape, RecordSource};

/// Assembles one page of results.
///
/// Step order is a correctness contract, not style:
/// 1. count the source once (the unfiltered totals),
/// 2. build the ordering from the sort entries and the projected shape's
///    column catalog,
/// 3. validate the page window,
/// 4. fetch once with the shaped query,
/// 5. project each row through `transform` and render every cell through
///    the pipeline, in column order, into wire objects.
///
/// Sorting addresses the columns of the projected shape `R`, the shape the
/// client actually sees, not the source row type.
pub fn assemble<S, R, F>(
    source: &S,
    params: &GridParams,
    options: &GridOptions,
    pipeline: &RenderPipeline,
    transform: F,
) -> GridResult<GridResponse>
where
    S: RecordSource,
    R: GridRow,
    F: Fn(S::Row) -> R,
{
    let total_records = source.count()?;

    let order = build_order(params, R::columns(), options)?;
    let window = PageWindow::new(params.display_start, params.display_length)?;
    let shape = QueryShape { order, window };

    let fetched = source.fetch(&shape)?;
    debug!(
        total_records,
        fetched = fetched.len(),
        sort_keys = shape.order.keys.len(),
        "assembling grid page"
    );

    let mut rows = Vec::with_capacity(fetched.len());
    for row in fetched {
        rows.push(render_row(&transform(row), pipeline)?);
    }

    Ok(GridResponse {
        total_records,
        total_display_records: total_records,
        echo_token: params.echo_token.clone(),
        rows,
    })
}

/// Renders one projected row into a wire object, column by column
fn render_row<R: GridRow>(row: &R, pipeline: &RenderPipeline) -> GridResult<Value> {
    let mut object = serde_json::Map::with_capacity(R::columns().len());
    for column in R::columns() {
        let value = pipeline
            .render(column.kind, &row.cell(column.name))
            .map_err(|err| GridError::RowRenderingFault {
                column: column.name.to_string(),
                reason: err.to_string(),
            })?;
        object.insert(column.name.to_string(), value);
    }
    Ok(Value::Object(object))
}
