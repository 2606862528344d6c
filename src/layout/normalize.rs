//! Row width normalizer: stretch or shrink a row to exactly fill the container.

use tracing::warn;

use super::types::Row;
use crate::error::LayoutError;

/// Below this the row's item widths are treated as summing to zero.
const DEGENERATE_EPSILON: f64 = 1e-9;

/// Rescale every item width in `row` so that the widths plus the gaps between
/// them equal `container_width`. Heights are reset to the row height.
///
/// A row that cannot be scaled (zero total width, or a scale factor that is
/// not a positive finite number) is left untouched and reported as
/// [`LayoutError::DegenerateRow`]; the caller decides whether that matters.
pub fn normalize(row: &mut Row, container_width: f64, gap: f64) -> Result<(), LayoutError> {
    let count = row.items.len();
    if count == 0 {
        return Ok(());
    }
    let inner_gaps = gap * (count - 1) as f64;
    // `row.width` also carries a trailing gap per item; scale against the widths alone.
    let row_width_without_gap = row.content_width();
    let scale = (container_width - inner_gaps) / row_width_without_gap;

    if row_width_without_gap.abs() <= DEGENERATE_EPSILON || !scale.is_finite() || scale <= 0.0 {
        warn!(
            items = count,
            row_width = row.width,
            container_width,
            "skipping normalization of degenerate row"
        );
        return Err(LayoutError::DegenerateRow { items: count });
    }

    for item in &mut row.items {
        item.computed_width *= scale;
        item.computed_height = row.height;
    }
    row.width = container_width + gap;
    row.normalized = true;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_normalize.rs"]
mod tests;
