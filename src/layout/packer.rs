//! Greedy justified-row packer.
//!
//! Items are ordered landscape → square → portrait (stable), each gets a
//! provisional width at the target row height, and rows are filled left to
//! right until the next item would overflow the container. Every closed row
//! is normalized to the container width; the last row keeps its provisional
//! widths so a short trailing row is never blown up.

use tracing::{debug, trace};

use super::normalize::normalize;
use super::orientation::sort_by_orientation;
use super::types::{Item, Row};
use crate::config::LayoutConfig;
use crate::error::LayoutError;

/// Partition `items` into justified rows.
///
/// The configuration is validated up front (items validate their natural size
/// on construction). The input is never mutated; the returned rows own copies
/// of the items with `computed_width`/`computed_height` filled in.
pub fn pack(items: &[Item], config: &LayoutConfig) -> Result<Vec<Row>, LayoutError> {
    config.validate()?;

    let mut sorted = items.to_vec();
    sort_by_orientation(&mut sorted);

    let mut rows = Vec::new();
    let mut current = Row::new(config.target_row_height);

    for mut item in sorted {
        let item_width = item.provisional_width(
            config.target_row_height,
            config.min_item_width,
            config.max_item_width,
        );
        trace!(
            id = %item.id,
            orientation = %item.orientation(),
            item_width,
            "provisional width"
        );

        if current.width + item_width > config.container_width && !current.is_empty() {
            close_row(&mut current, config);
            rows.push(std::mem::replace(
                &mut current,
                Row::new(config.target_row_height),
            ));
        }

        item.computed_width = item_width;
        item.computed_height = config.target_row_height;
        current.items.push(item);
        current.width += item_width + config.gap;
    }

    if !current.is_empty() {
        current.is_final = true;
        debug!(row = rows.len(), items = current.len(), "final row left unnormalized");
        rows.push(current);
    }

    Ok(rows)
}

fn close_row(row: &mut Row, config: &LayoutConfig) {
    // A degenerate row keeps its provisional widths; the rest of the layout proceeds.
    if normalize(row, config.container_width, config.gap).is_ok() {
        debug!(items = row.len(), "row normalized to container width");
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_packer.rs"]
mod tests;
