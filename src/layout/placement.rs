//! Absolute placement of packed rows.
//!
//! Rows stack top to bottom with `gap` between them; items within a row sit
//! left to right with `gap` between them.

use serde::Serialize;

use super::types::{Orientation, Row};
use crate::config::LayoutConfig;

/// One item's box in container coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    pub id: String,
    pub row: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub orientation: Orientation,
}

impl Placement {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// The full output of a layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLayout {
    pub container_width: f64,
    pub rows: Vec<Row>,
    pub placements: Vec<Placement>,
    /// Bottom edge of the last row (no trailing gap).
    pub content_height: f64,
}

impl GridLayout {
    /// Right edge of the widest row. Exceeds `container_width` when an
    /// unnormalized final row overflows.
    pub fn content_width(&self) -> f64 {
        self.placements.iter().map(Placement::right).fold(0.0, f64::max)
    }

    pub fn item_count(&self) -> usize {
        self.placements.len()
    }
}

/// Assign x/y coordinates to every item of `rows`.
pub fn place(rows: Vec<Row>, config: &LayoutConfig) -> GridLayout {
    let mut placements = Vec::with_capacity(rows.iter().map(Row::len).sum());
    let mut y = 0.0;
    let mut content_height = 0.0;

    for (row_idx, row) in rows.iter().enumerate() {
        let mut x = 0.0;
        let mut row_bottom = y;
        for item in &row.items {
            placements.push(Placement {
                id: item.id.clone(),
                row: row_idx,
                x,
                y,
                width: item.computed_width,
                height: item.computed_height,
                orientation: item.orientation(),
            });
            x += item.computed_width + config.gap;
            row_bottom = f64::max(row_bottom, y + item.computed_height);
        }
        content_height = row_bottom;
        y = row_bottom + config.gap;
    }

    GridLayout {
        container_width: config.container_width,
        rows,
        placements,
        content_height,
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_placement.rs"]
mod tests;
