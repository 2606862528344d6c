//! Orientation classifier and packing order.

use super::types::{Item, Orientation};
use crate::error::LayoutError;

/// Aspect ratios strictly above this are landscape.
pub const LANDSCAPE_THRESHOLD: f64 = 1.2;
/// Aspect ratios strictly below this are portrait.
pub const PORTRAIT_THRESHOLD: f64 = 0.8;

/// Bucket an aspect ratio (width / height).
pub fn classify(aspect_ratio: f64) -> Result<Orientation, LayoutError> {
    if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
        return Err(LayoutError::invalid(format!(
            "aspect ratio must be positive and finite, got {aspect_ratio}"
        )));
    }
    Ok(if aspect_ratio > LANDSCAPE_THRESHOLD {
        Orientation::Landscape
    } else if aspect_ratio < PORTRAIT_THRESHOLD {
        Orientation::Portrait
    } else {
        Orientation::Square
    })
}

/// Stable-sort items into packing order: landscape, square, portrait.
pub fn sort_by_orientation(items: &mut [Item]) {
    items.sort_by_key(|item| item.orientation().priority());
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_orientation.rs"]
mod tests;
