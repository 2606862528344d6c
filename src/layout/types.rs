//! Layout types: Orientation, Item, Row.

use serde::{Deserialize, Serialize};

use super::orientation::classify;
use crate::error::LayoutError;

// ─── Orientation ──────────────────────────────────────────────────────────────

/// Coarse aspect-ratio bucket used to order items before packing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    #[default]
    Square,
    Portrait,
}

impl Orientation {
    /// Packing priority: landscape first, then square, then portrait.
    pub fn priority(self) -> u8 {
        match self {
            Orientation::Landscape => 0,
            Orientation::Square => 1,
            Orientation::Portrait => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Square => "square",
            Orientation::Portrait => "portrait",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Item ─────────────────────────────────────────────────────────────────────

/// One content tile with its natural size and, after layout, its computed size.
///
/// `aspect_ratio` and `orientation` are derived from the natural size and are
/// only ever changed together through [`Item::set_natural_size`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    natural_width: f64,
    natural_height: f64,
    aspect_ratio: f64,
    orientation: Orientation,
    pub computed_width: f64,
    pub computed_height: f64,
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        natural_width: f64,
        natural_height: f64,
    ) -> Result<Self, LayoutError> {
        let mut item = Self::pending(id);
        item.set_natural_size(natural_width, natural_height)?;
        Ok(item)
    }

    /// A 1×1 placeholder for an asset whose size is not known yet.
    pub fn pending(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            natural_width: 1.0,
            natural_height: 1.0,
            aspect_ratio: 1.0,
            orientation: Orientation::Square,
            computed_width: 0.0,
            computed_height: 0.0,
        }
    }

    /// Replace the natural size, recomputing aspect ratio and orientation.
    ///
    /// On error the item is left unchanged.
    pub fn set_natural_size(&mut self, width: f64, height: f64) -> Result<(), LayoutError> {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(LayoutError::invalid(format!(
                "item '{}': natural size must be positive, got {width}x{height}",
                self.id
            )));
        }
        let aspect_ratio = width / height;
        let orientation = classify(aspect_ratio)?;
        self.natural_width = width;
        self.natural_height = height;
        self.aspect_ratio = aspect_ratio;
        self.orientation = orientation;
        Ok(())
    }

    pub fn natural_width(&self) -> f64 {
        self.natural_width
    }

    pub fn natural_height(&self) -> f64 {
        self.natural_height
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Width at `target_row_height`, clamped to `[min_width, max_width]`.
    pub fn provisional_width(&self, target_row_height: f64, min_width: f64, max_width: f64) -> f64 {
        let scale = target_row_height / self.natural_height;
        (self.natural_width * scale).min(max_width).max(min_width)
    }
}

// ─── Row ──────────────────────────────────────────────────────────────────────

/// A group of items laid out side by side.
///
/// `width` is the greedy accumulator: every item contributes its width plus
/// one gap, including the last one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub items: Vec<Item>,
    pub width: f64,
    pub height: f64,
    /// Widths were rescaled to fill the container.
    pub normalized: bool,
    /// Last row of the layout; never normalized.
    pub is_final: bool,
}

impl Row {
    pub fn new(height: f64) -> Self {
        Self {
            items: Vec::new(),
            width: 0.0,
            height,
            normalized: false,
            is_final: false,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of computed item widths, without any gap.
    pub fn content_width(&self) -> f64 {
        self.items.iter().map(|i| i.computed_width).sum()
    }

    /// Content width plus the gaps between items.
    pub fn filled_width(&self, gap: f64) -> f64 {
        self.content_width() + gap * self.items.len().saturating_sub(1) as f64
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_types.rs"]
mod tests;
