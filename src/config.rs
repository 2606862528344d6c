//! Layout configuration.
//!
//! Field names serialize in camelCase (`minItemWidth`, `targetRowHeight`, ...)
//! so the same options object the browser uses can be passed through JSON.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Configuration for one layout invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Spacing between items in a row and between consecutive rows.
    pub gap: f64,
    /// Lower clamp for an item's provisional width.
    pub min_item_width: f64,
    /// Upper clamp for an item's provisional width.
    pub max_item_width: f64,
    /// Nominal row height before normalization.
    pub target_row_height: f64,
    /// Available width for one row. Zero or negative degrades to one item per row.
    pub container_width: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            gap: 16.0,
            min_item_width: 250.0,
            max_item_width: 400.0,
            target_row_height: 300.0,
            container_width: 1000.0,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options used by the main illustration gallery page.
    pub fn gallery() -> Self {
        Self {
            min_item_width: 200.0,
            target_row_height: 250.0,
            ..Self::default()
        }
    }

    /// Options used by the sticker gallery: wider gaps, taller rows.
    pub fn stickers() -> Self {
        Self {
            gap: 30.0,
            min_item_width: 180.0,
            target_row_height: 220.0,
            ..Self::default()
        }
    }

    /// Look up a named preset ("default", "gallery", "stickers").
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::default()),
            "gallery" => Some(Self::gallery()),
            "stickers" => Some(Self::stickers()),
            _ => None,
        }
    }

    pub fn with_container_width(mut self, container_width: f64) -> Self {
        self.container_width = container_width;
        self
    }

    /// Reject malformed configuration before any row is computed.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let fields = [
            ("gap", self.gap),
            ("minItemWidth", self.min_item_width),
            ("maxItemWidth", self.max_item_width),
            ("targetRowHeight", self.target_row_height),
            ("containerWidth", self.container_width),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(LayoutError::invalid(format!("{name} must be finite, got {value}")));
            }
        }
        if self.target_row_height <= 0.0 {
            return Err(LayoutError::invalid(format!(
                "targetRowHeight must be positive, got {}",
                self.target_row_height
            )));
        }
        if self.gap < 0.0 {
            return Err(LayoutError::invalid(format!(
                "gap must be non-negative, got {}",
                self.gap
            )));
        }
        if self.min_item_width < 0.0 {
            return Err(LayoutError::invalid(format!(
                "minItemWidth must be non-negative, got {}",
                self.min_item_width
            )));
        }
        if self.min_item_width > self.max_item_width {
            return Err(LayoutError::invalid(format!(
                "minItemWidth ({}) exceeds maxItemWidth ({})",
                self.min_item_width, self.max_item_width
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
