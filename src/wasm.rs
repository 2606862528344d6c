//! WASM bindings for justified-grid.
//!
//! Exposes `layout` and `layoutWithOptions` to JavaScript via wasm-bindgen.
//! Both return the layout as a JSON string.

use wasm_bindgen::prelude::*;

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::manifest::parse_items_json;
use crate::renderers::{JsonRenderer, Renderer};

fn run(items_json: &str, config: &LayoutConfig) -> Result<String, LayoutError> {
    let items = parse_items_json(items_json)?;
    let grid = crate::lay_out(&items, config)?;
    JsonRenderer::new(false).render(&grid)
}

/// Lay out `[{id, naturalWidth, naturalHeight}, ...]` with default options.
#[wasm_bindgen]
pub fn layout(items_json: &str, container_width: f64) -> Result<String, JsError> {
    let config = LayoutConfig::default().with_container_width(container_width);
    run(items_json, &config).map_err(|e| JsError::new(&e.to_string()))
}

/// Lay out items with a full options object
/// (`{gap, minItemWidth, maxItemWidth, targetRowHeight, containerWidth}`).
/// Omitted options take their defaults.
#[wasm_bindgen(js_name = "layoutWithOptions")]
pub fn layout_with_options(items_json: &str, options_json: &str) -> Result<String, JsError> {
    let config: LayoutConfig =
        serde_json::from_str(options_json).map_err(|e| JsError::new(&e.to_string()))?;
    run(items_json, &config).map_err(|e| JsError::new(&e.to_string()))
}
