//! justified-grid — justified-row grid layout for image galleries.
//!
//! Items with known natural sizes are packed into rows that exactly fill a
//! container width (all but the last row), with a uniform height per row.
//!
//! Public API: [`lay_out`] for items already in memory, [`render_manifest`]
//! for the text manifest read by the CLI.

pub mod config;
pub mod error;
pub mod layout;
pub mod manifest;
pub mod registry;
pub mod renderers;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::LayoutConfig;
pub use error::LayoutError;
pub use layout::{GridLayout, Item, Orientation, Placement, Row};
pub use registry::ItemRegistry;

use crate::manifest::parse_input;
use crate::renderers::{OutputFormat, Renderer, renderer_for};

/// Lay out `items` into justified rows and place them in the container.
pub fn lay_out(items: &[Item], config: &LayoutConfig) -> Result<GridLayout, LayoutError> {
    layout::full_layout(items, config)
}

/// Parse a gallery manifest (text or JSON), lay it out and render it in `format`.
pub fn render_manifest(
    src: &str,
    config: &LayoutConfig,
    format: OutputFormat,
    unicode: bool,
) -> Result<String, LayoutError> {
    let items = parse_input(src)?;
    tracing::debug!(items = items.len(), "parsed manifest");
    let grid = lay_out(&items, config)?;
    renderer_for(format, unicode).render(&grid)
}
