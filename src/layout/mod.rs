//! Justified grid layout engine.
//!
//! `pack` is the pure core; `place` turns its rows into absolute boxes.

pub mod normalize;
pub mod orientation;
pub mod packer;
pub mod placement;
pub mod types;

pub use normalize::normalize;
pub use orientation::{LANDSCAPE_THRESHOLD, PORTRAIT_THRESHOLD, classify};
pub use packer::pack;
pub use placement::{GridLayout, Placement, place};
pub use types::{Item, Orientation, Row};

use crate::config::LayoutConfig;
use crate::error::LayoutError;

/// Pack and place in one call.
pub fn full_layout(items: &[Item], config: &LayoutConfig) -> Result<GridLayout, LayoutError> {
    let rows = pack(items, config)?;
    Ok(place(rows, config))
}
