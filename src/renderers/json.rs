//! JSON output for the presentation layer.

use super::Renderer;
use crate::error::LayoutError;
use crate::layout::GridLayout;

/// Serializes the whole layout (rows with their items, placements, content height).
pub struct JsonRenderer {
    pub pretty: bool,
}

impl JsonRenderer {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, layout: &GridLayout) -> Result<String, LayoutError> {
        let mut out = if self.pretty {
            serde_json::to_string_pretty(layout)?
        } else {
            serde_json::to_string(layout)?
        };
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_json.rs"]
mod tests;
