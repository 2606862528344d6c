//! Renderer registry and Renderer trait.

pub mod ascii;
pub mod canvas;
pub mod json;
pub mod svg;

pub use ascii::AsciiRenderer;
pub use json::JsonRenderer;
pub use svg::SvgRenderer;

use crate::error::LayoutError;
use crate::layout::GridLayout;

/// Trait for layout renderers.
pub trait Renderer {
    /// Render a computed layout to a string.
    fn render(&self, layout: &GridLayout) -> Result<String, LayoutError>;
}

/// Output formats understood by [`renderer_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Ascii,
    Svg,
}

impl std::str::FromStr for OutputFormat {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "ascii" | "text" => Ok(OutputFormat::Ascii),
            "svg" => Ok(OutputFormat::Svg),
            other => Err(LayoutError::invalid(format!(
                "unknown format '{other}'; use json, ascii, or svg"
            ))),
        }
    }
}

/// Pick a renderer. `unicode` only affects the ASCII preview.
pub fn renderer_for(format: OutputFormat, unicode: bool) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Json => Box::new(JsonRenderer::new(true)),
        OutputFormat::Ascii => Box::new(AsciiRenderer::new(unicode)),
        OutputFormat::Svg => Box::new(SvgRenderer),
    }
}
