//! Layout error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    /// Rejected before packing: bad natural sizes or bad configuration.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A row whose item widths sum to (nearly) zero, or whose scale factor
    /// would not be a positive finite number.
    #[error("degenerate row of {items} item(s): cannot scale to container width")]
    DegenerateRow { items: usize },

    #[error("unknown item: {0}")]
    UnknownItem(String),

    #[error("manifest line {line}: {message}")]
    Manifest { line: usize, message: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LayoutError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
