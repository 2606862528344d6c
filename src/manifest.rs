//! Gallery manifest parser.
//!
//! One tile per line: an id followed by an optional natural size.
//!
//! ```text
//! %% illustrations
//! sunset.jpg 1920x1080
//! portrait-01.png 800 x 1200
//! pending.webp            # size unknown, laid out as 1x1
//! ```
//!
//! Blank lines are skipped; `%%` and `#` start a comment when they open the
//! line or follow whitespace.
//!
//! A JSON array of `{id, naturalWidth, naturalHeight}` objects (the shape the
//! browser sends) is accepted as well; [`parse_input`] picks the format.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::LayoutError;
use crate::layout::Item;

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)(?:%%|#).*$").expect("valid comment regex"));

static ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<id>\S+)(?:\s+(?P<w>\d+(?:\.\d+)?)\s*[xX×]\s*(?P<h>\d+(?:\.\d+)?))?$",
    )
    .expect("valid entry regex")
});

/// Input formats accepted by [`parse_input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Manifest,
    Json,
}

/// A JSON item array starts with `[`; anything else is a text manifest.
pub fn detect_format(src: &str) -> InputFormat {
    if src.trim_start().starts_with('[') {
        InputFormat::Json
    } else {
        InputFormat::Manifest
    }
}

/// Parse either a text manifest or a JSON item array.
pub fn parse_input(src: &str) -> Result<Vec<Item>, LayoutError> {
    match detect_format(src) {
        InputFormat::Manifest => parse_manifest(src),
        InputFormat::Json => parse_items_json(src),
    }
}

/// An item as sent from the page. Missing sizes are laid out as 1×1.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemInput {
    id: String,
    natural_width: Option<f64>,
    natural_height: Option<f64>,
}

/// Parse `[{"id": ..., "naturalWidth": ..., "naturalHeight": ...}, ...]`.
pub fn parse_items_json(src: &str) -> Result<Vec<Item>, LayoutError> {
    let inputs: Vec<ItemInput> = serde_json::from_str(src)?;
    inputs
        .into_iter()
        .map(|input| match (input.natural_width, input.natural_height) {
            (Some(w), Some(h)) => Item::new(input.id, w, h),
            _ => Ok(Item::pending(input.id)),
        })
        .collect()
}

/// Parse a manifest into items, in file order.
pub fn parse_manifest(src: &str) -> Result<Vec<Item>, LayoutError> {
    let mut items = Vec::new();
    let mut seen = HashSet::new();

    for (idx, raw) in src.lines().enumerate() {
        let line_no = idx + 1;
        let line = COMMENT.replace(raw, "");
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let caps = ENTRY.captures(line).ok_or_else(|| LayoutError::Manifest {
            line: line_no,
            message: format!("expected `<id> [<width>x<height>]`, got '{line}'"),
        })?;
        let id = &caps["id"];
        if !seen.insert(id.to_string()) {
            return Err(LayoutError::Manifest {
                line: line_no,
                message: format!("duplicate id '{id}'"),
            });
        }

        let item = match (caps.name("w"), caps.name("h")) {
            (Some(w), Some(h)) => {
                let w = parse_dimension(w.as_str(), line_no)?;
                let h = parse_dimension(h.as_str(), line_no)?;
                Item::new(id, w, h).map_err(|e| LayoutError::Manifest {
                    line: line_no,
                    message: e.to_string(),
                })?
            }
            _ => Item::pending(id),
        };
        items.push(item);
    }

    Ok(items)
}

fn parse_dimension(s: &str, line: usize) -> Result<f64, LayoutError> {
    s.parse::<f64>().map_err(|e| LayoutError::Manifest {
        line,
        message: format!("bad dimension '{s}': {e}"),
    })
}

#[cfg(test)]
#[path = "../tests/rust/test_manifest.rs"]
mod tests;
