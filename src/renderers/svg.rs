//! SVG preview — one rectangle per placed item, in layout pixels.
//!
//! Rows that were stretched to the container are drawn with a solid outline;
//! the final (unnormalized) row is dashed so an overflowing trailing row is
//! easy to spot. A thin guide marks the container's right edge.

use super::Renderer;
use crate::error::LayoutError;
use crate::layout::{GridLayout, Orientation, Placement};

const FONT_SIZE: i32 = 12;
const FONT_FAMILY: &str = "monospace";
const PADDING: f64 = 20.0;

const STROKE: &str = r#"stroke="black" stroke-width="1""#;
const GUIDE: &str = r##"stroke="#c00" stroke-width="1" stroke-dasharray="4 2""##;

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn fill(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Landscape => "#dbe9f6",
        Orientation::Square => "#e6f2dc",
        Orientation::Portrait => "#f6e3d3",
    }
}

fn font() -> String {
    format!(r#"font-family="{FONT_FAMILY}" font-size="{FONT_SIZE}""#)
}

fn render_item(p: &Placement, dashed: bool) -> String {
    let x = PADDING + p.x;
    let y = PADDING + p.y;
    let (w, h) = (p.width, p.height);
    let cx = x + w / 2.0;
    let cy = y + h / 2.0;
    let sy = cy + f64::from(FONT_SIZE) + 2.0;
    let fill = fill(p.orientation);
    let dash = if dashed { r#" stroke-dasharray="6 4""# } else { "" };
    let label = escape(&p.id);
    let f = font();

    let rect = format!(
        r#"<rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}" fill="{fill}" {STROKE}{dash}/>"#
    );
    let name = format!(
        r#"<text x="{cx:.2}" y="{cy:.2}" text-anchor="middle" {f}>{label}</text>"#
    );
    let size = format!(
        r##"<text x="{cx:.2}" y="{sy:.2}" text-anchor="middle" {f} fill="#555">{w:.0}×{h:.0}</text>"##
    );
    format!("{rect}\n{name}\n{size}")
}

pub struct SvgRenderer;

impl Renderer for SvgRenderer {
    fn render(&self, layout: &GridLayout) -> Result<String, LayoutError> {
        let content_w = layout.content_width().max(layout.container_width).max(0.0);
        let total_w = content_w + 2.0 * PADDING;
        let total_h = layout.content_height + 2.0 * PADDING;

        let mut parts = vec![format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{total_w:.0}" height="{total_h:.0}" viewBox="0 0 {total_w:.0} {total_h:.0}">"#
        )];
        parts.push(format!(
            r#"<rect x="0" y="0" width="{total_w:.0}" height="{total_h:.0}" fill="white"/>"#
        ));

        for p in &layout.placements {
            let dashed = layout.rows.get(p.row).is_some_and(|r| r.is_final);
            parts.push(render_item(p, dashed));
        }

        if layout.container_width > 0.0 {
            let gx = PADDING + layout.container_width;
            parts.push(format!(
                r#"<line x1="{gx:.2}" y1="0" x2="{gx:.2}" y2="{total_h:.0}" {GUIDE}/>"#
            ));
        }

        parts.push("</svg>".to_string());
        let mut out = parts.join("\n");
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_svg.rs"]
mod tests;
