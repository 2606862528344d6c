//! Text preview of a layout: one framed box per item, labelled with its id
//! and computed size.

use super::Renderer;
use super::canvas::{Canvas, Frame, Rect};
use crate::error::LayoutError;
use crate::layout::{GridLayout, Placement};

/// Pixels per character column.
pub const CELL_W: f64 = 10.0;
/// Pixels per character row.
pub const CELL_H: f64 = 20.0;

pub struct AsciiRenderer {
    pub unicode: bool,
}

impl AsciiRenderer {
    pub fn new(unicode: bool) -> Self {
        Self { unicode }
    }
}

fn cell_rect(p: &Placement) -> Rect {
    let col = (p.x / CELL_W).round().max(0.0) as usize;
    let row = (p.y / CELL_H).round().max(0.0) as usize;
    let last_col = ((p.right() / CELL_W).round() as usize).saturating_sub(1).max(col + 1);
    let last_row = ((p.bottom() / CELL_H).round() as usize).saturating_sub(1).max(row + 1);
    Rect::new(col, row, last_col - col + 1, last_row - row + 1)
}

impl Renderer for AsciiRenderer {
    fn render(&self, layout: &GridLayout) -> Result<String, LayoutError> {
        if layout.placements.is_empty() {
            return Ok(String::new());
        }
        let rects: Vec<Rect> = layout.placements.iter().map(cell_rect).collect();
        let width = rects.iter().map(|r| r.last_col() + 1).max().unwrap_or(0);
        let height = rects.iter().map(|r| r.last_row() + 1).max().unwrap_or(0);

        let frame = Frame::new(self.unicode);
        let mut canvas = Canvas::new(width, height);
        for (p, rect) in layout.placements.iter().zip(&rects) {
            canvas.frame(*rect, &frame);
            let inner = rect.width.saturating_sub(2);
            if rect.height > 2 {
                canvas.text(rect.col + 1, rect.row + 1, &p.id, inner);
            }
            if rect.height > 3 {
                let size = format!("{:.0}x{:.0}", p.width, p.height);
                canvas.text(rect.col + 1, rect.row + 2, &size, inner);
            }
        }
        Ok(canvas.render_to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_ascii.rs"]
mod tests;
