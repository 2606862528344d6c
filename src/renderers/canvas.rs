//! Character canvas for text previews of a layout.

// ─── Rect ─────────────────────────────────────────────────────────────────────

/// A rectangle in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub col: usize,
    pub row: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub fn new(col: usize, row: usize, width: usize, height: usize) -> Self {
        Self {
            col,
            row,
            width,
            height,
        }
    }

    /// Last column covered by the rectangle.
    pub fn last_col(&self) -> usize {
        self.col + self.width.saturating_sub(1)
    }

    /// Last row covered by the rectangle.
    pub fn last_row(&self) -> usize {
        self.row + self.height.saturating_sub(1)
    }
}

// ─── Frame characters ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl Frame {
    pub const UNICODE: Frame = Frame {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    pub const ASCII: Frame = Frame {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
    };

    pub fn new(unicode: bool) -> Self {
        if unicode { Self::UNICODE } else { Self::ASCII }
    }
}

// ─── Canvas ───────────────────────────────────────────────────────────────────

/// A fixed-size grid of characters. Writes outside the grid are dropped.
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    cells: Vec<Vec<char>>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![' '; width]; height],
        }
    }

    pub fn get(&self, col: usize, row: usize) -> char {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(' ')
    }

    pub fn set(&mut self, col: usize, row: usize, ch: char) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = ch;
        }
    }

    /// Outline `rect`. Rectangles smaller than 2×2 are skipped.
    pub fn frame(&mut self, rect: Rect, frame: &Frame) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let (x0, y0, x1, y1) = (rect.col, rect.row, rect.last_col(), rect.last_row());
        for col in x0 + 1..x1 {
            self.set(col, y0, frame.horizontal);
            self.set(col, y1, frame.horizontal);
        }
        for row in y0 + 1..y1 {
            self.set(x0, row, frame.vertical);
            self.set(x1, row, frame.vertical);
        }
        self.set(x0, y0, frame.top_left);
        self.set(x1, y0, frame.top_right);
        self.set(x0, y1, frame.bottom_left);
        self.set(x1, y1, frame.bottom_right);
    }

    /// Write `text` at (col, row), stopping after `max_len` characters.
    pub fn text(&mut self, col: usize, row: usize, text: &str, max_len: usize) {
        for (i, ch) in text.chars().take(max_len).enumerate() {
            self.set(col + i, row, ch);
        }
    }

    /// Render with trailing whitespace and trailing blank lines trimmed.
    pub fn render_to_string(&self) -> String {
        let mut lines: Vec<String> = self
            .cells
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render_to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_canvas.rs"]
mod tests;
