//! A small character frame the game view draws into.
//!
//! Pure data, no terminal I/O: the view fills a frame, the renderer flushes
//! it. Tests inspect frames directly.

use crossterm::style::Color;

/// One styled character cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub fg: Color,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
        }
    }
}

/// A fixed-size grid of glyphs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<Glyph>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Glyph::default(); usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// Glyph at `(x, y)`, or `None` out of bounds
    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Set a glyph; writes outside the frame are dropped
    pub fn set(&mut self, x: u16, y: u16, glyph: Glyph) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = glyph;
        }
    }

    /// Write a string left-to-right starting at `(x, y)`
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, fg: Color) {
        for (i, ch) in text.chars().enumerate() {
            self.set(x + i as u16, y, Glyph { ch, fg });
        }
    }

    /// The characters of one row, for assertions in tests
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|g| g.ch)
            .collect()
    }
}
