//! cellwin Grid - A rectangular cell buffer
//!
//! Used both for the composed display and for each region's private
//! contents. All writes are clipped to the grid bounds.

use serde::{Deserialize, Serialize};

use super::cell::{Attrs, Cell, Color};

/// Box drawing character set
pub struct BoxChars {
    pub tl: char,
    pub tr: char,
    pub bl: char,
    pub br: char,
    pub h: char,
    pub v: char,
}

/// Predefined box styles
pub mod box_styles {
    use super::BoxChars;

    pub const SINGLE: BoxChars = BoxChars { tl: '┌', tr: '┐', bl: '└', br: '┘', h: '─', v: '│' };
    pub const DOUBLE: BoxChars = BoxChars { tl: '╔', tr: '╗', bl: '╚', br: '╝', h: '═', v: '║' };
    pub const ROUNDED: BoxChars = BoxChars { tl: '╭', tr: '╮', bl: '╰', br: '╯', h: '─', v: '│' };
    pub const HEAVY: BoxChars = BoxChars { tl: '┏', tr: '┓', bl: '┗', br: '┛', h: '━', v: '┃' };
    pub const ASCII: BoxChars = BoxChars { tl: '+', tr: '+', bl: '+', br: '+', h: '-', v: '|' };
}

/// Border style for windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    #[default]
    Single,
    Double,
    Rounded,
    Heavy,
    Ascii,
}

impl BorderStyle {
    pub fn chars(&self) -> &'static BoxChars {
        match self {
            BorderStyle::Single => &box_styles::SINGLE,
            BorderStyle::Double => &box_styles::DOUBLE,
            BorderStyle::Rounded => &box_styles::ROUNDED,
            BorderStyle::Heavy => &box_styles::HEAVY,
            BorderStyle::Ascii => &box_styles::ASCII,
        }
    }

    /// Parse a style name, as given on the command line
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "single" => Some(BorderStyle::Single),
            "double" => Some(BorderStyle::Double),
            "rounded" => Some(BorderStyle::Rounded),
            "heavy" => Some(BorderStyle::Heavy),
            "ascii" => Some(BorderStyle::Ascii),
            _ => None,
        }
    }
}

/// A 2D array of cells, row-major
#[derive(Debug, Clone)]
pub struct Grid {
    pub cols: usize,
    pub rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self { cols, rows, cells: vec![Cell::blank(); cols * rows] }
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.cols && y < self.rows).then(|| y * self.cols + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        self.index(x, y).map(move |i| &mut self.cells[i])
    }

    pub fn set(&mut self, x: usize, y: usize, ch: char, fg: Color, bg: Color, attrs: Attrs) {
        if let Some(cell) = self.get_mut(x, y) {
            cell.set(ch, fg, bg, attrs);
        }
    }

    /// Blank every cell
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.set(' ', Color::White, Color::Black, Attrs::default());
        }
    }

    /// Write a string starting at (x, y); stops at the right edge.
    /// Returns the number of columns written.
    pub fn write_str(&mut self, x: usize, y: usize, s: &str, fg: Color, bg: Color, attrs: Attrs) -> usize {
        if y >= self.rows {
            return 0;
        }
        let mut written = 0;
        for (i, ch) in s.chars().enumerate() {
            let px = x + i;
            if px >= self.cols {
                break;
            }
            self.set(px, y, ch, fg, bg, attrs);
            written += 1;
        }
        written
    }

    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, ch: char, fg: Color, bg: Color, attrs: Attrs) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, ch, fg, bg, attrs);
            }
        }
    }

    /// Draw a box around the rectangle; no-op below 2x2
    pub fn draw_box(&mut self, x: usize, y: usize, w: usize, h: usize, style: &BoxChars, fg: Color, bg: Color) {
        if w < 2 || h < 2 {
            return;
        }
        let attrs = Attrs::default();

        self.set(x, y, style.tl, fg, bg, attrs);
        self.set(x + w - 1, y, style.tr, fg, bg, attrs);
        self.set(x, y + h - 1, style.bl, fg, bg, attrs);
        self.set(x + w - 1, y + h - 1, style.br, fg, bg, attrs);

        for dx in 1..w - 1 {
            self.set(x + dx, y, style.h, fg, bg, attrs);
            self.set(x + dx, y + h - 1, style.h, fg, bg, attrs);
        }
        for dy in 1..h - 1 {
            self.set(x, y + dy, style.v, fg, bg, attrs);
            self.set(x + w - 1, y + dy, style.v, fg, bg, attrs);
        }
    }

    pub fn mark_all_clean(&mut self) {
        for cell in &mut self.cells {
            cell.dirty = false;
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.cells.iter().any(|c| c.dirty)
    }

    /// All cells with their positions
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        let cols = self.cols;
        self.cells.iter().enumerate().map(move |(i, cell)| (i % cols, i / cols, cell))
    }

    /// Dirty cells in row-major order
    pub fn iter_dirty(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        self.iter().filter(|(_, _, cell)| cell.dirty)
    }

    /// Text of one row, for inspection
    pub fn row_text(&self, y: usize) -> String {
        (0..self.cols).filter_map(|x| self.get(x, y)).map(|c| c.ch).collect()
    }
}
