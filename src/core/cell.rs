//! cellwin Cell - One character position on the screen
//!
//! A cell carries:
//! - Character (Unicode codepoint)
//! - Foreground and background color (16-color ANSI palette)
//! - Attributes (bold, dim, underline, reverse)

use serde::{Deserialize, Serialize};

/// Standard ANSI 16-color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    #[default]
    White = 7,
    BrightBlack = 8,
    BrightRed = 9,
    BrightGreen = 10,
    BrightYellow = 11,
    BrightBlue = 12,
    BrightMagenta = 13,
    BrightCyan = 14,
    BrightWhite = 15,
}

impl Color {
    /// SGR parameter selecting this color as foreground
    pub fn fg_code(self) -> u8 {
        let v = self as u8;
        if v < 8 { 30 + v } else { 90 + (v - 8) }
    }

    /// SGR parameter selecting this color as background
    pub fn bg_code(self) -> u8 {
        let v = self as u8;
        if v < 8 { 40 + v } else { 100 + (v - 8) }
    }
}

/// Cell attributes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Attrs {
    pub bold: bool,
    pub dim: bool,
    pub underline: bool,
    pub reverse: bool,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// True when `self` has an attribute switched on that `next` drops.
    /// SGR can only clear those with a full reset.
    pub fn needs_reset_for(&self, next: &Attrs) -> bool {
        (self.bold && !next.bold)
            || (self.dim && !next.dim)
            || (self.underline && !next.underline)
            || (self.reverse && !next.reverse)
    }

    /// SGR parameters that switch on what `next` has and `self` lacks
    pub fn sgr_delta(&self, next: &Attrs) -> Vec<u8> {
        let mut codes = Vec::new();
        if next.bold && !self.bold { codes.push(1); }
        if next.dim && !self.dim { codes.push(2); }
        if next.underline && !self.underline { codes.push(4); }
        if next.reverse && !self.reverse { codes.push(7); }
        codes
    }
}

/// A single character cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
    pub attrs: Attrs,
    /// Changed since the last flush
    pub dirty: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}

impl Cell {
    /// A space in the default colors, marked dirty
    pub fn blank() -> Self {
        Self {
            ch: ' ',
            fg: Color::White,
            bg: Color::Black,
            attrs: Attrs::default(),
            dirty: true,
        }
    }

    /// Overwrite every visible property; marks dirty only on change
    pub fn set(&mut self, ch: char, fg: Color, bg: Color, attrs: Attrs) {
        if self.ch != ch || self.fg != fg || self.bg != bg || self.attrs != attrs {
            self.ch = ch;
            self.fg = fg;
            self.bg = bg;
            self.attrs = attrs;
            self.dirty = true;
        }
    }

    /// Copy the visible properties of another cell
    pub fn copy_from(&mut self, other: &Cell) {
        self.set(other.ch, other.fg, other.bg, other.attrs);
    }

    pub fn is_blank(&self) -> bool {
        self.ch == ' ' && self.attrs == Attrs::default()
    }
}
