//! ANSI Renderer
//!
//! Emits cursor addressing and SGR sequences for any ANSI/VT100-style
//! terminal, 16 colors. Tracks the cursor and current pen so that runs of
//! adjacent cells in the same colors cost one character each.

use super::Renderer;
use crate::core::{Attrs, Cell, Color, Grid};

const CSI: &str = "\x1b[";

/// ANSI renderer
pub struct AnsiRenderer {
    /// Where the terminal cursor is believed to be, if known
    cursor: Option<(usize, usize)>,
    fg: Color,
    bg: Color,
    attrs: Attrs,
    /// False until the pen has been set explicitly
    pen_known: bool,
}

impl AnsiRenderer {
    pub fn new() -> Self {
        Self {
            cursor: None,
            fg: Color::White,
            bg: Color::Black,
            attrs: Attrs::default(),
            pen_known: false,
        }
    }

    /// Forget the tracked cursor and pen
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn move_cursor(&mut self, out: &mut String, x: usize, y: usize) {
        if self.cursor != Some((x, y)) {
            out.push_str(&format!("{}{};{}H", CSI, y + 1, x + 1));
        }
        self.cursor = Some((x, y));
    }

    fn sgr(&mut self, out: &mut String, fg: Color, bg: Color, attrs: Attrs) {
        let mut codes: Vec<u8> = Vec::new();

        if !self.pen_known || self.attrs.needs_reset_for(&attrs) {
            codes.push(0);
            // After a reset the terminal is in its default pen, which is not
            // necessarily White on Black, so force both colors out.
            codes.extend(Attrs::default().sgr_delta(&attrs));
            codes.push(fg.fg_code());
            codes.push(bg.bg_code());
        } else {
            codes.extend(self.attrs.sgr_delta(&attrs));
            if fg != self.fg {
                codes.push(fg.fg_code());
            }
            if bg != self.bg {
                codes.push(bg.bg_code());
            }
        }

        self.fg = fg;
        self.bg = bg;
        self.attrs = attrs;
        self.pen_known = true;

        if !codes.is_empty() {
            let code_strs: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
            out.push_str(&format!("{}{}m", CSI, code_strs.join(";")));
        }
    }

    fn render_cell(&mut self, out: &mut String, x: usize, y: usize, cell: &Cell) {
        self.move_cursor(out, x, y);
        self.sgr(out, cell.fg, cell.bg, cell.attrs);
        // Control characters would corrupt the terminal state
        let ch = if cell.ch < ' ' || cell.ch == '\x7f' { ' ' } else { cell.ch };
        out.push(ch);
        self.cursor = Some((x + 1, y));
    }
}

impl Default for AnsiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for AnsiRenderer {
    fn name(&self) -> &str {
        "ansi"
    }

    fn init(&mut self) -> String {
        self.reset();
        // Hide cursor, clear, home
        format!("{}?25l{}2J{}H", CSI, CSI, CSI)
    }

    fn shutdown(&self) -> String {
        format!("{}0m{}?25h{}2J{}H", CSI, CSI, CSI, CSI)
    }

    fn clear(&self) -> String {
        format!("{}2J{}H", CSI, CSI)
    }

    fn render_full(&mut self, grid: &Grid) -> String {
        let mut out = String::with_capacity(grid.cols * grid.rows * 4);
        self.reset();

        for (x, y, cell) in grid.iter() {
            self.render_cell(&mut out, x, y, cell);
        }
        out
    }

    fn render_dirty(&mut self, grid: &Grid) -> String {
        let dirty_count = grid.iter_dirty().count();

        // Mostly dirty: cheaper to repaint everything
        if dirty_count > grid.cols * grid.rows / 2 {
            return self.render_full(grid);
        }

        let mut out = String::with_capacity(dirty_count * 12);
        // iter_dirty yields row-major, so adjacent cells skip cursor moves
        for (x, y, cell) in grid.iter_dirty() {
            self.render_cell(&mut out, x, y, cell);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_init() {
        let mut renderer = AnsiRenderer::new();
        let init = renderer.init();
        assert!(init.contains("\x1b[?25l"));
        assert!(init.contains("\x1b[2J"));
    }

    #[test]
    fn test_render_dirty_only_touches_changed_cells() {
        let mut renderer = AnsiRenderer::new();
        let mut grid = Grid::new(10, 5);
        grid.mark_all_clean();
        grid.set(3, 2, 'X', Color::Red, Color::Black, Attrs::default());
        grid.set(4, 2, 'Y', Color::Red, Color::Black, Attrs::default());

        let output = renderer.render_dirty(&grid);
        assert!(output.contains("\x1b[3;4H"));
        assert!(output.contains("31"));
        assert!(output.ends_with("XY"));
        // Adjacent cell reuses the cursor position
        assert_eq!(output.matches('H').count(), 1);
    }

    #[test]
    fn test_reverse_then_plain_resets() {
        let mut renderer = AnsiRenderer::new();
        let mut grid = Grid::new(4, 1);
        grid.mark_all_clean();
        grid.set(0, 0, 'A', Color::White, Color::Black, Attrs::new().reverse());
        grid.set(1, 0, 'B', Color::White, Color::Black, Attrs::default());

        let output = renderer.render_dirty(&grid);
        assert!(output.contains("\x1b[0;7;37;40m"));
        assert!(output.contains("\x1b[0;37;40m"));
    }

    #[test]
    fn test_render_full_sanitizes_control_chars() {
        let mut renderer = AnsiRenderer::new();
        let mut grid = Grid::new(2, 1);
        grid.set(0, 0, '\x07', Color::White, Color::Black, Attrs::default());
        let output = renderer.render_full(&grid);
        assert!(!output.contains('\x07'));
    }
}
