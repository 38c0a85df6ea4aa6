//! cellwin Screen - The drawing layer
//!
//! A screen owns the composed display grid and an arena of regions. A region
//! is a rectangular cell buffer with an absolute origin; drawing into it is
//! invisible until the region is refreshed, which copies it onto the display
//! and flushes the changed cells to the output sink. Later refreshes paint
//! over earlier ones where regions overlap.
//!
//! Region handles are generational: once a region is deleted its handle
//! never resolves again, even if the slot is reused.

use std::io::{self, Write};

use log::debug;
use slotmap::{new_key_type, SlotMap};

use super::cell::{Attrs, Color};
use super::grid::{BorderStyle, Grid};
use crate::renderer::{AnsiRenderer, Renderer};

new_key_type! {
    /// Handle to a drawn region
    pub struct RegionId;
}

/// A rectangular drawing surface placed on the screen
#[derive(Debug)]
pub struct Region {
    /// Absolute origin; may lie partly off-screen
    pub x: i32,
    pub y: i32,
    pub grid: Grid,
}

impl Region {
    pub fn cols(&self) -> usize {
        self.grid.cols
    }

    pub fn rows(&self) -> usize {
        self.grid.rows
    }
}

/// The display and its regions
pub struct Screen {
    display: Grid,
    regions: SlotMap<RegionId, Region>,
    renderer: Box<dyn Renderer>,
    out: Box<dyn Write>,
}

impl Screen {
    /// Create a screen writing ANSI output to `out`
    pub fn new(cols: usize, rows: usize, out: Box<dyn Write>) -> Self {
        Self {
            display: Grid::new(cols, rows),
            regions: SlotMap::with_key(),
            renderer: Box::new(AnsiRenderer::new()),
            out,
        }
    }

    /// A screen that discards its output; the display grid is still kept
    pub fn headless(cols: usize, rows: usize) -> Self {
        Self::new(cols, rows, Box::new(io::sink()))
    }

    /// Replace the renderer
    pub fn with_renderer(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn cols(&self) -> usize {
        self.display.cols
    }

    pub fn rows(&self) -> usize {
        self.display.rows
    }

    /// The composed display as last refreshed
    pub fn display(&self) -> &Grid {
        &self.display
    }

    /// Write the renderer's start sequence and paint the blank display
    pub fn begin(&mut self) -> io::Result<()> {
        let init = self.renderer.init();
        debug!("Screen {}x{} starting with {} renderer", self.cols(), self.rows(), self.renderer.name());
        self.out.write_all(init.as_bytes())?;
        let full = self.renderer.render_full(&self.display);
        self.out.write_all(full.as_bytes())?;
        self.display.mark_all_clean();
        self.out.flush()
    }

    /// Write the renderer's stop sequence
    pub fn finish(&mut self) -> io::Result<()> {
        let shutdown = self.renderer.shutdown();
        self.out.write_all(shutdown.as_bytes())?;
        self.out.flush()
    }

    /// Allocate a blank region
    pub fn new_region(&mut self, x: i32, y: i32, cols: usize, rows: usize) -> RegionId {
        let id = self.regions.insert(Region { x, y, grid: Grid::new(cols, rows) });
        debug!("Region {:?} created at ({}, {}) size {}x{}", id, x, y, cols, rows);
        id
    }

    /// Release a region. Its cells stay on the display until painted over.
    pub fn delete_region(&mut self, id: RegionId) -> bool {
        let removed = self.regions.remove(id).is_some();
        if removed {
            debug!("Region {:?} deleted", id);
        }
        removed
    }

    pub fn contains(&self, id: RegionId) -> bool {
        self.regions.contains_key(id)
    }

    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id)
    }

    pub fn region_grid_mut(&mut self, id: RegionId) -> Option<&mut Grid> {
        self.regions.get_mut(id).map(|r| &mut r.grid)
    }

    /// Draw a border along the region's edges
    pub fn draw_border(&mut self, id: RegionId, style: BorderStyle, fg: Color) -> bool {
        let Some(grid) = self.region_grid_mut(id) else {
            return false;
        };
        let (cols, rows) = (grid.cols, grid.rows);
        grid.draw_box(0, 0, cols, rows, style.chars(), fg, Color::Black);
        true
    }

    /// Blank the whole region, border included
    pub fn erase(&mut self, id: RegionId) -> bool {
        let Some(grid) = self.region_grid_mut(id) else {
            return false;
        };
        grid.clear();
        true
    }

    /// Place text at a region-relative position, clipped to the region
    pub fn print(&mut self, id: RegionId, x: usize, y: usize, text: &str, fg: Color, attrs: Attrs) -> bool {
        let Some(grid) = self.region_grid_mut(id) else {
            return false;
        };
        grid.write_str(x, y, text, fg, Color::Black, attrs);
        true
    }

    /// Copy the region onto the display and flush what changed
    pub fn refresh(&mut self, id: RegionId) -> io::Result<()> {
        let Some(region) = self.regions.get(id) else {
            debug!("Refresh of stale region {:?} ignored", id);
            return Ok(());
        };

        for (cx, cy, cell) in region.grid.iter() {
            let tx = region.x.saturating_add(i32::try_from(cx).unwrap_or(i32::MAX));
            let ty = region.y.saturating_add(i32::try_from(cy).unwrap_or(i32::MAX));
            if tx < 0 || ty < 0 {
                continue;
            }
            if let Some(target) = self.display.get_mut(tx as usize, ty as usize) {
                target.copy_from(cell);
            }
        }

        self.flush()
    }

    /// Send dirty display cells to the sink
    pub fn flush(&mut self) -> io::Result<()> {
        if !self.display.is_dirty() {
            return Ok(());
        }
        let output = self.renderer.render_dirty(&self.display);
        self.display.mark_all_clean();
        self.out.write_all(output.as_bytes())?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Sink that lets the test read back what was written
    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_region_invisible_until_refresh() {
        let mut screen = Screen::headless(20, 10);
        let r = screen.new_region(2, 1, 5, 3);
        screen.draw_border(r, BorderStyle::Ascii, Color::White);
        assert_eq!(screen.display().get(2, 1).unwrap().ch, ' ');

        screen.refresh(r).unwrap();
        assert_eq!(screen.display().get(2, 1).unwrap().ch, '+');
        assert_eq!(screen.display().get(6, 3).unwrap().ch, '+');
        assert_eq!(screen.display().get(4, 1).unwrap().ch, '-');
    }

    #[test]
    fn test_refresh_clips_offscreen_cells() {
        let mut screen = Screen::headless(5, 5);
        let r = screen.new_region(-2, 3, 4, 4);
        screen.draw_border(r, BorderStyle::Ascii, Color::White);
        screen.refresh(r).unwrap();
        // Column 1 of the region lands on display column -1, column 3 on 1
        assert_eq!(screen.display().get(0, 3).unwrap().ch, '-');
        assert_eq!(screen.display().get(1, 3).unwrap().ch, '+');
        assert_eq!(screen.display().get(1, 4).unwrap().ch, '|');
    }

    #[test]
    fn test_deleted_region_handle_is_stale() {
        let mut screen = Screen::headless(10, 10);
        let r = screen.new_region(0, 0, 3, 3);
        assert!(screen.delete_region(r));
        assert!(!screen.contains(r));
        assert!(!screen.print(r, 0, 0, "x", Color::White, Attrs::default()));
        assert!(!screen.delete_region(r));

        // Reusing the slot does not revive the old handle
        let r2 = screen.new_region(0, 0, 3, 3);
        assert_ne!(r, r2);
        assert!(!screen.contains(r));
    }

    #[test]
    fn test_erase_then_refresh_blanks_display() {
        let mut screen = Screen::headless(10, 5);
        let r = screen.new_region(0, 0, 6, 3);
        screen.draw_border(r, BorderStyle::Single, Color::White);
        screen.print(r, 1, 1, "abc", Color::White, Attrs::default());
        screen.refresh(r).unwrap();
        assert_eq!(screen.display().row_text(1), "│abc │    ");

        screen.erase(r);
        screen.refresh(r).unwrap();
        assert!(screen.display().iter().all(|(_, _, c)| c.is_blank()));
    }

    #[test]
    fn test_flush_writes_only_changes() {
        let buf = SharedBuf::default();
        let mut screen = Screen::new(10, 3, Box::new(buf.clone()));
        screen.begin().unwrap();
        buf.0.borrow_mut().clear();

        let r = screen.new_region(1, 1, 2, 1);
        screen.print(r, 0, 0, "hi", Color::White, Attrs::default());
        screen.refresh(r).unwrap();
        let written = String::from_utf8(buf.0.borrow().clone()).unwrap();
        assert_eq!(written, "\x1b[2;2Hhi");

        buf.0.borrow_mut().clear();
        screen.refresh(r).unwrap();
        assert!(buf.0.borrow().is_empty());
    }
}
