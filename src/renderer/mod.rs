//! cellwin Renderer Module
//!
//! Renderers convert the composed display grid into terminal output.

pub mod ansi;

pub use ansi::AnsiRenderer;

use crate::core::Grid;

/// Trait for renderers
pub trait Renderer {
    /// Renderer name
    fn name(&self) -> &str;

    /// Sequence written once when the screen starts
    fn init(&mut self) -> String;

    /// Sequence written once when the screen stops
    fn shutdown(&self) -> String;

    /// Clear the terminal
    fn clear(&self) -> String;

    /// Render the entire grid
    fn render_full(&mut self, grid: &Grid) -> String;

    /// Render only dirty cells
    fn render_dirty(&mut self, grid: &Grid) -> String;

    /// Pick a render method
    fn render(&mut self, grid: &Grid, force_full: bool) -> String {
        if force_full {
            self.render_full(grid)
        } else {
            self.render_dirty(grid)
        }
    }
}
