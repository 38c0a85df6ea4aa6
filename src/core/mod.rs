//! cellwin Core Module
//!
//! The drawing layer and the toolkit built on it:
//! - Cell, Grid: character cells and buffers of them
//! - Screen: regions composed onto the display
//! - ListWidget: a selectable list drawn inside a region
//! - WindowManager, Window: bordered, titled windows with optional parents
//! - Menu: a list widget bound to a window

pub mod cell;
pub mod grid;
pub mod list;
pub mod menu;
pub mod screen;
pub mod window;

pub use cell::{Attrs, Cell, Color};
pub use grid::{box_styles, BorderStyle, BoxChars, Grid};
pub use list::{ListArea, ListItem, ListRequest, ListWidget};
pub use menu::{Menu, MenuArea, MAX_MENU_MARK};
pub use screen::{Region, RegionId, Screen};
pub use window::{
    min_width_for, TitleAlign, Window, WindowId, WindowManager, MAX_WIN_TITLE, MIN_WIN_HEIGHT,
    MIN_WIN_WIDTH, TITLE_PADDING,
};
