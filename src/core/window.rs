//! cellwin Window Manager
//!
//! Windows are bordered, titled rectangles. Each one owns a screen region;
//! every move, resize or refresh throws the region away and draws a fresh
//! one at the new geometry.
//!
//! A window may be placed relative to a parent. Its stored x/y are then
//! offsets, and the absolute origin is resolved from the parent's current
//! position at draw time:
//!
//! ```text
//! abs_x = parent_abs_x + parent.cols + x
//! abs_y = parent_abs_y + y
//! ```
//!
//! so a relative window sits to the right of its parent. Parents are held as
//! [`WindowId`] handles into the manager's arena and are never owned by the
//! child.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};

use super::cell::{Attrs, Color};
use super::screen::{RegionId, Screen};
use crate::config::Config;
use crate::error::{Error, Result};

new_key_type! {
    /// Handle to a window owned by a [`WindowManager`]
    pub struct WindowId;
}

/// Narrowest window regardless of title
pub const MIN_WIN_WIDTH: usize = 10;
/// Shortest window: room for the top and bottom border
pub const MIN_WIN_HEIGHT: usize = 2;
/// Longest title, in characters
pub const MAX_WIN_TITLE: usize = 64;
/// Columns added to the title length to get the minimum width
pub const TITLE_PADDING: usize = 6;
/// The size label starts this many columns left of the right edge
const SIZE_LABEL_INSET: usize = 10;

/// Title alignment on the top edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Minimum width for a window carrying `title`
pub fn min_width_for(title: &str) -> usize {
    MIN_WIN_WIDTH.max(title.chars().count() + TITLE_PADDING)
}

/// A window on the screen
#[derive(Debug, Clone)]
pub struct Window {
    /// Absolute position, or offsets from the parent when relative
    x: i32,
    y: i32,
    cols: usize,
    rows: usize,
    title: String,
    parent: Option<WindowId>,
    region: RegionId,
}

impl Window {
    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn parent(&self) -> Option<WindowId> {
        self.parent
    }

    /// Positioned relative to a parent
    pub fn is_relative(&self) -> bool {
        self.parent.is_some()
    }

    /// The region currently drawn for this window
    pub fn region(&self) -> RegionId {
        self.region
    }

    /// Usable columns and rows inside the border
    pub fn interior(&self) -> (usize, usize) {
        (self.cols.saturating_sub(2), self.rows.saturating_sub(2))
    }
}

/// Owns the screen and every window drawn on it
pub struct WindowManager {
    screen: Screen,
    windows: SlotMap<WindowId, Window>,
    config: Config,
}

impl WindowManager {
    pub fn new(screen: Screen, config: Config) -> Self {
        Self {
            screen,
            windows: SlotMap::with_key(),
            config,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Look up a window
    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(id)
    }

    /// Look up a window, failing on a stale handle
    pub fn window(&self, id: WindowId) -> Result<&Window> {
        self.windows.get(id).ok_or(Error::StaleWindow)
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Windows whose parent is `id`
    pub fn children(&self, id: WindowId) -> Vec<WindowId> {
        self.windows
            .iter()
            .filter(|(_, w)| w.parent == Some(id))
            .map(|(cid, _)| cid)
            .collect()
    }

    /// Absolute screen origin, resolved through the parent chain
    pub fn origin(&self, id: WindowId) -> Result<(i32, i32)> {
        let w = self.window(id)?;
        resolve_origin(&self.windows, w.x, w.y, w.parent)
    }

    /// Create and draw a window.
    ///
    /// The width is raised to [`min_width_for`] the title and the height to
    /// [`MIN_WIN_HEIGHT`]. With a parent, `x`/`y` are offsets from it.
    pub fn create_window(
        &mut self,
        x: i32,
        y: i32,
        cols: usize,
        rows: usize,
        title: &str,
        parent: Option<WindowId>,
    ) -> Result<WindowId> {
        let len = title.chars().count();
        if len > MAX_WIN_TITLE {
            return Err(Error::TitleTooLong { len, max: MAX_WIN_TITLE });
        }
        if let Some(pid) = parent {
            if !self.windows.contains_key(pid) {
                return Err(Error::StaleWindow);
            }
        }

        let cols = cols.max(min_width_for(title));
        let rows = rows.max(MIN_WIN_HEIGHT);
        let origin = resolve_origin(&self.windows, x, y, parent)?;
        let region = instantiate(&mut self.screen, &self.config, origin, cols, rows, title)?;

        let id = self.windows.insert(Window {
            x,
            y,
            cols,
            rows,
            title: title.to_string(),
            parent,
            region,
        });
        debug!("Window {:?} '{}' created at {:?} size {}x{}", id, title, origin, cols, rows);
        Ok(id)
    }

    /// Move by a delta
    pub fn move_by(&mut self, id: WindowId, dx: i32, dy: i32) -> Result<()> {
        let w = self.windows.get_mut(id).ok_or(Error::StaleWindow)?;
        w.x = w.x.saturating_add(dx);
        w.y = w.y.saturating_add(dy);
        self.refresh(id)
    }

    /// Move to a position (offsets when relative)
    pub fn move_to(&mut self, id: WindowId, x: i32, y: i32) -> Result<()> {
        let w = self.windows.get_mut(id).ok_or(Error::StaleWindow)?;
        w.x = x;
        w.y = y;
        self.refresh(id)
    }

    /// Resize by a delta, keeping the minimum size
    pub fn resize_by(&mut self, id: WindowId, dcols: i32, drows: i32) -> Result<()> {
        let w = self.windows.get_mut(id).ok_or(Error::StaleWindow)?;
        let cols = w.cols.saturating_add_signed(dcols as isize);
        let rows = w.rows.saturating_add_signed(drows as isize);
        w.cols = cols.max(min_width_for(&w.title));
        w.rows = rows.max(MIN_WIN_HEIGHT);
        self.refresh(id)
    }

    /// Resize to a size, keeping the minimum size
    pub fn resize_to(&mut self, id: WindowId, cols: usize, rows: usize) -> Result<()> {
        let w = self.windows.get_mut(id).ok_or(Error::StaleWindow)?;
        w.cols = cols.max(min_width_for(&w.title));
        w.rows = rows.max(MIN_WIN_HEIGHT);
        self.refresh(id)
    }

    /// Tear the region down and draw it again at the current geometry.
    ///
    /// A relative window picks up wherever its parent is now.
    pub fn refresh(&mut self, id: WindowId) -> Result<()> {
        let Self { screen, windows, config } = self;
        let w = windows.get(id).ok_or(Error::StaleWindow)?;
        let origin = resolve_origin(windows, w.x, w.y, w.parent)?;

        destroy_region(screen, w.region)?;
        let region = instantiate(screen, config, origin, w.cols, w.rows, &w.title)?;

        if let Some(w) = windows.get_mut(id) {
            w.region = region;
        }
        Ok(())
    }

    /// Write text at a window-relative position and show it.
    /// (0, 0) is the top-left border corner.
    pub fn print(&mut self, id: WindowId, x: usize, y: usize, text: &str) -> Result<()> {
        let region = self.window(id)?.region;
        self.screen.print(region, x, y, text, Color::White, Attrs::default());
        self.screen.refresh(region)?;
        Ok(())
    }

    /// Erase and remove a window.
    ///
    /// Children placed relative to it are orphaned: each becomes an absolute
    /// window at the origin it resolved to just before the parent went away.
    /// Returns the orphaned children.
    pub fn destroy(&mut self, id: WindowId) -> Result<Vec<WindowId>> {
        if !self.windows.contains_key(id) {
            return Err(Error::StaleWindow);
        }

        let children = self.children(id);
        for &child in &children {
            let (ax, ay) = self.origin(child)?;
            if let Some(c) = self.windows.get_mut(child) {
                c.x = ax;
                c.y = ay;
                c.parent = None;
                info!("Window {:?} '{}' orphaned at ({}, {})", child, c.title, ax, ay);
            }
        }

        if let Some(window) = self.windows.remove(id) {
            destroy_region(&mut self.screen, window.region)?;
            debug!("Window {:?} '{}' destroyed", id, window.title);
        }
        Ok(children)
    }
}

fn resolve_origin(
    windows: &SlotMap<WindowId, Window>,
    x: i32,
    y: i32,
    parent: Option<WindowId>,
) -> Result<(i32, i32)> {
    match parent {
        None => Ok((x, y)),
        Some(pid) => {
            let p = windows.get(pid).ok_or(Error::StaleWindow)?;
            let (px, py) = resolve_origin(windows, p.x, p.y, p.parent)?;
            let cols = i32::try_from(p.cols).unwrap_or(i32::MAX);
            Ok((px.saturating_add(cols).saturating_add(x), py.saturating_add(y)))
        }
    }
}

fn title_column(align: TitleAlign, cols: usize, label_len: usize) -> usize {
    match align {
        TitleAlign::Left => 2,
        TitleAlign::Center => (cols.saturating_sub(label_len) / 2).max(1),
        TitleAlign::Right => cols.saturating_sub(label_len + 2).max(1),
    }
}

/// Allocate, decorate and show a window's region
fn instantiate(
    screen: &mut Screen,
    config: &Config,
    (x, y): (i32, i32),
    cols: usize,
    rows: usize,
    title: &str,
) -> Result<RegionId> {
    let region = screen.new_region(x, y, cols, rows);
    screen.draw_border(region, config.border, config.border_color);

    if !title.is_empty() {
        let label = format!(" {} ", title);
        let col = title_column(config.title_align, cols, label.chars().count());
        screen.print(region, col, 0, &label, config.title_color, Attrs::new().bold());
    }

    if config.show_size {
        let size = format!(" {}x{} ", cols, rows);
        // Never over the bottom-left corner
        let col = cols.saturating_sub(SIZE_LABEL_INSET).max(1);
        screen.print(region, col, rows - 1, &size, config.border_color, Attrs::default());
    }

    screen.refresh(region)?;
    Ok(region)
}

/// Blank a region on screen, then release it
fn destroy_region(screen: &mut Screen, region: RegionId) -> Result<()> {
    screen.erase(region);
    screen.refresh(region)?;
    screen.delete_region(region);
    Ok(())
}
