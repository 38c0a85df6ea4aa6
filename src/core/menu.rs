//! cellwin Menu
//!
//! A menu binds a [`ListWidget`] to an area inside a window. The widget is
//! drawn into the window's region, so whenever the window is redrawn (and its
//! region replaced) the menu has to be rebuilt; [`Menu::refresh`] does that,
//! and [`Menu::update`] does it on its own when it notices the region moved
//! underneath it.
//!
//! The menu holds its window by handle only. The caller drives it from its
//! own input loop:
//!
//! ```no_run
//! # use cellwin::core::{Menu, MenuArea, Screen, WindowManager};
//! # use cellwin::{Config, InputEvent, Key};
//! # fn main() -> cellwin::Result<()> {
//! let mut wm = WindowManager::new(Screen::headless(80, 24), Config::default());
//! let win = wm.create_window(2, 2, 40, 10, "Pick one", None)?;
//! let mut menu = Menu::new(&mut wm, win, MenuArea::new(2, 2, 30, 4),
//!     &["a:", "b:"], &["First", "Second"], "*")?;
//! if let Some(index) = menu.update(&mut wm, &InputEvent::key(Key::Enter))? {
//!     println!("picked {}", index);
//! }
//! menu.destroy(&mut wm)?;
//! # Ok(())
//! # }
//! ```

use log::{debug, warn};

use super::list::{ListArea, ListItem, ListRequest, ListWidget};
use super::window::{Window, WindowId, WindowManager};
use crate::error::{Error, Result};
use crate::input::{InputEvent, Key};

/// Longest mark glyph, in characters
pub const MAX_MENU_MARK: usize = 64;

/// Position and size of a menu, relative to its window's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuArea {
    pub x: i32,
    pub y: i32,
    pub cols: usize,
    pub rows: usize,
}

impl MenuArea {
    pub fn new(x: i32, y: i32, cols: usize, rows: usize) -> Self {
        Self { x, y, cols, rows }
    }

    /// Inside the border of `window`
    fn fits(&self, window: &Window) -> bool {
        if self.x < 1 || self.y < 1 {
            return false;
        }
        let right = (self.x as usize).checked_add(self.cols);
        let bottom = (self.y as usize).checked_add(self.rows);
        right.map_or(false, |r| r < window.cols()) && bottom.map_or(false, |b| b < window.rows())
    }

    fn check(&self, window: &Window) -> Result<()> {
        if self.fits(window) {
            Ok(())
        } else {
            Err(Error::MenuOutOfBounds {
                x: self.x,
                y: self.y,
                cols: self.cols,
                rows: self.rows,
                win_cols: window.cols(),
                win_rows: window.rows(),
            })
        }
    }
}

/// A navigable list of items inside a window
#[derive(Debug)]
pub struct Menu {
    window: WindowId,
    area: MenuArea,
    mark: String,
    items: Vec<ListItem>,
    list: ListWidget,
}

impl Menu {
    /// Build and post a menu.
    ///
    /// `labels` and `descriptions` pair up by index and must be the same,
    /// non-zero length. The area must lie inside the window's border.
    pub fn new<S: AsRef<str>>(
        wm: &mut WindowManager,
        window: WindowId,
        area: MenuArea,
        labels: &[S],
        descriptions: &[S],
        mark: &str,
    ) -> Result<Self> {
        let mark_len = mark.chars().count();
        if mark_len > MAX_MENU_MARK {
            return Err(Error::MarkTooLong { len: mark_len, max: MAX_MENU_MARK });
        }
        if labels.len() != descriptions.len() {
            return Err(Error::ItemCountMismatch {
                labels: labels.len(),
                descriptions: descriptions.len(),
            });
        }
        if labels.is_empty() {
            return Err(Error::EmptyMenu);
        }
        area.check(wm.window(window)?)?;

        let items: Vec<ListItem> = labels
            .iter()
            .zip(descriptions)
            .map(|(label, desc)| ListItem::new(label.as_ref(), desc.as_ref()))
            .collect();

        let list = post_list(wm, window, area, items.clone(), mark, 0)?;
        debug!("Menu with {} items posted on window {:?}", items.len(), window);

        Ok(Self {
            window,
            area,
            mark: mark.to_string(),
            items,
            list,
        })
    }

    /// The window this menu is drawn in
    pub fn window(&self) -> WindowId {
        self.window
    }

    pub fn area(&self) -> MenuArea {
        self.area
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn mark(&self) -> &str {
        &self.mark
    }

    /// Index of the highlighted item
    pub fn selected(&self) -> usize {
        self.list.current()
    }

    pub fn is_posted(&self) -> bool {
        self.list.is_posted()
    }

    /// Shift the menu inside its window, then rebuild it there.
    /// A move that would leave the window interior is refused.
    pub fn move_by(&mut self, wm: &mut WindowManager, dx: i32, dy: i32) -> Result<()> {
        let moved = MenuArea {
            x: self.area.x.saturating_add(dx),
            y: self.area.y.saturating_add(dy),
            ..self.area
        };
        moved.check(wm.window(self.window)?)?;
        self.area = moved;
        self.refresh(wm)
    }

    /// Tear the widget down and rebuild it on the window's current region.
    /// The highlighted item carries over.
    pub fn refresh(&mut self, wm: &mut WindowManager) -> Result<()> {
        self.area.check(wm.window(self.window)?)?;
        let current = self.list.current();
        self.list.unpost(wm.screen_mut())?;
        self.list = post_list(wm, self.window, self.area, self.items.clone(), &self.mark, current)?;
        Ok(())
    }

    /// Apply one input event.
    ///
    /// Down and Up move the highlight one item, stopping at either end.
    /// Enter returns the highlighted index. Everything else returns `None`.
    /// Fails with [`Error::StaleWindow`] once the window is gone, whatever the event.
    pub fn update(&mut self, wm: &mut WindowManager, event: &InputEvent) -> Result<Option<usize>> {
        let region = wm.window(self.window)?.region();
        if event.is_confirm() {
            return Ok(Some(self.list.current()));
        }

        let request = match event {
            InputEvent::Key { key: Key::Down } => ListRequest::Down,
            InputEvent::Key { key: Key::Up } => ListRequest::Up,
            _ => return Ok(None),
        };

        if region != self.list.area().region {
            warn!("Menu on window {:?} lost its region; rebuilding", self.window);
            self.refresh(wm)?;
        }

        if self.list.drive(request) {
            self.list.draw(wm.screen_mut())?;
        }
        Ok(None)
    }

    /// Unpost and release the menu. The window may already be gone.
    pub fn destroy(mut self, wm: &mut WindowManager) -> Result<()> {
        let live = wm
            .get(self.window)
            .map_or(false, |w| w.region() == self.list.area().region);
        if live {
            self.list.unpost(wm.screen_mut())?;
        }
        debug!("Menu on window {:?} destroyed", self.window);
        Ok(())
    }
}

/// Build a list on the window's current region and post it
fn post_list(
    wm: &mut WindowManager,
    window: WindowId,
    area: MenuArea,
    items: Vec<ListItem>,
    mark: &str,
    current: usize,
) -> Result<ListWidget> {
    let region = wm.window(window)?.region();
    let list_area = ListArea {
        region,
        x: area.x as usize,
        y: area.y as usize,
        cols: area.cols,
        rows: area.rows,
    };
    let mut list = ListWidget::new(items, mark, list_area);
    list.set_current(current);
    list.post(wm.screen_mut())?;
    Ok(list)
}
