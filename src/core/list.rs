//! cellwin List - A selectable list widget
//!
//! The list draws one item per row inside an area of a region:
//!
//! ```text
//! *1: Choice 1        <- current item, drawn in reverse video
//!  2: Choice 2
//! ```
//!
//! The mark glyph precedes the current item and is replaced by blanks on the
//! other rows. When there are more items than rows, the visible window scrolls
//! so the current item stays in view.

use std::io;

use super::cell::{Attrs, Color};
use super::screen::{RegionId, Screen};

/// One entry of a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub label: String,
    pub description: String,
}

impl ListItem {
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self { label: label.into(), description: description.into() }
    }
}

/// Navigation requests understood by [`ListWidget::drive`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListRequest {
    Up,
    Down,
}

/// Where a list is drawn: a sub-rectangle of a region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListArea {
    pub region: RegionId,
    pub x: usize,
    pub y: usize,
    pub cols: usize,
    pub rows: usize,
}

/// A navigable list bound to a screen area
#[derive(Debug)]
pub struct ListWidget {
    items: Vec<ListItem>,
    mark: String,
    current: usize,
    /// First visible item
    top: usize,
    area: ListArea,
    posted: bool,
}

impl ListWidget {
    /// Build an unposted list over `area`
    pub fn new(items: Vec<ListItem>, mark: impl Into<String>, area: ListArea) -> Self {
        Self {
            items,
            mark: mark.into(),
            current: 0,
            top: 0,
            area,
            posted: false,
        }
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn area(&self) -> ListArea {
        self.area
    }

    pub fn is_posted(&self) -> bool {
        self.posted
    }

    /// Index of the highlighted item
    pub fn current(&self) -> usize {
        self.current
    }

    /// Move the highlight directly; out-of-range indexes clamp to the last item
    pub fn set_current(&mut self, index: usize) {
        self.current = index.min(self.items.len().saturating_sub(1));
        self.scroll_to_current();
    }

    /// Apply a navigation request. Returns false when the request hits
    /// the first or last item.
    pub fn drive(&mut self, request: ListRequest) -> bool {
        let moved = match request {
            ListRequest::Up if self.current > 0 => {
                self.current -= 1;
                true
            }
            ListRequest::Down if self.current + 1 < self.items.len() => {
                self.current += 1;
                true
            }
            _ => false,
        };
        if moved {
            self.scroll_to_current();
        }
        moved
    }

    fn scroll_to_current(&mut self) {
        let rows = self.area.rows.max(1);
        if self.current < self.top {
            self.top = self.current;
        } else if self.current >= self.top + rows {
            self.top = self.current + 1 - rows;
        }
    }

    /// Make the list visible and responsive
    pub fn post(&mut self, screen: &mut Screen) -> io::Result<()> {
        self.posted = true;
        self.draw(screen)
    }

    /// Blank the list's area and stop drawing it
    pub fn unpost(&mut self, screen: &mut Screen) -> io::Result<()> {
        if !self.posted {
            return Ok(());
        }
        self.posted = false;
        let a = self.area;
        if let Some(grid) = screen.region_grid_mut(a.region) {
            grid.fill_rect(a.x, a.y, a.cols, a.rows, ' ', Color::White, Color::Black, Attrs::default());
            screen.refresh(a.region)?;
        }
        Ok(())
    }

    /// Redraw the visible rows into the bound region and refresh it.
    /// Nothing happens when unposted or when the region is gone.
    pub fn draw(&self, screen: &mut Screen) -> io::Result<()> {
        if !self.posted {
            return Ok(());
        }
        let a = self.area;
        let Some(grid) = screen.region_grid_mut(a.region) else {
            return Ok(());
        };

        let mark_width = self.mark.chars().count();
        let label_width = self.items.iter().map(|i| i.label.chars().count()).max().unwrap_or(0);
        let blank_mark = " ".repeat(mark_width);

        for row in 0..a.rows {
            let y = a.y + row;
            grid.fill_rect(a.x, y, a.cols, 1, ' ', Color::White, Color::Black, Attrs::default());

            let index = self.top + row;
            let Some(item) = self.items.get(index) else {
                continue;
            };
            let selected = index == self.current;
            let mark = if selected { self.mark.as_str() } else { blank_mark.as_str() };
            let text = format!("{}{:<width$} {}", mark, item.label, item.description, width = label_width);
            let text: String = text.chars().take(a.cols).collect();
            let attrs = if selected { Attrs::new().reverse() } else { Attrs::default() };
            grid.write_str(a.x, y, &text, Color::White, Color::Black, attrs);
        }

        screen.refresh(a.region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<ListItem> {
        (0..n).map(|i| ListItem::new(format!("{}:", i + 1), format!("Choice {}", i + 1))).collect()
    }

    fn posted_list(screen: &mut Screen, n: usize, rows: usize) -> (ListWidget, RegionId) {
        let region = screen.new_region(0, 0, 20, 10);
        let area = ListArea { region, x: 1, y: 1, cols: 16, rows };
        let mut list = ListWidget::new(items(n), "*", area);
        list.post(screen).unwrap();
        (list, region)
    }

    #[test]
    fn test_drive_stops_at_ends() {
        let mut screen = Screen::headless(20, 10);
        let (mut list, _) = posted_list(&mut screen, 3, 5);

        assert!(!list.drive(ListRequest::Up));
        assert_eq!(list.current(), 0);
        assert!(list.drive(ListRequest::Down));
        assert!(list.drive(ListRequest::Down));
        assert!(!list.drive(ListRequest::Down));
        assert_eq!(list.current(), 2);
    }

    #[test]
    fn test_draw_marks_current_row() {
        let mut screen = Screen::headless(20, 10);
        let (mut list, _) = posted_list(&mut screen, 3, 5);
        list.drive(ListRequest::Down);
        list.draw(&mut screen).unwrap();

        let display = screen.display();
        assert_eq!(display.row_text(1).trim_end(), "  1: Choice 1");
        assert_eq!(display.row_text(2).trim_end(), " *2: Choice 2");
        assert!(display.get(2, 2).unwrap().attrs.reverse);
        assert!(!display.get(2, 1).unwrap().attrs.reverse);
    }

    #[test]
    fn test_scrolls_to_keep_current_visible() {
        let mut screen = Screen::headless(20, 10);
        let (mut list, _) = posted_list(&mut screen, 6, 2);
        for _ in 0..4 {
            list.drive(ListRequest::Down);
        }
        list.draw(&mut screen).unwrap();
        assert_eq!(list.current(), 4);
        assert_eq!(screen.display().row_text(1).trim(), "4: Choice 4");
        assert_eq!(screen.display().row_text(2).trim(), "*5: Choice 5");

        list.set_current(0);
        list.draw(&mut screen).unwrap();
        assert_eq!(screen.display().row_text(1).trim(), "*1: Choice 1");
    }

    #[test]
    fn test_unpost_blanks_area() {
        let mut screen = Screen::headless(20, 10);
        let (mut list, _) = posted_list(&mut screen, 2, 3);
        list.unpost(&mut screen).unwrap();
        assert!(!list.is_posted());
        assert!(screen.display().row_text(1).trim().is_empty());
    }

    #[test]
    fn test_draw_on_deleted_region_is_noop() {
        let mut screen = Screen::headless(20, 10);
        let (list, region) = posted_list(&mut screen, 2, 3);
        screen.delete_region(region);
        assert!(list.draw(&mut screen).is_ok());
    }
}
