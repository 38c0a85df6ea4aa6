//! cellwin - Windows and menus on a character-cell terminal
//!
//! # Overview
//!
//! cellwin provides:
//! - Bordered, titled windows that can be moved, resized and refreshed,
//!   placed absolutely or relative to a parent window
//! - Menus: navigable lists of labeled items drawn inside a window
//! - A small drawing layer (cell grids, regions, an ANSI renderer)
//! - A terminal session with a timed key poll, and a prompt helper
//!
//! Every geometry change tears a window's region down and draws a new one.
//! The application owns the input loop and feeds events to its menus.
//!
//! # Example
//!
//! ```no_run
//! use cellwin::{Config, InputEvent, Menu, MenuArea, Terminal, WindowManager};
//!
//! fn main() -> cellwin::Result<()> {
//!     let config = Config::default();
//!     let mut term = Terminal::init(&config)?;
//!     let mut wm = WindowManager::new(term.screen()?, config);
//!
//!     let win = wm.create_window(25, 10, 60, 20, "Input Window", None)?;
//!     let mut menu = Menu::new(&mut wm, win, MenuArea::new(2, 2, 25, 6),
//!         &["1:", "Exit:"], &["Choice 1", "Leave"], "*")?;
//!
//!     loop {
//!         let Some(event) = term.poll()? else { continue };
//!         if let Some(1) = menu.update(&mut wm, &event)? {
//!             break;
//!         }
//!     }
//!
//!     menu.destroy(&mut wm)?;
//!     wm.destroy(win)?;
//!     term.cleanup()?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod prompt;
pub mod renderer;
pub mod terminal;

// Re-export commonly used types
pub use config::Config;
pub use core::{Attrs, BorderStyle, Color, Grid, Menu, MenuArea, Screen, TitleAlign, Window, WindowId, WindowManager};
pub use error::{Error, Result};
pub use input::{InputEvent, Key};
pub use prompt::{read_input, Delimiter};
pub use renderer::{AnsiRenderer, Renderer};
pub use terminal::{KeySource, Terminal};
