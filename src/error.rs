//! cellwin Errors

use thiserror::Error;

/// Errors returned by window, menu and session operations
#[derive(Debug, Error)]
pub enum Error {
    /// Window title longer than the allowed maximum
    #[error("title is {len} characters, maximum is {max}")]
    TitleTooLong { len: usize, max: usize },

    /// Menu mark glyph longer than the allowed maximum
    #[error("menu mark is {len} characters, maximum is {max}")]
    MarkTooLong { len: usize, max: usize },

    /// A menu needs at least one item
    #[error("menu has no items")]
    EmptyMenu,

    /// Labels and descriptions must pair up
    #[error("{labels} item labels but {descriptions} descriptions")]
    ItemCountMismatch { labels: usize, descriptions: usize },

    /// Menu area leaves the window interior
    #[error("menu area {cols}x{rows} at ({x}, {y}) does not fit inside a {win_cols}x{win_rows} window")]
    MenuOutOfBounds {
        x: i32,
        y: i32,
        cols: usize,
        rows: usize,
        win_cols: usize,
        win_rows: usize,
    },

    /// Window handle refers to a destroyed window
    #[error("window handle is stale")]
    StaleWindow,

    /// Configuration did not parse
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
