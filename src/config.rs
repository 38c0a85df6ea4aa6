//! cellwin Configuration
//!
//! Appearance and input timing. Every field has a default, so a partial JSON
//! document only overrides what it names:
//!
//! ```json
//! {"border": "double", "title_align": "left", "input_timeout_ms": 20}
//! ```

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{BorderStyle, Color, TitleAlign};
use crate::error::Result;

/// Environment variable holding a JSON configuration document
pub const CONFIG_ENV: &str = "CELLWIN_CONFIG";

/// Input timeout used when none is configured, in milliseconds
pub const DEFAULT_INPUT_TIMEOUT_MS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How long a key poll waits before reporting no input
    pub input_timeout_ms: u64,
    /// Window border style
    pub border: BorderStyle,
    pub border_color: Color,
    /// Placement of the title on the top edge
    pub title_align: TitleAlign,
    pub title_color: Color,
    /// Draw the `colsxrows` label on the bottom edge
    pub show_size: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_timeout_ms: DEFAULT_INPUT_TIMEOUT_MS,
            border: BorderStyle::Single,
            border_color: Color::White,
            title_align: TitleAlign::Center,
            title_color: Color::BrightWhite,
            show_size: true,
        }
    }
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read [`CONFIG_ENV`]; defaults when it is unset or empty
    pub fn from_env() -> Result<Self> {
        match env::var(CONFIG_ENV) {
            Ok(text) if !text.trim().is_empty() => Self::from_json(&text),
            _ => Ok(Self::default()),
        }
    }

    pub fn input_timeout(&self) -> Duration {
        Duration::from_millis(self.input_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{"border": "double", "input_timeout_ms": 20}"#).unwrap();
        assert_eq!(config.border, BorderStyle::Double);
        assert_eq!(config.input_timeout(), Duration::from_millis(20));
        assert_eq!(config.title_align, TitleAlign::Center);
        assert!(config.show_size);
    }

    #[test]
    fn test_enum_names() {
        let config = Config::from_json(r#"{"title_align": "left", "border_color": "bright_cyan"}"#).unwrap();
        assert_eq!(config.title_align, TitleAlign::Left);
        assert_eq!(config.border_color, Color::BrightCyan);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = Config::from_json(r#"{"border": "dotted"}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
