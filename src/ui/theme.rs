//! Theme and styling configuration.

use std::str::FromStr;

use ratatui::style::Color;

use crate::config::{ConfigError, ThemeConfig};

/// Color theme shared read-only across all widgets that reference it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Primary background color.
    pub bg: Color,
    /// Background for header strips.
    pub header_bg: Color,
    /// Highlight color for selected items.
    pub highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            bg: Color::Black,
            header_bg: Color::DarkGray,
            highlight: Color::Cyan,
        }
    }
}

impl Theme {
    /// Build a theme from configured color names.
    ///
    /// Accepts the color names and hex values understood by ratatui,
    /// e.g. `"white"`, `"dark gray"`, `"#1e1e2e"`.
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            fg: parse_color(&config.fg)?,
            bg: parse_color(&config.bg)?,
            header_bg: parse_color(&config.header_bg)?,
            highlight: parse_color(&config.highlight)?,
        })
    }
}

fn parse_color(name: &str) -> Result<Color, ConfigError> {
    Color::from_str(name).map_err(|_| ConfigError::UnknownColor(name.to_string()))
}
