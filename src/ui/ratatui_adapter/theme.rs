//! Color theme definitions for the ratatui TUI
//!
//! Defines colors and styles used throughout the application.

use crate::config::ThemeName;
use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the focused result
    pub selection_bg: Color,
    /// Foreground color for the focused result
    pub selection_fg: Color,
    /// Color for the focus indicator and focused borders
    pub cursor: Color,
    /// Color for unfocused borders
    pub border: Color,
    /// Color for dimmed/inactive text (placeholder, hints)
    pub dimmed: Color,
    /// Color for link targets
    pub link: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl From<ThemeName> for Theme {
    fn from(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
        }
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            cursor: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            link: Color::LightBlue,
        }
    }

    /// Create a theme for light terminal backgrounds
    #[must_use]
    pub const fn light() -> Self {
        Self {
            selection_bg: Color::LightBlue,
            selection_fg: Color::Black,
            cursor: Color::Blue,
            border: Color::Gray,
            dimmed: Color::Gray,
            link: Color::Blue,
        }
    }

    /// Style for the focused result
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for unfocused results
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for the focus indicator (>)
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for the border of the focused element
    #[must_use]
    pub fn focused_border_style(&self) -> Style {
        Style::default().fg(self.cursor)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for the placeholder of an empty input
    #[must_use]
    pub fn placeholder_style(&self) -> Style {
        self.dimmed_style().add_modifier(Modifier::ITALIC)
    }

    /// Style for link targets
    #[must_use]
    pub fn link_style(&self) -> Style {
        Style::default()
            .fg(self.link)
            .add_modifier(Modifier::UNDERLINED)
    }
}
