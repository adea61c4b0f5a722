//! Help bar widget for displaying keybind hints

use crate::navigation::Focus;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// Key combination (e.g., "Enter", "↑/↓")
    pub key: &'static str,
    /// Action description
    pub action: &'static str,
}

impl KeyHint {
    #[must_use]
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    /// Create a new help bar widget
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Hints for the keys that do something at the given focus
    #[must_use]
    pub fn hints_for(focus: Focus) -> Vec<KeyHint> {
        match focus {
            Focus::Blurred => vec![
                KeyHint::new("TAB", "focus search"),
                KeyHint::new("ESC", "quit"),
            ],
            Focus::Input => vec![
                KeyHint::new("↑/↓", "results"),
                KeyHint::new("Enter", "search"),
                KeyHint::new("TAB", "blur"),
                KeyHint::new("ESC", "quit"),
            ],
            Focus::Item(_) => vec![
                KeyHint::new("↑/↓", "navigate"),
                KeyHint::new("Enter", "open"),
                KeyHint::new("type", "edit query"),
                KeyHint::new("ESC", "quit"),
            ],
        }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key, self.theme.cursor_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints_follow_focus() {
        let has = |focus: Focus, key: &str| {
            HelpBar::hints_for(focus).iter().any(|hint| hint.key == key)
        };
        assert!(has(Focus::Blurred, "TAB"));
        assert!(!has(Focus::Blurred, "Enter"));
        assert!(has(Focus::Input, "Enter"));
        assert!(has(Focus::Item(0), "↑/↓"));
    }
}
