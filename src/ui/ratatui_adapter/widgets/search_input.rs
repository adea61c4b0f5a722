//! Search input widget
//!
//! Renders the input half of the markup: the query with a cursor while
//! focused, or the placeholder when the query is empty.

use crate::ui::ratatui_adapter::theme::Theme;
use crate::view::InputMarkup;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const CURSOR: &str = "│";

/// Input box showing the current query
pub struct SearchInput<'a> {
    input: &'a InputMarkup,
    /// Cursor position in the query (byte offset)
    cursor: usize,
    theme: &'a Theme,
}

impl<'a> SearchInput<'a> {
    #[must_use]
    pub const fn new(input: &'a InputMarkup, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            input,
            cursor,
            theme,
        }
    }

    fn cursor_span() -> Span<'static> {
        Span::styled(CURSOR, Style::default().add_modifier(Modifier::SLOW_BLINK))
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.input.focused {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", self.input.name));

        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = Vec::new();
        if self.input.value.is_empty() {
            if self.input.focused {
                spans.push(Self::cursor_span());
            }
            spans.push(Span::styled(
                self.input.placeholder.as_str(),
                self.theme.placeholder_style(),
            ));
        } else if self.input.focused {
            let cursor = self.cursor.min(self.input.value.len());
            let (before, after) = self.input.value.split_at(cursor);
            spans.push(Span::raw(before));
            spans.push(Self::cursor_span());
            spans.push(Span::raw(after));
        } else {
            spans.push(Span::raw(self.input.value.as_str()));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
