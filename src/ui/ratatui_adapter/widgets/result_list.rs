//! Result list widget for the visible suggestions

use crate::ui::ratatui_adapter::theme::Theme;
use crate::view::LinkMarkup;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// List of result links with a focus indicator
pub struct ResultList<'a> {
    links: &'a [LinkMarkup],
    /// First link shown
    scroll_offset: usize,
    theme: &'a Theme,
    title: String,
}

impl<'a> ResultList<'a> {
    /// Create a new result list widget
    #[must_use]
    pub fn new(links: &'a [LinkMarkup], scroll_offset: usize, theme: &'a Theme) -> Self {
        let title = format!(" Results ({}) ", links.len());
        Self {
            links,
            scroll_offset,
            theme,
            title,
        }
    }

    fn render_link(&self, link: &'a LinkMarkup) -> ListItem<'a> {
        let indicator = if link.focused { ">" } else { " " };
        let text_style = if link.focused {
            self.theme.selected_style()
        } else {
            self.theme.normal_style()
        };

        let line = Line::from(vec![
            Span::styled(indicator, self.theme.cursor_style()),
            Span::raw(" "),
            Span::styled(link.text.as_str(), text_style),
            Span::raw("  "),
            Span::styled(link.href.as_str(), self.theme.link_style()),
        ]);

        if link.focused {
            ListItem::new(line).style(self.theme.selected_style())
        } else {
            ListItem::new(line)
        }
    }
}

impl Widget for ResultList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.links.iter().any(|link| link.focused) {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.title.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let items: Vec<ListItem> = self
            .links
            .iter()
            .skip(self.scroll_offset)
            .take(inner.height as usize)
            .map(|link| self.render_link(link))
            .collect();

        List::new(items).render(inner, buf);
    }
}
