//! Application state for the ratatui TUI
//!
//! Wraps the mounted [`SearchView`] with what only the terminal needs:
//! screen areas from the last render (for mouse hit testing), the list
//! scroll offset, and how the session ended.

use crate::navigation::Focus;
use crate::ui::types::SearchOutcome;
use crate::view::SearchView;
use ratatui::layout::{Position, Rect};

/// Application state for the search TUI
#[derive(Debug)]
pub struct AppState {
    /// The widget being driven
    pub view: SearchView,
    /// Scroll offset for the result list
    pub scroll_offset: usize,
    /// Height of the visible result rows (set during render)
    pub visible_height: usize,
    /// Screen area of the input text (set during render)
    pub input_area: Rect,
    /// Screen area of the result rows, if the list is rendered
    pub list_area: Option<Rect>,
    /// Set once the session is over
    pub outcome: Option<SearchOutcome>,
}

impl AppState {
    /// Create new application state around a mounted view
    #[must_use]
    pub fn new(view: SearchView) -> Self {
        Self {
            view,
            scroll_offset: 0,
            visible_height: 10, // Default, updated during render
            input_area: Rect::default(),
            list_area: None,
            outcome: None,
        }
    }

    /// Whether the event loop should stop
    #[must_use]
    pub const fn should_exit(&self) -> bool {
        self.outcome.is_some()
    }

    /// Adjust scroll offset to keep the focused result visible
    pub fn adjust_scroll(&mut self) {
        let len = self.view.visible_indices().len();
        let max_offset = len.saturating_sub(self.visible_height);
        if self.scroll_offset > max_offset {
            self.scroll_offset = max_offset;
        }

        if let Focus::Item(pos) = self.view.focus() {
            if pos < self.scroll_offset {
                self.scroll_offset = pos;
            } else if self.visible_height > 0 && pos >= self.scroll_offset + self.visible_height {
                self.scroll_offset = pos + 1 - self.visible_height;
            }
        }
    }

    /// Scroll the result list without moving focus
    pub fn scroll_by(&mut self, delta: isize) {
        let len = self.view.visible_indices().len();
        let max_offset = len.saturating_sub(self.visible_height);
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta).min(max_offset);
    }

    /// Result position under a screen cell, if any
    #[must_use]
    pub fn item_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.list_area?;
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        let pos = self.scroll_offset + usize::from(row - area.y);
        (pos < self.view.visible_indices().len()).then_some(pos)
    }

    /// Whether a screen cell lies on the input
    #[must_use]
    pub fn in_input(&self, column: u16, row: u16) -> bool {
        self.input_area.contains(Position::new(column, row))
    }

    /// End the session by following the result at `position`
    pub fn follow(&mut self, position: usize) {
        if let Some(suggestion) = self.view.visible_at(position) {
            tracing::info!(url = %suggestion.url, "following suggestion");
            self.outcome = Some(SearchOutcome::Followed(suggestion.clone()));
        }
    }

    /// End the session by submitting the query
    pub fn submit(&mut self) {
        tracing::info!(query = self.view.query(), "query submitted");
        self.outcome = Some(SearchOutcome::Submitted {
            name: self.view.props().name.clone(),
            query: self.view.query().to_string(),
        });
    }

    /// End the session without a result
    pub fn cancel(&mut self) {
        tracing::debug!("search cancelled");
        self.outcome = Some(SearchOutcome::Cancelled);
    }
}
