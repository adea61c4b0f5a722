//! Ratatui search frontend
//!
//! Owns the terminal for the length of one search session and drives the
//! view from crossterm events until the user follows a link, submits the
//! query or cancels.

use super::events::{EventResult, poll_and_handle};
use super::state::AppState;
use super::theme::Theme;
use super::widgets::{HelpBar, ResultList, SearchInput};
use crate::ui::error::Result;
use crate::ui::traits::SearchFrontend;
use crate::ui::types::SearchOutcome;
use crate::view::SearchView;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
};
use std::io::{self, Stdout};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Terminal frontend for a [`SearchView`]
#[derive(Debug, Clone, Default)]
pub struct RatatuiSearch {
    theme: Theme,
}

impl RatatuiSearch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom theme
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
        Ok(())
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        view: SearchView,
    ) -> Result<SearchOutcome> {
        let mut state = AppState::new(view);

        loop {
            terminal.draw(|frame| render(frame, &mut state, &self.theme))?;

            match poll_and_handle(&mut state, POLL_INTERVAL)? {
                EventResult::Follow(pos) => state.follow(pos),
                EventResult::Submit => state.submit(),
                EventResult::Abort => state.cancel(),
                EventResult::Continue | EventResult::QueryChanged | EventResult::Ignored => {}
            }

            if let Some(outcome) = state.outcome.take() {
                return Ok(outcome);
            }
        }
    }
}

impl SearchFrontend for RatatuiSearch {
    fn run(&self, view: SearchView) -> Result<SearchOutcome> {
        let mut terminal = Self::setup_terminal()?;

        let result = self.run_loop(&mut terminal, view);

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal() {
            tracing::warn!(error = %e, "terminal cleanup failed");
            eprintln!("Warning: terminal cleanup failed: {e}");
        }

        result
    }
}

/// Draw one frame and record the areas used for mouse hit testing
pub fn render(frame: &mut Frame, state: &mut AppState, theme: &Theme) {
    let area = frame.area();
    let markup = state.view.markup();

    // input box and help bar are always there
    let available = area.height.saturating_sub(3 + 1);
    let list_height = markup.list.as_ref().map_or(0, |links| {
        u16::try_from(links.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .min(available)
    });

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Search input
            Constraint::Length(list_height), // Results
            Constraint::Min(0),
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    state.input_area = inner(layout[0]);
    let input = SearchInput::new(&markup.input, state.view.query_buffer().cursor(), theme);
    frame.render_widget(input, layout[0]);

    match &markup.list {
        Some(links) if list_height > 2 => {
            let rows = inner(layout[1]);
            state.list_area = Some(rows);
            state.visible_height = rows.height as usize;
            state.adjust_scroll();
            frame.render_widget(ResultList::new(links, state.scroll_offset, theme), layout[1]);
        }
        _ => state.list_area = None,
    }

    let hints = HelpBar::hints_for(state.view.focus());
    frame.render_widget(HelpBar::new(&hints, theme), layout[3]);
}

/// Area inside a one-cell border
fn inner(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}
