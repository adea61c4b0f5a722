//! Event handling for the ratatui TUI
//!
//! Maps keyboard and mouse events onto the view's focus handlers. Which
//! handler a key reaches depends on where focus currently is, the same way
//! a browser routes a keydown to the focused element.

use super::state::AppState;
use crate::navigation::{Focus, NavKey, Propagation};
use crate::view::QueryBuffer;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Query text changed
    QueryChanged,
    /// Follow the result at this position
    Follow(usize),
    /// Submit the query
    Submit,
    /// Exit without a result
    Abort,
    /// No action taken
    Ignored,
}

/// Handle a key press according to the current focus
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    if matches!(
        (key.code, key.modifiers),
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL)
    ) {
        return EventResult::Abort;
    }

    match state.view.focus() {
        Focus::Blurred => match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                state.view.focus_input();
                EventResult::Continue
            }
            _ => EventResult::Ignored,
        },
        Focus::Input => handle_input_key(state, key),
        Focus::Item(pos) => handle_item_key(state, key, pos),
    }
}

/// Keys delivered to the focused input
fn handle_input_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Up | KeyCode::Down => {
            state.view.select_initial_result(NavKey::from(key.code));
            EventResult::Continue
        }
        KeyCode::Enter => EventResult::Submit,
        KeyCode::Tab | KeyCode::BackTab => {
            state.view.blur();
            EventResult::Continue
        }
        _ => edit_query(state, key).unwrap_or(EventResult::Ignored),
    }
}

/// Keys delivered to a focused result
fn handle_item_key(state: &mut AppState, key: KeyEvent, pos: usize) -> EventResult {
    if key.code == KeyCode::Enter {
        return EventResult::Follow(pos);
    }

    let nav = NavKey::from(key.code);
    match state.view.on_results_key_down(nav) {
        Propagation::PreventDefault => EventResult::Continue,
        // Focus went back to the input; let an editing key land there.
        Propagation::Default if nav == NavKey::Other => {
            edit_query(state, key).unwrap_or(EventResult::Continue)
        }
        // Tab carries on from the input and leaves the widget
        Propagation::Default => {
            state.view.blur();
            EventResult::Continue
        }
    }
}

/// Apply a line-editing key to the query
///
/// Returns `None` when the key is not an editing key.
fn edit_query(state: &mut AppState, key: KeyEvent) -> Option<EventResult> {
    let edit: fn(&mut QueryBuffer) = match (key.code, key.modifiers) {
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => QueryBuffer::clear,
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => QueryBuffer::delete_word,
        (KeyCode::Char('a'), KeyModifiers::CONTROL) | (KeyCode::Home, _) => QueryBuffer::home,
        (KeyCode::Char('e'), KeyModifiers::CONTROL) | (KeyCode::End, _) => QueryBuffer::end,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.view.edit_query(|q| q.insert(c));
            return Some(EventResult::QueryChanged);
        }
        (KeyCode::Backspace, _) => QueryBuffer::backspace,
        (KeyCode::Delete, _) => QueryBuffer::delete,
        (KeyCode::Left, _) => QueryBuffer::cursor_left,
        (KeyCode::Right, _) => QueryBuffer::cursor_right,
        _ => return None,
    };

    let previous = state.view.query().to_string();
    state.view.edit_query(edit);
    if previous == state.view.query() {
        Some(EventResult::Continue)
    } else {
        Some(EventResult::QueryChanged)
    }
}

/// Handle mouse events
fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::Moved => match state.item_at(mouse.column, mouse.row) {
            Some(pos) => {
                state.view.on_results_hover(pos);
                EventResult::Continue
            }
            None => EventResult::Ignored,
        },
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(pos) = state.item_at(mouse.column, mouse.row) {
                EventResult::Follow(pos)
            } else if state.in_input(mouse.column, mouse.row) {
                state.view.focus_input();
                EventResult::Continue
            } else {
                state.view.blur();
                EventResult::Continue
            }
        }
        MouseEventKind::ScrollUp => {
            state.scroll_by(-1);
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.scroll_by(1);
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Dispatch one terminal event
pub fn handle_event(state: &mut AppState, event: Event) -> EventResult {
    // wheel scrolling moves the list independently of focus
    let is_mouse = matches!(event, Event::Mouse(_));
    let result = match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    if !is_mouse {
        state.adjust_scroll();
    }
    result
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }
    Ok(handle_event(state, event::read()?))
}
