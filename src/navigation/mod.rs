//! Focus navigation between the search input and its result list
//!
//! The [`Navigator`] owns the focus cursor explicitly. Handlers never look at
//! rendered output to find out where focus is; renderers read
//! [`Navigator::focus`] instead.
//!
//! ```text
//!            ArrowDown / ArrowUp
//!   Input ─────────────────────────▶ Item(first / last)
//!     ▲                                 │   ▲
//!     │ any other key                   │   │ ArrowDown / ArrowUp
//!     └─────────────────────────────────┘   │ (wraps at both ends)
//!                                       └───┘
//! ```
//!
//! Hovering an item focuses it from any state.

use crossterm::event::KeyCode;

/// Tab index given to every result link
///
/// Result items are left out of sequential Tab order: the arrow keys, hover
/// and programmatic focus are the only ways in.
pub const ITEM_TAB_INDEX: i32 = -1;

/// Which element currently holds focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Focus is outside the widget
    #[default]
    Blurred,
    /// The search input has focus
    Input,
    /// The result at this position in the visible set has focus
    Item(usize),
}

/// Keys the navigation handlers distinguish
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowUp,
    ArrowDown,
    Tab,
    Other,
}

impl From<KeyCode> for NavKey {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Up => Self::ArrowUp,
            KeyCode::Down => Self::ArrowDown,
            KeyCode::Tab | KeyCode::BackTab => Self::Tab,
            _ => Self::Other,
        }
    }
}

/// Whether a key's default action should still run after a handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// The handler consumed the key
    PreventDefault,
    /// The key keeps its default behaviour
    Default,
}

/// Focus-navigation controller over a visible set of `len` items
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    focus: Focus,
    len: usize,
}

impl Navigator {
    /// Create a navigator, with the input focused when `auto_focus` is set
    #[must_use]
    pub fn new(auto_focus: bool) -> Self {
        Self {
            focus: if auto_focus { Focus::Input } else { Focus::Blurred },
            len: 0,
        }
    }

    /// Current focus
    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    /// Number of navigable items
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether there is nothing to navigate to
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Position of the focused item, if an item has focus
    #[must_use]
    pub const fn focused_item(&self) -> Option<usize> {
        match self.focus {
            Focus::Item(pos) => Some(pos),
            _ => None,
        }
    }

    /// Whether the input has focus
    #[must_use]
    pub fn input_focused(&self) -> bool {
        self.focus == Focus::Input
    }

    /// Give focus to the search input
    pub fn focus_input(&mut self) {
        self.set_focus(Focus::Input);
    }

    /// Move focus out of the widget
    pub fn blur(&mut self) {
        self.set_focus(Focus::Blurred);
    }

    /// Focus the item at `position`; returns false when out of range
    pub fn focus_item(&mut self, position: usize) -> bool {
        if position >= self.len {
            return false;
        }
        self.set_focus(Focus::Item(position));
        true
    }

    /// Update the number of items after the visible set changed
    ///
    /// A focused item that no longer exists hands focus back to the input.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if let Focus::Item(pos) = self.focus
            && pos >= len
        {
            self.focus_input();
        }
    }

    /// Key handler bound to the search input
    ///
    /// ArrowDown focuses the first result, ArrowUp the last. Other keys are
    /// left alone.
    pub fn select_initial_result(&mut self, key: NavKey) -> Propagation {
        match key {
            NavKey::ArrowDown => {
                self.focus_first();
                Propagation::PreventDefault
            }
            NavKey::ArrowUp => {
                self.focus_last();
                Propagation::PreventDefault
            }
            NavKey::Tab | NavKey::Other => Propagation::Default,
        }
    }

    /// Pointer moved over the result at `position`
    pub fn on_results_hover(&mut self, position: usize) {
        self.focus_item(position);
    }

    /// Key handler bound to the result list
    ///
    /// Arrows move to the neighbouring result, wrapping at both ends. Any
    /// other key returns focus to the input and keeps its default behaviour.
    pub fn on_results_key_down(&mut self, key: NavKey) -> Propagation {
        match (key, self.focused_item()) {
            (NavKey::ArrowDown, Some(pos)) if pos + 1 < self.len => {
                self.focus_item(pos + 1);
                Propagation::PreventDefault
            }
            (NavKey::ArrowDown, _) => {
                self.focus_first();
                Propagation::PreventDefault
            }
            (NavKey::ArrowUp, Some(pos)) if pos > 0 && pos <= self.len => {
                self.focus_item(pos - 1);
                Propagation::PreventDefault
            }
            (NavKey::ArrowUp, _) => {
                self.focus_last();
                Propagation::PreventDefault
            }
            (NavKey::Tab | NavKey::Other, _) => {
                self.focus_input();
                Propagation::Default
            }
        }
    }

    fn focus_first(&mut self) {
        self.focus_item(0);
    }

    fn focus_last(&mut self) {
        if let Some(last) = self.len.checked_sub(1) {
            self.focus_item(last);
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            tracing::trace!(from = ?self.focus, to = ?focus, "focus moved");
            self.focus = focus;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator(len: usize) -> Navigator {
        let mut nav = Navigator::new(true);
        nav.set_len(len);
        nav
    }

    #[test]
    fn test_initial_focus() {
        assert_eq!(Navigator::new(false).focus(), Focus::Blurred);
        assert_eq!(Navigator::new(true).focus(), Focus::Input);
    }

    #[test]
    fn test_item_tab_index() {
        assert_eq!(ITEM_TAB_INDEX, -1);
    }

    #[test]
    fn test_selects_first_initial_result() {
        let mut nav = navigator(3);
        assert_eq!(nav.select_initial_result(NavKey::ArrowDown), Propagation::PreventDefault);
        assert_eq!(nav.focus(), Focus::Item(0));
    }

    #[test]
    fn test_selects_last_initial_result() {
        let mut nav = navigator(3);
        assert_eq!(nav.select_initial_result(NavKey::ArrowUp), Propagation::PreventDefault);
        assert_eq!(nav.focus(), Focus::Item(2));
    }

    #[test]
    fn test_initial_result_ignores_other_keys() {
        let mut nav = navigator(3);
        assert_eq!(nav.select_initial_result(NavKey::Other), Propagation::Default);
        assert_eq!(nav.select_initial_result(NavKey::Tab), Propagation::Default);
        assert_eq!(nav.focus(), Focus::Input);
    }

    #[test]
    fn test_initial_result_without_results() {
        let mut nav = navigator(0);
        assert_eq!(nav.select_initial_result(NavKey::ArrowDown), Propagation::PreventDefault);
        assert_eq!(nav.focus(), Focus::Input);
    }

    #[test]
    fn test_hover_focuses_item() {
        let mut nav = navigator(3);
        nav.on_results_hover(1);
        assert_eq!(nav.focus(), Focus::Item(1));
        nav.on_results_hover(2);
        assert_eq!(nav.focus(), Focus::Item(2));
    }

    #[test]
    fn test_hover_from_blurred() {
        let mut nav = Navigator::new(false);
        nav.set_len(2);
        nav.on_results_hover(0);
        assert_eq!(nav.focus(), Focus::Item(0));
    }

    #[test]
    fn test_hover_out_of_range_is_ignored() {
        let mut nav = navigator(2);
        nav.on_results_hover(5);
        assert_eq!(nav.focus(), Focus::Input);
    }

    #[test]
    fn test_navigates_through_results() {
        let mut nav = navigator(3);
        nav.focus_item(0);

        nav.on_results_key_down(NavKey::ArrowDown);
        assert_eq!(nav.focus(), Focus::Item(1));

        nav.on_results_key_down(NavKey::ArrowDown);
        assert_eq!(nav.focus(), Focus::Item(2));

        nav.on_results_key_down(NavKey::ArrowUp);
        assert_eq!(nav.focus(), Focus::Item(1));
    }

    #[test]
    fn test_wraps_to_first_after_last() {
        let mut nav = navigator(3);
        nav.focus_item(2);
        assert_eq!(nav.on_results_key_down(NavKey::ArrowDown), Propagation::PreventDefault);
        assert_eq!(nav.focus(), Focus::Item(0));
    }

    #[test]
    fn test_wraps_to_last_before_first() {
        let mut nav = navigator(3);
        nav.focus_item(0);
        assert_eq!(nav.on_results_key_down(NavKey::ArrowUp), Propagation::PreventDefault);
        assert_eq!(nav.focus(), Focus::Item(2));
    }

    #[test]
    fn test_single_item_wraps_onto_itself() {
        let mut nav = navigator(1);
        nav.focus_item(0);
        nav.on_results_key_down(NavKey::ArrowDown);
        assert_eq!(nav.focus(), Focus::Item(0));
        nav.on_results_key_down(NavKey::ArrowUp);
        assert_eq!(nav.focus(), Focus::Item(0));
    }

    #[test]
    fn test_other_key_returns_to_input() {
        let mut nav = navigator(3);
        nav.focus_item(1);
        assert_eq!(nav.on_results_key_down(NavKey::Tab), Propagation::Default);
        assert_eq!(nav.focus(), Focus::Input);

        nav.focus_item(2);
        assert_eq!(nav.on_results_key_down(NavKey::Other), Propagation::Default);
        assert_eq!(nav.focus(), Focus::Input);
    }

    #[test]
    fn test_arrows_without_current_item() {
        let mut nav = navigator(3);
        nav.on_results_key_down(NavKey::ArrowDown);
        assert_eq!(nav.focus(), Focus::Item(0));

        nav.focus_input();
        nav.on_results_key_down(NavKey::ArrowUp);
        assert_eq!(nav.focus(), Focus::Item(2));
    }

    #[test]
    fn test_shrinking_set_returns_focus_to_input() {
        let mut nav = navigator(3);
        nav.focus_item(2);
        nav.set_len(2);
        assert_eq!(nav.focus(), Focus::Input);

        nav.focus_item(1);
        nav.set_len(2);
        assert_eq!(nav.focus(), Focus::Item(1));
    }

    #[test]
    fn test_key_conversion() {
        assert_eq!(NavKey::from(KeyCode::Down), NavKey::ArrowDown);
        assert_eq!(NavKey::from(KeyCode::Up), NavKey::ArrowUp);
        assert_eq!(NavKey::from(KeyCode::Tab), NavKey::Tab);
        assert_eq!(NavKey::from(KeyCode::BackTab), NavKey::Tab);
        assert_eq!(NavKey::from(KeyCode::Char('a')), NavKey::Other);
        assert_eq!(NavKey::from(KeyCode::Enter), NavKey::Other);
    }
}
