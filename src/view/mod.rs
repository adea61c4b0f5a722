//! The search widget, independent of any renderer
//!
//! [`SearchView`] ties together the query, the visible set computed by
//! [`crate::search::filter_visible`], and the focus [`Navigator`]. Renderers
//! call [`SearchView::markup`] to find out what to draw and forward input
//! events to the handler methods.
//!
//! # Examples
//!
//! ```
//! use search_suggestions::{SearchProps, SearchView, Suggestion, NavKey, Focus};
//!
//! let suggestions = vec![
//!     Suggestion::new("reddit", "https://reddit.com"),
//!     Suggestion::new("facebook", "https://facebook.com"),
//!     Suggestion::new("twitter", "https://twitter.com"),
//! ];
//!
//! let mut view = SearchView::new(SearchProps::new(suggestions).with_auto_focus(true));
//! assert!(view.markup().list.is_none());
//!
//! view.handle_change("t");
//! let labels: Vec<_> = view.visible().map(|s| s.label.as_str()).collect();
//! assert_eq!(labels, ["reddit", "twitter"]);
//!
//! view.select_initial_result(NavKey::ArrowDown);
//! assert_eq!(view.focus(), Focus::Item(0));
//! ```

mod markup;
mod query;

pub use markup::{ATTR_OFF, INPUT_TYPE, InputMarkup, LinkMarkup, SearchMarkup};
pub use query::QueryBuffer;

use crate::navigation::{Focus, ITEM_TAB_INDEX, NavKey, Navigator, Propagation};
use crate::search::filter_visible;
use crate::suggestion::Suggestion;
use std::fmt;

/// Default `name` of the search input
pub const DEFAULT_NAME: &str = "q";

/// Default placeholder of the search input
pub const DEFAULT_PLACEHOLDER: &str = "Search";

/// Event passed to the change callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputChange {
    /// Query after the change
    pub value: String,
    /// Query before the change
    pub previous: String,
}

/// Callback invoked whenever the query changes
pub type ChangeCallback = Box<dyn FnMut(&InputChange)>;

/// Configuration of the search widget
pub struct SearchProps {
    /// Items to filter, in display order
    pub suggestions: Vec<Suggestion>,
    /// `name` attribute of the input
    pub name: String,
    /// Placeholder shown while the query is empty
    pub placeholder: String,
    /// Focus the input on mount
    pub auto_focus: bool,
    /// Container id
    pub id: Option<String>,
    /// Container class name
    pub class_name: Option<String>,
    /// Called with every input change
    pub on_change: Option<ChangeCallback>,
}

impl SearchProps {
    /// Props with the given suggestions and default settings
    #[must_use]
    pub fn new(suggestions: Vec<Suggestion>) -> Self {
        Self {
            suggestions,
            name: DEFAULT_NAME.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            auto_focus: false,
            id: None,
            class_name: None,
            on_change: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub const fn with_auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set the change callback
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(&InputChange) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for SearchProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchProps")
            .field("suggestions", &self.suggestions.len())
            .field("name", &self.name)
            .field("placeholder", &self.placeholder)
            .field("auto_focus", &self.auto_focus)
            .field("id", &self.id)
            .field("class_name", &self.class_name)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

/// Search input with a filtered, navigable list of suggestions
#[derive(Debug)]
pub struct SearchView {
    props: SearchProps,
    query: QueryBuffer,
    /// Indices into `props.suggestions` matching the current query
    visible: Vec<usize>,
    nav: Navigator,
}

impl SearchView {
    /// Mount the widget
    #[must_use]
    pub fn new(props: SearchProps) -> Self {
        let nav = Navigator::new(props.auto_focus);
        Self {
            props,
            query: QueryBuffer::default(),
            visible: Vec::new(),
            nav,
        }
    }

    #[must_use]
    pub const fn props(&self) -> &SearchProps {
        &self.props
    }

    /// Current query text
    #[must_use]
    pub fn query(&self) -> &str {
        self.query.value()
    }

    #[must_use]
    pub const fn query_buffer(&self) -> &QueryBuffer {
        &self.query
    }

    /// Current focus
    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.nav.focus()
    }

    /// Indices of the visible suggestions
    #[must_use]
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    /// Visible suggestions, in order
    pub fn visible(&self) -> impl Iterator<Item = &Suggestion> {
        self.visible
            .iter()
            .filter_map(|&idx| self.props.suggestions.get(idx))
    }

    /// Visible suggestion at `position`
    #[must_use]
    pub fn visible_at(&self, position: usize) -> Option<&Suggestion> {
        self.visible
            .get(position)
            .and_then(|&idx| self.props.suggestions.get(idx))
    }

    /// Suggestion holding focus, if any
    #[must_use]
    pub fn focused_suggestion(&self) -> Option<&Suggestion> {
        self.nav
            .focused_item()
            .and_then(|pos| self.visible_at(pos))
    }

    /// Whether the result list is rendered
    #[must_use]
    pub fn has_results(&self) -> bool {
        !self.query.is_empty() && !self.visible.is_empty()
    }

    /// Replace the query text
    pub fn handle_change(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.edit_query(|query| query.set(value));
    }

    /// Apply an edit to the query; refilters and notifies if the text changed
    pub fn edit_query(&mut self, edit: impl FnOnce(&mut QueryBuffer)) {
        let previous = self.query.value().to_string();
        edit(&mut self.query);
        if self.query.value() == previous {
            return;
        }

        self.refilter();
        tracing::debug!(
            query = self.query.value(),
            visible = self.visible.len(),
            "query changed"
        );

        if let Some(callback) = self.props.on_change.as_mut() {
            callback(&InputChange {
                value: self.query.value().to_string(),
                previous,
            });
        }
    }

    /// Replace the suggestion collection, keeping the query
    pub fn set_suggestions(&mut self, suggestions: Vec<Suggestion>) {
        let focused = self.focused_suggestion().cloned();
        self.props.suggestions = suggestions;
        self.visible = filter_visible(&self.props.suggestions, self.query.value());
        self.nav.set_len(self.visible.len());

        // Keep focus on the same suggestion if it survived the swap
        if let Some(focused) = focused {
            let found = self.visible().position(|s| *s == focused);
            match found {
                Some(pos) => {
                    self.nav.focus_item(pos);
                }
                None => self.nav.focus_input(),
            }
        }
    }

    /// Give focus to the input
    pub fn focus_input(&mut self) {
        self.nav.focus_input();
    }

    /// Move focus out of the widget
    pub fn blur(&mut self) {
        self.nav.blur();
    }

    /// Key pressed in the input; see [`Navigator::select_initial_result`]
    pub fn select_initial_result(&mut self, key: NavKey) -> Propagation {
        self.nav.select_initial_result(key)
    }

    /// Pointer over the result at `position`
    pub fn on_results_hover(&mut self, position: usize) {
        self.nav.on_results_hover(position);
    }

    /// Key pressed on a result; see [`Navigator::on_results_key_down`]
    pub fn on_results_key_down(&mut self, key: NavKey) -> Propagation {
        self.nav.on_results_key_down(key)
    }

    /// Current rendered structure
    #[must_use]
    pub fn markup(&self) -> SearchMarkup {
        let focus = self.nav.focus();
        let list: Option<Vec<LinkMarkup>> = self.has_results().then(|| {
            self.visible()
                .enumerate()
                .map(|(pos, suggestion)| LinkMarkup {
                    text: suggestion.text(),
                    href: suggestion.url.clone(),
                    tab_index: ITEM_TAB_INDEX,
                    focused: focus == Focus::Item(pos),
                })
                .collect()
        });

        SearchMarkup {
            id: self.props.id.clone(),
            class_name: self.props.class_name.clone(),
            input: InputMarkup {
                input_type: INPUT_TYPE,
                name: self.props.name.clone(),
                placeholder: self.props.placeholder.clone(),
                value: self.query.value().to_string(),
                spellcheck: false,
                autocomplete: ATTR_OFF,
                autocapitalize: ATTR_OFF,
                auto_focus: self.props.auto_focus,
                focused: focus == Focus::Input,
            },
            list,
        }
    }

    /// Recompute the visible set, keeping focus on the same suggestion
    fn refilter(&mut self) {
        let focused_idx = self
            .nav
            .focused_item()
            .and_then(|pos| self.visible.get(pos))
            .copied();

        self.visible = filter_visible(&self.props.suggestions, self.query.value());
        self.nav.set_len(self.visible.len());

        if let Some(idx) = focused_idx {
            match self.visible.iter().position(|&i| i == idx) {
                Some(pos) => {
                    self.nav.focus_item(pos);
                }
                None => self.nav.focus_input(),
            }
        }
    }
}
