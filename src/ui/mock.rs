//! Test doubles for the UI layer

use super::error::Result;
use super::output::{MessageLevel, OutputWriter};
use super::traits::SearchFrontend;
use super::types::SearchOutcome;
use crate::navigation::{Focus, NavKey};
use crate::view::{SearchMarkup, SearchView};
use std::cell::RefCell;

/// One scripted user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockStep {
    /// Type text into the input
    Type(String),
    /// Press a navigation key wherever focus currently is
    Key(NavKey),
    /// Hover the result at this position
    Hover(usize),
    /// Click into the input
    FocusInput,
    /// Activate the focused result (ignored if none)
    Follow,
    /// Submit the query
    Submit,
    /// Leave without choosing
    Cancel,
}

/// Frontend that replays a fixed script instead of reading a terminal
///
/// Useful for testing without requiring user interaction
#[derive(Debug, Default)]
pub struct MockFrontend {
    steps: Vec<MockStep>,
    last_markup: RefCell<Option<SearchMarkup>>,
}

impl MockFrontend {
    #[must_use]
    pub fn new(steps: Vec<MockStep>) -> Self {
        Self {
            steps,
            last_markup: RefCell::new(None),
        }
    }

    /// Markup of the view when the script ended
    #[must_use]
    pub fn last_markup(&self) -> Option<SearchMarkup> {
        self.last_markup.borrow().clone()
    }
}

impl SearchFrontend for MockFrontend {
    fn run(&self, mut view: SearchView) -> Result<SearchOutcome> {
        let mut outcome = SearchOutcome::Cancelled;

        for step in &self.steps {
            match step {
                MockStep::Type(text) => {
                    for c in text.chars() {
                        view.edit_query(|q| q.insert(c));
                    }
                }
                MockStep::Key(key) => match view.focus() {
                    Focus::Item(_) => {
                        view.on_results_key_down(*key);
                    }
                    Focus::Input => {
                        view.select_initial_result(*key);
                    }
                    Focus::Blurred => {}
                },
                MockStep::Hover(pos) => view.on_results_hover(*pos),
                MockStep::FocusInput => view.focus_input(),
                MockStep::Follow => {
                    if let Some(suggestion) = view.focused_suggestion() {
                        outcome = SearchOutcome::Followed(suggestion.clone());
                        break;
                    }
                }
                MockStep::Submit => {
                    outcome = SearchOutcome::Submitted {
                        name: view.props().name.clone(),
                        query: view.query().to_string(),
                    };
                    break;
                }
                MockStep::Cancel => break,
            }
        }

        *self.last_markup.borrow_mut() = Some(view.markup());
        Ok(outcome)
    }
}

/// Output writer that keeps every message for later inspection
#[derive(Debug, Default)]
pub struct RecordingWriter {
    messages: RefCell<Vec<(MessageLevel, String)>>,
}

impl RecordingWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded messages in order
    #[must_use]
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages.borrow().clone()
    }

    /// Only the result lines
    #[must_use]
    pub fn results(&self) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(level, _)| *level == MessageLevel::Normal)
            .map(|(_, msg)| msg.clone())
            .collect()
    }

    fn push(&self, level: MessageLevel, message: &str) {
        self.messages.borrow_mut().push((level, message.to_string()));
    }
}

impl OutputWriter for RecordingWriter {
    fn write(&self, message: &str) {
        self.push(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.push(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.push(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.push(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.push(MessageLevel::Info, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_suggestions;
    use crate::view::SearchProps;

    fn view() -> SearchView {
        SearchView::new(SearchProps::new(sample_suggestions()).with_auto_focus(true))
    }

    #[test]
    fn test_mock_follow() {
        let frontend = MockFrontend::new(vec![
            MockStep::Type("t".into()),
            MockStep::Key(NavKey::ArrowUp),
            MockStep::Follow,
        ]);
        let outcome = frontend.run(view()).unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::Followed(crate::Suggestion::new("twitter", "https://twitter.com"))
        );
    }

    #[test]
    fn test_mock_follow_without_focus_is_ignored() {
        let frontend = MockFrontend::new(vec![MockStep::Type("t".into()), MockStep::Follow]);
        assert!(frontend.run(view()).unwrap().is_cancelled());
        assert!(frontend.last_markup().unwrap().has_list());
    }

    #[test]
    fn test_recording_writer() {
        let writer = RecordingWriter::new();
        writer.write("result");
        writer.info("note");
        assert_eq!(writer.results(), vec!["result"]);
        assert_eq!(writer.messages().len(), 2);
    }
}
