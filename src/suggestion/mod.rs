//! Suggestion items
//!
//! A [`Suggestion`] is a hyperlink: a label the user sees and searches
//! against, and the URL it navigates to. Suggestions are loaded once from a
//! file (see [`loader`]) and never change while the widget runs.

mod error;
pub mod loader;

pub use error::LoadError;
pub use loader::{SuggestionFormat, load_suggestions, parse_suggestions};

use crate::search::filter::element_text;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A candidate result: a matchable label and a navigation target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Display label (may contain ANSI styling)
    pub label: String,
    /// Navigation target
    #[serde(alias = "href", alias = "target")]
    pub url: String,
}

impl Suggestion {
    /// Create a new suggestion
    #[must_use]
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Plain text content of the label, used for matching
    #[must_use]
    pub fn text(&self) -> String {
        element_text(&self.label)
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.text(), self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_strips_styling() {
        let styled = Suggestion::new("\x1b[1mreddit\x1b[0m", "https://reddit.com");
        assert_eq!(styled.text(), "reddit");
    }

    #[test]
    fn test_display() {
        let s = Suggestion::new("twitter", "https://twitter.com");
        assert_eq!(s.to_string(), "twitter <https://twitter.com>");
    }

    #[test]
    fn test_deserialize_href_alias() {
        let s: Suggestion =
            serde_json::from_str(r#"{"label": "reddit", "href": "https://reddit.com"}"#).unwrap();
        assert_eq!(s.url, "https://reddit.com");
    }
}
