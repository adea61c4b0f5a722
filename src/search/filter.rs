//! Case-insensitive substring filtering of suggestions
//!
//! Matching runs against the plain text of each label: styling escapes are
//! removed first, then the lowercased query is looked up as a substring of
//! the lowercased text. No ranking is applied, so the visible set keeps the
//! original order of the suggestions.

use crate::suggestion::Suggestion;
use regex::Regex;
use std::sync::LazyLock;

static ANSI_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]|\x1b\][^\x07]*\x07")
        .expect("ANSI escape pattern is valid")
});

/// Plain text content of a label
///
/// Strips ANSI escape sequences. An empty label yields an empty string.
#[must_use]
pub fn element_text(label: &str) -> String {
    ANSI_ESCAPE.replace_all(label, "").into_owned()
}

/// Lowercased query, ready to be tested against many labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstringFilter {
    needle: String,
}

impl SubstringFilter {
    /// Create a filter for the given query
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// Whether the query is empty (an empty query shows nothing)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Whether `text` contains the query, ignoring case
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.needle)
    }
}

/// Indices of the suggestions whose text contains `query`, in original order
///
/// An empty query yields an empty visible set.
#[must_use]
pub fn filter_visible(suggestions: &[Suggestion], query: &str) -> Vec<usize> {
    let filter = SubstringFilter::new(query);
    if filter.is_empty() {
        return Vec::new();
    }

    suggestions
        .iter()
        .enumerate()
        .filter(|(_, s)| filter.matches(&s.text()))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_suggestions;

    #[test]
    fn test_example_query() {
        let suggestions = sample_suggestions();
        // reddit and twitter contain a "t", facebook does not
        assert_eq!(filter_visible(&suggestions, "t"), vec![0, 2]);
    }

    #[test]
    fn test_empty_query_hides_everything() {
        assert!(filter_visible(&sample_suggestions(), "").is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let suggestions = sample_suggestions();
        assert_eq!(filter_visible(&suggestions, "FACE"), vec![1]);
        assert_eq!(filter_visible(&suggestions, "TwIt"), vec![2]);
    }

    #[test]
    fn test_no_match() {
        assert!(filter_visible(&sample_suggestions(), "xyz").is_empty());
    }

    #[test]
    fn test_matches_plain_text_only() {
        let suggestions = vec![Suggestion::new("\x1b[31mred\x1b[0m", "https://red")];
        assert_eq!(filter_visible(&suggestions, "red"), vec![0]);
        // escape sequence bytes are not part of the text
        assert!(filter_visible(&suggestions, "31m").is_empty());
    }

    #[test]
    fn test_whitespace_query_is_a_real_query() {
        let suggestions = vec![
            Suggestion::new("hacker news", "https://news.ycombinator.com"),
            Suggestion::new("lobsters", "https://lobste.rs"),
        ];
        assert_eq!(filter_visible(&suggestions, " "), vec![0]);
    }

    #[test]
    fn test_element_text() {
        assert_eq!(element_text(""), "");
        assert_eq!(element_text("plain"), "plain");
        assert_eq!(element_text("\x1b[1;32mbold green\x1b[0m"), "bold green");
        assert_eq!(
            element_text("\x1b]8;;https://x.y\x07link\x1b]8;;\x07"),
            "link"
        );
    }

    #[test]
    fn test_unicode_case_folding() {
        let suggestions = vec![Suggestion::new("Ärzte", "https://aerzte.de")];
        assert_eq!(filter_visible(&suggestions, "ärz"), vec![0]);
    }
}
