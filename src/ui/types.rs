//! Common types for UI abstraction layer

use crate::suggestion::Suggestion;
use std::fmt;

/// How an interactive search session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A result link was activated
    Followed(Suggestion),
    /// The query was submitted from the input
    Submitted {
        /// `name` of the input
        name: String,
        /// Query text at submission
        query: String,
    },
    /// The user left without choosing anything
    Cancelled,
}

impl SearchOutcome {
    /// Whether the session ended without a result
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Followed(suggestion) => write!(f, "{}", suggestion.url),
            Self::Submitted { name, query } => write!(f, "{name}={query}"),
            Self::Cancelled => f.write_str("cancelled"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let followed = SearchOutcome::Followed(Suggestion::new("reddit", "https://reddit.com"));
        assert_eq!(followed.to_string(), "https://reddit.com");

        let submitted = SearchOutcome::Submitted {
            name: "q".into(),
            query: "rust tui".into(),
        };
        assert_eq!(submitted.to_string(), "q=rust tui");
        assert!(!submitted.is_cancelled());
        assert!(SearchOutcome::Cancelled.is_cancelled());
    }
}
