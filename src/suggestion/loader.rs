//! Loading suggestion lists from disk
//!
//! The format is picked from the file extension:
//!
//! | extension | layout                                        |
//! |-----------|-----------------------------------------------|
//! | `.json`   | `[{"label": "...", "url": "..."}]`            |
//! | `.csv`    | header `label,url`                            |
//! | `.toml`   | `[[suggestions]]` tables with `label`/`url`   |
//! | other     | one per line, `label<TAB>url` or a bare URL   |

use super::{LoadError, Suggestion};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// On-disk layout of a suggestion list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionFormat {
    Json,
    Csv,
    Toml,
    /// Plain text, one suggestion per line
    Lines,
}

impl SuggestionFormat {
    /// Pick a format from the file extension (case-insensitive)
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match ext.as_deref() {
            Some("json") => Self::Json,
            Some("csv") => Self::Csv,
            Some("toml") => Self::Toml,
            _ => Self::Lines,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SuggestionTable {
    #[serde(default)]
    suggestions: Vec<Suggestion>,
}

/// Load suggestions from a file, keeping their order
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read, does not parse in the
/// format implied by its extension, or contains an entry without a URL.
pub fn load_suggestions(path: impl AsRef<Path>) -> Result<Vec<Suggestion>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let suggestions = parse_suggestions(&content, SuggestionFormat::from_path(path))?;
    tracing::debug!(
        path = %path.display(),
        count = suggestions.len(),
        "loaded suggestions"
    );
    Ok(suggestions)
}

/// Parse suggestions from a string in the given format
///
/// # Errors
///
/// Returns `LoadError` on malformed input or an entry without a URL.
pub fn parse_suggestions(
    content: &str,
    format: SuggestionFormat,
) -> Result<Vec<Suggestion>, LoadError> {
    let suggestions = match format {
        SuggestionFormat::Json => serde_json::from_str(content)?,
        SuggestionFormat::Csv => parse_csv(content)?,
        SuggestionFormat::Toml => toml::from_str::<SuggestionTable>(content)?.suggestions,
        SuggestionFormat::Lines => parse_lines(content),
    };

    if let Some(pos) = suggestions.iter().position(|s| s.url.trim().is_empty()) {
        return Err(LoadError::MissingTarget(pos + 1));
    }

    Ok(suggestions)
}

fn parse_csv(content: &str) -> Result<Vec<Suggestion>, csv::Error> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes())
        .deserialize()
        .collect()
}

fn parse_lines(content: &str) -> Vec<Suggestion> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| match line.split_once('\t') {
            Some((label, url)) => Suggestion::new(label.trim(), url.trim()),
            None => Suggestion::new(line, line),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::write_temp_file;

    #[test]
    fn test_format_from_path() {
        assert_eq!(SuggestionFormat::from_path(Path::new("a.json")), SuggestionFormat::Json);
        assert_eq!(SuggestionFormat::from_path(Path::new("a.CSV")), SuggestionFormat::Csv);
        assert_eq!(SuggestionFormat::from_path(Path::new("a.toml")), SuggestionFormat::Toml);
        assert_eq!(SuggestionFormat::from_path(Path::new("links")), SuggestionFormat::Lines);
        assert_eq!(SuggestionFormat::from_path(Path::new("a.txt")), SuggestionFormat::Lines);
    }

    #[test]
    fn test_parse_json() {
        let json = r#"[
            {"label": "reddit", "url": "https://reddit.com"},
            {"label": "facebook", "url": "https://facebook.com"}
        ]"#;
        let parsed = parse_suggestions(json, SuggestionFormat::Json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1], Suggestion::new("facebook", "https://facebook.com"));
    }

    #[test]
    fn test_parse_csv_trims_fields() {
        let csv = "label,url\nreddit , https://reddit.com\ntwitter,https://twitter.com\n";
        let parsed = parse_suggestions(csv, SuggestionFormat::Csv).unwrap();
        assert_eq!(parsed[0], Suggestion::new("reddit", "https://reddit.com"));
        assert_eq!(parsed[1].label, "twitter");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            [[suggestions]]
            label = "reddit"
            url = "https://reddit.com"

            [[suggestions]]
            label = "twitter"
            href = "https://twitter.com"
        "#;
        let parsed = parse_suggestions(toml, SuggestionFormat::Toml).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].url, "https://twitter.com");
    }

    #[test]
    fn test_parse_lines() {
        let text = "# bookmarks\nreddit\thttps://reddit.com\n\nhttps://example.org\n";
        let parsed = parse_suggestions(text, SuggestionFormat::Lines).unwrap();
        assert_eq!(
            parsed,
            vec![
                Suggestion::new("reddit", "https://reddit.com"),
                Suggestion::new("https://example.org", "https://example.org"),
            ]
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let text = "a\thttps://a.one\na\thttps://a.two\n";
        let parsed = parse_suggestions(text, SuggestionFormat::Lines).unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_missing_target_is_rejected() {
        let json = r#"[{"label": "ok", "url": "https://ok"}, {"label": "bad", "url": " "}]"#;
        let err = parse_suggestions(json, SuggestionFormat::Json).unwrap_err();
        assert!(matches!(err, LoadError::MissingTarget(2)));
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_suggestions("[{", SuggestionFormat::Json).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_load_from_file() {
        let (_dir, path) = write_temp_file("links.csv", "label,url\nreddit,https://reddit.com\n");
        let loaded = load_suggestions(&path).unwrap();
        assert_eq!(loaded, vec![Suggestion::new("reddit", "https://reddit.com")]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_suggestions("/nonexistent/links.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/links.json"));
    }
}
