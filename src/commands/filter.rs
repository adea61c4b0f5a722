//! Filter command - print the suggestions matching a query

use crate::{
    SuggestError, search::filter_visible, suggestion::load_suggestions, ui::OutputWriter,
};
use std::path::Path;

type Result<T> = std::result::Result<T, SuggestError>;

/// Execute the filter command
///
/// Prints one `label <url>` line per visible suggestion, or a JSON array of
/// them when `json` is set.
///
/// # Errors
/// Returns an error if the file cannot be loaded or JSON serialization fails.
pub fn execute(file: &Path, query: &str, json: bool, output: &dyn OutputWriter) -> Result<()> {
    let suggestions = load_suggestions(file)?;
    let matches: Vec<_> = filter_visible(&suggestions, query)
        .into_iter()
        .map(|index| &suggestions[index])
        .collect();

    tracing::debug!(query, matches = matches.len(), "filtered suggestions");

    if json {
        let rendered = serde_json::to_string_pretty(&matches)
            .map_err(|e| SuggestError::InvalidInput(format!("Failed to serialize matches: {e}")))?;
        output.write(&rendered);
        return Ok(());
    }

    if matches.is_empty() {
        output.info(&format!("No suggestions match '{query}'"));
        return Ok(());
    }

    for suggestion in matches {
        output.write(&suggestion.to_string());
    }
    Ok(())
}
