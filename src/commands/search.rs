//! Search command - interactive search box over a suggestion file

use crate::{
    SuggestError,
    cli::SearchArgs,
    config::SuggestConfig,
    suggestion::load_suggestions,
    ui::{OutputWriter, SearchFrontend, SearchOutcome},
    view::SearchView,
};

type Result<T> = std::result::Result<T, SuggestError>;

/// Execute the search command
///
/// Runs `frontend` over the suggestions in `args.file` and reports how the
/// session ended: the followed URL (or opens it), `name=query` for a
/// submitted query, nothing when cancelled.
///
/// # Errors
/// Returns an error if no file was given, the file cannot be loaded, the
/// frontend fails, or the browser cannot be launched.
pub fn execute(
    args: &SearchArgs,
    config: &SuggestConfig,
    frontend: &dyn SearchFrontend,
    output: &dyn OutputWriter,
) -> Result<SearchOutcome> {
    let file = args.file.as_deref().ok_or_else(|| {
        SuggestError::InvalidInput("No suggestion file given. Usage: suggest <FILE>".into())
    })?;

    let suggestions = load_suggestions(file)?;
    if suggestions.is_empty() {
        output.warning(&format!("No suggestions in {}", file.display()));
    }

    let props = args.props.apply(config.props(suggestions));
    let mut view = SearchView::new(props);
    if let Some(query) = &args.query {
        view.handle_change(query.as_str());
    }

    let outcome = frontend.run(view)?;
    tracing::info!(outcome = %outcome, "search finished");

    match &outcome {
        SearchOutcome::Followed(suggestion) if args.open || config.open_links => {
            open::that(&suggestion.url)?;
            output.success(&format!("Opened {}", suggestion.url));
        }
        SearchOutcome::Followed(_) | SearchOutcome::Submitted { .. } => {
            output.write(&outcome.to_string());
        }
        SearchOutcome::Cancelled => output.info("Cancelled"),
    }

    Ok(outcome)
}
