//! Render command - print the widget's HTML markup

use crate::{
    SuggestError, cli::PropArgs, config::SuggestConfig, suggestion::load_suggestions,
    ui::OutputWriter, view::SearchView,
};
use std::path::Path;

type Result<T> = std::result::Result<T, SuggestError>;

/// Execute the render command
///
/// # Errors
/// Returns an error if the suggestion file cannot be loaded.
pub fn execute(
    file: &Path,
    query: Option<&str>,
    props: &PropArgs,
    config: &SuggestConfig,
    output: &dyn OutputWriter,
) -> Result<()> {
    let suggestions = load_suggestions(file)?;
    let mut view = SearchView::new(props.apply(config.props(suggestions)));
    if let Some(query) = query {
        view.handle_change(query);
    }

    output.write(&view.markup().to_html());
    Ok(())
}
