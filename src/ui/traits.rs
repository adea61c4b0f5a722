//! Core traits for UI abstraction layer

use super::error::Result;
use super::types::SearchOutcome;
use crate::view::SearchView;

/// Trait for interactive search frontends
///
/// A frontend drives a mounted [`SearchView`] from user input until the
/// user follows a link, submits the query, or cancels. The widget logic lives
/// in the view, so frontends only translate events and draw
/// [`SearchView::markup`].
pub trait SearchFrontend {
    /// Run the search session
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend cannot be initialized or if
    /// reading input or drawing fails.
    fn run(&self, view: SearchView) -> Result<SearchOutcome>;
}
