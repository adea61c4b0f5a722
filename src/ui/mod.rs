//! UI abstraction layer
//!
//! The widget logic lives in [`crate::view`]; this module holds what it
//! takes to put a [`SearchView`](crate::view::SearchView) in front of a user.
//!
//! # Core Traits
//!
//! - **`SearchFrontend`** - Runs one interactive search session
//! - **`OutputWriter`** - Result lines and status messages
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Commands (search, filter, ...)     │
//! └────────────────┬────────────────────────┘
//!                  │ Uses traits
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │  SearchFrontend / OutputWriter          │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ RatatuiSearch │  │ StdoutWriter      │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! ## Implementing a Custom Frontend
//!
//! ```no_run
//! use search_suggestions::ui::{Result, SearchFrontend, SearchOutcome};
//! use search_suggestions::view::SearchView;
//!
//! struct FirstMatch;
//!
//! impl SearchFrontend for FirstMatch {
//!     fn run(&self, view: SearchView) -> Result<SearchOutcome> {
//!         Ok(view
//!             .visible()
//!             .next()
//!             .cloned()
//!             .map_or(SearchOutcome::Cancelled, SearchOutcome::Followed))
//!     }
//! }
//! ```

mod error;
mod traits;
mod types;

pub mod output;
pub mod ratatui_adapter;

#[cfg(test)]
pub mod mock;

pub use error::{Result, UiError};
pub use output::{MessageLevel, OutputWriter, StdoutWriter};
pub use ratatui_adapter::RatatuiSearch;
pub use traits::SearchFrontend;
pub use types::SearchOutcome;
