//! Search suggestions - a search box that filters a fixed set of links
//!
//! This library provides a search input with substring autocomplete over a
//! pre-supplied list of suggestions, plus a focus-navigation controller that
//! moves between the input and the matching items with arrow keys, Tab and
//! mouse hover.
//!
//! The widget itself is renderer-agnostic (see [`view::SearchView`]); the
//! [`ui::ratatui_adapter`] module renders it in the terminal.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod navigation;
pub mod search;
pub mod suggestion;
pub mod ui;
pub mod view;

#[cfg(test)]
pub mod testing;

pub use navigation::{Focus, NavKey, Navigator, Propagation};
pub use suggestion::{LoadError, Suggestion, load_suggestions};
pub use view::{InputChange, SearchMarkup, SearchProps, SearchView};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum SuggestError {
    /// Suggestion file could not be loaded
    #[error("Failed to load suggestions: {0}")]
    LoadError(#[from] suggestion::LoadError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
