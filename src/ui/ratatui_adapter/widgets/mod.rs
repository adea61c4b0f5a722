//! Ratatui widgets for the search TUI

mod help_bar;
mod result_list;
mod search_input;

pub use help_bar::{HelpBar, KeyHint};
pub use result_list::ResultList;
pub use search_input::SearchInput;
