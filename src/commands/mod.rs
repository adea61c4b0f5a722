//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and reports through an [`OutputWriter`](crate::ui::OutputWriter).

pub mod completions;
pub mod config;
pub mod filter;
pub mod render;
pub mod search;

// Re-export execute functions for convenience
pub use completions::execute as completions;
pub use config::execute as config;
pub use filter::execute as filter;
pub use render::execute as render;
pub use search::execute as search;
