//! Ratatui-based search frontend
//!
//! Renders a [`SearchView`](crate::view::SearchView) in the terminal and
//! feeds it crossterm key and mouse events.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           RatatuiSearch                     │
//! │  (implements SearchFrontend)                │
//! └────────────────────┬────────────────────────┘
//!                      │
//!               ┌──────┴──────┐
//!               ▼             ▼
//!         ┌───────────┐ ┌───────────┐
//!         │  Ratatui  │ │ Crossterm │
//!         │ (widgets) │ │  (events) │
//!         └───────────┘ └───────────┘
//! ```

mod app;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use app::{RatatuiSearch, render};
pub use events::{EventResult, handle_event};
pub use state::AppState;
pub use theme::Theme;
