//! Query matching
//!
//! Decides which suggestions are visible for a query.

pub mod filter;

pub use filter::{SubstringFilter, element_text, filter_visible};
