//! Testing utilities
//!
//! Fixtures shared by unit tests. Only available when compiled with
//! `cfg(test)`.

use crate::suggestion::Suggestion;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// The three links most tests search through
#[must_use]
pub fn sample_suggestions() -> Vec<Suggestion> {
    ["reddit", "facebook", "twitter"]
        .into_iter()
        .map(|word| Suggestion::new(word, format!("https://{word}.com")))
        .collect()
}

/// Write `content` to a file called `name` inside a fresh temporary directory
///
/// The directory is removed when the returned `TempDir` is dropped, so keep
/// it alive for as long as the path is used.
///
/// # Panics
/// Panics if the directory or file cannot be created.
#[must_use]
pub fn write_temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test file");
    (dir, path)
}
