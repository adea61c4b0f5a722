//! Output abstraction layer
//!
//! Commands report through an [`OutputWriter`] so they can be tested without
//! a terminal. Results go through `write`; everything else is a status message
//! that quiet mode suppresses.

use colored::Colorize;

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use search_suggestions::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new(false);
/// output.write("https://reddit.com");
/// output.success("Opened link");
/// output.error("Something went wrong");
/// ```
pub trait OutputWriter {
    /// Write a result line
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation - writes to stdout/stderr with colors
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    /// Create a new stdout writer; `quiet` keeps only results and errors
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "error:".red().bold(), message);
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "✓".green(), message);
        }
    }

    fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "warning:".yellow().bold(), message);
        }
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", message.dimmed());
        }
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Normal,
    Error,
    Success,
    Warning,
    Info,
}
