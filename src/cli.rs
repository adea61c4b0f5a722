//! Command-line interface definitions and parsing
//!
//! Defines the CLI of the `suggest` binary using `clap` derive.
//!
//! # Commands
//!
//! - **search**: Interactive search box over a suggestion file (default)
//! - **filter**: Print the suggestions matching a query
//! - **render**: Print the widget's HTML for a query
//! - **completions**: Generate shell completions
//! - **config**: Show or initialize the configuration file
//!
//! A bare `suggest links.json` runs `search`.
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use search_suggestions::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["suggest", "filter", "links.json", "rust"]);
//! assert!(matches!(cli.get_command(), Commands::Filter { .. }));
//! ```

use crate::view::SearchProps;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Widget property overrides shared by `search` and `render`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PropArgs {
    /// Name of the search input (overrides config)
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Placeholder of the empty input (overrides config)
    #[arg(long, value_name = "TEXT")]
    pub placeholder: Option<String>,

    /// Focus the input on start (overrides config)
    #[arg(long)]
    pub autofocus: bool,

    /// Id of the widget's root element
    #[arg(long, value_name = "ID")]
    pub id: Option<String>,

    /// Class name of the widget's root element
    #[arg(long = "class", value_name = "CLASS")]
    pub class_name: Option<String>,
}

impl PropArgs {
    /// Apply the flags that were given on top of `props`
    #[must_use]
    pub fn apply(&self, mut props: SearchProps) -> SearchProps {
        if let Some(name) = &self.name {
            props = props.with_name(name.clone());
        }
        if let Some(placeholder) = &self.placeholder {
            props = props.with_placeholder(placeholder.clone());
        }
        if self.autofocus {
            props = props.with_auto_focus(true);
        }
        if let Some(id) = &self.id {
            props = props.with_id(id.clone());
        }
        if let Some(class_name) = &self.class_name {
            props = props.with_class_name(class_name.clone());
        }
        props
    }
}

/// Arguments of the interactive search
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchArgs {
    /// Suggestion file (.json, .csv, .toml, or one `label<TAB>url` per line)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Initial query
    #[arg(long, value_name = "QUERY")]
    pub query: Option<String>,

    /// Open the followed link in the browser instead of printing it
    #[arg(long)]
    pub open: bool,

    #[command(flatten)]
    pub props: PropArgs,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "suggest")]
#[command(about = "A search box that filters a list of links as you type", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Arguments for the default `search` command
    #[command(flatten)]
    pub search: SearchArgs,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Use this configuration file instead of the default one
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive search box (default)
    #[command(visible_alias = "s")]
    Search(SearchArgs),

    /// Print the suggestions whose label contains QUERY
    #[command(visible_alias = "f")]
    Filter {
        /// Suggestion file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Text to search for (case-insensitive)
        #[arg(value_name = "QUERY")]
        query: String,

        /// Print matches as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Print the widget's HTML markup
    Render {
        /// Suggestion file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Query typed into the input
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        #[command(flatten)]
        props: PropArgs,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The command to run; `search` when none was named
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Search(self.search.clone()))
    }
}
