//! `suggest` CLI entry point
//!
//! Opens a search box over a file of links and prints (or opens) whichever
//! link the user picks.
//!
//! # Usage
//!
//! ```bash
//! # Search interactively (default command)
//! suggest links.json
//! suggest search links.csv --autofocus --query rust
//!
//! # Print matches without a UI
//! suggest filter links.toml t
//! suggest -q filter links.toml t --json
//!
//! # Print the widget's HTML
//! suggest render links.json face --class navbar-search
//!
//! # Shell completions
//! suggest completions zsh > _suggest
//! ```
//!
//! # Configuration
//!
//! Defaults are read from `~/.config/search-suggestions/config.toml` on Linux
//! (see `suggest config init`) and `SUGGEST_*` environment variables. Logs go
//! to the user's cache directory; set `SUGGEST_LOG=debug` for more detail.

use search_suggestions::{
    SuggestError,
    cli::{Cli, Commands},
    commands,
    config::SuggestConfig,
    logging,
    ui::{OutputWriter, RatatuiSearch, StdoutWriter, ratatui_adapter::Theme},
};
use std::io;
use std::process::ExitCode;

type Result<T> = std::result::Result<T, SuggestError>;

fn run(cli: &Cli, output: &dyn OutputWriter) -> Result<()> {
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => SuggestConfig::config_path()?,
    };
    let config = SuggestConfig::load_from(&config_path)?;

    // Held until exit so buffered log lines are flushed
    let _guard = match logging::init_tracing(&config.log_level) {
        Ok(guard) => guard,
        Err(e) => {
            output.warning(&format!("Logging disabled: {e}"));
            None
        }
    };

    match cli.get_command() {
        Commands::Search(args) => {
            let frontend = RatatuiSearch::new().with_theme(Theme::from(config.theme));
            commands::search(&args, &config, &frontend, output)?;
        }
        Commands::Filter { file, query, json } => {
            commands::filter(&file, &query, json, output)?;
        }
        Commands::Render { file, query, props } => {
            commands::render(&file, query.as_deref(), &props, &config, output)?;
        }
        Commands::Completions { shell } => {
            commands::completions(shell, &mut io::stdout());
        }
        Commands::Config { command } => {
            commands::config(&command, &config, &config_path, output)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    let output = StdoutWriter::new(cli.quiet);

    match run(&cli, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            output.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
