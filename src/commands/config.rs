//! Config command - show or initialize the configuration file

use crate::{SuggestError, cli::ConfigCommands, config::SuggestConfig, ui::OutputWriter};
use std::path::Path;

type Result<T> = std::result::Result<T, SuggestError>;

/// Execute a configuration subcommand against the file at `path`
///
/// # Errors
/// Returns an error if the configuration cannot be serialized or written.
pub fn execute(
    command: &ConfigCommands,
    config: &SuggestConfig,
    path: &Path,
    output: &dyn OutputWriter,
) -> Result<()> {
    match command {
        ConfigCommands::Show => show(config, path, output),
        ConfigCommands::Init { force } => init(path, *force, output),
    }
}

fn show(config: &SuggestConfig, path: &Path, output: &dyn OutputWriter) -> Result<()> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| SuggestError::InvalidInput(format!("Failed to serialize config: {e}")))?;

    output.info(&format!("# {}", path.display()));
    output.write(rendered.trim_end());
    Ok(())
}

fn init(path: &Path, force: bool, output: &dyn OutputWriter) -> Result<()> {
    if path.exists() && !force {
        output.warning(&format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ));
        return Ok(());
    }

    SuggestConfig::default().save_to(path)?;
    tracing::info!(path = %path.display(), "wrote default configuration");
    output.success(&format!("Wrote {}", path.display()));
    Ok(())
}
