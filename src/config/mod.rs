//! Configuration module
//!
//! Persistent defaults for the search widget and the `suggest` binary.
//! Configuration is stored as TOML in the user's config directory and can
//! be overridden with `SUGGEST_*` environment variables, then with CLI flags.

use crate::suggestion::Suggestion;
use crate::view::{DEFAULT_NAME, DEFAULT_PLACEHOLDER, SearchProps};
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix of environment variable overrides (`SUGGEST_AUTO_FOCUS=true`)
pub const ENV_PREFIX: &str = "SUGGEST";

/// Color theme of the terminal frontend
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SuggestConfig {
    /// `name` of the search input, reported with submitted queries
    pub name: String,

    /// Placeholder shown in the empty input
    pub placeholder: String,

    /// Focus the input as soon as the widget starts
    pub auto_focus: bool,

    /// Open followed links in the browser instead of printing them
    pub open_links: bool,

    /// Terminal color theme
    pub theme: ThemeName,

    /// Log filter used when `SUGGEST_LOG` is not set
    pub log_level: String,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            auto_focus: false,
            open_links: false,
            theme: ThemeName::Dark,
            log_level: "info".to_string(),
        }
    }
}

impl SuggestConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("search-suggestions").join("config.toml"))
    }

    /// Load configuration: built-in defaults, then `path` if it exists, then
    /// environment overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or an override cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if path.exists() {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }

        builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Save configuration to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Build widget props from this configuration
    #[must_use]
    pub fn props(&self, suggestions: Vec<Suggestion>) -> SearchProps {
        SearchProps::new(suggestions)
            .with_name(self.name.clone())
            .with_placeholder(self.placeholder.clone())
            .with_auto_focus(self.auto_focus)
    }
}
