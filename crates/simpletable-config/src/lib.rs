//! Configuration management for simpletable.
//!
//! Parses `simpletable.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`]. Per-tag
//! attributes still take precedence over anything configured here.

use serde::Deserialize;
use simpletable::{HeadMode, Separator, TableDefaults};
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the tag name.
    pub tag: Option<String>,
    /// Override the default separator key.
    pub default_separator: Option<String>,
    /// Override the default head mode.
    pub default_head: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "simpletable.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Table conversion defaults.
    pub table: TableConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// `[table]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Tag name the hook answers to.
    pub tag: String,
    /// Separator key used when a tag has no `sep` attribute.
    pub default_separator: String,
    /// Head mode used when a tag has no `head` attribute.
    pub default_head: Option<String>,
    /// Expand affordance label.
    pub expand_text: String,
    /// Collapse affordance label.
    pub collapse_text: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        let defaults = TableDefaults::default();
        Self {
            tag: simpletable::DEFAULT_TAG.to_owned(),
            default_separator: defaults.separator.key().to_owned(),
            default_head: None,
            expand_text: defaults.expand_text,
            collapse_text: defaults.collapse_text,
        }
    }
}

impl TableConfig {
    /// Validate that all fields hold usable values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the tag name is empty or malformed,
    /// or the default separator is not a registered key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.tag, "table.tag")?;
        if !self
            .tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ConfigError::Validation(format!(
                "table.tag must contain only letters, digits, '-' or '_': {:?}",
                self.tag
            )));
        }
        self.separator()?;
        Ok(())
    }

    /// Resolve the default separator key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the key is not registered.
    pub fn separator(&self) -> Result<Separator, ConfigError> {
        Separator::from_key(&self.default_separator).map_err(|e| {
            ConfigError::Validation(format!("table.default_separator: {e}"))
        })
    }

    /// Build conversion defaults from this section.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the default separator is invalid.
    pub fn to_defaults(&self) -> Result<TableDefaults, ConfigError> {
        Ok(TableDefaults {
            separator: self.separator()?,
            head: self
                .default_head
                .as_deref()
                .map_or(HeadMode::NONE, HeadMode::parse),
            expand_text: self.expand_text.clone(),
            collapse_text: self.collapse_text.clone(),
        })
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `simpletable.toml` in the current directory
    /// and its parents, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let start = std::env::current_dir().unwrap_or_default();
        Self::load_from(config_path, &start, cli_settings)
    }

    /// Like [`load`](Self::load), but discovery starts at `start_dir`.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_from(
        config_path: Option<&Path>,
        start_dir: &Path,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config(start_dir) {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(tag) = &settings.tag {
            self.table.tag.clone_from(tag);
        }
        if let Some(sep) = &settings.default_separator {
            self.table.default_separator.clone_from(sep);
        }
        if let Some(head) = &settings.default_head {
            self.table.default_head = Some(head.clone());
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.table.validate()
    }
}
