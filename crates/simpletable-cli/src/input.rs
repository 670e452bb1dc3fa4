//! Input loading shared by commands.

use std::io::Read;
use std::path::Path;

use simpletable_config::{CliSettings, Config};

use crate::error::CliError;

/// Read the whole input from `path`, or stdin when `path` is `None` or `-`.
pub(crate) fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut text = String::new();
            std::io::stdin().lock().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Load configuration with CLI overrides applied.
pub(crate) fn load_config(
    config: Option<&Path>,
    settings: &CliSettings,
) -> Result<Config, CliError> {
    let config = Config::load(config, Some(settings))?;
    if let Some(path) = &config.config_path {
        tracing::debug!(path = %path.display(), "Loaded configuration");
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use simpletable_config::ConfigError;

    use super::*;

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.txt");
        std::fs::write(&path, "a\tb\nc\td\n").unwrap();

        assert_eq!(read_input(Some(&path)).unwrap(), "a\tb\nc\td\n");
    }

    #[test]
    fn test_read_input_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_input(Some(&dir.path().join("missing.txt")));
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn test_load_config_applies_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("simpletable.toml");
        std::fs::write(&path, "[table]\ntag = \"grid\"\ndefault_separator = \"tab\"\n").unwrap();
        let settings = CliSettings {
            default_separator: Some("comma".to_owned()),
            ..CliSettings::default()
        };

        let config = load_config(Some(&path), &settings).unwrap();
        assert_eq!(config.table.tag, "grid");
        assert_eq!(config.table.default_separator, "comma");
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(Some(&dir.path().join("nope.toml")), &CliSettings::default());
        assert!(matches!(
            result,
            Err(CliError::Config(ConfigError::NotFound(_)))
        ));
    }
}
