//! `simpletable convert` command implementation.

use std::path::PathBuf;

use clap::Args;
use simpletable::{TagAttrs, convert_tag};
use simpletable_config::CliSettings;

use crate::error::CliError;
use crate::input::{load_config, read_input};
use crate::output::Output;

/// Arguments for the convert command.
#[derive(Args)]
pub(crate) struct ConvertArgs {
    /// Table body file (default: stdin).
    file: Option<PathBuf>,

    /// Separator key (see `simpletable separators`).
    #[arg(short, long)]
    sep: Option<String>,

    /// Header placement: top, left or topleft.
    #[arg(long)]
    head: Option<String>,

    /// Add 1px solid borders to the table and every cell.
    #[arg(long)]
    border: bool,

    /// Render the table collapsed by default.
    #[arg(long)]
    collapse: bool,

    /// Extra table attribute (repeatable).
    #[arg(short, long = "attr", value_name = "KEY=VALUE")]
    attrs: Vec<String>,

    /// Path to configuration file (default: auto-discover simpletable.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ConvertArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let body = read_input(self.file.as_deref())?;
        let markup = self.run(&body)?;
        Output::new().content(&markup)?;
        Ok(())
    }

    /// Convert `body` with the configured defaults and flag attributes.
    fn run(&self, body: &str) -> Result<String, CliError> {
        let config = load_config(self.config.as_deref(), &CliSettings::default())?;
        let defaults = config.table.to_defaults()?;
        let attrs = self.tag_attrs()?;

        Ok(convert_tag(body, &attrs, &defaults)?)
    }

    /// Translate flags into the attribute list a tag would carry.
    fn tag_attrs(&self) -> Result<TagAttrs, CliError> {
        let mut attrs = TagAttrs::new();

        for raw in &self.attrs {
            let (key, value) = raw
                .split_once('=')
                .filter(|(key, _)| !key.trim().is_empty())
                .ok_or_else(|| {
                    CliError::Validation(format!("invalid attribute {raw:?}: expected KEY=VALUE"))
                })?;
            attrs.insert(key.trim(), value);
        }
        if let Some(sep) = &self.sep {
            attrs.insert("sep", sep.as_str());
        }
        if let Some(head) = &self.head {
            attrs.insert("head", head.as_str());
        }
        if self.border {
            attrs.insert("applycssborderstyle", "");
        }
        if self.collapse {
            attrs.insert("collapse", "");
        }

        Ok(attrs)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser;
    use pretty_assertions::assert_eq;
    use simpletable::ConvertError;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ConvertArgs,
    }

    fn parse(argv: &[&str]) -> ConvertArgs {
        let mut full = vec!["simpletable"];
        full.extend_from_slice(argv);
        TestCli::parse_from(full).args
    }

    #[test]
    fn test_flags_to_attrs() {
        let args = parse(&["--sep", "tab", "--head", "top", "--border", "--collapse"]);
        let attrs = args.tag_attrs().unwrap();
        let items: Vec<(&str, &str)> = attrs.iter().collect();
        assert_eq!(
            items,
            vec![
                ("sep", "tab"),
                ("head", "top"),
                ("applycssborderstyle", ""),
                ("collapse", ""),
            ]
        );
    }

    #[test]
    fn test_extra_attrs_in_order() {
        let args = parse(&["-a", "width=600", "--attr", "class=sortable wikitable"]);
        let attrs = args.tag_attrs().unwrap();
        let items: Vec<(&str, &str)> = attrs.iter().collect();
        assert_eq!(
            items,
            vec![("width", "600"), ("class", "sortable wikitable")]
        );
    }

    #[test]
    fn test_sep_flag_overrides_attr() {
        let args = parse(&["-a", "sep=comma", "--sep", "colon"]);
        let attrs = args.tag_attrs().unwrap();
        assert_eq!(attrs.get("sep"), Some("colon"));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_malformed_attr() {
        let args = parse(&["-a", "novalue"]);
        assert!(matches!(args.tag_attrs(), Err(CliError::Validation(_))));

        let args = parse(&["-a", "=value"]);
        assert!(args.tag_attrs().is_err());
    }

    fn write_config(dir: &Path, content: &str) -> String {
        let path = dir.join("simpletable.toml");
        std::fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_run_converts_with_flags() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(dir.path(), "");
        let args = parse(&["-c", config.as_str(), "--sep", "tab", "--head", "top"]);

        let markup = args.run("FieldA\tFieldB\nFieldC\tFieldD\n").unwrap();
        assert!(markup.contains("! FieldB\n|-\n"));
        assert!(markup.ends_with("| FieldD\n|}"));
    }

    #[test]
    fn test_run_uses_config_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(
            dir.path(),
            "[table]\ndefault_separator = \"semicolon\"\ndefault_head = \"left\"\n",
        );
        let args = parse(&["--config", config.as_str()]);

        let markup = args.run("a;b").unwrap();
        assert!(markup.contains("! <span"));
        assert!(markup.contains("| b\n|}"));
    }

    #[test]
    fn test_run_flag_overrides_config_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(dir.path(), "[table]\ndefault_separator = \"semicolon\"\n");
        let args = parse(&["-c", config.as_str(), "--sep", "comma"]);

        let markup = args.run("a;b,c").unwrap();
        assert!(markup.contains("a;b</span>\n| c\n"));
    }

    #[test]
    fn test_run_invalid_separator() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(dir.path(), "");
        let args = parse(&["-c", config.as_str(), "--sep", "pipe"]);

        let err = args.run("a|b").unwrap_err();
        assert!(matches!(
            &err,
            CliError::Convert(ConvertError::InvalidSeparator(key)) if key == "pipe"
        ));
        assert_eq!(err.to_string(), "Invalid separator: pipe");
    }

    #[test]
    fn test_run_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let args = parse(&["-c", missing.to_str().unwrap()]);
        assert!(matches!(args.run("x"), Err(CliError::Config(_))));
    }

    #[test]
    fn test_file_positional() {
        let args = parse(&["table.txt"]);
        assert_eq!(args.file, Some(PathBuf::from("table.txt")));
    }
}
