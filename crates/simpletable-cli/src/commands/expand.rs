//! `simpletable expand` command implementation.

use std::path::PathBuf;

use clap::Args;
use simpletable::{SimpleTableHook, TagExpander};
use simpletable_config::CliSettings;

use crate::error::CliError;
use crate::input::{load_config, read_input};
use crate::output::Output;

/// Arguments for the expand command.
#[derive(Args)]
pub(crate) struct ExpandArgs {
    /// Document file (default: stdin).
    file: Option<PathBuf>,

    /// Tag name to expand (overrides config).
    #[arg(short, long)]
    tag: Option<String>,

    /// Separator for tags without `sep` (overrides config).
    #[arg(short, long)]
    sep: Option<String>,

    /// Head mode for tags without `head` (overrides config).
    #[arg(long)]
    head: Option<String>,

    /// Path to configuration file (default: auto-discover simpletable.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ExpandArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let document = read_input(self.file.as_deref())?;
        let expanded = self.run(&document)?;
        Output::new().content(&expanded)?;
        Ok(())
    }

    /// Expand every table tag in `document`.
    fn run(&self, document: &str) -> Result<String, CliError> {
        let settings = CliSettings {
            tag: self.tag.clone(),
            default_separator: self.sep.clone(),
            default_head: self.head.clone(),
        };
        let config = load_config(self.config.as_deref(), &settings)?;

        let hook = SimpleTableHook::new()
            .with_tag(config.table.tag.clone())
            .with_defaults(config.table.to_defaults()?);
        let expander = TagExpander::new(hook)?;

        Ok(expander.expand(document))
    }
}
