//! CLI error types.

use simpletable::{ConvertError, ExpandError};
use simpletable_config::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Convert(#[from] ConvertError),

    #[error("{0}")]
    Expand(#[from] ExpandError),

    #[error("{0}")]
    Validation(String),
}
