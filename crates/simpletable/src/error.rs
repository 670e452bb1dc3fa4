//! Error types for table conversion.

/// Error raised while converting a table body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The requested separator key is not in the registry.
    #[error("Invalid separator: {0}")]
    InvalidSeparator(String),
}
