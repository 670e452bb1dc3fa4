//! Conversion entry points.
//!
//! Sequences option resolution, parsing and rendering. Does not run the
//! host's recursive markup rendering; see [`SimpleTableHook`](crate::SimpleTableHook).

use crate::{ConversionOptions, ConvertError, ParsedTable, TableDefaults, TagAttrs, render};

/// Convert a table body with already-resolved options.
///
/// Infallible: a [`ConversionOptions`] always holds a registered separator.
///
/// # Example
///
/// ```
/// use simpletable::{ConversionOptions, Separator, convert};
///
/// let markup = convert("a;b\nc;d", &ConversionOptions::new(Separator::Semicolon));
/// assert_eq!(markup.matches("|-\n").count(), 2);
/// ```
#[must_use]
pub fn convert(body: &str, options: &ConversionOptions) -> String {
    let table = ParsedTable::parse(body, options.separator.rule());
    tracing::debug!(
        separator = %options.separator,
        head = %options.head,
        rows = table.len(),
        "Converted table body"
    );
    render(&table, options)
}

/// Convert a table body using raw tag attributes.
///
/// The separator key is checked before any parsing; on failure nothing is
/// rendered.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidSeparator`] if `sep` is not a registered key.
///
/// # Example
///
/// ```
/// use simpletable::{TableDefaults, TagAttrs, convert_tag};
///
/// let defaults = TableDefaults::default();
/// let markup = convert_tag("a\tb", &TagAttrs::parse("sep=tab"), &defaults).unwrap();
/// assert!(markup.contains("| b\n"));
///
/// let err = convert_tag("a\tb", &TagAttrs::parse("sep=pipe"), &defaults).unwrap_err();
/// assert_eq!(err.to_string(), "Invalid separator: pipe");
/// ```
pub fn convert_tag(
    body: &str,
    attrs: &TagAttrs,
    defaults: &TableDefaults,
) -> Result<String, ConvertError> {
    let options = ConversionOptions::from_attrs(attrs, defaults).inspect_err(|e| {
        tracing::warn!(error = %e, "Rejected table options");
    })?;
    Ok(convert(body, &options))
}
