//! Conversion options.
//!
//! Turns the loosely-typed tag attribute bag into [`ConversionOptions`].
//! Reserved attributes configure the conversion; all others pass through to
//! the output table unchanged.

use std::fmt;

use crate::{ConvertError, Separator, TagAttrs};

/// Attribute names consumed by option parsing and never re-emitted.
pub const RESERVED_KEYS: [&str; 4] = ["sep", "head", "applycssborderstyle", "collapse"];

/// Attribute values that switch a flag attribute off.
const FALSE_VALUES: [&str; 4] = ["0", "false", "no", "off"];

/// Which cells render as headers.
///
/// Parsed by substring: any value containing `top` marks the first row,
/// any value containing `left` marks the first column.
///
/// # Example
///
/// ```
/// use simpletable::HeadMode;
///
/// assert_eq!(HeadMode::parse("topleft"), HeadMode::TOP_LEFT);
/// assert_eq!(HeadMode::parse("left"), HeadMode::LEFT);
/// assert_eq!(HeadMode::parse("bottom"), HeadMode::NONE);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HeadMode {
    /// First row is a header row.
    pub top: bool,
    /// First column is a header column.
    pub left: bool,
}

impl HeadMode {
    /// No header cells.
    pub const NONE: Self = Self {
        top: false,
        left: false,
    };
    /// Header row only.
    pub const TOP: Self = Self {
        top: true,
        left: false,
    };
    /// Header column only.
    pub const LEFT: Self = Self {
        top: false,
        left: true,
    };
    /// Header row and header column.
    pub const TOP_LEFT: Self = Self {
        top: true,
        left: true,
    };

    /// Parse a head-mode string. Never fails.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        Self {
            top: value.contains("top"),
            left: value.contains("left"),
        }
    }
}

impl fmt::Display for HeadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match (self.top, self.left) {
            (false, false) => "none",
            (true, false) => "top",
            (false, true) => "left",
            (true, true) => "topleft",
        })
    }
}

/// Defaults applied when a tag does not set an option itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableDefaults {
    /// Separator used when `sep` is absent.
    pub separator: Separator,
    /// Head mode used when `head` is absent.
    pub head: HeadMode,
    /// Label of the expand affordance (`data-expandtext`).
    pub expand_text: String,
    /// Label of the collapse affordance (`data-collapsetext`).
    pub collapse_text: String,
}

impl Default for TableDefaults {
    fn default() -> Self {
        Self {
            separator: Separator::default(),
            head: HeadMode::NONE,
            expand_text: "+".to_owned(),
            collapse_text: "-".to_owned(),
        }
    }
}

/// Fully resolved options for one conversion.
///
/// # Example
///
/// ```
/// use simpletable::{ConversionOptions, HeadMode, Separator, TableDefaults, TagAttrs};
///
/// let attrs = TagAttrs::parse("sep=tab head=top width=600");
/// let options = ConversionOptions::from_attrs(&attrs, &TableDefaults::default()).unwrap();
/// assert_eq!(options.separator, Separator::Tab);
/// assert_eq!(options.head, HeadMode::TOP);
/// assert_eq!(options.passthrough, vec![("width".to_owned(), "600".to_owned())]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionOptions {
    /// Field separator.
    pub separator: Separator,
    /// Header placement.
    pub head: HeadMode,
    /// Apply inline 1px solid borders to the table and every cell.
    pub border_style: bool,
    /// Render the table collapsed by default.
    pub collapse: bool,
    /// Attributes emitted verbatim on the table, in supplied order.
    pub passthrough: Vec<(String, String)>,
    /// Label of the expand affordance.
    pub expand_text: String,
    /// Label of the collapse affordance.
    pub collapse_text: String,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self::with_defaults(&TableDefaults::default())
    }
}

impl ConversionOptions {
    /// Options with the given separator and every other setting at its default.
    #[must_use]
    pub fn new(separator: Separator) -> Self {
        Self {
            separator,
            ..Self::default()
        }
    }

    /// Options taken entirely from `defaults`.
    #[must_use]
    pub fn with_defaults(defaults: &TableDefaults) -> Self {
        Self {
            separator: defaults.separator,
            head: defaults.head,
            border_style: false,
            collapse: false,
            passthrough: Vec::new(),
            expand_text: defaults.expand_text.clone(),
            collapse_text: defaults.collapse_text.clone(),
        }
    }

    /// Resolve options from tag attributes.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidSeparator`] if `sep` names a separator
    /// outside the registry.
    pub fn from_attrs(attrs: &TagAttrs, defaults: &TableDefaults) -> Result<Self, ConvertError> {
        let mut options = Self::with_defaults(defaults);

        for (key, value) in attrs.iter() {
            match key {
                "sep" => options.separator = Separator::from_key(value)?,
                "head" => options.head = HeadMode::parse(value),
                "applycssborderstyle" => options.border_style = flag_enabled(value),
                "collapse" => options.collapse = true,
                _ => options.passthrough.push((key.to_owned(), value.to_owned())),
            }
        }

        Ok(options)
    }

    /// Set the head mode.
    #[must_use]
    pub fn with_head(mut self, head: HeadMode) -> Self {
        self.head = head;
        self
    }

    /// Enable or disable inline border styling.
    #[must_use]
    pub fn with_border_style(mut self, enabled: bool) -> Self {
        self.border_style = enabled;
        self
    }

    /// Enable or disable collapsed-by-default rendering.
    #[must_use]
    pub fn with_collapse(mut self, enabled: bool) -> Self {
        self.collapse = enabled;
        self
    }

    /// Append a passthrough attribute.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.passthrough.push((key.into(), value.into()));
        self
    }

    /// Passthrough attributes, skipping any reserved name.
    pub fn passthrough_attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.passthrough
            .iter()
            .filter(|(k, _)| !is_reserved(k))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Whether an attribute name is consumed by option parsing.
#[must_use]
pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.iter().any(|r| r.eq_ignore_ascii_case(key))
}

/// A present flag attribute is on unless its value spells "false".
fn flag_enabled(value: &str) -> bool {
    let value = value.trim();
    !FALSE_VALUES.iter().any(|f| f.eq_ignore_ascii_case(value))
}
