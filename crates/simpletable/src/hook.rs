//! Tag hook boundary.
//!
//! The host calls a [`SimpleTableHook`] when it meets the table tag, then
//! renders the returned markup recursively so cell contents can hold
//! further markup.

use crate::render::collapse_blank_after;
use crate::{TableDefaults, TagAttrs, convert_tag};

/// Default tag name the hook answers to.
pub const DEFAULT_TAG: &str = "tab";

/// Closing element emitted by the host's final renderer.
const RENDERED_TABLE_CLOSE: &str = "</table>";

/// Output of a tag hook.
///
/// - [`Markup`](Self::Markup): table markup that the host renders recursively
/// - [`Text`](Self::Text): a diagnostic the host shows as is
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagOutput {
    /// Table markup for recursive rendering.
    Markup(String),
    /// Plain text shown without further processing.
    Text(String),
}

impl TagOutput {
    /// The output string, whichever variant it is.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Markup(s) | Self::Text(s) => s,
        }
    }

    /// Consume the output and return its string.
    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            Self::Markup(s) | Self::Text(s) => s,
        }
    }
}

/// Host-side renderer that turns markup into final output.
///
/// Implemented by the host; the hook never renders markup itself.
pub trait MarkupRenderer {
    /// Render markup to final output.
    fn render(&self, markup: &str) -> String;
}

impl<F> MarkupRenderer for F
where
    F: Fn(&str) -> String,
{
    fn render(&self, markup: &str) -> String {
        self(markup)
    }
}

/// Callback for the table tag.
///
/// # Example
///
/// ```
/// use simpletable::{SimpleTableHook, TagAttrs, TagOutput};
///
/// let hook = SimpleTableHook::new();
/// assert_eq!(hook.name(), "tab");
///
/// let output = hook.process("a\tb", &TagAttrs::parse("sep=tab"));
/// assert!(matches!(output, TagOutput::Markup(ref m) if m.starts_with("{|")));
///
/// let output = hook.process("a\tb", &TagAttrs::parse("sep=pipe"));
/// assert_eq!(output, TagOutput::Text("Invalid separator: pipe".to_owned()));
/// ```
#[derive(Clone, Debug)]
pub struct SimpleTableHook {
    tag: String,
    defaults: TableDefaults,
}

impl Default for SimpleTableHook {
    fn default() -> Self {
        Self::new()
    }
}

impl SimpleTableHook {
    /// Create a hook for the default tag with default options.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tag: DEFAULT_TAG.to_owned(),
            defaults: TableDefaults::default(),
        }
    }

    /// Answer to a different tag name.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Use different option defaults.
    #[must_use]
    pub fn with_defaults(mut self, defaults: TableDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Tag name (e.g., "tab").
    #[must_use]
    pub fn name(&self) -> &str {
        &self.tag
    }

    /// Option defaults.
    #[must_use]
    pub fn defaults(&self) -> &TableDefaults {
        &self.defaults
    }

    /// Convert a tag body.
    ///
    /// An invalid separator yields [`TagOutput::Text`] with the diagnostic.
    #[must_use]
    pub fn process(&self, body: &str, attrs: &TagAttrs) -> TagOutput {
        match convert_tag(body, attrs, &self.defaults) {
            Ok(markup) => TagOutput::Markup(markup),
            Err(e) => TagOutput::Text(e.to_string()),
        }
    }

    /// Convert a tag body and render it through the host.
    ///
    /// Markup goes through `host`, then through [`tidy_rendered`].
    /// Diagnostics are returned unrendered.
    #[must_use]
    pub fn render_with(&self, body: &str, attrs: &TagAttrs, host: &dyn MarkupRenderer) -> String {
        match self.process(body, attrs) {
            TagOutput::Markup(markup) => tidy_rendered(&host.render(&markup)),
            TagOutput::Text(text) => text,
        }
    }
}

/// Clean up host-rendered output: drop the blank line the host leaves after
/// a closed table and trim surrounding whitespace.
#[must_use]
pub fn tidy_rendered(rendered: &str) -> String {
    collapse_blank_after(rendered, RENDERED_TABLE_CLOSE)
        .trim()
        .to_owned()
}
