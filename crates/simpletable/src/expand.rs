//! Document-level tag expansion.
//!
//! Finds every `<tab ...>body</tab>` block in a document and replaces it
//! with the hook's output. Text outside the blocks is left untouched.

use regex::{Captures, Regex};

use crate::{SimpleTableHook, TagAttrs};

/// Error building a [`TagExpander`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpandError {
    /// Tag names are limited to ASCII letters, digits, `-` and `_`.
    #[error("Invalid tag name: {0:?}")]
    InvalidTag(String),
}

/// Expands table tags in a document.
///
/// # Example
///
/// ```
/// use simpletable::{SimpleTableHook, TagExpander};
///
/// let expander = TagExpander::new(SimpleTableHook::new()).unwrap();
/// let doc = "Intro\n<tab sep=comma>a,b</tab>\nOutro";
/// let out = expander.expand(doc);
/// assert!(out.starts_with("Intro\n{|"));
/// assert!(out.ends_with("|}\nOutro"));
/// ```
#[derive(Debug)]
pub struct TagExpander {
    hook: SimpleTableHook,
    pattern: Regex,
}

impl TagExpander {
    /// Create an expander for the hook's tag name.
    ///
    /// # Errors
    ///
    /// Returns [`ExpandError::InvalidTag`] if the tag name is empty or holds
    /// characters outside `[A-Za-z0-9_-]`.
    pub fn new(hook: SimpleTableHook) -> Result<Self, ExpandError> {
        let tag = hook.name();
        if !is_valid_tag(tag) {
            return Err(ExpandError::InvalidTag(tag.to_owned()));
        }

        let pattern = Regex::new(&format!(
            r"(?is)<{tag}(?:\s([^>]*?))?\s*(?:/>|>(.*?)</{tag}\s*>)",
            tag = regex::escape(tag)
        ))
        .map_err(|_| ExpandError::InvalidTag(tag.to_owned()))?;

        Ok(Self { hook, pattern })
    }

    /// The hook tags are dispatched to.
    #[must_use]
    pub fn hook(&self) -> &SimpleTableHook {
        &self.hook
    }

    /// Replace every tag block in `document` with converted markup.
    ///
    /// A self-closing tag (`<tab/>`, `<tab sep=tab />`) has an empty body and
    /// consumes no closing tag. Invalid separators leave their diagnostic in
    /// place of the block.
    #[must_use]
    pub fn expand(&self, document: &str) -> String {
        let mut count = 0usize;
        let expanded = self.pattern.replace_all(document, |caps: &Captures<'_>| {
            count += 1;
            let attrs = TagAttrs::parse(caps.get(1).map_or("", |m| m.as_str()));
            let body = caps.get(2).map_or("", |m| m.as_str());
            self.hook.process(body, &attrs).into_string()
        });
        tracing::debug!(tag = self.hook.name(), count, "Expanded table tags");
        expanded.into_owned()
    }
}

fn is_valid_tag(tag: &str) -> bool {
    !tag.is_empty()
        && tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
