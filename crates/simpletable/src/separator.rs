//! Separator registry.
//!
//! A fixed mapping from separator key (the `sep` tag attribute) to the rule
//! used to split one line of the table body into fields.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::ConvertError;

/// Runs of ASCII whitespace, as `spaces` splits on them.
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\s)+").unwrap());

/// Named field separator.
///
/// The set is closed: keys outside it are rejected with
/// [`ConvertError::InvalidSeparator`].
///
/// # Example
///
/// ```
/// use simpletable::Separator;
///
/// let sep = Separator::from_key("comma").unwrap();
/// assert_eq!(sep.split("a,b,,c"), vec!["a", "b", "", "c"]);
/// assert!(Separator::from_key("pipe").is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Separator {
    /// A single literal space.
    Space,
    /// One or more whitespace characters.
    Spaces,
    /// A single tab character.
    Tab,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `|`
    Bar,
    /// The three-character sequence ``||` ``.
    ///
    /// Plain `||` does not match; the trailing backtick is part of the rule.
    #[default]
    BarBar,
}

/// How a separator splits a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitRule {
    /// Split on every occurrence of the literal text.
    Literal(&'static str),
    /// Split on runs of whitespace, collapsing consecutive characters.
    WhitespaceRun,
}

impl Separator {
    /// Every registered separator, in documentation order.
    pub const ALL: [Self; 8] = [
        Self::Space,
        Self::Spaces,
        Self::Tab,
        Self::Comma,
        Self::Colon,
        Self::Semicolon,
        Self::Bar,
        Self::BarBar,
    ];

    /// Look up a separator by key.
    ///
    /// Keys are matched exactly (case-sensitive).
    pub fn from_key(key: &str) -> Result<Self, ConvertError> {
        Self::ALL
            .into_iter()
            .find(|sep| sep.key() == key)
            .ok_or_else(|| ConvertError::InvalidSeparator(key.to_owned()))
    }

    /// The key this separator is registered under.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Space => "space",
            Self::Spaces => "spaces",
            Self::Tab => "tab",
            Self::Comma => "comma",
            Self::Colon => "colon",
            Self::Semicolon => "semicolon",
            Self::Bar => "bar",
            Self::BarBar => "barbar",
        }
    }

    /// The splitting rule for this separator.
    #[must_use]
    pub fn rule(self) -> SplitRule {
        match self {
            Self::Space => SplitRule::Literal(" "),
            Self::Spaces => SplitRule::WhitespaceRun,
            Self::Tab => SplitRule::Literal("\t"),
            Self::Comma => SplitRule::Literal(","),
            Self::Colon => SplitRule::Literal(":"),
            Self::Semicolon => SplitRule::Literal(";"),
            Self::Bar => SplitRule::Literal("|"),
            Self::BarBar => SplitRule::Literal("||`"),
        }
    }

    /// Split a single line into fields.
    ///
    /// Fields are returned verbatim, including empty ones. An empty line
    /// yields one empty field.
    #[must_use]
    pub fn split(self, line: &str) -> Vec<&str> {
        self.rule().split(line)
    }
}

impl SplitRule {
    /// Split a single line into fields.
    #[must_use]
    pub fn split(self, line: &str) -> Vec<&str> {
        if line.is_empty() {
            return vec![line];
        }
        match self {
            Self::Literal(pattern) => line.split(pattern).collect(),
            Self::WhitespaceRun => WHITESPACE_RUN.split(line).collect(),
        }
    }
}

impl FromStr for Separator {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_all() {
        for sep in Separator::ALL {
            assert_eq!(Separator::from_key(sep.key()), Ok(sep));
        }
    }

    #[test]
    fn test_from_key_unknown() {
        assert_eq!(
            Separator::from_key("pipe"),
            Err(ConvertError::InvalidSeparator("pipe".to_owned()))
        );
    }

    #[test]
    fn test_from_key_case_sensitive() {
        assert!(Separator::from_key("Tab").is_err());
    }

    #[test]
    fn test_default_is_barbar() {
        assert_eq!(Separator::default(), Separator::BarBar);
    }

    #[test]
    fn test_parse_and_display() {
        let sep: Separator = "semicolon".parse().unwrap();
        assert_eq!(sep, Separator::Semicolon);
        assert_eq!(sep.to_string(), "semicolon");
    }

    #[test]
    fn test_split_space_keeps_empty_fields() {
        assert_eq!(Separator::Space.split("a  b"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_split_spaces_collapses_runs() {
        assert_eq!(Separator::Spaces.split("a \t  b\tc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_spaces_leading_whitespace() {
        assert_eq!(Separator::Spaces.split("  a b"), vec!["", "a", "b"]);
    }

    #[test]
    fn test_split_tab() {
        assert_eq!(Separator::Tab.split("a\tb c\t"), vec!["a", "b c", ""]);
    }

    #[test]
    fn test_split_punctuation() {
        assert_eq!(Separator::Comma.split("1,2"), vec!["1", "2"]);
        assert_eq!(Separator::Colon.split("1:2"), vec!["1", "2"]);
        assert_eq!(Separator::Semicolon.split("1;2"), vec!["1", "2"]);
        assert_eq!(Separator::Bar.split("1|2"), vec!["1", "2"]);
    }

    #[test]
    fn test_split_fields_not_trimmed() {
        assert_eq!(Separator::Comma.split(" a , b "), vec![" a ", " b "]);
    }

    #[test]
    fn test_split_empty_line() {
        for sep in Separator::ALL {
            assert_eq!(sep.split(""), vec![""], "separator {sep}");
        }
    }

    #[test]
    fn test_barbar_requires_backtick() {
        // Plain `||` is not a field boundary for the default separator.
        assert_eq!(Separator::BarBar.split("a||b"), vec!["a||b"]);
        assert_eq!(Separator::BarBar.split("a||`b"), vec!["a", "b"]);
    }

    #[test]
    fn test_barbar_does_not_split_tabs() {
        assert_eq!(Separator::BarBar.split("a\tb"), vec!["a\tb"]);
    }
}
