//! Tag attribute parsing.
//!
//! Parses the attribute list of an opening tag such as
//! `<tab sep=tab head="top" class='wikitable sortable' collapse>`.

/// Ordered attribute list from an opening tag.
///
/// Attribute names are lowercased. Order of first appearance is kept; a
/// repeated name overwrites the earlier value in place.
///
/// # Example
///
/// ```
/// use simpletable::TagAttrs;
///
/// let attrs = TagAttrs::parse(r#"sep=tab head="top" class='wikitable' collapse"#);
/// assert_eq!(attrs.get("sep"), Some("tab"));
/// assert_eq!(attrs.get("class"), Some("wikitable"));
/// assert_eq!(attrs.get("collapse"), Some(""));
/// assert_eq!(attrs.len(), 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagAttrs {
    items: Vec<(String, String)>,
}

impl TagAttrs {
    /// Create an empty attribute list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an attribute string (the text between the tag name and `>`).
    ///
    /// Supports `key="value"`, `key='value'`, `key=value` and bare `key`.
    /// An unterminated quote takes the rest of the string as the value.
    #[must_use]
    pub fn parse(attrs_str: &str) -> Self {
        let mut attrs = Self::new();
        let mut remaining = attrs_str.trim();

        while !remaining.is_empty() {
            let key_end = remaining
                .find(|c: char| c.is_whitespace() || c == '=')
                .unwrap_or(remaining.len());

            // Stray `=` with no name before it
            if key_end == 0 {
                remaining = remaining[1..].trim_start();
                continue;
            }

            let key = &remaining[..key_end];
            let after_key = remaining[key_end..].trim_start();

            let (value, rest) = match after_key.strip_prefix('=') {
                Some(after_eq) => parse_value(after_eq.trim_start()),
                None => ("", after_key),
            };

            attrs.insert(key, value);
            remaining = rest.trim_start();
        }

        attrs
    }

    /// Insert or overwrite an attribute.
    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        let key = key.as_ref().to_ascii_lowercase();
        let value = value.into();
        match self.items.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.items.push((key, value)),
        }
    }

    /// Get an attribute value by name (case-insensitive).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Whether the attribute is present, with any value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate attributes in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for TagAttrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (key, value) in iter {
            attrs.insert(key, value);
        }
        attrs
    }
}

/// Parse a value after `=`, returning the value and the unparsed rest.
fn parse_value(s: &str) -> (&str, &str) {
    for quote in ['"', '\''] {
        if let Some(stripped) = s.strip_prefix(quote) {
            return match stripped.find(quote) {
                Some(end) => (&stripped[..end], &stripped[end + 1..]),
                None => (stripped, ""),
            };
        }
    }
    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    (&s[..end], &s[end..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let attrs = TagAttrs::parse("");
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_double_quoted_value() {
        let attrs = TagAttrs::parse(r#"head="top""#);
        assert_eq!(attrs.get("head"), Some("top"));
    }

    #[test]
    fn test_single_quoted_value_with_spaces() {
        let attrs = TagAttrs::parse("class='wikitable sortable'");
        assert_eq!(attrs.get("class"), Some("wikitable sortable"));
    }

    #[test]
    fn test_unquoted_value() {
        let attrs = TagAttrs::parse("width=600");
        assert_eq!(attrs.get("width"), Some("600"));
    }

    #[test]
    fn test_bare_key() {
        let attrs = TagAttrs::parse("collapse sep=tab");
        assert_eq!(attrs.get("collapse"), Some(""));
        assert_eq!(attrs.get("sep"), Some("tab"));
    }

    #[test]
    fn test_spaces_around_equals() {
        let attrs = TagAttrs::parse(r#"sep = "comma""#);
        assert_eq!(attrs.get("sep"), Some("comma"));
    }

    #[test]
    fn test_empty_quoted_value() {
        let attrs = TagAttrs::parse(r#"title="""#);
        assert_eq!(attrs.get("title"), Some(""));
    }

    #[test]
    fn test_unterminated_quote() {
        let attrs = TagAttrs::parse(r#"title="open ended"#);
        assert_eq!(attrs.get("title"), Some("open ended"));
    }

    #[test]
    fn test_keys_lowercased() {
        let attrs = TagAttrs::parse("SEP=tab Head=top");
        let keys: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["sep", "head"]);
        assert_eq!(attrs.get("HEAD"), Some("top"));
    }

    #[test]
    fn test_order_preserved() {
        let attrs = TagAttrs::parse("width=600 class=wikitable id=t1");
        let keys: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["width", "class", "id"]);
    }

    #[test]
    fn test_repeated_key_overwrites_in_place() {
        let attrs = TagAttrs::parse("a=1 b=2 a=3");
        let items: Vec<(&str, &str)> = attrs.iter().collect();
        assert_eq!(items, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_stray_equals_skipped() {
        let attrs = TagAttrs::parse("= sep=tab");
        assert_eq!(attrs.get("sep"), Some("tab"));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_from_iter() {
        let attrs: TagAttrs = [("sep", "tab"), ("class", "x")].into_iter().collect();
        assert_eq!(attrs.get("sep"), Some("tab"));
        assert!(attrs.contains("class"));
    }
}
