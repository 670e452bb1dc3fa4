//! Table body parsing.
//!
//! Splits delimiter-separated text into rows and fields. Parsing is total:
//! every input produces a table, and no row or field is dropped.

use crate::HeadMode;
use crate::separator::SplitRule;

/// Characters stripped from both ends of the body before splitting.
const BODY_TRIM: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Parsed table body borrowing from the input text.
#[derive(Debug, PartialEq, Eq)]
pub struct ParsedTable<'a> {
    rows: Vec<Row<'a>>,
}

/// One line of the body.
#[derive(Debug, PartialEq, Eq)]
pub struct Row<'a> {
    index: usize,
    fields: Vec<Field<'a>>,
}

/// One field of a row, kept verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field<'a> {
    text: &'a str,
    column: usize,
    last: bool,
}

impl<'a> ParsedTable<'a> {
    /// Parse a table body with the given splitting rule.
    ///
    /// The body is trimmed, then split on `\n`. Each line becomes a row even
    /// if empty, so an empty body yields one row with one empty field.
    ///
    /// # Example
    ///
    /// ```
    /// use simpletable::{ParsedTable, Separator};
    ///
    /// let table = ParsedTable::parse("\na,b\nc\n\n", Separator::Comma.rule());
    /// assert_eq!(table.len(), 2);
    /// assert_eq!(table.rows()[0].texts(), vec!["a", "b"]);
    /// assert_eq!(table.rows()[1].texts(), vec!["c"]);
    /// ```
    #[must_use]
    pub fn parse(text: &'a str, rule: SplitRule) -> Self {
        let rows = text
            .trim_matches(BODY_TRIM)
            .split('\n')
            .enumerate()
            .map(|(index, line)| Row::parse(index, line, rule))
            .collect();
        Self { rows }
    }

    /// Rows in input order.
    #[must_use]
    pub fn rows(&self) -> &[Row<'a>] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always `false`: parsing yields at least one row.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a> Row<'a> {
    fn parse(index: usize, line: &'a str, rule: SplitRule) -> Self {
        let texts = rule.split(line);
        let count = texts.len();
        let fields = texts
            .into_iter()
            .enumerate()
            .map(|(column, text)| Field {
                text,
                column,
                last: column + 1 == count,
            })
            .collect();
        Self { index, fields }
    }

    /// Zero-based position of this row in the body.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Fields in input order.
    #[must_use]
    pub fn fields(&self) -> &[Field<'a>] {
        &self.fields
    }

    /// Field texts in input order.
    #[must_use]
    pub fn texts(&self) -> Vec<&'a str> {
        self.fields.iter().map(|f| f.text).collect()
    }

    /// Whether every cell of this row is a header cell.
    #[must_use]
    pub fn is_header_row(&self, head: HeadMode) -> bool {
        head.top && self.index == 0
    }
}

impl<'a> Field<'a> {
    /// Field text, untrimmed.
    #[must_use]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Zero-based column position within the row.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Whether this is the last field of its row.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.last
    }

    /// Whether the field should be kept on one line.
    ///
    /// Every field except the last one in its row is no-wrap.
    #[must_use]
    pub fn no_wrap(&self) -> bool {
        !self.last
    }

    /// Whether the field renders as a header cell within `row`.
    #[must_use]
    pub fn is_header_cell(&self, row: &Row<'_>, head: HeadMode) -> bool {
        row.is_header_row(head) || self.is_header_column(head)
    }

    /// Whether the field sits in the header column.
    #[must_use]
    pub fn is_header_column(&self, head: HeadMode) -> bool {
        head.left && self.column == 0
    }
}
