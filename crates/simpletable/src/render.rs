//! Table markup rendering.
//!
//! Produces wiki table markup (`{| ... |}`) from a [`ParsedTable`].

use crate::{ConversionOptions, ParsedTable};

/// Opens a table block.
pub const TABLE_OPEN: &str = "{|";
/// Closes a table block.
pub const TABLE_CLOSE: &str = "|}";
/// Starts a table row.
pub const ROW_MARKER: &str = "|-";
/// Starts a normal cell.
pub const CELL_MARKER: &str = "|";
/// Starts a header cell.
pub const HEADER_MARKER: &str = "!";

const CELL_BORDER_STYLE: &str = r#"style="border-style: solid; border-width: 1px" |"#;
const TABLE_BORDER_STYLE: &str =
    r#"style="border-collapse: collapse; border-width: 1px; border-style: solid; border-color: #000""#;
const NO_WRAP_OPEN: &str = r#"<span style="white-space: nowrap;">"#;
const NO_WRAP_CLOSE: &str = "</span>";

const TABLE_CLASS: &str = "wikitable";
const COLLAPSIBLE_CLASS: &str = "mw-collapsible";
const COLLAPSED_CLASS: &str = "mw-collapsed";

/// Render a parsed table to markup.
///
/// # Example
///
/// ```
/// use simpletable::{ConversionOptions, HeadMode, ParsedTable, Separator, render};
///
/// let options = ConversionOptions::new(Separator::Comma).with_head(HeadMode::TOP);
/// let table = ParsedTable::parse("Name,Age\nAda,36", options.separator.rule());
/// let markup = render(&table, &options);
/// assert!(markup.starts_with("{|"));
/// assert!(markup.contains("! Age\n"));
/// assert!(markup.contains("| 36\n"));
/// assert!(markup.ends_with("|}"));
/// ```
#[must_use]
pub fn render(table: &ParsedTable<'_>, options: &ConversionOptions) -> String {
    let mut builder = TableBuilder::new(options);

    for row in table.rows() {
        builder.start_row();

        let mut row_marker = if row.is_header_row(options.head) {
            HEADER_MARKER.to_owned()
        } else {
            CELL_MARKER.to_owned()
        };
        if options.border_style {
            row_marker.push_str(CELL_BORDER_STYLE);
        }

        for field in row.fields() {
            let marker = if field.is_header_column(options.head) {
                HEADER_MARKER
            } else {
                row_marker.as_str()
            };
            builder.cell(marker, field.text(), field.no_wrap());
        }
    }

    collapse_blank_after(&builder.finish(), TABLE_CLOSE)
}

/// Build the attribute list placed after the table opener.
///
/// Expand/collapse labels first, then the class list, then passthrough
/// attributes in supplied order.
#[must_use]
pub fn table_attributes(options: &ConversionOptions) -> String {
    let mut classes = vec![TABLE_CLASS, COLLAPSIBLE_CLASS];
    if options.collapse {
        classes.push(COLLAPSED_CLASS);
    }

    let mut attrs = format!(
        r#"data-expandtext="{}" data-collapsetext="{}" class="{}""#,
        options.expand_text,
        options.collapse_text,
        classes.join(" ")
    );
    for (key, value) in options.passthrough_attrs() {
        attrs.push(' ');
        attrs.push_str(key);
        attrs.push_str("=\"");
        attrs.push_str(value);
        attrs.push('"');
    }
    attrs
}

/// Drop the blank line directly after every `close` marker.
///
/// Isolated post-processing step: renderers downstream emit a redundant
/// empty line after a closed table.
#[must_use]
pub fn collapse_blank_after(text: &str, close: &str) -> String {
    text.replace(&format!("{close}\n\n"), close)
}

/// Appends rows and cells in order, then wraps them in the table block.
#[derive(Debug)]
pub struct TableBuilder {
    header: String,
    body: String,
}

impl TableBuilder {
    /// Start a table with the header line derived from `options`.
    #[must_use]
    pub fn new(options: &ConversionOptions) -> Self {
        let attrs = table_attributes(options);
        let header = if options.border_style {
            format!("{TABLE_BORDER_STYLE} {attrs}")
        } else {
            attrs
        };
        Self {
            header,
            body: String::new(),
        }
    }

    /// Emit a row marker.
    pub fn start_row(&mut self) {
        self.body.push_str(ROW_MARKER);
        self.body.push('\n');
    }

    /// Emit one cell terminated by a line break.
    pub fn cell(&mut self, marker: &str, text: &str, no_wrap: bool) {
        self.body.push_str(marker);
        self.body.push(' ');
        if no_wrap {
            self.body.push_str(NO_WRAP_OPEN);
            self.body.push_str(text);
            self.body.push_str(NO_WRAP_CLOSE);
        } else {
            self.body.push_str(text);
        }
        self.body.push('\n');
    }

    /// Assemble the full table block.
    #[must_use]
    pub fn finish(self) -> String {
        let mut out =
            String::with_capacity(TABLE_OPEN.len() + self.header.len() + self.body.len() + 4);
        out.push_str(TABLE_OPEN);
        out.push_str(&self.header);
        out.push('\n');
        out.push_str(&self.body);
        out.push_str(TABLE_CLOSE);
        out
    }
}
