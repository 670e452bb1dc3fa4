//! Delimiter-separated text to wiki table markup.
//!
//! Converts a block of pasted spreadsheet-style text into `{| ... |}` table
//! markup with configurable separator, header placement, border styling and
//! collapsibility.
//!
//! # Architecture
//!
//! Conversion runs in three stages:
//! - [`Separator`]: fixed registry mapping the `sep` key to a split rule
//! - [`ParsedTable`]: splits the trimmed body into rows and fields
//! - [`render`]: assembles markup from the parsed table and [`ConversionOptions`]
//!
//! [`convert_tag`] validates raw tag attributes and runs the stages.
//! [`SimpleTableHook`] is the callback a host invokes for the table tag;
//! recursive rendering of the result stays with the host.
//!
//! # Example
//!
//! ```
//! use simpletable::{SimpleTableHook, TagAttrs, TagOutput};
//!
//! let hook = SimpleTableHook::new();
//! let attrs = TagAttrs::parse("sep=tab head=top class=sortable");
//! let output = hook.process("Name\tAge\nAda\t36", &attrs);
//!
//! let TagOutput::Markup(markup) = output else { unreachable!() };
//! assert!(markup.contains("! Age\n"));
//! assert!(markup.contains("| 36\n"));
//! ```

mod attrs;
mod convert;
mod error;
mod expand;
mod hook;
mod options;
mod parser;
mod render;
mod separator;

pub use attrs::TagAttrs;
pub use convert::{convert, convert_tag};
pub use error::ConvertError;
pub use expand::{ExpandError, TagExpander};
pub use hook::{DEFAULT_TAG, MarkupRenderer, SimpleTableHook, TagOutput, tidy_rendered};
pub use options::{ConversionOptions, HeadMode, RESERVED_KEYS, TableDefaults, is_reserved};
pub use parser::{Field, ParsedTable, Row};
pub use render::{TableBuilder, collapse_blank_after, render, table_attributes};
pub use separator::{Separator, SplitRule};
