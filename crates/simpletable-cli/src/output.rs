//! Colored terminal output utilities.

use console::{Style, Term};

/// Terminal output formatter.
///
/// Messages go to stderr; converted markup goes to stdout.
pub(crate) struct Output {
    term: Term,
    out: Term,
    cyan_bold: Style,
    red: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            out: Term::stdout(),
            cyan_bold: Style::new().cyan().bold(),
            red: Style::new().red(),
        }
    }

    /// Write converted content to stdout, verbatim.
    pub(crate) fn content(&self, text: &str) -> std::io::Result<()> {
        self.out.write_str(text)?;
        if !text.ends_with('\n') {
            self.out.write_line("")?;
        }
        self.out.flush()
    }

    /// Write a highlighted line to stdout (cyan bold).
    pub(crate) fn highlight(&self, msg: &str) -> std::io::Result<()> {
        self.out
            .write_line(&self.cyan_bold.apply_to(msg).to_string())
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }
}
