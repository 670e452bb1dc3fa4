//! `simpletable separators` command implementation.

use simpletable::{Separator, SplitRule};

use crate::error::CliError;
use crate::output::Output;

/// List every registered separator with its splitting rule.
pub(crate) fn execute() -> Result<(), CliError> {
    let output = Output::new();
    output.highlight("Separators:")?;
    for sep in Separator::ALL {
        let default = if sep == Separator::default() {
            " (default)"
        } else {
            ""
        };
        output.content(&format!("  {:<10} {}{default}", sep.key(), describe(sep.rule())))?;
    }
    Ok(())
}

fn describe(rule: SplitRule) -> String {
    match rule {
        SplitRule::Literal(pattern) => format!("{pattern:?}"),
        SplitRule::WhitespaceRun => "runs of whitespace".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        assert_eq!(describe(SplitRule::Literal("\t")), r#""\t""#);
        assert_eq!(describe(Separator::BarBar.rule()), r#""||`""#);
        assert_eq!(describe(SplitRule::WhitespaceRun), "runs of whitespace");
    }
}
