//! Human-readable listings of ledger errors.

use beancount_core::{FileLoc, LedgerError};

use crate::{EntryPrinter, RenderError};

const ENTRY_INDENT: &str = "   ";

/// Formats a location as `filename:lineno:`, with the line number part padded to 8 columns so
/// that the messages of consecutive errors line up.
pub fn render_fileloc(loc: &FileLoc<'_>) -> String {
    format!("{}:{:<8}", loc.filename, format!("{}:", loc.lineno))
}

/// Formats `errors` one after the other, each followed by the directive that caused it (if any),
/// indented and set off by blank lines.
pub fn format_errors(errors: &[LedgerError<'_>]) -> Result<String, RenderError> {
    let printer = EntryPrinter::default();
    let mut out = String::new();
    for error in errors {
        out.push_str(&format!(
            "{} {}\n",
            render_fileloc(&error.fileloc),
            error.message
        ));
        if let Some(entry) = &error.entry {
            out.push('\n');
            for line in printer.format(entry)?.lines() {
                if !line.is_empty() {
                    out.push_str(ENTRY_INDENT);
                    out.push_str(line);
                }
                out.push('\n');
            }
            out.push('\n');
        }
    }
    Ok(out)
}
