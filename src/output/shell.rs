//! Shell `export` output formatter.

use super::DefineFormatter;
use crate::resolver::ResolutionReport;
use std::io::Write;

/// Formats variables as POSIX `export KEY='value'` lines, suitable for
/// `eval "$(canister-env resolve --format shell)"`.
///
/// Names that are not valid shell identifiers (a canister called
/// `my-app` yields `MY-APP_CANISTER_ID`) are skipped with a warning.
pub struct ShellFormatter;

impl DefineFormatter for ShellFormatter {
    fn format<W: Write>(
        &self,
        report: &ResolutionReport<'_>,
        writer: &mut W,
    ) -> std::io::Result<()> {
        for (name, value) in report.variables {
            if !is_shell_identifier(name) {
                tracing::warn!("Skipping {}: not a valid shell variable name", name);
                continue;
            }
            writeln!(writer, "export {}='{}'", name, value.replace('\'', r"'\''"))?;
        }
        Ok(())
    }
}

fn is_shell_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
