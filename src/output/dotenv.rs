//! Dotenv output formatter.

use super::DefineFormatter;
use crate::resolver::ResolutionReport;
use std::borrow::Cow;
use std::io::Write;

/// Formats variables as `KEY=value` lines.
///
/// Values outside a conservative safe set are double-quoted, with `"` and
/// `\` escaped.
pub struct DotenvFormatter;

impl DefineFormatter for DotenvFormatter {
    fn format<W: Write>(
        &self,
        report: &ResolutionReport<'_>,
        writer: &mut W,
    ) -> std::io::Result<()> {
        for (name, value) in report.variables {
            writeln!(writer, "{}={}", name, quote(value))?;
        }
        Ok(())
    }
}

fn quote(value: &str) -> Cow<'_, str> {
    let safe = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "-_./:@".contains(c));
    if safe {
        return Cow::Borrowed(value);
    }

    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    Cow::Owned(format!("\"{}\"", escaped))
}
