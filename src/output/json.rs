//! JSON output formatter.
//!
//! Emits the full report (network, registry, variables and bindings)
//! for tooling that wires the bindings into a bundler itself.

use super::DefineFormatter;
use crate::resolver::ResolutionReport;
use std::io::Write;

/// Formats the resolution as pretty-printed JSON.
pub struct JsonFormatter;

impl DefineFormatter for JsonFormatter {
    fn format<W: Write>(
        &self,
        report: &ResolutionReport<'_>,
        writer: &mut W,
    ) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, report)?;
        writeln!(writer)
    }
}
