//! Cargo build-script output formatter.

use super::DefineFormatter;
use crate::resolver::ResolutionReport;
use std::io::Write;

/// Formats variables as `cargo:rustc-env=KEY=value` directives, so a
/// `build.rs` can forward them to `env!()` in the crate being built.
///
/// Values containing a newline cannot be expressed as a directive and are
/// skipped with a warning.
pub struct CargoFormatter;

impl DefineFormatter for CargoFormatter {
    fn format<W: Write>(
        &self,
        report: &ResolutionReport<'_>,
        writer: &mut W,
    ) -> std::io::Result<()> {
        for (name, value) in report.variables {
            if value.contains('\n') {
                tracing::warn!("Skipping {}: value contains a newline", name);
                continue;
            }
            writeln!(writer, "cargo:rustc-env={}={}", name, value)?;
        }
        Ok(())
    }
}
