//! Plain-text session report.

use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use st_core::SessionReport;

/// Printed instead of a report when no line in the log parsed.
pub const NO_DATA_NOTICE: &str = "No valid log entries found.";

/// Formats one `username sessions seconds` line per user.
pub fn format_report(report: &SessionReport) -> String {
    if report.is_empty() {
        return format!("{NO_DATA_NOTICE}\n");
    }

    let mut output = String::new();
    for (username, stats) in report.users() {
        let _ = writeln!(
            output,
            "{username} {} {}",
            stats.sessions, stats.total_seconds
        );
    }
    output
}

/// Loads `log_file`, aggregates it, and writes the report to `writer`.
///
/// Nothing is written unless the whole file was read successfully.
pub fn run<W: Write>(writer: &mut W, log_file: &Path) -> Result<()> {
    let events = st_core::load_events(log_file)?;
    let report = st_core::aggregate(&events);
    writer.write_all(format_report(&report).as_bytes())?;
    writer.flush()?;
    Ok(())
}
