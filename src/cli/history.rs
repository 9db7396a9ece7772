//! Audit history command

use std::io::Write;

use crate::audit::AuditLogger;
use crate::error::TripResult;

/// Print the most recent audit entries, oldest first
pub fn handle_history_command(
    audit: &AuditLogger,
    limit: usize,
    out: &mut dyn Write,
) -> TripResult<()> {
    let entries = audit.read_recent(limit)?;

    if entries.is_empty() {
        writeln!(out, "No history recorded.")?;
        return Ok(());
    }

    for entry in &entries {
        writeln!(out, "{}", entry.format_human_readable())?;
    }
    Ok(())
}
