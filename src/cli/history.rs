//! CLI command showing the audit trail

use crate::error::SplitterResult;
use crate::storage::Storage;

/// Print the most recent `count` audit entries, oldest first
pub fn handle_history_command(storage: &Storage, count: usize) -> SplitterResult<()> {
    let entries = storage.audit().read_recent(count)?;

    if entries.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
