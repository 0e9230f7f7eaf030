//! YAML export of the full ledger

use std::io::Write;

use crate::error::{SplitterError, SplitterResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export the full ledger as YAML with a short comment header
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> SplitterResult<()> {
    let export = FullExport::from_storage(storage)?;

    writeln!(writer, "# Expense ledger export")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|_| writeln!(writer, "# App Version: {}", export.app_version))
        .and_then(|_| writeln!(writer))
        .map_err(|e| SplitterError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export)?;

    Ok(())
}
