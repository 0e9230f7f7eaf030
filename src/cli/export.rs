//! CLI command for ledger export

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{SplitterError, SplitterResult};
use crate::export::{export_expenses_csv, export_full_json, export_full_yaml};
use crate::storage::Storage;

use super::create_output;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one row per share
    Csv,
    /// JSON, full ledger
    Json,
    /// YAML, full ledger, human-readable
    Yaml,
}

/// Arguments of `splitter export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn write_export<W: Write>(storage: &Storage, format: ExportFormat, writer: &mut W) -> SplitterResult<()> {
    match format {
        ExportFormat::Csv => export_expenses_csv(storage, writer),
        ExportFormat::Json => export_full_json(storage, writer),
        ExportFormat::Yaml => export_full_yaml(storage, writer),
    }
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> SplitterResult<()> {
    match args.output {
        Some(path) => {
            let mut writer = create_output(&path)?;
            write_export(storage, args.format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| SplitterError::Export(e.to_string()))?;
            eprintln!(
                "Exported {} expenses to: {}",
                storage.expenses.count()?,
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(storage, args.format, &mut writer)?;
        }
    }

    Ok(())
}
