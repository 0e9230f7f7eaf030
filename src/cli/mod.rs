//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod export;
pub mod history;
pub mod people;
pub mod recurring;
pub mod report;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use history::handle_history_command;
pub use people::handle_people_command;
pub use recurring::{handle_recurring_command, RecurringCommands};
pub use report::{handle_report_command, ReportCommands};

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{SplitterError, SplitterResult};
use crate::models::{Money, ShareInput};

/// Parse a YYYY-MM-DD date argument
pub(crate) fn parse_date(value: &str) -> SplitterResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        SplitterError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", value))
    })
}

/// Parse an optional date argument, defaulting to today
pub(crate) fn date_or_today(value: Option<&str>) -> SplitterResult<NaiveDate> {
    match value {
        Some(value) => parse_date(value),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Parse an amount argument such as "12.50" or "$12.50"
pub(crate) fn parse_amount(value: &str) -> SplitterResult<Money> {
    Money::parse(value)
        .map_err(|e| SplitterError::Validation(format!("Invalid amount: {}", e)))
}

/// Turn `NAME=VALUE%` / `NAME=VALUE` arguments into share inputs
pub(crate) fn parse_shares(args: &[String]) -> Vec<ShareInput> {
    args.iter().map(|arg| ShareInput::from_arg(arg)).collect()
}

/// Open `path` for a CSV or export write
pub(crate) fn create_output(path: &Path) -> SplitterResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        SplitterError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
