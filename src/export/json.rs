//! JSON export of the full ledger with schema versioning

use std::io::Write;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{SplitterError, SplitterResult};
use crate::models::{Expense, Money, RecurringExpense};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All expenses, newest first
    pub expenses: Vec<Expense>,

    /// All recurring templates, in creation order
    pub recurring: Vec<RecurringExpense>,

    pub metadata: ExportMetadata,
}

/// Summary figures for a quick sanity check of an export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,
    pub recurring_count: usize,
    pub total_amount: Money,
    pub earliest_expense: Option<NaiveDate>,
    pub latest_expense: Option<NaiveDate>,
}

impl FullExport {
    pub fn from_storage(storage: &Storage) -> SplitterResult<Self> {
        let expenses = storage.expenses.get_all()?;
        let recurring = storage.recurring.get_all()?;

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            recurring_count: recurring.len(),
            total_amount: expenses.iter().map(|e| e.amount).sum(),
            earliest_expense: expenses.iter().map(|e| e.date).min(),
            latest_expense: expenses.iter().map(|e| e.date).max(),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses,
            recurring,
            metadata,
        })
    }
}

/// Export the full ledger as pretty-printed JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: &mut W) -> SplitterResult<()> {
    let export = FullExport::from_storage(storage)?;

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| SplitterError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| SplitterError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SplitterPaths;
    use crate::models::{ExpenseDraft, ShareInput};
    use crate::services::ExpenseService;
    use tempfile::TempDir;

    fn storage_with_expenses() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitterPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let service = ExpenseService::new(&storage);
        for (day, cents) in [(3, 1500), (20, 4500)] {
            service
                .create(ExpenseDraft {
                    description: "Groceries".into(),
                    amount: Money::from_cents(cents),
                    category: "food".into(),
                    paid_by: "Bob".into(),
                    date: NaiveDate::from_ymd_opt(2025, 2, day).unwrap(),
                    shares: vec![
                        ShareInput::percentage("Alice", "50"),
                        ShareInput::percentage("Bob", "50"),
                    ],
                })
                .unwrap();
        }

        (temp_dir, storage)
    }

    #[test]
    fn test_metadata() {
        let (_temp_dir, storage) = storage_with_expenses();
        let export = FullExport::from_storage(&storage).unwrap();

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(
            export.metadata,
            ExportMetadata {
                expense_count: 2,
                recurring_count: 0,
                total_amount: Money::from_cents(6000),
                earliest_expense: NaiveDate::from_ymd_opt(2025, 2, 3),
                latest_expense: NaiveDate::from_ymd_opt(2025, 2, 20),
            }
        );
    }

    #[test]
    fn test_json_export_parses_back() {
        let (_temp_dir, storage) = storage_with_expenses();

        let mut buffer = Vec::new();
        export_full_json(&storage, &mut buffer).unwrap();

        let parsed: FullExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.expenses.len(), 2);
        assert!(parsed.expenses.iter().all(|e| e.verify().is_ok()));
    }
}
