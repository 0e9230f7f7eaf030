//! CSV export of the ledger
//!
//! One row per share, so a spreadsheet can pivot on person or category.
//! Expense-level columns repeat on each of an expense's rows.

use std::io::Write;

use crate::error::{SplitterError, SplitterResult};
use crate::storage::Storage;

const HEADER: [&str; 11] = [
    "Expense ID",
    "Date",
    "Description",
    "Category",
    "Paid By",
    "Amount",
    "Participant",
    "Share Type",
    "Share Value",
    "Share Amount",
    "Recurring ID",
];

/// Export every expense's shares to CSV, newest expense first
pub fn export_expenses_csv<W: Write>(storage: &Storage, writer: &mut W) -> SplitterResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(HEADER)?;

    for expense in storage.expenses.get_all()? {
        let recurring = expense
            .recurring_id
            .map(|id| id.as_uuid().to_string())
            .unwrap_or_default();

        for share in &expense.shares {
            csv.write_record([
                expense.id.as_uuid().to_string(),
                expense.date.to_string(),
                expense.description.clone(),
                expense.category.clone(),
                expense.paid_by.clone(),
                expense.amount.format_plain(),
                share.person.clone(),
                share.share_type.to_string(),
                share.value.normalize().to_string(),
                share.resolved_amount.format_plain(),
                recurring.clone(),
            ])?;
        }
    }

    csv.flush()
        .map_err(|e| SplitterError::Export(e.to_string()))
}
