//! Reports over the expense ledger
//!
//! Each report is built from a snapshot of expenses through the analytics
//! functions, and can be rendered for the terminal or written as CSV.

pub mod balances;
pub mod categories;
pub mod monthly;
pub mod top;

pub use balances::BalanceReport;
pub use categories::{CategoryReport, CategoryRow};
pub use monthly::MonthlyReport;
pub use top::TopExpensesReport;

use std::io::Write;

use crate::error::{SplitterError, SplitterResult};

/// Write a header and rows as CSV
pub(crate) fn write_csv<W: Write>(
    writer: &mut W,
    header: &[&str],
    rows: impl IntoIterator<Item = Vec<String>>,
) -> SplitterResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(header)?;
    for row in rows {
        csv.write_record(&row)?;
    }
    csv.flush()
        .map_err(|e| SplitterError::Export(e.to_string()))
}
