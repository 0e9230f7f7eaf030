//! Month-over-month report

use std::io::Write;

use crate::analytics::{monthly_summary, MonthlyTotal};
use crate::error::SplitterResult;
use crate::models::Expense;
use crate::storage::Storage;

/// Totals per month, most recent first
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    pub months: Vec<MonthlyTotal>,
}

fn format_change(change: Option<f64>) -> String {
    match change {
        Some(pct) => format!("{:+.1}%", pct),
        None => "-".to_string(),
    }
}

impl MonthlyReport {
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        Self {
            months: monthly_summary(expenses),
        }
    }

    pub fn generate(storage: &Storage) -> SplitterResult<Self> {
        Ok(Self::from_expenses(&storage.expenses.snapshot()?))
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Monthly Spending\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');

        if self.months.is_empty() {
            output.push_str("No expenses recorded.\n");
            return output;
        }

        output.push_str(&format!("{:<10} {:>14} {:>12}\n", "Month", "Total", "Change"));
        output.push_str(&"-".repeat(40));
        output.push('\n');

        for month in &self.months {
            output.push_str(&format!(
                "{:<10} {:>14} {:>12}\n",
                month.month.to_string(),
                month.total.format_with_symbol(currency),
                format_change(month.change)
            ));
        }

        output
    }

    /// Export the report to CSV format; the oldest month has an empty change
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SplitterResult<()> {
        super::write_csv(
            writer,
            &["Month", "Total", "Change Percent"],
            self.months.iter().map(|m| {
                vec![
                    m.month.to_string(),
                    m.total.format_plain(),
                    m.change.map(|c| format!("{:.2}", c)).unwrap_or_default(),
                ]
            }),
        )
    }
}
