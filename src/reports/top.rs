//! Largest expenses report

use std::io::Write;

use crate::analytics::{most_expensive, ExpenseSummary};
use crate::display::truncate;
use crate::error::SplitterResult;
use crate::models::Expense;
use crate::storage::Storage;

#[derive(Debug, Clone)]
pub struct TopExpensesReport {
    pub limit: usize,
    pub expenses: Vec<ExpenseSummary>,
}

impl TopExpensesReport {
    pub fn from_expenses(expenses: &[Expense], limit: usize) -> Self {
        Self {
            limit,
            expenses: most_expensive(expenses, limit),
        }
    }

    pub fn generate(storage: &Storage, limit: usize) -> SplitterResult<Self> {
        Ok(Self::from_expenses(&storage.expenses.snapshot()?, limit))
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Top {} Expenses\n", self.limit));
        output.push_str(&"=".repeat(80));
        output.push('\n');

        if self.expenses.is_empty() {
            output.push_str("No expenses recorded.\n");
            return output;
        }

        for (rank, expense) in self.expenses.iter().enumerate() {
            output.push_str(&format!(
                "{:>2}. {:<10} {:<28} {:>12}  paid by {}\n",
                rank + 1,
                expense.date.to_string(),
                truncate(&expense.description, 28),
                expense.amount.format_with_symbol(currency),
                expense.paid_by
            ));
            output.push_str(&format!(
                "    {} [{}] {}\n",
                expense.id.short(),
                expense.category,
                expense.shares_line()
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SplitterResult<()> {
        super::write_csv(
            writer,
            &["Rank", "ID", "Date", "Description", "Category", "Paid By", "Amount", "Shares"],
            self.expenses.iter().enumerate().map(|(rank, e)| {
                vec![
                    (rank + 1).to_string(),
                    e.id.as_uuid().to_string(),
                    e.date.to_string(),
                    e.description.clone(),
                    e.category.clone(),
                    e.paid_by.clone(),
                    e.amount.format_plain(),
                    e.shares_line(),
                ]
            }),
        )
    }
}
