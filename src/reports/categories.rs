//! Category breakdown report

use std::io::Write;

use crate::analytics::{categories, category_percentages, category_summary};
use crate::error::SplitterResult;
use crate::models::{Expense, Money};
use crate::storage::Storage;

/// One category line
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub category: String,
    pub total: Money,
    pub expense_count: usize,
    /// Share of the grand total, in percent
    pub percentage: f64,
}

/// Spending per category, sorted by category name
#[derive(Debug, Clone)]
pub struct CategoryReport {
    pub rows: Vec<CategoryRow>,
    pub total: Money,
    pub expense_count: usize,
}

impl CategoryReport {
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let counts = categories(expenses);
        let rows: Vec<CategoryRow> = category_percentages(&category_summary(expenses))
            .into_iter()
            .map(|(category, total, percentage)| CategoryRow {
                expense_count: counts
                    .iter()
                    .find(|usage| usage.name == category)
                    .map_or(0, |usage| usage.expense_count),
                category,
                total,
                percentage,
            })
            .collect();

        Self {
            total: rows.iter().map(|r| r.total).sum(),
            expense_count: expenses.len(),
            rows,
        }
    }

    pub fn generate(storage: &Storage) -> SplitterResult<Self> {
        Ok(Self::from_expenses(&storage.expenses.snapshot()?))
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Spending by Category\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No expenses recorded.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<30} {:>12} {:>6} {:>8}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<30} {:>12} {:>6} {:>7.1}%\n",
                row.category,
                row.total.format_with_symbol(currency),
                row.expense_count,
                row.percentage
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<30} {:>12} {:>6}\n",
            "TOTAL",
            self.total.format_with_symbol(currency),
            self.expense_count
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SplitterResult<()> {
        super::write_csv(
            writer,
            &["Category", "Amount", "Expense Count", "Percentage"],
            self.rows.iter().map(|row| {
                vec![
                    row.category.clone(),
                    row.total.format_plain(),
                    row.expense_count.to_string(),
                    format!("{:.2}", row.percentage),
                ]
            }),
        )
    }
}
