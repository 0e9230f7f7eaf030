//! Expense display formatting

use crate::config::Settings;
use crate::models::Expense;

use super::truncate;

/// Format expenses as a table, one row per expense
pub fn format_expense_list(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let symbol = settings.currency_symbol.as_str();
    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<10}  {:<24}  {:<12}  {:<10}  {:>12}\n",
        "ID", "Date", "Description", "Category", "Paid By", "Amount"
    ));
    output.push_str(&"-".repeat(90));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format!(
            "{:<12}  {:<10}  {:<24}  {:<12}  {:<10}  {:>12}\n",
            expense.id.short(),
            expense.date.format(&settings.date_format).to_string(),
            truncate(&expense.description, 24),
            truncate(&expense.category, 12),
            truncate(&expense.paid_by, 10),
            expense.amount.format_with_symbol(symbol),
        ));
    }

    let total: crate::models::Money = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&"-".repeat(90));
    output.push('\n');
    output.push_str(&format!(
        "{} expense(s), total {}\n",
        expenses.len(),
        total.format_with_symbol(symbol)
    ));

    output
}

/// Format one expense with its full share breakdown
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id.short()));
    output.push_str(&format!("UUID:        {}\n", expense.id.as_uuid()));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!(
        "Date:        {}\n",
        expense.date.format(&settings.date_format)
    ));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!("Paid by:     {}\n", expense.paid_by));
    if let Some(recurring_id) = expense.recurring_id {
        output.push_str(&format!("Recurring:   {}\n", recurring_id));
    }

    output.push_str("\nShares:\n");
    for share in &expense.shares {
        output.push_str(&format!(
            "  {:<16} {:<10} {:>12}\n",
            share.person,
            share.display_value(),
            share.resolved_amount.format_with_symbol(symbol)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDraft, Money, ShareInput};
    use chrono::NaiveDate;

    fn dinner() -> Expense {
        Expense::from_draft(ExpenseDraft {
            description: "Dinner".into(),
            amount: Money::from_cents(10000),
            category: "food".into(),
            paid_by: "Alice".into(),
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            shares: vec![
                ShareInput::exact("Alice", "40"),
                ShareInput::percentage("Bob", "60"),
            ],
        })
        .unwrap()
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            format_expense_list(&[], &Settings::default()),
            "No expenses found.\n"
        );
    }

    #[test]
    fn test_list_rows_and_total() {
        let expense = dinner();
        let output = format_expense_list(&[expense.clone(), expense.clone()], &Settings::default());

        assert!(output.contains(&expense.id.short()));
        assert!(output.contains("2025-01-15"));
        assert!(output.contains("2 expense(s), total $200.00"));
    }

    #[test]
    fn test_details_use_settings() {
        let settings = Settings {
            currency_symbol: "€".into(),
            date_format: "%d/%m/%Y".into(),
            ..Settings::default()
        };
        let output = format_expense_details(&dinner(), &settings);

        assert!(output.contains("Date:        15/01/2025"));
        assert!(output.contains("Amount:      €100.00"));
        assert!(output.contains("40.00"));
        assert!(output.contains("60%"));
        assert!(output.contains("€60.00"));
    }
}
