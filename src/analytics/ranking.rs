//! Largest expenses

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Expense, ExpenseId, Money, ShareType};

/// Number of expenses ranked when no limit is configured
pub const DEFAULT_TOP_LIMIT: usize = 5;

/// One participant's share as shown in a ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareSummary {
    pub person: String,
    #[serde(rename = "type")]
    pub share_type: ShareType,
    /// "50%" for percentage shares, "40.00" for exact ones
    pub display: String,
    pub resolved_amount: Money,
}

/// An expense row in a ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseSummary {
    pub id: ExpenseId,
    pub description: String,
    pub amount: Money,
    pub category: String,
    pub paid_by: String,
    pub date: NaiveDate,
    pub shares: Vec<ShareSummary>,
}

impl From<&Expense> for ExpenseSummary {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id,
            description: expense.description.clone(),
            amount: expense.amount,
            category: expense.category.clone(),
            paid_by: expense.paid_by.clone(),
            date: expense.date,
            shares: expense
                .shares
                .iter()
                .map(|share| ShareSummary {
                    person: share.person.clone(),
                    share_type: share.share_type,
                    display: share.display_value(),
                    resolved_amount: share.resolved_amount,
                })
                .collect(),
        }
    }
}

impl ExpenseSummary {
    /// Share breakdown on one line, e.g. "A: 40.00, B: 60%"
    pub fn shares_line(&self) -> String {
        self.shares
            .iter()
            .map(|s| format!("{}: {}", s.person, s.display))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// The `limit` largest expenses, amount descending, ties by id ascending
pub fn most_expensive(expenses: &[Expense], limit: usize) -> Vec<ExpenseSummary> {
    let mut ranked: Vec<&Expense> = expenses.iter().collect();
    ranked.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.id.cmp(&b.id)));

    ranked
        .into_iter()
        .take(limit)
        .map(ExpenseSummary::from)
        .collect()
}
