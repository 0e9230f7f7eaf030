//! People and categories seen in the ledger
//!
//! Neither has an identity of its own; both are derived from expenses.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::models::{Expense, Money};

/// Usage of one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryUsage {
    pub name: String,
    pub expense_count: usize,
    pub total: Money,
}

/// Every payer and participant, sorted
pub fn people(expenses: &[Expense]) -> BTreeSet<String> {
    expenses
        .iter()
        .flat_map(|e| {
            std::iter::once(e.paid_by.clone()).chain(e.shares.iter().map(|s| s.person.clone()))
        })
        .collect()
}

/// Every category with its expense count and total, sorted by name
pub fn categories(expenses: &[Expense]) -> Vec<CategoryUsage> {
    let mut usage: BTreeMap<&str, (usize, Money)> = BTreeMap::new();
    for expense in expenses {
        let entry = usage.entry(expense.category.as_str()).or_default();
        entry.0 += 1;
        entry.1 += expense.amount;
    }

    usage
        .into_iter()
        .map(|(name, (expense_count, total))| CategoryUsage {
            name: name.to_string(),
            expense_count,
            total,
        })
        .collect()
}
