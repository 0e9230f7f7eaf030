//! Per-category totals

use std::collections::BTreeMap;

use crate::models::{Expense, Money};

/// Sum expense amounts per category
///
/// Totals use each expense's full `amount`, not its resolved shares. An empty
/// snapshot yields an empty map.
pub fn category_summary(expenses: &[Expense]) -> BTreeMap<String, Money> {
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();

    for expense in expenses {
        *totals.entry(expense.category.clone()).or_default() += expense.amount;
    }

    totals
}

/// `part` as a percentage of `whole`; 0 when `whole` is zero
pub fn percentage_of(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        0.0
    } else {
        part.cents() as f64 / whole.cents() as f64 * 100.0
    }
}

/// Category totals paired with their share of the grand total
///
/// Derived on demand from [`category_summary`]; nothing here is stored.
pub fn category_percentages(totals: &BTreeMap<String, Money>) -> Vec<(String, Money, f64)> {
    let grand_total: Money = totals.values().sum();

    totals
        .iter()
        .map(|(category, total)| {
            (
                category.clone(),
                *total,
                percentage_of(*total, grand_total),
            )
        })
        .collect()
}
