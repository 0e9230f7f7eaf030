//! Per-month totals with period-over-period change

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Expense, Money, Month};

/// Total spent in one calendar month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal {
    pub month: Month,
    pub total: Money,
    /// Percent change from the previous month that has expenses; `None` for
    /// the oldest month
    pub change: Option<f64>,
}

/// Bucket expenses by month, most recent month first
///
/// Months without expenses are skipped, so "previous" means the next older
/// month that has any. A previous total of zero gives a change of 0.
pub fn monthly_summary(expenses: &[Expense]) -> Vec<MonthlyTotal> {
    let mut buckets: BTreeMap<Month, Money> = BTreeMap::new();
    for expense in expenses {
        *buckets.entry(expense.month()).or_default() += expense.amount;
    }

    let newest_first: Vec<(Month, Money)> = buckets.into_iter().rev().collect();

    newest_first
        .iter()
        .enumerate()
        .map(|(i, &(month, total))| MonthlyTotal {
            month,
            total,
            change: newest_first
                .get(i + 1)
                .map(|&(_, previous)| change_percent(total, previous)),
        })
        .collect()
}

fn change_percent(current: Money, previous: Money) -> f64 {
    if previous.is_zero() {
        return 0.0;
    }
    (current - previous).cents() as f64 / previous.cents() as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::expense;

    #[test]
    fn test_two_months() {
        let expenses = vec![expense("x", 2025, 1, 10000), expense("x", 2025, 2, 15000)];

        let summary = monthly_summary(&expenses);
        assert_eq!(
            summary,
            vec![
                MonthlyTotal {
                    month: Month::new(2025, 2).unwrap(),
                    total: Money::from_cents(15000),
                    change: Some(50.0),
                },
                MonthlyTotal {
                    month: Month::new(2025, 1).unwrap(),
                    total: Money::from_cents(10000),
                    change: None,
                },
            ]
        );
    }

    #[test]
    fn test_sorted_descending_across_years() {
        let expenses = vec![
            expense("x", 2024, 12, 100),
            expense("x", 2025, 3, 100),
            expense("x", 2025, 1, 100),
            expense("x", 2023, 6, 100),
        ];

        let months: Vec<String> = monthly_summary(&expenses)
            .iter()
            .map(|m| m.month.to_string())
            .collect();
        assert_eq!(months, vec!["2025-03", "2025-01", "2024-12", "2023-06"]);
    }

    #[test]
    fn test_change_relative_to_next_older_entry() {
        // March has no expenses, so April compares against February
        let expenses = vec![
            expense("x", 2025, 2, 20000),
            expense("x", 2025, 4, 5000),
            expense("x", 2025, 4, 5000),
        ];

        let summary = monthly_summary(&expenses);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].total, Money::from_cents(10000));
        assert_eq!(summary[0].change, Some(-50.0));
        assert_eq!(summary[1].change, None);
    }

    #[test]
    fn test_change_matches_formula_for_adjacent_entries() {
        let expenses = vec![
            expense("x", 2025, 1, 333),
            expense("x", 2025, 2, 1000),
            expense("x", 2025, 3, 777),
        ];

        let summary = monthly_summary(&expenses);
        for pair in summary.windows(2) {
            let (newer, older) = (&pair[0], &pair[1]);
            let expected =
                (newer.total.cents() - older.total.cents()) as f64 / older.total.cents() as f64 * 100.0;
            assert_eq!(newer.change, Some(expected));
        }
        assert_eq!(summary.last().unwrap().change, None);
    }

    #[test]
    fn test_zero_previous_total() {
        assert_eq!(change_percent(Money::from_cents(100), Money::zero()), 0.0);
    }

    #[test]
    fn test_empty_snapshot() {
        assert!(monthly_summary(&[]).is_empty());
    }
}
