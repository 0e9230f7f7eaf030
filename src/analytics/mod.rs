//! Read-only analytics over a snapshot of expenses
//!
//! Every function here is pure: it reads the slice it is given and returns
//! fresh values. The views are independent of each other and can be computed
//! concurrently against the same snapshot. An empty snapshot is valid input
//! and produces empty results.

mod balances;
mod category;
mod directory;
mod monthly;
mod ranking;

pub use balances::{balances, settle_up, PersonBalance, Settlement};
pub use category::{category_percentages, category_summary, percentage_of};
pub use directory::{categories, people, CategoryUsage};
pub use monthly::{monthly_summary, MonthlyTotal};
pub use ranking::{most_expensive, ExpenseSummary, ShareSummary, DEFAULT_TOP_LIMIT};


#[cfg(test)]
mod tests {
    use super::test_support::expense;
    use super::*;

    #[test]
    fn test_views_run_concurrently_on_one_snapshot() {
        let snapshot: Vec<_> = (1..=12)
            .map(|month| expense("rent", 2025, month, 1000 * i64::from(month)))
            .collect();

        let (categories, months, top) = std::thread::scope(|scope| {
            let c = scope.spawn(|| category_summary(&snapshot));
            let m = scope.spawn(|| monthly_summary(&snapshot));
            let t = scope.spawn(|| most_expensive(&snapshot, DEFAULT_TOP_LIMIT));
            (c.join().unwrap(), m.join().unwrap(), t.join().unwrap())
        });

        assert_eq!(categories.len(), 1);
        assert_eq!(months.len(), 12);
        assert_eq!(top.len(), DEFAULT_TOP_LIMIT);
        assert_eq!(top[0].amount, months[0].total);
    }
}
