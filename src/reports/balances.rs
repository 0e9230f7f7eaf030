//! Balances and settle-up report

use std::io::Write;

use crate::analytics::{balances, settle_up, PersonBalance, Settlement};
use crate::error::SplitterResult;
use crate::models::Expense;
use crate::storage::Storage;

/// Who is owed what, and the payments that would clear it
#[derive(Debug, Clone)]
pub struct BalanceReport {
    pub balances: Vec<PersonBalance>,
    pub settlements: Vec<Settlement>,
}

impl BalanceReport {
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let balances = balances(expenses);
        let settlements = settle_up(&balances);
        Self {
            balances,
            settlements,
        }
    }

    pub fn generate(storage: &Storage) -> SplitterResult<Self> {
        Ok(Self::from_expenses(&storage.expenses.snapshot()?))
    }

    /// Per-person balances for terminal display
    pub fn format_balances(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Balances\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.balances.is_empty() {
            output.push_str("No expenses recorded.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<20} {:>12} {:>12} {:>12}\n",
            "Person", "Paid", "Share", "Net"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for balance in &self.balances {
            output.push_str(&format!(
                "{:<20} {:>12} {:>12} {:>12}\n",
                balance.person,
                balance.paid.format_with_symbol(currency),
                balance.owed.format_with_symbol(currency),
                balance.net.format_with_symbol(currency)
            ));
        }

        output
    }

    /// Suggested payments for terminal display
    pub fn format_settlements(&self, currency: &str) -> String {
        if self.settlements.is_empty() {
            return "Everyone is settled up.\n".to_string();
        }

        let mut output = String::from("Settle Up\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        for settlement in &self.settlements {
            output.push_str(&format!(
                "{} pays {} {}\n",
                settlement.from,
                settlement.to,
                settlement.amount.format_with_symbol(currency)
            ));
        }

        output
    }

    /// Export the balances to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SplitterResult<()> {
        super::write_csv(
            writer,
            &["Person", "Paid", "Share", "Net"],
            self.balances.iter().map(|b| {
                vec![
                    b.person.clone(),
                    b.paid.format_plain(),
                    b.owed.format_plain(),
                    b.net.format_plain(),
                ]
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::shared;

    fn report() -> BalanceReport {
        BalanceReport::from_expenses(&[
            shared("Alice", "food", (2025, 1, 1), 10000),
            shared("Bob", "food", (2025, 1, 2), 4000),
        ])
    }

    #[test]
    fn test_balances_and_settlement() {
        let report = report();

        // Alice paid 100 and owes 70, Bob paid 40 and owes 70
        let output = report.format_balances("$");
        assert!(output.contains("$30.00"));
        assert!(output.contains("-$30.00"));

        assert_eq!(report.format_settlements("$"), "Settle Up\n".to_string() + &"=".repeat(40) + "\nBob pays Alice $30.00\n");
    }

    #[test]
    fn test_nothing_to_settle() {
        let report = BalanceReport::from_expenses(&[]);
        assert_eq!(report.format_settlements("$"), "Everyone is settled up.\n");
        assert!(report.format_balances("$").contains("No expenses recorded."));
    }

    #[test]
    fn test_export_csv() {
        let mut buffer = Vec::new();
        report().export_csv(&mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Person,Paid,Share,Net\nAlice,100.00,70.00,30.00\nBob,40.00,70.00,-30.00\n"
        );
    }
}
