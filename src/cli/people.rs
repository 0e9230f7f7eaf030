//! CLI command listing everyone in the ledger

use crate::analytics::{balances, people};
use crate::config::Settings;
use crate::error::SplitterResult;
use crate::storage::Storage;

/// Print every payer and participant with their net balance
pub fn handle_people_command(storage: &Storage, settings: &Settings) -> SplitterResult<()> {
    let snapshot = storage.expenses.snapshot()?;
    let names = people(&snapshot);

    if names.is_empty() {
        println!("No people yet. Record an expense with 'splitter expense add'.");
        return Ok(());
    }

    let balances = balances(&snapshot);
    for name in names {
        let net = balances
            .iter()
            .find(|b| b.person == name)
            .map(|b| b.net)
            .unwrap_or_default();
        println!(
            "{:<20} {:>12}",
            name,
            net.format_with_symbol(&settings.currency_symbol)
        );
    }

    Ok(())
}
