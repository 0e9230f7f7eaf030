//! Who owes whom
//!
//! Net balances per person and a greedy settle-up plan that clears them.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Expense, Money};

/// A person's position across all expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonBalance {
    pub person: String,
    /// Total of expenses this person fronted
    pub paid: Money,
    /// Total of this person's resolved shares
    pub owed: Money,
    /// `paid - owed`; positive means the others owe this person
    pub net: Money,
}

/// A suggested payment that moves balances toward zero
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settlement {
    pub from: String,
    pub to: String,
    pub amount: Money,
}

/// Net balance of every payer and participant, sorted by name
pub fn balances(expenses: &[Expense]) -> Vec<PersonBalance> {
    let mut totals: BTreeMap<&str, (Money, Money)> = BTreeMap::new();

    for expense in expenses {
        totals.entry(expense.paid_by.as_str()).or_default().0 += expense.amount;
        for share in &expense.shares {
            totals.entry(share.person.as_str()).or_default().1 += share.resolved_amount;
        }
    }

    totals
        .into_iter()
        .map(|(person, (paid, owed))| PersonBalance {
            person: person.to_string(),
            paid,
            owed,
            net: paid - owed,
        })
        .collect()
}

/// Greedy settle-up: the largest debtor pays the largest creditor until no
/// debt is left
///
/// Ties go to the alphabetically first name. Rounding slack left by splits
/// (at most a cent per expense) can leave a creditor short by that amount.
pub fn settle_up(balances: &[PersonBalance]) -> Vec<Settlement> {
    let mut working: Vec<(String, Money)> = balances
        .iter()
        .filter(|b| !b.net.is_zero())
        .map(|b| (b.person.clone(), b.net))
        .collect();
    let mut settlements = Vec::new();

    loop {
        let debtor = working
            .iter()
            .enumerate()
            .filter(|(_, (_, net))| net.is_negative())
            .min_by(|(_, (a_name, a)), (_, (b_name, b))| a.cmp(b).then_with(|| a_name.cmp(b_name)))
            .map(|(i, _)| i);
        let creditor = working
            .iter()
            .enumerate()
            .filter(|(_, (_, net))| net.is_positive())
            .max_by(|(_, (a_name, a)), (_, (b_name, b))| a.cmp(b).then_with(|| b_name.cmp(a_name)))
            .map(|(i, _)| i);

        let (Some(d), Some(c)) = (debtor, creditor) else {
            break;
        };

        let amount = working[d].1.abs().min(working[c].1);
        working[d].1 += amount;
        working[c].1 -= amount;

        settlements.push(Settlement {
            from: working[d].0.clone(),
            to: working[c].0.clone(),
            amount,
        });
    }

    settlements
}
