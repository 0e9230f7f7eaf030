//! Expense model
//!
//! An expense is a single cost fronted by one person and split between one or
//! more participants. Expenses are created atomically with their shares and
//! never modified afterwards.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ExpenseId, RecurringId};
use super::money::Money;
use super::month::Month;
use super::share::{person_key, Share, ShareInput};
use crate::split::{check_balance, resolve_shares, ValidationError};

/// A candidate expense as submitted, before its split is resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: Money,
    pub category: String,
    pub paid_by: String,
    pub date: NaiveDate,
    pub shares: Vec<ShareInput>,
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, time ordered
    pub id: ExpenseId,

    /// Free-text label
    pub description: String,

    /// Total cost
    pub amount: Money,

    /// Grouping label
    pub category: String,

    /// Person who fronted the money
    pub paid_by: String,

    /// When the expense happened; decides its month bucket
    pub date: NaiveDate,

    /// Resolved split of `amount` between participants
    pub shares: Vec<Share>,

    /// Recurring template this expense was posted from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_id: Option<RecurringId>,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Resolve a draft's split and build the expense
    pub fn from_draft(draft: ExpenseDraft) -> Result<Self, ValidationError> {
        let shares = resolve_shares(draft.amount, &draft.shares)?;

        Ok(Self {
            id: ExpenseId::new(),
            description: draft.description,
            amount: draft.amount,
            category: draft.category,
            paid_by: draft.paid_by,
            date: draft.date,
            shares,
            recurring_id: None,
            created_at: Utc::now(),
        })
    }

    /// Month this expense is bucketed into
    pub fn month(&self) -> Month {
        Month::of(self.date)
    }

    /// Sum of all resolved shares
    pub fn shares_total(&self) -> Money {
        self.shares.iter().map(|s| s.resolved_amount).sum()
    }

    /// Whether a person fronted or takes part in this expense
    pub fn involves(&self, person: &str) -> bool {
        let key = person_key(person);
        person_key(&self.paid_by) == key || self.shares.iter().any(|s| person_key(&s.person) == key)
    }

    /// Re-resolve the stored split and check the cached amounts still agree
    pub fn verify(&self) -> Result<(), ValidationError> {
        let inputs: Vec<ShareInput> = self.shares.iter().map(Share::to_input).collect();
        let recomputed = resolve_shares(self.amount, &inputs)?;

        for (index, (stored, fresh)) in self.shares.iter().zip(&recomputed).enumerate() {
            if stored.resolved_amount != fresh.resolved_amount {
                return Err(ValidationError::MalformedShare {
                    index,
                    reason: format!(
                        "stored amount {} for {} should be {}",
                        stored.resolved_amount, stored.person, fresh.resolved_amount
                    ),
                });
            }
        }

        check_balance(self.amount, &self.shares)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount,
            self.paid_by
        )
    }
}
