//! Core data models for the expense splitter
//!
//! This module contains the data structures of the shared-expense ledger:
//! money amounts, expenses and their shares, months for bucketing, and
//! recurring expense templates.

pub mod expense;
pub mod ids;
pub mod money;
pub mod month;
pub mod recurring;
pub mod share;

pub use expense::{Expense, ExpenseDraft};
pub use ids::{ExpenseId, RecurringId};
pub use money::{Money, MoneyParseError};
pub use month::Month;
pub use recurring::{Frequency, RecurringExpense};
pub use share::{Share, ShareInput, ShareType};
