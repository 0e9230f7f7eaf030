//! Expense splitter - shared expense ledger with split validation and analytics
//!
//! This library records expenses fronted by one person and split between
//! several participants, checks that every split adds up to its total, and
//! summarizes spending by category, by month and by size.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Diagnostic logging setup
//! - `models`: Core data models (money, expenses, shares, recurring templates)
//! - `split`: Share validation and resolution
//! - `analytics`: Pure aggregations over a snapshot of expenses
//! - `storage`: JSON file storage layer
//! - `audit`: Audit logging system
//! - `services`: Business logic layer
//! - `reports`, `display`, `export`: Output formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_splitter::models::{ExpenseDraft, Money, ShareInput};
//! use expense_splitter::services::ExpenseService;
//!
//! let expense = ExpenseService::new(&storage).create(ExpenseDraft {
//!     description: "Dinner".into(),
//!     amount: Money::from_cents(10000),
//!     category: "food".into(),
//!     paid_by: "Alice".into(),
//!     date,
//!     shares: vec![
//!         ShareInput::exact("Alice", "40"),
//!         ShareInput::percentage("Bob", "60"),
//!     ],
//! })?;
//! ```

pub mod analytics;
pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod split;
pub mod storage;

pub use error::{SplitterError, SplitterResult};
