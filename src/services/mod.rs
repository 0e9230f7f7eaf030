//! Service layer for the expense splitter
//!
//! The service layer provides business logic on top of the storage layer:
//! field validation, split resolution, persistence and audit logging.

pub mod expense;
pub mod recurring;

pub use expense::{ExpenseFilter, ExpenseService};
pub use recurring::{DueOccurrences, RecurringService};
