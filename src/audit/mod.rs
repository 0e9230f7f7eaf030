//! Append-only audit trail of ledger changes
//!
//! Every expense recorded and every recurring template created or advanced
//! is appended to `audit.log` as one JSON object per line (JSONL).
//!
//! - `AuditEntry`: a single entry with timestamp, operation, entity
//!   information and JSON snapshots of the entity.
//! - `AuditLogger`: appends entries to the log file and reads them back.
//!
//! ```rust,ignore
//! use expense_splitter::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! let entry = AuditEntry::create(
//!     EntityType::Expense,
//!     expense.id.to_string(),
//!     Some(expense.description.clone()),
//!     &expense,
//! );
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
