//! Storage layer for the expense splitter
//!
//! Provides JSON file storage with atomic writes, lock-guarded in-memory
//! repositories, and the audit hook used by the services.

pub mod expenses;
pub mod file_io;
pub mod recurring;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use recurring::RecurringRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::SplitterPaths;
use crate::error::SplitterError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: SplitterPaths,
    pub expenses: ExpenseRepository,
    pub recurring: RecurringRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance, creating the data directories
    pub fn new(paths: SplitterPaths) -> Result<Self, SplitterError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            recurring: RecurringRepository::new(paths.recurring_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &SplitterPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), SplitterError> {
        self.expenses.load()?;
        self.recurring.load()?;
        Ok(())
    }

    /// Record a newly created entity in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), SplitterError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record a change to an entity in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Result<(), SplitterError> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        ))
    }
}
