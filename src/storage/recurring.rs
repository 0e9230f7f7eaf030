//! Recurring expense repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SplitterError;
use crate::models::{RecurringExpense, RecurringId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct RecurringData {
    recurring: Vec<RecurringExpense>,
}

/// Repository for recurring expense templates
pub struct RecurringRepository {
    path: PathBuf,
    data: RwLock<HashMap<RecurringId, RecurringExpense>>,
}

fn lock_error(e: impl std::fmt::Display) -> SplitterError {
    SplitterError::Storage(format!("Failed to acquire lock: {}", e))
}

impl RecurringRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    pub fn load(&self) -> Result<(), SplitterError> {
        let file_data: RecurringData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(lock_error)?;
        data.clear();
        for template in file_data.recurring {
            data.insert(template.id, template);
        }

        Ok(())
    }

    pub fn save(&self) -> Result<(), SplitterError> {
        let recurring = self.get_all()?;
        write_json_atomic(&self.path, &RecurringData { recurring })
    }

    /// Insert or replace a template
    pub fn upsert(&self, template: RecurringExpense) -> Result<(), SplitterError> {
        let mut data = self.data.write().map_err(lock_error)?;
        data.insert(template.id, template);
        Ok(())
    }

    pub fn get(&self, id: RecurringId) -> Result<Option<RecurringExpense>, SplitterError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.get(&id).cloned())
    }

    /// Find a template by its short display id or full UUID
    pub fn find(&self, identifier: &str) -> Result<Option<RecurringExpense>, SplitterError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.values().find(|r| r.id.matches(identifier)).cloned())
    }

    /// All templates in creation order
    pub fn get_all(&self) -> Result<Vec<RecurringExpense>, SplitterError> {
        let data = self.data.read().map_err(lock_error)?;
        let mut templates: Vec<_> = data.values().cloned().collect();
        templates.sort_by_key(|r| r.id);
        Ok(templates)
    }

    pub fn count(&self) -> Result<usize, SplitterError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.len())
    }
}
