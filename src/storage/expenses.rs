//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json. Expenses are
//! append-only: once inserted they are never replaced or removed.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SplitterError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Repository for expense persistence with a category index
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, Expense>>,
    /// Index: category -> expense ids
    by_category: RwLock<HashMap<String, Vec<ExpenseId>>>,
}

fn lock_error(e: impl std::fmt::Display) -> SplitterError {
    SplitterError::Storage(format!("Failed to acquire lock: {}", e))
}

/// Newest first, ties by id
fn sort_newest_first(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_category: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk and rebuild the index
    ///
    /// Stored expenses whose shares no longer resolve to their cached amounts
    /// are kept but reported.
    pub fn load(&self) -> Result<(), SplitterError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(lock_error)?;
        let mut by_category = self.by_category.write().map_err(lock_error)?;

        data.clear();
        by_category.clear();

        for expense in file_data.expenses {
            if let Err(err) = expense.verify() {
                tracing::warn!(
                    id = %expense.id,
                    kind = err.kind(),
                    "stored expense failed verification: {}",
                    err
                );
            }

            by_category
                .entry(expense.category.clone())
                .or_default()
                .push(expense.id);
            data.insert(expense.id, expense);
        }

        tracing::debug!(count = data.len(), path = %self.path.display(), "loaded expenses");
        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> Result<(), SplitterError> {
        let data = self.data.read().map_err(lock_error)?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        sort_newest_first(&mut expenses);

        write_json_atomic(&self.path, &ExpenseData { expenses })
    }

    /// Add a new expense
    ///
    /// An id already present is a `Duplicate` error; existing expenses are
    /// never overwritten.
    pub fn insert(&self, expense: Expense) -> Result<(), SplitterError> {
        let mut data = self.data.write().map_err(lock_error)?;
        let mut by_category = self.by_category.write().map_err(lock_error)?;

        if data.contains_key(&expense.id) {
            return Err(SplitterError::Duplicate {
                entity_type: "Expense",
                identifier: expense.id.to_string(),
            });
        }

        by_category
            .entry(expense.category.clone())
            .or_default()
            .push(expense.id);
        data.insert(expense.id, expense);
        Ok(())
    }

    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, SplitterError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.get(&id).cloned())
    }

    /// Find an expense by its short display id or full UUID
    pub fn find(&self, identifier: &str) -> Result<Option<Expense>, SplitterError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.values().find(|e| e.id.matches(identifier)).cloned())
    }

    /// All expenses, newest first
    pub fn get_all(&self) -> Result<Vec<Expense>, SplitterError> {
        let mut expenses = self.snapshot()?;
        sort_newest_first(&mut expenses);
        Ok(expenses)
    }

    /// Expenses in one category, newest first
    pub fn get_by_category(&self, category: &str) -> Result<Vec<Expense>, SplitterError> {
        let data = self.data.read().map_err(lock_error)?;
        let by_category = self.by_category.read().map_err(lock_error)?;

        let ids = by_category.get(category).map(|v| v.as_slice()).unwrap_or(&[]);
        let mut expenses: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        sort_newest_first(&mut expenses);
        Ok(expenses)
    }

    /// An owned copy of every expense, in no particular order
    ///
    /// Analytics run over this copy, so they never hold the lock.
    pub fn snapshot(&self) -> Result<Vec<Expense>, SplitterError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.values().cloned().collect())
    }

    pub fn count(&self) -> Result<usize, SplitterError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.len())
    }
}
