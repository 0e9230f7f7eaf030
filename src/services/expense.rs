//! Expense service
//!
//! Records new expenses and answers lookups over the ledger.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{SplitterError, SplitterResult};
use crate::models::{Expense, ExpenseDraft, Month};
use crate::storage::Storage;

/// Service for recording and querying expenses
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

/// Options for filtering expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    pub category: Option<String>,
    /// Payer or participant, case-insensitive
    pub person: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub month: Option<Month>,
    /// Maximum number of expenses to return
    pub limit: Option<usize>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn person(mut self, person: impl Into<String>) -> Self {
        self.person = Some(person.into());
        self
    }

    /// Only expenses on or after `start`
    pub fn since(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    /// Only expenses on or before `end`
    pub fn until(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    pub fn month(mut self, month: Month) -> Self {
        self.month = Some(month);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Trim the free-text fields of a draft and reject empty ones
pub(crate) fn normalize_draft(mut draft: ExpenseDraft) -> SplitterResult<ExpenseDraft> {
    draft.description = draft.description.trim().to_string();
    draft.category = draft.category.trim().to_string();
    draft.paid_by = draft.paid_by.trim().to_string();

    if draft.description.is_empty() {
        return Err(SplitterError::Validation(
            "Expense description cannot be empty".into(),
        ));
    }
    if draft.category.is_empty() {
        return Err(SplitterError::Validation(
            "Expense category cannot be empty".into(),
        ));
    }
    if draft.paid_by.is_empty() {
        return Err(SplitterError::Validation(
            "Expense payer cannot be empty".into(),
        ));
    }

    Ok(draft)
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate a draft, resolve its split and record it
    ///
    /// Nothing is stored unless the split balances.
    pub fn create(&self, draft: ExpenseDraft) -> SplitterResult<Expense> {
        let draft = normalize_draft(draft)?;

        let expense = Expense::from_draft(draft).inspect_err(|err| {
            tracing::info!(kind = err.kind(), "rejected expense: {}", err);
        })?;

        self.storage.expenses.insert(expense.clone())?;
        self.storage.expenses.save()?;
        self.audit_created(&expense)?;

        Ok(expense)
    }

    /// Audit a stored expense; call only after the expense file is saved
    pub(crate) fn audit_created(&self, expense: &Expense) -> SplitterResult<()> {
        self.storage.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            expense,
        )?;

        tracing::info!(
            id = %expense.id,
            amount = %expense.amount,
            participants = expense.shares.len(),
            "recorded expense"
        );
        Ok(())
    }

    /// Find an expense by short display id or full UUID
    pub fn find(&self, identifier: &str) -> SplitterResult<Option<Expense>> {
        self.storage.expenses.find(identifier.trim())
    }

    /// Like [`find`](Self::find) but a missing expense is an error
    pub fn require(&self, identifier: &str) -> SplitterResult<Expense> {
        self.find(identifier)?
            .ok_or_else(|| SplitterError::expense_not_found(identifier))
    }

    /// List expenses newest first, with optional filtering
    pub fn list(&self, filter: ExpenseFilter) -> SplitterResult<Vec<Expense>> {
        let mut expenses = match &filter.category {
            Some(category) => self.storage.expenses.get_by_category(category)?,
            None => self.storage.expenses.get_all()?,
        };

        if let Some(person) = &filter.person {
            expenses.retain(|e| e.involves(person));
        }
        if let Some(start) = filter.start_date {
            expenses.retain(|e| e.date >= start);
        }
        if let Some(end) = filter.end_date {
            expenses.retain(|e| e.date <= end);
        }
        if let Some(month) = filter.month {
            expenses.retain(|e| month.contains(e.date));
        }
        if let Some(limit) = filter.limit {
            expenses.truncate(limit);
        }

        Ok(expenses)
    }

    /// Owned copy of the whole ledger for analytics
    pub fn snapshot(&self) -> SplitterResult<Vec<Expense>> {
        self.storage.expenses.snapshot()
    }

    pub fn count(&self) -> SplitterResult<usize> {
        self.storage.expenses.count()
    }
}
