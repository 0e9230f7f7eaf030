//! Recurring expense service
//!
//! Creates templates and posts their due occurrences as ordinary expenses.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{SplitterError, SplitterResult};
use crate::models::{Expense, ExpenseDraft, Frequency, RecurringExpense};
use crate::split::resolve_shares;
use crate::storage::Storage;

use super::expense::{normalize_draft, ExpenseService};

/// Service for recurring expense templates
pub struct RecurringService<'a> {
    storage: &'a Storage,
}

/// A template together with its unposted occurrence dates
#[derive(Debug, Clone)]
pub struct DueOccurrences {
    pub recurring: RecurringExpense,
    pub dates: Vec<NaiveDate>,
}

impl<'a> RecurringService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a template; `draft.date` is the first occurrence
    ///
    /// The split is resolved now so a template that could never post is
    /// rejected up front.
    pub fn create(
        &self,
        draft: ExpenseDraft,
        frequency: Frequency,
        end_date: Option<NaiveDate>,
    ) -> SplitterResult<RecurringExpense> {
        let draft = normalize_draft(draft)?;

        if let Some(end) = end_date {
            if end < draft.date {
                return Err(SplitterError::Validation(format!(
                    "End date {} is before start date {}",
                    end, draft.date
                )));
            }
        }

        let shares = resolve_shares(draft.amount, &draft.shares)?;
        let template = RecurringExpense::new(&draft, shares, frequency, end_date);

        self.storage.recurring.upsert(template.clone())?;
        self.storage.recurring.save()?;

        self.storage.log_create(
            EntityType::RecurringExpense,
            template.id.to_string(),
            Some(template.description.clone()),
            &template,
        )?;

        tracing::info!(id = %template.id, frequency = %frequency, "created recurring expense");
        Ok(template)
    }

    /// Look up a template by short id or full UUID
    pub fn require(&self, identifier: &str) -> SplitterResult<RecurringExpense> {
        self.storage
            .recurring
            .find(identifier)?
            .ok_or_else(|| SplitterError::recurring_not_found(identifier))
    }

    /// All templates in creation order
    pub fn list(&self) -> SplitterResult<Vec<RecurringExpense>> {
        self.storage.recurring.get_all()
    }

    /// Templates with at least one unposted occurrence on or before `today`
    pub fn due(&self, today: NaiveDate) -> SplitterResult<Vec<DueOccurrences>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|recurring| recurring.is_due(today))
            .map(|recurring| DueOccurrences {
                dates: recurring.due_dates(today),
                recurring,
            })
            .collect())
    }

    /// Post every due occurrence as an expense and advance the templates
    ///
    /// Returns the posted expenses, oldest occurrence first per template.
    pub fn post_due(&self, today: NaiveDate) -> SplitterResult<Vec<Expense>> {
        let mut posted = Vec::new();
        let mut updates = Vec::new();

        for DueOccurrences { recurring, dates } in self.due(today)? {
            for &date in &dates {
                let mut expense = Expense::from_draft(recurring.draft_for(date))?;
                expense.recurring_id = Some(recurring.id);
                self.storage.expenses.insert(expense.clone())?;
                posted.push(expense);
            }

            let count = u32::try_from(dates.len()).map_err(|_| {
                SplitterError::Validation(format!(
                    "Too many occurrences of {} to post at once",
                    recurring.id.short()
                ))
            })?;
            let mut advanced = recurring.clone();
            advanced.advance(count);
            self.storage.recurring.upsert(advanced.clone())?;
            updates.push((recurring, advanced));
        }

        if posted.is_empty() {
            return Ok(posted);
        }

        self.storage.expenses.save()?;
        self.storage.recurring.save()?;

        let expense_service = ExpenseService::new(self.storage);
        for expense in &posted {
            expense_service.audit_created(expense)?;
        }
        for (before, after) in &updates {
            self.storage.log_update(
                EntityType::RecurringExpense,
                after.id.to_string(),
                Some(after.description.clone()),
                before,
                after,
                Some(format!(
                    "occurrences_posted: {} -> {}",
                    before.occurrences_posted, after.occurrences_posted
                )),
            )?;
        }

        tracing::info!(count = posted.len(), "posted recurring expenses");
        Ok(posted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SplitterPaths;
    use crate::models::{Money, ShareInput};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitterPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rent_draft(start: NaiveDate) -> ExpenseDraft {
        ExpenseDraft {
            description: "Rent".into(),
            amount: Money::from_cents(150000),
            category: "housing".into(),
            paid_by: "Alice".into(),
            date: start,
            shares: vec![
                ShareInput::percentage("Alice", "50"),
                ShareInput::percentage("Bob", "50"),
            ],
        }
    }

    #[test]
    fn test_create_rejects_bad_split() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecurringService::new(&storage);

        let mut draft = rent_draft(date(2025, 1, 1));
        draft.shares = vec![ShareInput::percentage("Alice", "90")];

        let err = service.create(draft, Frequency::Monthly, None).unwrap_err();
        assert_eq!(err.as_split().map(|e| e.kind()), Some("unbalanced_split"));
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_require_by_short_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecurringService::new(&storage);
        let template = service
            .create(rent_draft(date(2025, 1, 1)), Frequency::Monthly, None)
            .unwrap();

        assert_eq!(service.require(&template.id.short()).unwrap().id, template.id);
        assert!(service.require("rec-00000000").unwrap_err().is_not_found());
    }

    #[test]
    fn test_create_rejects_end_before_start() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecurringService::new(&storage);

        let err = service
            .create(rent_draft(date(2025, 3, 1)), Frequency::Monthly, Some(date(2025, 2, 1)))
            .unwrap_err();
        assert!(matches!(err, SplitterError::Validation(_)));
    }

    #[test]
    fn test_post_due_materializes_and_advances() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecurringService::new(&storage);
        let template = service
            .create(rent_draft(date(2025, 1, 31)), Frequency::Monthly, None)
            .unwrap();

        let due = service.due(date(2025, 3, 31)).unwrap();
        assert_eq!(due.len(), 1);
        assert_eq!(
            due[0].dates,
            vec![date(2025, 1, 31), date(2025, 2, 28), date(2025, 3, 31)]
        );

        let posted = service.post_due(date(2025, 3, 31)).unwrap();
        assert_eq!(posted.len(), 3);
        assert!(posted.iter().all(|e| e.recurring_id == Some(template.id)));
        assert!(posted.iter().all(|e| e.shares_total() == e.amount));

        let advanced = storage.recurring.get(template.id).unwrap().unwrap();
        assert_eq!(advanced.occurrences_posted, 3);
        assert_eq!(storage.expenses.count().unwrap(), 3);

        // Nothing left to post for the same day
        assert!(service.post_due(date(2025, 3, 31)).unwrap().is_empty());
        assert!(service.due(date(2025, 4, 29)).unwrap().is_empty());
        assert_eq!(service.due(date(2025, 4, 30)).unwrap().len(), 1);
    }

    #[test]
    fn test_end_date_stops_series() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecurringService::new(&storage);
        service
            .create(
                rent_draft(date(2025, 1, 1)),
                Frequency::Weekly,
                Some(date(2025, 1, 10)),
            )
            .unwrap();

        let posted = service.post_due(date(2025, 12, 31)).unwrap();
        let dates: Vec<NaiveDate> = posted.iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![date(2025, 1, 1), date(2025, 1, 8)]);
    }

    #[test]
    fn test_post_due_audits_template_update() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecurringService::new(&storage);
        service
            .create(rent_draft(date(2025, 1, 1)), Frequency::Daily, None)
            .unwrap();

        service.post_due(date(2025, 1, 2)).unwrap();

        let entries = storage.audit().read_all().unwrap();
        let kinds: Vec<(EntityType, String)> = entries
            .iter()
            .map(|e| (e.entity_type, e.operation.to_string()))
            .collect();
        assert_eq!(
            kinds,
            vec![
                (EntityType::RecurringExpense, "CREATE".to_string()),
                (EntityType::Expense, "CREATE".to_string()),
                (EntityType::Expense, "CREATE".to_string()),
                (EntityType::RecurringExpense, "UPDATE".to_string()),
            ]
        );
    }

    #[test]
    fn test_post_due_audits_nothing_when_save_fails() {
        let (temp_dir, storage) = create_test_storage();
        let service = RecurringService::new(&storage);
        service
            .create(rent_draft(date(2025, 1, 1)), Frequency::Daily, None)
            .unwrap();
        std::fs::create_dir_all(temp_dir.path().join("data").join("expenses.json.tmp")).unwrap();

        assert!(service.post_due(date(2025, 1, 2)).is_err());

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entity_type, EntityType::RecurringExpense);
    }
}
