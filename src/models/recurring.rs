//! Recurring expense templates
//!
//! A template describes an expense that repeats on a fixed cadence. Each
//! occurrence is posted as an ordinary [`Expense`](super::Expense) when due.

use chrono::{DateTime, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::expense::ExpenseDraft;
use super::ids::RecurringId;
use super::money::Money;
use super::share::Share;

/// How often a recurring expense repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// Date of the nth occurrence (0-based) counted from `start`
    ///
    /// Months and years are anchored on `start`, so a series starting on the
    /// 31st lands on the last day of shorter months and returns to the 31st
    /// afterwards. Returns `None` past the representable date range.
    pub fn nth_occurrence(&self, start: NaiveDate, n: u32) -> Option<NaiveDate> {
        match self {
            Self::Daily => start.checked_add_signed(Duration::days(i64::from(n))),
            Self::Weekly => start.checked_add_signed(Duration::weeks(i64::from(n))),
            Self::Monthly => start.checked_add_months(Months::new(n)),
            Self::Yearly => n
                .checked_mul(12)
                .and_then(|months| start.checked_add_months(Months::new(months))),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" => Ok(Self::Daily),
            "weekly" | "week" => Ok(Self::Weekly),
            "monthly" | "month" => Ok(Self::Monthly),
            "yearly" | "year" | "annual" => Ok(Self::Yearly),
            other => Err(format!(
                "unknown frequency '{}' (expected daily, weekly, monthly or yearly)",
                other
            )),
        }
    }
}

/// A recurring expense template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringExpense {
    pub id: RecurringId,
    pub description: String,
    pub amount: Money,
    pub category: String,
    pub paid_by: String,

    /// Split applied to every occurrence, resolved when the template was made
    pub shares: Vec<Share>,

    pub frequency: Frequency,
    pub start_date: NaiveDate,

    /// Last date an occurrence may fall on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    /// Number of occurrences already posted
    #[serde(default)]
    pub occurrences_posted: u32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecurringExpense {
    /// Build a template from a draft whose shares have already been resolved
    pub fn new(
        draft: &ExpenseDraft,
        shares: Vec<Share>,
        frequency: Frequency,
        end_date: Option<NaiveDate>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: RecurringId::new(),
            description: draft.description.clone(),
            amount: draft.amount,
            category: draft.category.clone(),
            paid_by: draft.paid_by.clone(),
            shares,
            frequency,
            start_date: draft.date,
            end_date,
            occurrences_posted: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Date of the next unposted occurrence, or `None` once the series ended
    pub fn next_occurrence(&self) -> Option<NaiveDate> {
        let next = self
            .frequency
            .nth_occurrence(self.start_date, self.occurrences_posted)?;
        match self.end_date {
            Some(end) if next > end => None,
            _ => Some(next),
        }
    }

    /// Unposted occurrence dates on or before `today`, oldest first
    pub fn due_dates(&self, today: NaiveDate) -> Vec<NaiveDate> {
        let mut dates = Vec::new();
        let mut n = self.occurrences_posted;

        while let Some(date) = self.frequency.nth_occurrence(self.start_date, n) {
            if date > today || self.end_date.is_some_and(|end| date > end) {
                break;
            }
            dates.push(date);
            n += 1;
        }

        dates
    }

    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.next_occurrence().is_some_and(|next| next <= today)
    }

    /// Draft for an occurrence on `date`, reusing the resolved split
    pub fn draft_for(&self, date: NaiveDate) -> ExpenseDraft {
        ExpenseDraft {
            description: self.description.clone(),
            amount: self.amount,
            category: self.category.clone(),
            paid_by: self.paid_by.clone(),
            date,
            shares: self.shares.iter().map(Share::to_input).collect(),
        }
    }

    /// Record that `count` more occurrences were posted
    pub fn advance(&mut self, count: u32) {
        self.occurrences_posted = self.occurrences_posted.saturating_add(count);
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for RecurringExpense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.description, self.amount, self.frequency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShareInput;
    use crate::split::resolve_shares;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn template(frequency: Frequency, start: NaiveDate, end: Option<NaiveDate>) -> RecurringExpense {
        let draft = ExpenseDraft {
            description: "Rent".into(),
            amount: Money::from_cents(120000),
            category: "utilities".into(),
            paid_by: "Alice".into(),
            date: start,
            shares: vec![
                ShareInput::percentage("Alice", "50"),
                ShareInput::percentage("Bob", "50"),
            ],
        };
        let shares = resolve_shares(draft.amount, &draft.shares).unwrap();
        RecurringExpense::new(&draft, shares, frequency, end)
    }

    #[test]
    fn test_monthly_anchored_on_start() {
        let start = date(2025, 1, 31);
        assert_eq!(Frequency::Monthly.nth_occurrence(start, 1), Some(date(2025, 2, 28)));
        assert_eq!(Frequency::Monthly.nth_occurrence(start, 2), Some(date(2025, 3, 31)));
        assert_eq!(Frequency::Yearly.nth_occurrence(date(2024, 2, 29), 1), Some(date(2025, 2, 28)));
    }

    #[test]
    fn test_daily_and_weekly() {
        let start = date(2025, 1, 1);
        assert_eq!(Frequency::Daily.nth_occurrence(start, 3), Some(date(2025, 1, 4)));
        assert_eq!(Frequency::Weekly.nth_occurrence(start, 2), Some(date(2025, 1, 15)));
    }

    #[test]
    fn test_due_dates() {
        let rec = template(Frequency::Monthly, date(2025, 1, 5), None);

        assert!(rec.due_dates(date(2025, 1, 4)).is_empty());
        assert_eq!(
            rec.due_dates(date(2025, 3, 10)),
            vec![date(2025, 1, 5), date(2025, 2, 5), date(2025, 3, 5)]
        );
        assert!(rec.is_due(date(2025, 1, 5)));
    }

    #[test]
    fn test_end_date_stops_series() {
        let mut rec = template(Frequency::Weekly, date(2025, 1, 1), Some(date(2025, 1, 10)));

        assert_eq!(
            rec.due_dates(date(2025, 12, 31)),
            vec![date(2025, 1, 1), date(2025, 1, 8)]
        );

        rec.advance(2);
        assert_eq!(rec.next_occurrence(), None);
        assert!(!rec.is_due(date(2025, 12, 31)));
    }

    #[test]
    fn test_advance_moves_next_occurrence() {
        let mut rec = template(Frequency::Monthly, date(2025, 1, 5), None);
        rec.advance(1);
        assert_eq!(rec.next_occurrence(), Some(date(2025, 2, 5)));
    }

    #[test]
    fn test_advance_saturates() {
        let mut rec = template(Frequency::Weekly, date(2025, 1, 5), None);
        rec.advance(u32::MAX);
        rec.advance(10);
        assert_eq!(rec.occurrences_posted, u32::MAX);
        assert_eq!(rec.next_occurrence(), None);
    }

    #[test]
    fn test_draft_for_reuses_split() {
        let rec = template(Frequency::Monthly, date(2025, 1, 5), None);
        let draft = rec.draft_for(date(2025, 2, 5));

        assert_eq!(draft.date, date(2025, 2, 5));
        assert_eq!(draft.shares.len(), 2);
        assert_eq!(draft.shares[0].share_type, "percentage");
    }

    #[test]
    fn test_frequency_parse() {
        assert_eq!("Monthly".parse::<Frequency>(), Ok(Frequency::Monthly));
        assert_eq!("annual".parse::<Frequency>(), Ok(Frequency::Yearly));
        assert!("fortnightly".parse::<Frequency>().is_err());
    }
}
