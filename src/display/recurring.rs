//! Recurring expense display formatting

use crate::config::Settings;
use crate::models::RecurringExpense;
use crate::services::DueOccurrences;

use super::truncate;

pub fn format_recurring_list(templates: &[RecurringExpense], settings: &Settings) -> String {
    if templates.is_empty() {
        return "No recurring expenses.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<24}  {:>12}  {:<8}  {:<10}  {:<10}  {:>6}\n",
        "ID", "Description", "Amount", "Every", "Next", "Ends", "Posted"
    ));
    output.push_str(&"-".repeat(94));
    output.push('\n');

    for template in templates {
        let next = template
            .next_occurrence()
            .map(|d| d.format(&settings.date_format).to_string())
            .unwrap_or_else(|| "done".to_string());
        let ends = template
            .end_date
            .map(|d| d.format(&settings.date_format).to_string())
            .unwrap_or_else(|| "never".to_string());

        output.push_str(&format!(
            "{:<12}  {:<24}  {:>12}  {:<8}  {:<10}  {:<10}  {:>6}\n",
            template.id.short(),
            truncate(&template.description, 24),
            template.amount.format_with_symbol(&settings.currency_symbol),
            template.frequency.to_string(),
            next,
            ends,
            template.occurrences_posted,
        ));
    }

    output
}

/// Format one template with its split and schedule
pub fn format_recurring_details(template: &RecurringExpense, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let fmt_date = |d: chrono::NaiveDate| d.format(&settings.date_format).to_string();
    let mut output = String::new();

    output.push_str(&format!("Recurring:   {}\n", template.id.short()));
    output.push_str(&format!("Description: {}\n", template.description));
    output.push_str(&format!(
        "Amount:      {}\n",
        template.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Category:    {}\n", template.category));
    output.push_str(&format!("Paid by:     {}\n", template.paid_by));
    output.push_str(&format!("Every:       {}\n", template.frequency));
    output.push_str(&format!("Starts:      {}\n", fmt_date(template.start_date)));
    if let Some(end) = template.end_date {
        output.push_str(&format!("Ends:        {}\n", fmt_date(end)));
    }
    output.push_str(&format!("Posted:      {}\n", template.occurrences_posted));
    match template.next_occurrence() {
        Some(next) => output.push_str(&format!("Next:        {}\n", fmt_date(next))),
        None => output.push_str("Next:        series ended\n"),
    }

    output.push_str("\nShares:\n");
    for share in &template.shares {
        output.push_str(&format!(
            "  {:<20} {:>10}  {:>12}\n",
            share.person,
            share.display_value(),
            share.resolved_amount.format_with_symbol(symbol)
        ));
    }

    output
}

pub fn format_due_list(due: &[DueOccurrences], settings: &Settings) -> String {
    if due.is_empty() {
        return "Nothing due.\n".to_string();
    }

    let mut output = String::new();
    for DueOccurrences { recurring, dates } in due {
        let dates: Vec<String> = dates
            .iter()
            .map(|d| d.format(&settings.date_format).to_string())
            .collect();
        output.push_str(&format!(
            "{} {} ({}): {}\n",
            recurring.id.short(),
            recurring.description,
            recurring.amount.format_with_symbol(&settings.currency_symbol),
            dates.join(", ")
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDraft, Frequency, Money, ShareInput};
    use crate::split::resolve_shares;
    use chrono::NaiveDate;

    fn internet() -> RecurringExpense {
        let draft = ExpenseDraft {
            description: "Internet".into(),
            amount: Money::from_cents(6000),
            category: "utilities".into(),
            paid_by: "Bob".into(),
            date: NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
            shares: vec![
                ShareInput::exact("Alice", "30"),
                ShareInput::exact("Bob", "30"),
            ],
        };
        let shares = resolve_shares(draft.amount, &draft.shares).unwrap();
        RecurringExpense::new(&draft, shares, Frequency::Monthly, None)
    }

    #[test]
    fn test_recurring_list() {
        let output = format_recurring_list(&[internet()], &Settings::default());
        assert!(output.contains("Internet"));
        assert!(output.contains("monthly"));
        assert!(output.contains("2025-03-05"));
        assert!(output.contains("never"));
    }

    #[test]
    fn test_recurring_details() {
        let output = format_recurring_details(&internet(), &Settings::default());
        assert!(output.contains("Every:       monthly"));
        assert!(output.contains("Next:        2025-03-05"));
        assert!(output.contains("$30.00"));
        assert!(!output.contains("Ends:"));
    }

    #[test]
    fn test_due_list() {
        let recurring = internet();
        let due = vec![DueOccurrences {
            dates: recurring.due_dates(NaiveDate::from_ymd_opt(2025, 4, 5).unwrap()),
            recurring,
        }];

        let output = format_due_list(&due, &Settings::default());
        assert!(output.contains("Internet ($60.00): 2025-03-05, 2025-04-05"));
        assert_eq!(format_due_list(&[], &Settings::default()), "Nothing due.\n");
    }
}
