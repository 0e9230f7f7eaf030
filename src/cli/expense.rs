//! CLI commands for recording and browsing expenses

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_list};
use crate::error::{SplitterError, SplitterResult};
use crate::models::{ExpenseDraft, Month};
use crate::services::{ExpenseFilter, ExpenseService};
use crate::storage::Storage;

use super::{date_or_today, parse_amount, parse_date, parse_shares};

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        description: String,

        /// Total amount (e.g., 45.50)
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Person who paid
        #[arg(short, long)]
        paid_by: String,

        /// Share as NAME=VALUE% (percentage of the total) or NAME=VALUE (exact amount); repeat per participant
        #[arg(short, long = "share", required = true)]
        shares: Vec<String>,

        /// Category (defaults to the configured default category)
        #[arg(short, long)]
        category: Option<String>,

        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses, newest first
    #[command(alias = "ls")]
    List {
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,

        /// Only expenses this person paid for or shares in
        #[arg(short, long)]
        person: Option<String>,

        /// Only expenses in this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,

        /// Only expenses on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Only expenses on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Maximum number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show one expense with its share breakdown
    Show {
        /// Expense ID (short form like exp-1a2b3c4d or full UUID)
        id: String,
    },
}

/// Handle expense commands
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> SplitterResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            paid_by,
            shares,
            category,
            date,
        } => {
            let draft = ExpenseDraft {
                description,
                amount: parse_amount(&amount)?,
                category: category.unwrap_or_else(|| settings.default_category.clone()),
                paid_by,
                date: date_or_today(date.as_deref())?,
                shares: parse_shares(&shares),
            };

            let expense = service.create(draft)?;
            println!("Recorded expense {}", expense.id.short());
            println!();
            print!("{}", format_expense_details(&expense, settings));
        }

        ExpenseCommands::List {
            category,
            person,
            month,
            from,
            to,
            limit,
        } => {
            let mut filter = ExpenseFilter::new();
            if let Some(category) = category {
                filter = filter.category(category);
            }
            if let Some(person) = person {
                filter = filter.person(person);
            }
            if let Some(month) = month {
                let month: Month = month.parse().map_err(SplitterError::Validation)?;
                filter = filter.month(month);
            }
            if let Some(from) = from {
                filter = filter.since(parse_date(&from)?);
            }
            if let Some(to) = to {
                filter = filter.until(parse_date(&to)?);
            }
            if let Some(limit) = limit {
                filter = filter.limit(limit);
            }

            let expenses = service.list(filter)?;
            print!("{}", format_expense_list(&expenses, settings));
        }

        ExpenseCommands::Show { id } => {
            let expense = service.require(&id)?;
            print!("{}", format_expense_details(&expense, settings));
        }
    }

    Ok(())
}
