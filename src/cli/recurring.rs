//! CLI commands for recurring expenses

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{
    format_due_list, format_expense_list, format_recurring_details, format_recurring_list,
};
use crate::error::{SplitterError, SplitterResult};
use crate::models::{ExpenseDraft, Frequency};
use crate::services::RecurringService;
use crate::storage::Storage;

use super::{date_or_today, parse_amount, parse_date, parse_shares};

/// Recurring expense subcommands
#[derive(Subcommand, Debug)]
pub enum RecurringCommands {
    /// Create a recurring expense template
    Add {
        /// What the money is spent on
        description: String,

        /// Amount of each occurrence
        amount: String,

        /// Person who pays each occurrence
        #[arg(short, long)]
        paid_by: String,

        /// Share as NAME=VALUE% or NAME=VALUE; repeat per participant
        #[arg(short, long = "share", required = true)]
        shares: Vec<String>,

        /// daily, weekly, monthly or yearly
        #[arg(short, long)]
        frequency: String,

        /// First occurrence (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        start: Option<String>,

        /// Last date an occurrence may fall on (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,

        /// Category (defaults to the configured default category)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List recurring templates
    #[command(alias = "ls")]
    List,

    /// Show one template with its split and schedule
    Show {
        /// Recurring ID (short form like rec-1a2b3c4d or full UUID)
        id: String,
    },

    /// Show occurrences that are due but not yet posted
    Due {
        /// Treat this date as today (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Post every due occurrence as an expense
    Post {
        /// Treat this date as today (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
}

/// Handle recurring expense commands
pub fn handle_recurring_command(
    storage: &Storage,
    settings: &Settings,
    cmd: RecurringCommands,
) -> SplitterResult<()> {
    let service = RecurringService::new(storage);

    match cmd {
        RecurringCommands::Add {
            description,
            amount,
            paid_by,
            shares,
            frequency,
            start,
            end,
            category,
        } => {
            let frequency: Frequency = frequency.parse().map_err(SplitterError::Validation)?;
            let end_date = end.as_deref().map(parse_date).transpose()?;

            let draft = ExpenseDraft {
                description,
                amount: parse_amount(&amount)?,
                category: category.unwrap_or_else(|| settings.default_category.clone()),
                paid_by,
                date: date_or_today(start.as_deref())?,
                shares: parse_shares(&shares),
            };

            let template = service.create(draft, frequency, end_date)?;
            println!(
                "Created recurring expense {}: {}",
                template.id.short(),
                template
            );
        }

        RecurringCommands::List => {
            print!("{}", format_recurring_list(&service.list()?, settings));
        }

        RecurringCommands::Show { id } => {
            print!("{}", format_recurring_details(&service.require(&id)?, settings));
        }

        RecurringCommands::Due { date } => {
            let today = date_or_today(date.as_deref())?;
            print!("{}", format_due_list(&service.due(today)?, settings));
        }

        RecurringCommands::Post { date } => {
            let today = date_or_today(date.as_deref())?;
            let posted = service.post_due(today)?;
            if posted.is_empty() {
                println!("Nothing due.");
            } else {
                println!("Posted {} expense(s)", posted.len());
                print!("{}", format_expense_list(&posted, settings));
            }
        }
    }

    Ok(())
}
