//! CLI commands for reports
//!
//! Every report prints to the terminal, or writes CSV when given `--output`.

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::Settings;
use crate::error::SplitterResult;
use crate::reports::{BalanceReport, CategoryReport, MonthlyReport, TopExpensesReport};
use crate::storage::Storage;

use super::create_output;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Total spending per category with its share of the whole
    #[command(alias = "category")]
    Categories {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Total spending per month with month-over-month change
    Monthly {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// The largest expenses
    Top {
        /// Number of expenses (defaults to the configured limit)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// What each person paid, owes, and their net position
    Balances {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Payments that would settle every balance
    Settle,
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> SplitterResult<()> {
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Categories { output } => {
            let report = CategoryReport::generate(storage)?;
            match output {
                Some(path) => {
                    report.export_csv(&mut create_output(&path)?)?;
                    println!("Category report exported to: {}", path.display());
                }
                None => print!("{}", report.format_terminal(currency)),
            }
        }

        ReportCommands::Monthly { output } => {
            let report = MonthlyReport::generate(storage)?;
            match output {
                Some(path) => {
                    report.export_csv(&mut create_output(&path)?)?;
                    println!("Monthly report exported to: {}", path.display());
                }
                None => print!("{}", report.format_terminal(currency)),
            }
        }

        ReportCommands::Top { limit, output } => {
            let limit = limit.unwrap_or(settings.top_expenses_limit);
            let report = TopExpensesReport::generate(storage, limit)?;
            match output {
                Some(path) => {
                    report.export_csv(&mut create_output(&path)?)?;
                    println!("Top expenses exported to: {}", path.display());
                }
                None => print!("{}", report.format_terminal(currency)),
            }
        }

        ReportCommands::Balances { output } => {
            let report = BalanceReport::generate(storage)?;
            match output {
                Some(path) => {
                    report.export_csv(&mut create_output(&path)?)?;
                    println!("Balances exported to: {}", path.display());
                }
                None => print!("{}", report.format_balances(currency)),
            }
        }

        ReportCommands::Settle => {
            let report = BalanceReport::generate(storage)?;
            print!("{}", report.format_settlements(currency));
        }
    }

    Ok(())
}
