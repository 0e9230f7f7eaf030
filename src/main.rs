use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use expense_splitter::cli::{
    handle_expense_command, handle_export_command, handle_history_command, handle_people_command,
    handle_recurring_command, handle_report_command, ExpenseCommands, ExportArgs,
    RecurringCommands, ReportCommands,
};
use expense_splitter::config::{paths::SplitterPaths, settings::Settings};
use expense_splitter::logging;
use expense_splitter::storage::Storage;

#[derive(Parser)]
#[command(
    name = "splitter",
    version,
    about = "Shared expense ledger with split validation and spending analytics",
    long_about = "Record expenses one person paid for and split them between \
                  participants by percentage or exact amount. Every split must \
                  add up to the expense total. Reports summarize spending by \
                  category, by month and by size, and show who owes whom."
)]
struct Cli {
    /// More diagnostics on stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record and browse expenses
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Spending reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Everyone who paid or shared, with their net balance
    People,

    /// Recurring expense templates
    #[command(subcommand)]
    Recurring(RecurringCommands),

    /// Export the ledger as CSV, JSON or YAML
    Export(ExportArgs),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        count: usize,
    },

    /// Write a default configuration file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let paths = SplitterPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    tracing::debug!(base_dir = %paths.base_dir().display(), "resolved data directory");

    let mut storage = Storage::new(paths)?;
    storage.load_all()?;
    let paths = storage.paths();

    match cli.command {
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&storage, &settings, cmd)?,
        Some(Commands::People) => handle_people_command(&storage, &settings)?,
        Some(Commands::Recurring(cmd)) => handle_recurring_command(&storage, &settings, cmd)?,
        Some(Commands::Export(args)) => handle_export_command(&storage, args)?,
        Some(Commands::History { count }) => handle_history_command(&storage, count)?,
        Some(Commands::Init) => {
            settings.save(paths)?;
            println!("Initialized expense splitter at: {}", paths.base_dir().display());
            println!();
            println!("Record your first expense with:");
            println!("  splitter expense add \"Dinner\" 60 --paid-by Alice --share Alice=50% --share Bob=50%");
        }
        Some(Commands::Config) => {
            println!("Expense Splitter Configuration");
            println!("==============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Date format:        {}", settings.date_format);
            println!("  Top expenses limit: {}", settings.top_expenses_limit);
            println!("  Default category:   {}", settings.default_category);
        }
        None => {
            println!("splitter - shared expense ledger");
            println!();
            println!("Run 'splitter --help' for usage information.");
        }
    }

    Ok(())
}
