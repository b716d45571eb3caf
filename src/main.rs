use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cashflow_scanner::cli::{
    handle_analyze_command, handle_audit_command, handle_config_command, handle_expense_command,
    handle_export_command, handle_income_command, handle_report_command, AnalyzeArgs, AuditArgs,
    ConfigArgs, ExpenseCommands, ExportArgs, IncomeCommands, ReportCommands,
};
use cashflow_scanner::config::{CashflowPaths, Settings};
use cashflow_scanner::models::{
    DEFAULT_FIXED_CATEGORIES, DEFAULT_INCOME_SOURCES, DEFAULT_VARIABLE_CATEGORIES,
};
use cashflow_scanner::storage::Storage;

#[derive(Parser)]
#[command(
    name = "cashflow",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based cashflow stress scanner",
    long_about = "Cashflow Scanner tracks income and fixed and variable expenses, \
                  then tells you how many days your safe balance will last at the \
                  current spending pace and how stressed your cashflow is."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and default settings
    Init,

    /// Show or change settings
    Config(ConfigArgs),

    /// Income management commands
    #[command(subcommand, alias = "in")]
    Income(IncomeCommands),

    /// Expense management commands
    #[command(subcommand, alias = "ex")]
    Expense(ExpenseCommands),

    /// Safe balance, burn rate, runway and stress level
    #[command(alias = "summary")]
    Analyze(AnalyzeArgs),

    /// Spending reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export records and the current summary
    Export(ExportArgs),

    /// Show recent changes from the audit log
    Audit(AuditArgs),
}

fn init_tracing(settings: &Settings) {
    let level = &settings.log_level;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("cashflow_scanner={level},cashflow={level}"))
    });

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

/// Open the store and load every record, failing on corrupt files
fn open_storage(paths: &CashflowPaths) -> Result<Storage> {
    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;
    Ok(storage)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = CashflowPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings);

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing Cashflow Scanner at: {}", paths.base_dir().display());
            let storage = open_storage(&paths)?;
            storage.save_all()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Suggested names (any text works):");
            println!("  Income sources:      {}", DEFAULT_INCOME_SOURCES.join(", "));
            println!("  Fixed categories:    {}", DEFAULT_FIXED_CATEGORIES.join(", "));
            println!("  Variable categories: {}", DEFAULT_VARIABLE_CATEGORIES.join(", "));
            println!();
            println!("Run 'cashflow income add 50000 --source Salary' to record income.");
        }
        Some(Commands::Config(args)) => handle_config_command(&paths, &settings, args)?,
        Some(Commands::Income(cmd)) => {
            handle_income_command(&open_storage(&paths)?, &settings, cmd)?
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&open_storage(&paths)?, &settings, cmd)?
        }
        Some(Commands::Analyze(args)) => {
            handle_analyze_command(&open_storage(&paths)?, &settings, args)?
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&open_storage(&paths)?, &settings, cmd)?
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&open_storage(&paths)?, &settings, args)?
        }
        Some(Commands::Audit(args)) => handle_audit_command(&open_storage(&paths)?, args)?,
        None => {
            println!("Cashflow Scanner - how long will your safe balance last?");
            println!();
            println!("Run 'cashflow --help' for usage information.");
            println!("Run 'cashflow init' to get started.");
        }
    }

    Ok(())
}
