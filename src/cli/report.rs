//! CLI commands for reports

use clap::Subcommand;

use crate::config::Settings;
use crate::error::CashflowResult;
use crate::reports::{CategoryReport, DailySpendReport};
use crate::services::{ExpenseFilter, ExpenseService, Period};
use crate::storage::Storage;

use super::expense::parse_kind;
use super::{print_json, today};

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Spending totals per category, largest first
    #[command(alias = "spending")]
    Categories {
        /// fixed or variable; both when omitted
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// all, last-7-days or last-month
        #[arg(short, long, default_value = "all")]
        period: String,
        #[arg(long)]
        json: bool,
    },

    /// Variable spending per day
    Daily {
        /// all, last-7-days or last-month
        #[arg(short, long, default_value = "last-month")]
        period: String,
        #[arg(long)]
        json: bool,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> CashflowResult<()> {
    let service = ExpenseService::new(storage);
    let currency = settings.currency_symbol.as_str();
    let today = today();

    match cmd {
        ReportCommands::Categories { kind, period, json } => {
            let kind = kind.as_deref().map(parse_kind).transpose()?;
            let filter = ExpenseFilter {
                period: period.parse::<Period>()?,
                kind,
                category: None,
            };
            let expenses = service.list(&filter, today)?;
            let report = CategoryReport::generate(&expenses, kind);

            if json {
                print_json(&report)?;
            } else {
                println!("{}", report.format_terminal(currency));
            }
        }

        ReportCommands::Daily { period, json } => {
            let period = period.parse::<Period>()?;
            let expenses = storage.load_expenses()?;
            let report = DailySpendReport::generate(&expenses, period.start(today));

            if json {
                print_json(&report)?;
            } else {
                println!(
                    "{}",
                    report.format_terminal(currency, &settings.date_format)
                );
            }
        }
    }

    Ok(())
}
