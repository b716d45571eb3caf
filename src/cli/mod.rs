//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod analyze;
pub mod audit;
pub mod config;
pub mod expense;
pub mod export;
pub mod income;
pub mod report;

use std::io::IsTerminal;

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::error::CashflowResult;

pub use analyze::{handle_analyze_command, AnalyzeArgs};
pub use audit::{handle_audit_command, AuditArgs};
pub use config::{handle_config_command, ConfigArgs};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs};
pub use income::{handle_income_command, IncomeCommands};
pub use report::{handle_report_command, ReportCommands};

/// The local calendar date
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// ANSI colors only on a terminal, and never when NO_COLOR is set
pub(crate) fn use_color(no_color: bool) -> bool {
    !no_color && std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> CashflowResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
