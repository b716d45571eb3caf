//! Expense CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::{CashflowError, CashflowResult};
use crate::models::{ExpenseKind, Frequency};
use crate::services::{
    parse_amount, parse_date, parse_date_or, parse_label, ExpenseFilter, ExpenseService,
    ExpenseUpdate, NewFixedExpense, NewVariableExpense, Period,
};
use crate::storage::Storage;

use super::{print_json, today};

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a committed, recurring expense (rent, bills, fees)
    AddFixed {
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (Rent, Bills, Groceries, Petrol, School Fees, Other, or any text)
        #[arg(short, long)]
        category: String,
        /// monthly, weekly or one-time
        #[arg(short, long, default_value = "monthly")]
        frequency: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short = 'm', long)]
        description: Option<String>,
    },

    /// Record a discretionary expense (food, shopping, outings)
    AddVariable {
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (Food, Shopping, Entertainment, Health, Other, or any text)
        #[arg(short, long)]
        category: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short = 'm', long)]
        description: Option<String>,
    },

    /// List expenses, newest first
    #[command(alias = "ls")]
    List {
        /// all, last-7-days or last-month
        #[arg(short, long, default_value = "all")]
        period: String,
        /// fixed or variable
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Change fields of an existing expense
    #[command(alias = "edit")]
    Update {
        /// Expense ID or unique prefix
        id: String,
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        /// Fixed expenses only
        #[arg(short, long)]
        frequency: Option<String>,
        #[arg(short = 'm', long)]
        description: Option<String>,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Remove {
        /// Expense ID or unique prefix
        id: String,
    },
}

pub(crate) fn parse_frequency(input: &str) -> CashflowResult<Frequency> {
    input.parse::<Frequency>().map_err(CashflowError::Validation)
}

pub(crate) fn parse_kind(input: &str) -> CashflowResult<ExpenseKind> {
    input.parse::<ExpenseKind>().map_err(CashflowError::Validation)
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> CashflowResult<()> {
    let service = ExpenseService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::AddFixed {
            amount,
            category,
            frequency,
            date,
            description,
        } => {
            let input = NewFixedExpense {
                amount: parse_amount(&amount)?,
                category: parse_label(&category, "Expense category")?,
                frequency: parse_frequency(&frequency)?,
                date: parse_date_or(date.as_deref(), today())?,
                description,
            };

            let expense = service.add_fixed(input)?;
            println!("Added fixed expense:");
            println!("{}", format_expense_details(&expense, currency));
        }

        ExpenseCommands::AddVariable {
            amount,
            category,
            date,
            description,
        } => {
            let input = NewVariableExpense {
                amount: parse_amount(&amount)?,
                category: parse_label(&category, "Expense category")?,
                date: parse_date_or(date.as_deref(), today())?,
                description,
            };

            let expense = service.add_variable(input)?;
            println!("Added variable expense:");
            println!("{}", format_expense_details(&expense, currency));
        }

        ExpenseCommands::List {
            period,
            kind,
            category,
            json,
        } => {
            let filter = ExpenseFilter {
                period: period.parse::<Period>()?,
                kind: kind.as_deref().map(parse_kind).transpose()?,
                category,
            };
            let expenses = service.list(&filter, today())?;

            if json {
                print_json(&expenses)?;
            } else {
                println!(
                    "{}",
                    format_expense_table(&expenses, currency, &settings.date_format)
                );
            }
        }

        ExpenseCommands::Update {
            id,
            amount,
            category,
            date,
            frequency,
            description,
        } => {
            let changes = ExpenseUpdate {
                amount: amount.as_deref().map(parse_amount).transpose()?,
                category: category
                    .as_deref()
                    .map(|c| parse_label(c, "Expense category"))
                    .transpose()?,
                date: date.as_deref().map(parse_date).transpose()?,
                frequency: frequency.as_deref().map(parse_frequency).transpose()?,
                description,
            };

            let expense = service.update(&id, changes)?;
            println!("Updated expense:");
            println!("{}", format_expense_details(&expense, currency));
        }

        ExpenseCommands::Remove { id } => {
            let expense = service.delete(&id)?;
            println!(
                "Deleted {} expense {} ({}, {})",
                expense.kind.to_string().to_lowercase(),
                expense.id,
                expense.category,
                expense.amount.format_with_symbol(currency)
            );
        }
    }

    Ok(())
}
