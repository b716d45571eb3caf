//! Income CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_income_details, format_income_table};
use crate::error::CashflowResult;
use crate::services::{
    parse_amount, parse_date, parse_date_or, parse_label, IncomeFilter, IncomeService,
    IncomeUpdate, NewIncome, Period,
};
use crate::storage::Storage;

use super::{print_json, today};

/// Income subcommands
#[derive(Subcommand, Debug)]
pub enum IncomeCommands {
    /// Record an income
    Add {
        /// Amount, e.g. "50000" or "1,250.50"
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Source (Salary, Freelance, Part-time, Gift, Scholarship, Other, or any text)
        #[arg(short, long)]
        source: String,
        /// Date received (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-form note
        #[arg(short = 'm', long)]
        description: Option<String>,
    },

    /// List incomes, newest first
    #[command(alias = "ls")]
    List {
        /// all, last-7-days or last-month
        #[arg(short, long, default_value = "all")]
        period: String,
        /// Only incomes from this source
        #[arg(short, long)]
        source: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Change fields of an existing income
    #[command(alias = "edit")]
    Update {
        /// Income ID or unique prefix
        id: String,
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        #[arg(short, long)]
        source: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short = 'm', long)]
        description: Option<String>,
    },

    /// Delete an income
    #[command(alias = "rm")]
    Remove {
        /// Income ID or unique prefix
        id: String,
    },
}

/// Handle an income command
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    cmd: IncomeCommands,
) -> CashflowResult<()> {
    let service = IncomeService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        IncomeCommands::Add {
            amount,
            source,
            date,
            description,
        } => {
            let input = NewIncome {
                amount: parse_amount(&amount)?,
                source: parse_label(&source, "Income source")?,
                date: parse_date_or(date.as_deref(), today())?,
                description,
            };

            let income = service.add(input)?;
            println!("Added income:");
            println!("{}", format_income_details(&income, currency));
        }

        IncomeCommands::List {
            period,
            source,
            json,
        } => {
            let filter = IncomeFilter {
                period: period.parse::<Period>()?,
                source,
            };
            let incomes = service.list(&filter, today())?;

            if json {
                print_json(&incomes)?;
            } else {
                println!(
                    "{}",
                    format_income_table(&incomes, currency, &settings.date_format)
                );
            }
        }

        IncomeCommands::Update {
            id,
            amount,
            source,
            date,
            description,
        } => {
            let changes = IncomeUpdate {
                amount: amount.as_deref().map(parse_amount).transpose()?,
                source: source
                    .as_deref()
                    .map(|s| parse_label(s, "Income source"))
                    .transpose()?,
                date: date.as_deref().map(parse_date).transpose()?,
                description,
            };

            let income = service.update(&id, changes)?;
            println!("Updated income:");
            println!("{}", format_income_details(&income, currency));
        }

        IncomeCommands::Remove { id } => {
            let income = service.delete(&id)?;
            println!(
                "Deleted income {} ({}, {})",
                income.id,
                income.source,
                income.amount.format_with_symbol(currency)
            );
        }
    }

    Ok(())
}
