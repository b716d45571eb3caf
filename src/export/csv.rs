//! CSV export of income and expense records
//!
//! Amounts are written in major units with two decimals; IDs are full UUIDs
//! so rows can be matched back to the JSON store.

use std::io::Write;

use crate::error::{CashflowError, CashflowResult};
use crate::models::{Expense, Income};

fn export_error(e: csv::Error) -> CashflowError {
    CashflowError::Export(e.to_string())
}

/// Write incomes as CSV, one row per record
pub fn export_incomes_csv<W: Write>(incomes: &[Income], writer: W) -> CashflowResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["id", "date", "source", "amount", "description"])
        .map_err(export_error)?;

    for income in incomes {
        wtr.write_record([
            income.id.as_uuid().to_string(),
            income.date.to_string(),
            income.source.clone(),
            income.amount.to_string(),
            income.description.clone(),
        ])
        .map_err(export_error)?;
    }

    wtr.flush()
        .map_err(|e| CashflowError::Export(e.to_string()))?;
    Ok(())
}

/// Write expenses as CSV, one row per record
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> CashflowResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([
        "id",
        "date",
        "type",
        "category",
        "frequency",
        "amount",
        "description",
    ])
    .map_err(export_error)?;

    for expense in expenses {
        wtr.write_record([
            expense.id.as_uuid().to_string(),
            expense.date.to_string(),
            expense.kind.to_string().to_lowercase(),
            expense.category.clone(),
            expense.frequency.to_string(),
            expense.amount.to_string(),
            expense.description.clone(),
        ])
        .map_err(export_error)?;
    }

    wtr.flush()
        .map_err(|e| CashflowError::Export(e.to_string()))?;
    Ok(())
}
