//! Income and expense tables
//!
//! Rendered with `tabled`; amounts are right-aligned and a total line
//! follows the table.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{Expense, Income, Money};

use super::format::truncate;

const DESCRIPTION_WIDTH: usize = 30;

#[derive(Tabled)]
struct IncomeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Frequency")]
    frequency: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Table of incomes in the order given, followed by their total
pub fn format_income_table(incomes: &[Income], currency: &str, date_format: &str) -> String {
    if incomes.is_empty() {
        return "No incomes found.".to_string();
    }

    let rows = incomes.iter().map(|income| IncomeRow {
        id: income.id.to_string(),
        date: income.date.format(date_format).to_string(),
        source: income.source.clone(),
        amount: income.amount.format_with_symbol(currency),
        description: truncate(&income.description, DESCRIPTION_WIDTH),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::single(3), Alignment::right());

    let total: Money = incomes.iter().map(|i| i.amount).sum();
    format!(
        "{}\n{} record(s), total {}",
        table,
        incomes.len(),
        total.format_with_symbol(currency)
    )
}

/// Table of expenses in the order given, followed by their total
pub fn format_expense_table(expenses: &[Expense], currency: &str, date_format: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let rows = expenses.iter().map(|expense| ExpenseRow {
        id: expense.id.to_string(),
        date: expense.date.format(date_format).to_string(),
        kind: expense.kind.to_string(),
        category: expense.category.clone(),
        frequency: expense.frequency.to_string(),
        amount: expense.amount.format_with_symbol(currency),
        description: truncate(&expense.description, DESCRIPTION_WIDTH),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::single(5), Alignment::right());

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    format!(
        "{}\n{} record(s), total {}",
        table,
        expenses.len(),
        total.format_with_symbol(currency)
    )
}

/// Multi-line detail view of a single income
pub fn format_income_details(income: &Income, currency: &str) -> String {
    let mut output = format!(
        "  ID:          {}\n  Date:        {}\n  Source:      {}\n  Amount:      {}",
        income.id,
        income.date,
        income.source,
        income.amount.format_with_symbol(currency)
    );
    if !income.description.is_empty() {
        output.push_str(&format!("\n  Description: {}", income.description));
    }
    output
}

/// Multi-line detail view of a single expense
pub fn format_expense_details(expense: &Expense, currency: &str) -> String {
    let mut output = format!(
        "  ID:          {}\n  Date:        {}\n  Type:        {}\n  Category:    {}\n  Frequency:   {}\n  Amount:      {}",
        expense.id,
        expense.date,
        expense.kind,
        expense.category,
        expense.frequency,
        expense.amount.format_with_symbol(currency)
    );
    if !expense.description.is_empty() {
        output.push_str(&format!("\n  Description: {}", expense.description));
    }
    output
}
