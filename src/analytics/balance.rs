//! Safe balance: income minus committed (fixed) expenses

use serde::Serialize;

use crate::models::{Expense, ExpenseKind, Income, Money};

/// Totals behind the safe balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SafeBalance {
    pub total_income: Money,
    pub total_fixed_expenses: Money,
    /// May be negative: income does not even cover fixed costs
    pub safe_balance: Money,
}

/// Sum of all expenses of one kind
pub fn total_by_kind(expenses: &[Expense], kind: ExpenseKind) -> Money {
    expenses
        .iter()
        .filter(|e| e.kind == kind)
        .map(|e| e.amount)
        .sum()
}

/// Compute the safe balance over the full record set
///
/// Variable expenses are deliberately left out; they are accounted for by
/// the daily burn rate.
pub fn calculate_safe_balance(incomes: &[Income], expenses: &[Expense]) -> SafeBalance {
    let total_income: Money = incomes.iter().map(|i| i.amount).sum();
    let total_fixed_expenses = total_by_kind(expenses, ExpenseKind::Fixed);

    SafeBalance {
        total_income,
        total_fixed_expenses,
        safe_balance: total_income - total_fixed_expenses,
    }
}
