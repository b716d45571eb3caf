//! Daily burn rate: discretionary spend spread over the rest of the month

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::balance::total_by_kind;
use crate::models::{Expense, ExpenseKind, Money};

/// Variable spend and how it spreads over the remaining days
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyBurn {
    pub total_variable_expenses: Money,
    /// Days left in the month, today included
    pub remaining_days_in_month: i64,
    /// Minor units per day, never negative
    pub daily_burn_rate: f64,
}

/// Number of calendar days in the given month
pub fn days_in_month(year: i32, month: u32) -> i64 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(start), Some(end)) => (end - start).num_days(),
        _ => 0,
    }
}

/// Days remaining in today's month, counting today
pub fn remaining_days_in_month(today: NaiveDate) -> i64 {
    days_in_month(today.year(), today.month()) - i64::from(today.day()) + 1
}

/// Spread a variable total over the remaining days
///
/// With no remaining days the whole total is due now.
pub fn burn_rate(total_variable: Money, remaining_days: i64) -> f64 {
    let total = total_variable.cents().max(0) as f64;
    if remaining_days <= 0 {
        return total;
    }
    total / remaining_days as f64
}

/// Compute the daily burn rate as of `today`
///
/// Every stored variable expense counts toward this month's burn, whatever
/// its date.
pub fn calculate_daily_burn(expenses: &[Expense], today: NaiveDate) -> DailyBurn {
    let total_variable_expenses = total_by_kind(expenses, ExpenseKind::Variable);
    let remaining = remaining_days_in_month(today);

    DailyBurn {
        total_variable_expenses,
        remaining_days_in_month: remaining,
        daily_burn_rate: burn_rate(total_variable_expenses, remaining),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Frequency;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 12), 31);
        assert_eq!(days_in_month(2025, 13), 0);
    }

    #[test]
    fn test_remaining_days_counts_today() {
        assert_eq!(remaining_days_in_month(date(2025, 6, 1)), 30);
        assert_eq!(remaining_days_in_month(date(2025, 6, 21)), 10);
        assert_eq!(remaining_days_in_month(date(2025, 6, 30)), 1);
        assert_eq!(remaining_days_in_month(date(2024, 2, 29)), 1);
    }

    #[test]
    fn test_burn_over_remaining_days() {
        let today = date(2025, 6, 21);
        let expenses = vec![
            Expense::variable(today, "Food", Money::from_cents(10_000)),
            Expense::variable(today, "Shopping", Money::from_cents(5_000)),
            Expense::fixed(today, "Rent", Money::from_cents(99_999), Frequency::Monthly),
        ];

        let burn = calculate_daily_burn(&expenses, today);
        assert_eq!(burn.total_variable_expenses.cents(), 15_000);
        assert_eq!(burn.remaining_days_in_month, 10);
        assert_eq!(burn.daily_burn_rate, 1_500.0);
    }

    #[test]
    fn test_no_variable_expenses_means_zero_burn() {
        let today = date(2025, 6, 21);
        let expenses = vec![Expense::fixed(
            today,
            "Rent",
            Money::from_cents(1_000),
            Frequency::Monthly,
        )];

        let burn = calculate_daily_burn(&expenses, today);
        assert_eq!(burn.daily_burn_rate, 0.0);
    }

    #[test]
    fn test_includes_variable_expenses_from_other_months() {
        let today = date(2025, 6, 21);
        let expenses = vec![
            Expense::variable(date(2025, 4, 2), "Food", Money::from_cents(5_000)),
            Expense::variable(today, "Food", Money::from_cents(5_000)),
        ];

        let burn = calculate_daily_burn(&expenses, today);
        assert_eq!(burn.total_variable_expenses.cents(), 10_000);
    }

    #[test]
    fn test_no_remaining_days_charges_everything_now() {
        assert_eq!(burn_rate(Money::from_cents(4_200), 0), 4_200.0);
        assert_eq!(burn_rate(Money::from_cents(4_200), -3), 4_200.0);
        assert_eq!(burn_rate(Money::zero(), 0), 0.0);
    }
}
