//! Daily Spend Report
//!
//! Variable spend per calendar day, the raw material of the burn rate.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::display::format_bar;
use crate::models::{Expense, Money};

const BAR_WIDTH: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySpend {
    pub date: NaiveDate,
    pub total: Money,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailySpendReport {
    /// Days with variable spend, oldest first
    pub days: Vec<DailySpend>,
    pub total: Money,
}

impl DailySpendReport {
    /// Total variable expenses per date; days without spend are omitted
    pub fn generate(expenses: &[Expense], since: Option<NaiveDate>) -> Self {
        let mut by_day: BTreeMap<NaiveDate, (Money, usize)> = BTreeMap::new();

        for expense in expenses
            .iter()
            .filter(|e| e.is_variable())
            .filter(|e| since.map_or(true, |start| e.date >= start))
        {
            let entry = by_day.entry(expense.date).or_insert((Money::zero(), 0));
            entry.0 += expense.amount;
            entry.1 += 1;
        }

        let days: Vec<DailySpend> = by_day
            .into_iter()
            .map(|(date, (total, count))| DailySpend { date, total, count })
            .collect();
        let total = days.iter().map(|d| d.total).sum();

        Self { days, total }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Highest single-day spend
    pub fn peak(&self) -> Option<&DailySpend> {
        self.days.iter().max_by_key(|d| d.total)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str, date_format: &str) -> String {
        if self.is_empty() {
            return "No variable expenses recorded.".to_string();
        }

        let max = self
            .peak()
            .map(|d| d.total.cents() as f64)
            .unwrap_or(0.0);

        let mut output = String::from("Daily Variable Spend\n");
        output.push_str(&"=".repeat(64));
        output.push('\n');

        for day in &self.days {
            output.push_str(&format!(
                "{:<12} {:>14}  {}\n",
                day.date.format(date_format).to_string(),
                day.total.format_with_symbol(currency),
                format_bar(day.total.cents() as f64, max, BAR_WIDTH)
            ));
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<12} {:>14}\n",
            "TOTAL",
            self.total.format_with_symbol(currency)
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Frequency;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn sample() -> Vec<Expense> {
        vec![
            Expense::variable(date(5), "Food", Money::from_cents(300)),
            Expense::fixed(date(1), "Rent", Money::from_cents(90_000), Frequency::Monthly),
            Expense::variable(date(2), "Food", Money::from_cents(100)),
            Expense::variable(date(5), "Shopping", Money::from_cents(700)),
        ]
    }

    #[test]
    fn test_variable_only_ascending() {
        let report = DailySpendReport::generate(&sample(), None);

        let dates: Vec<_> = report.days.iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![date(2), date(5)]);
        assert_eq!(report.days[1].total.cents(), 1_000);
        assert_eq!(report.days[1].count, 2);
        assert_eq!(report.total.cents(), 1_100);
        assert_eq!(report.peak().unwrap().date, date(5));
    }

    #[test]
    fn test_since_filter() {
        let report = DailySpendReport::generate(&sample(), Some(date(3)));
        assert_eq!(report.days.len(), 1);
        assert_eq!(report.total.cents(), 1_000);
    }

    #[test]
    fn test_terminal_format() {
        let report = DailySpendReport::generate(&sample(), None);
        let output = report.format_terminal("$", "%d/%m");
        assert!(output.contains("05/06"));
        assert!(output.contains("$10.00"));
        assert!(output.contains("█"));

        let empty = DailySpendReport::generate(&[], None);
        assert_eq!(
            empty.format_terminal("$", "%Y-%m-%d"),
            "No variable expenses recorded."
        );
    }
}
