//! Category Breakdown Report
//!
//! Expense totals per category with each category's share of the total.

use std::collections::HashMap;

use serde::Serialize;

use crate::display::{format_bar, format_percentage};
use crate::models::{Expense, ExpenseKind, Money};

const BAR_WIDTH: usize = 24;

/// Spending in one category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub kind: ExpenseKind,
    pub total: Money,
    pub count: usize,
    /// Share of the report total, 0-100
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    /// Restricted to one kind, or both when `None`
    pub kind: Option<ExpenseKind>,
    pub categories: Vec<CategoryTotal>,
    pub total: Money,
}

impl CategoryReport {
    /// Group expenses by kind and category, largest total first
    ///
    /// Categories match case-insensitively; the first spelling seen is kept.
    pub fn generate(expenses: &[Expense], kind: Option<ExpenseKind>) -> Self {
        let mut groups: HashMap<(ExpenseKind, String), CategoryTotal> = HashMap::new();

        for expense in expenses
            .iter()
            .filter(|e| kind.map_or(true, |k| e.kind == k))
        {
            let key = (expense.kind, expense.category.to_lowercase());
            let entry = groups.entry(key).or_insert_with(|| CategoryTotal {
                category: expense.category.clone(),
                kind: expense.kind,
                total: Money::zero(),
                count: 0,
                percentage: 0.0,
            });
            entry.total += expense.amount;
            entry.count += 1;
        }

        let total: Money = groups.values().map(|c| c.total).sum();

        let mut categories: Vec<CategoryTotal> = groups.into_values().collect();
        for category in &mut categories {
            category.percentage = if total.is_zero() {
                0.0
            } else {
                category.total.cents() as f64 * 100.0 / total.cents() as f64
            };
        }
        categories.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.category.cmp(&b.category))
        });

        Self {
            kind,
            categories,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        if self.is_empty() {
            return "No expenses recorded.".to_string();
        }

        let title = match self.kind {
            Some(kind) => format!("{} Expenses by Category", kind),
            None => "Expenses by Category".to_string(),
        };

        let max = self
            .categories
            .first()
            .map(|c| c.total.cents() as f64)
            .unwrap_or(0.0);

        let mut output = String::new();
        output.push_str(&title);
        output.push('\n');
        output.push_str(&"=".repeat(72));
        output.push('\n');

        for category in &self.categories {
            output.push_str(&format!(
                "{:<16} {:<8} {:>14} {:>6}  {}\n",
                category.category,
                category.kind.to_string(),
                category.total.format_with_symbol(currency),
                format_percentage(category.percentage),
                format_bar(category.total.cents() as f64, max, BAR_WIDTH)
            ));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<25} {:>14}\n",
            "TOTAL",
            self.total.format_with_symbol(currency)
        ));

        output
    }
}
