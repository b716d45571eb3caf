//! Service layer for the cashflow scanner
//!
//! Business logic on top of the storage layer: validation, write-through
//! persistence, auditing and filtering.

pub mod analytics;
pub mod expense;
pub mod income;
pub mod input;

pub use analytics::{AnalysisOverrides, AnalyticsService};
pub use expense::{
    ExpenseFilter, ExpenseService, ExpenseUpdate, NewFixedExpense, NewVariableExpense,
};
pub use income::{IncomeFilter, IncomeService, IncomeUpdate, NewIncome};
pub use input::{parse_amount, parse_date, parse_date_or, parse_label, Period};
