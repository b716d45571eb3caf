//! Core data models for the cashflow scanner
//!
//! Income and expense records plus the money and ID types they are built on.

pub mod expense;
pub mod ids;
pub mod income;
pub mod money;

pub use expense::{
    Expense, ExpenseKind, ExpenseValidationError, Frequency, DEFAULT_FIXED_CATEGORIES,
    DEFAULT_VARIABLE_CATEGORIES,
};
pub use ids::{ExpenseId, IncomeId};
pub use income::{Income, IncomeValidationError, DEFAULT_INCOME_SOURCES};
pub use money::{Money, MoneyParseError};
