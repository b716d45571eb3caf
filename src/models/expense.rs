//! Expense record model
//!
//! Expenses are either fixed (committed, recurring) or variable
//! (discretionary). Fixed expenses reduce the safe balance; variable ones
//! drive the daily burn rate.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::ExpenseId;
use super::money::Money;

/// Suggested fixed expense categories
pub const DEFAULT_FIXED_CATEGORIES: &[&str] =
    &["Rent", "Bills", "Groceries", "Petrol", "School Fees", "Other"];

/// Suggested variable expense categories
pub const DEFAULT_VARIABLE_CATEGORIES: &[&str] =
    &["Food", "Shopping", "Entertainment", "Health", "Other"];

/// Whether an expense is committed or discretionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseKind {
    Fixed,
    Variable,
}

impl fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => write!(f, "Fixed"),
            Self::Variable => write!(f, "Variable"),
        }
    }
}

impl FromStr for ExpenseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "variable" => Ok(Self::Variable),
            other => Err(format!("Unknown expense type: {}", other)),
        }
    }
}

/// How often a fixed expense recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    #[default]
    Monthly,
    Weekly,
    OneTime,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Weekly => write!(f, "weekly"),
            Self::OneTime => write!(f, "one-time"),
        }
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "monthly" => Ok(Self::Monthly),
            "weekly" => Ok(Self::Weekly),
            "one-time" | "onetime" | "once" => Ok(Self::OneTime),
            other => Err(format!("Unknown frequency: {}", other)),
        }
    }
}

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount,
    EmptyCategory,
    VariableMustBeOneTime(Frequency),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Expense amount must be greater than zero"),
            Self::EmptyCategory => write!(f, "Expense category cannot be empty"),
            Self::VariableMustBeOneTime(freq) => write!(
                f,
                "Variable expenses are always one-time, got frequency '{}'",
                freq
            ),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// A single expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: ExpenseKind,
    pub category: String,
    pub amount: Money,
    #[serde(default)]
    pub description: String,
    pub frequency: Frequency,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a fixed expense with the given recurrence
    pub fn fixed(
        date: NaiveDate,
        category: impl Into<String>,
        amount: Money,
        frequency: Frequency,
    ) -> Self {
        Self::build(date, ExpenseKind::Fixed, category.into(), amount, frequency)
    }

    /// Create a variable expense; frequency is always one-time
    pub fn variable(date: NaiveDate, category: impl Into<String>, amount: Money) -> Self {
        Self::build(
            date,
            ExpenseKind::Variable,
            category.into(),
            amount,
            Frequency::OneTime,
        )
    }

    fn build(
        date: NaiveDate,
        kind: ExpenseKind,
        category: String,
        amount: Money,
        frequency: Frequency,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            date,
            kind,
            category: category.trim().to_string(),
            amount,
            description: String::new(),
            frequency,
            created_at: now,
            updated_at: now,
        }
    }

    /// Builder-style description setter
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn is_fixed(&self) -> bool {
        self.kind == ExpenseKind::Fixed
    }

    pub fn is_variable(&self) -> bool {
        self.kind == ExpenseKind::Variable
    }

    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
        self.touch();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into().trim().to_string();
        self.touch();
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
        self.touch();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.touch();
    }

    /// Change the recurrence; ignored for variable expenses
    pub fn set_frequency(&mut self, frequency: Frequency) {
        if self.is_fixed() {
            self.frequency = frequency;
            self.touch();
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }
        if self.category.is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }
        if self.is_variable() && self.frequency != Frequency::OneTime {
            return Err(ExpenseValidationError::VariableMustBeOneTime(self.frequency));
        }
        Ok(())
    }
}
