//! Income record model
//!
//! One entry per payment received: when it arrived, where it came from and
//! how much.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::IncomeId;
use super::money::Money;

/// Suggested income sources; any non-empty text is accepted
pub const DEFAULT_INCOME_SOURCES: &[&str] = &[
    "Salary",
    "Freelance",
    "Part-time",
    "Gift",
    "Scholarship",
    "Other",
];

/// Validation errors for income records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    NonPositiveAmount,
    EmptySource,
}

impl std::fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Income amount must be greater than zero"),
            Self::EmptySource => write!(f, "Income source cannot be empty"),
        }
    }
}

impl std::error::Error for IncomeValidationError {}

/// A single income entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub id: IncomeId,
    pub date: NaiveDate,
    pub source: String,
    pub amount: Money,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Income {
    /// Create a new income record
    pub fn new(date: NaiveDate, source: impl Into<String>, amount: Money) -> Self {
        let now = Utc::now();
        Self {
            id: IncomeId::new(),
            date,
            source: source.into().trim().to_string(),
            amount,
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Builder-style description setter
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
        self.touch();
    }

    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into().trim().to_string();
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

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if !self.amount.is_positive() {
            return Err(IncomeValidationError::NonPositiveAmount);
        }
        if self.source.is_empty() {
            return Err(IncomeValidationError::EmptySource);
        }
        Ok(())
    }
}
