//! Income service
//!
//! Adds, edits, removes and lists income records. Every mutation is
//! validated first, written through to disk, then audited.

use chrono::NaiveDate;

use crate::audit::{diff_records, EntityType};
use crate::error::{CashflowError, CashflowResult};
use crate::models::{Income, Money};
use crate::storage::Storage;

use super::input::Period;

/// Service for income management
pub struct IncomeService<'a> {
    storage: &'a Storage,
}

/// Input for recording a new income
#[derive(Debug, Clone)]
pub struct NewIncome {
    pub date: NaiveDate,
    pub source: String,
    pub amount: Money,
    pub description: Option<String>,
}

/// Fields to change on an existing income; `None` leaves a field alone
#[derive(Debug, Clone, Default)]
pub struct IncomeUpdate {
    pub date: Option<NaiveDate>,
    pub source: Option<String>,
    pub amount: Option<Money>,
    pub description: Option<String>,
}

impl IncomeUpdate {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.source.is_none()
            && self.amount.is_none()
            && self.description.is_none()
    }
}

/// Options for filtering incomes
#[derive(Debug, Clone, Default)]
pub struct IncomeFilter {
    pub period: Period,
    /// Case-insensitive source match
    pub source: Option<String>,
}

impl IncomeFilter {
    pub fn matches(&self, income: &Income, today: NaiveDate) -> bool {
        self.period.contains(income.date, today)
            && self
                .source
                .as_deref()
                .map_or(true, |s| income.source.eq_ignore_ascii_case(s.trim()))
    }
}

impl<'a> IncomeService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new income
    pub fn add(&self, input: NewIncome) -> CashflowResult<Income> {
        let mut income = Income::new(input.date, input.source, input.amount);
        if let Some(description) = input.description {
            income = income.with_description(description.trim());
        }

        income
            .validate()
            .map_err(|e| CashflowError::Validation(e.to_string()))?;

        self.storage.incomes.insert(income.clone())?;
        self.storage.incomes.save()?;

        self.storage.log_create(
            EntityType::Income,
            income.id.to_string(),
            Some(income.source.clone()),
            &income,
        )?;

        tracing::info!(id = %income.id, amount = income.amount.cents(), "income added");
        Ok(income)
    }

    /// Resolve an ID given in full or as a unique prefix
    pub fn find(&self, id: &str) -> CashflowResult<Income> {
        self.storage.incomes.find_by_prefix(id)
    }

    /// Apply an update to an existing income
    pub fn update(&self, id: &str, changes: IncomeUpdate) -> CashflowResult<Income> {
        if changes.is_empty() {
            return Err(CashflowError::Validation("Nothing to update".into()));
        }

        let before = self.find(id)?;
        let mut income = before.clone();

        if let Some(date) = changes.date {
            income.set_date(date);
        }
        if let Some(source) = changes.source {
            income.set_source(source);
        }
        if let Some(amount) = changes.amount {
            income.set_amount(amount);
        }
        if let Some(description) = changes.description {
            income.set_description(description.trim());
        }

        income
            .validate()
            .map_err(|e| CashflowError::Validation(e.to_string()))?;

        self.storage.incomes.update(income.clone())?;
        self.storage.incomes.save()?;

        self.storage.log_update(
            EntityType::Income,
            income.id.to_string(),
            Some(income.source.clone()),
            &before,
            &income,
            diff_records(&before, &income),
        )?;

        tracing::info!(id = %income.id, "income updated");
        Ok(income)
    }

    /// Remove an income, returning the deleted record
    pub fn delete(&self, id: &str) -> CashflowResult<Income> {
        let income = self.find(id)?;

        self.storage
            .incomes
            .delete(income.id)?
            .ok_or_else(|| CashflowError::income_not_found(id))?;
        self.storage.incomes.save()?;

        self.storage.log_delete(
            EntityType::Income,
            income.id.to_string(),
            Some(income.source.clone()),
            &income,
        )?;

        tracing::info!(id = %income.id, "income deleted");
        Ok(income)
    }

    /// Incomes matching the filter, newest first
    pub fn list(&self, filter: &IncomeFilter, today: NaiveDate) -> CashflowResult<Vec<Income>> {
        let mut incomes: Vec<Income> = self
            .storage
            .incomes
            .get_all()?
            .into_iter()
            .filter(|i| filter.matches(i, today))
            .collect();
        incomes.reverse();
        Ok(incomes)
    }

    /// Sum of the given incomes
    pub fn total(incomes: &[Income]) -> Money {
        incomes.iter().map(|i| i.amount).sum()
    }
}
