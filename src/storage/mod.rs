//! Storage layer for the cashflow scanner
//!
//! JSON record files with atomic writes, plus the audit log. A `Storage`
//! value is built once in `main` and handed to services by reference.

pub mod expenses;
pub mod file_io;
pub mod incomes;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use incomes::IncomeRepository;

use serde::Serialize;

use crate::analytics::RecordSnapshot;
use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::CashflowPaths;
use crate::error::CashflowError;
use crate::models::{Expense, Income};

/// Main storage coordinator that provides access to both repositories
pub struct Storage {
    paths: CashflowPaths,
    pub incomes: IncomeRepository,
    pub expenses: ExpenseRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a storage handle, making sure the data directories exist
    pub fn new(paths: CashflowPaths) -> Result<Self, CashflowError> {
        paths.ensure_directories()?;

        Ok(Self {
            incomes: IncomeRepository::new(paths.incomes_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &CashflowPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), CashflowError> {
        self.incomes.load()?;
        self.expenses.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), CashflowError> {
        self.incomes.save()?;
        self.expenses.save()?;
        Ok(())
    }

    /// Re-read incomes from disk, oldest first
    pub fn load_incomes(&self) -> Result<Vec<Income>, CashflowError> {
        self.incomes.load()?;
        self.incomes.get_all()
    }

    /// Re-read expenses from disk, oldest first
    pub fn load_expenses(&self) -> Result<Vec<Expense>, CashflowError> {
        self.expenses.load()?;
        self.expenses.get_all()
    }

    /// Replace the whole income file with `incomes`
    pub fn save_incomes(&self, incomes: &[Income]) -> Result<(), CashflowError> {
        self.incomes.replace_all(incomes.to_vec())?;
        self.incomes.save()
    }

    /// Replace the whole expense file with `expenses`
    pub fn save_expenses(&self, expenses: &[Expense]) -> Result<(), CashflowError> {
        self.expenses.replace_all(expenses.to_vec())?;
        self.expenses.save()
    }

    /// Consistent view of every record currently in memory
    pub fn snapshot(&self) -> Result<RecordSnapshot, CashflowError> {
        Ok(RecordSnapshot::new(
            self.incomes.get_all()?,
            self.expenses.get_all()?,
        ))
    }

    /// Whether `init` has been run for this data directory
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), CashflowError> {
        self.audit.log(&AuditEntry::create(
            entity_type,
            entity_id,
            entity_name,
            entity,
        ))
    }

    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff: Option<String>,
    ) -> Result<(), CashflowError> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff,
        ))
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), CashflowError> {
        self.audit.log(&AuditEntry::delete(
            entity_type,
            entity_id,
            entity_name,
            entity,
        ))
    }
}
