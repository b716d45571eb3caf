//! Expense repository for JSON storage
//!
//! Manages loading and saving expense records to expenses.json

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::CashflowError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    #[serde(default)]
    expenses: Vec<Expense>,
}

/// Repository for expense records, fixed and variable alike
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load expenses from disk, failing on any record that does not validate
    pub fn load(&self) -> Result<(), CashflowError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        for expense in &file_data.expenses {
            expense.validate().map_err(|e| {
                CashflowError::Storage(format!(
                    "Corrupt expense record {} in {}: {}",
                    expense.id,
                    self.path.display(),
                    e
                ))
            })?;
        }

        let mut data = self
            .data
            .write()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = file_data.expenses;

        tracing::debug!(count = data.len(), path = %self.path.display(), "loaded expenses");
        Ok(())
    }

    /// Save expenses to disk (full replacement)
    pub fn save(&self) -> Result<(), CashflowError> {
        let data = self
            .data
            .read()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut expenses = data.clone();
        sort_chronologically(&mut expenses);

        write_json_atomic(&self.path, &ExpenseData { expenses })
    }

    pub fn replace_all(&self, expenses: Vec<Expense>) -> Result<(), CashflowError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = expenses;
        Ok(())
    }

    /// All expenses, oldest first
    pub fn get_all(&self) -> Result<Vec<Expense>, CashflowError> {
        let data = self
            .data
            .read()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut expenses = data.clone();
        sort_chronologically(&mut expenses);
        Ok(expenses)
    }

    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, CashflowError> {
        let data = self
            .data
            .read()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|e| e.id == id).cloned())
    }

    /// Find the single expense whose ID starts with the given input
    pub fn find_by_prefix(&self, input: &str) -> Result<Expense, CashflowError> {
        let data = self
            .data
            .read()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut matches = data.iter().filter(|e| e.id.matches_prefix(input));
        match (matches.next(), matches.next()) {
            (Some(expense), None) => Ok(expense.clone()),
            (None, _) => Err(CashflowError::expense_not_found(input)),
            (Some(_), Some(_)) => Err(CashflowError::Validation(format!(
                "Expense ID '{}' is ambiguous; use more characters",
                input
            ))),
        }
    }

    pub fn insert(&self, expense: Expense) -> Result<(), CashflowError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        data.push(expense);
        Ok(())
    }

    pub fn update(&self, expense: Expense) -> Result<(), CashflowError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let slot = data
            .iter_mut()
            .find(|e| e.id == expense.id)
            .ok_or_else(|| CashflowError::expense_not_found(expense.id.to_string()))?;
        *slot = expense;
        Ok(())
    }

    pub fn delete(&self, id: ExpenseId) -> Result<Option<Expense>, CashflowError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data
            .iter()
            .position(|e| e.id == id)
            .map(|pos| data.remove(pos)))
    }

    pub fn count(&self) -> Result<usize, CashflowError> {
        let data = self
            .data
            .read()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}

fn sort_chronologically(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| a.date.cmp(&b.date).then(a.created_at.cmp(&b.created_at)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Frequency, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, d).unwrap()
    }

    #[test]
    fn test_save_and_load_both_kinds() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");

        {
            let repo = ExpenseRepository::new(path.clone());
            repo.insert(Expense::variable(date(3), "Food", Money::from_cents(450)))
                .unwrap();
            repo.insert(Expense::fixed(
                date(1),
                "Rent",
                Money::from_cents(90_000),
                Frequency::Monthly,
            ))
            .unwrap();
            repo.save().unwrap();
        }

        let repo = ExpenseRepository::new(path);
        repo.load().unwrap();
        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert!(all[0].is_fixed());
        assert!(all[1].is_variable());
    }

    #[test]
    fn test_variable_with_recurrence_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");

        let mut bad = Expense::variable(date(3), "Food", Money::from_cents(450));
        bad.frequency = Frequency::Weekly;
        write_json_atomic(&path, &ExpenseData { expenses: vec![bad] }).unwrap();

        let repo = ExpenseRepository::new(path);
        assert!(matches!(repo.load(), Err(CashflowError::Storage(_))));
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_unknown_type_token_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let expense = Expense::variable(date(3), "Food", Money::from_cents(450));
        let json = serde_json::to_string(&ExpenseData {
            expenses: vec![expense],
        })
        .unwrap()
        .replace("\"variable\"", "\"sometimes\"");
        std::fs::write(&path, json).unwrap();

        let repo = ExpenseRepository::new(path);
        assert!(matches!(repo.load(), Err(CashflowError::Storage(_))));
    }

    #[test]
    fn test_replace_all() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        repo.insert(Expense::variable(date(3), "Food", Money::from_cents(450)))
            .unwrap();

        repo.replace_all(vec![]).unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }
}
