//! Income repository for JSON storage
//!
//! Manages loading and saving income records to incomes.json

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::CashflowError;
use crate::models::{Income, IncomeId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct IncomeData {
    #[serde(default)]
    incomes: Vec<Income>,
}

/// Repository for income records
pub struct IncomeRepository {
    path: PathBuf,
    data: RwLock<Vec<Income>>,
}

impl IncomeRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load incomes from disk, replacing whatever is in memory
    ///
    /// A record that fails validation means the file was corrupted or edited
    /// by hand; loading stops with an error instead of skipping it.
    pub fn load(&self) -> Result<(), CashflowError> {
        let file_data: IncomeData = read_json(&self.path)?;

        for income in &file_data.incomes {
            income.validate().map_err(|e| {
                CashflowError::Storage(format!(
                    "Corrupt income record {} in {}: {}",
                    income.id,
                    self.path.display(),
                    e
                ))
            })?;
        }

        let mut data = self
            .data
            .write()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = file_data.incomes;

        tracing::debug!(count = data.len(), path = %self.path.display(), "loaded incomes");
        Ok(())
    }

    /// Save incomes to disk (full replacement)
    pub fn save(&self) -> Result<(), CashflowError> {
        let data = self
            .data
            .read()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut incomes = data.clone();
        sort_chronologically(&mut incomes);

        write_json_atomic(&self.path, &IncomeData { incomes })
    }

    /// Replace the in-memory list wholesale
    pub fn replace_all(&self, incomes: Vec<Income>) -> Result<(), CashflowError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = incomes;
        Ok(())
    }

    /// All incomes, oldest first
    pub fn get_all(&self) -> Result<Vec<Income>, CashflowError> {
        let data = self
            .data
            .read()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut incomes = data.clone();
        sort_chronologically(&mut incomes);
        Ok(incomes)
    }

    pub fn get(&self, id: IncomeId) -> Result<Option<Income>, CashflowError> {
        let data = self
            .data
            .read()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|i| i.id == id).cloned())
    }

    /// Find the single income whose ID starts with the given input
    pub fn find_by_prefix(&self, input: &str) -> Result<Income, CashflowError> {
        let data = self
            .data
            .read()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut matches = data.iter().filter(|i| i.id.matches_prefix(input));
        match (matches.next(), matches.next()) {
            (Some(income), None) => Ok(income.clone()),
            (None, _) => Err(CashflowError::income_not_found(input)),
            (Some(_), Some(_)) => Err(CashflowError::Validation(format!(
                "Income ID '{}' is ambiguous; use more characters",
                input
            ))),
        }
    }

    pub fn insert(&self, income: Income) -> Result<(), CashflowError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        data.push(income);
        Ok(())
    }

    /// Replace an existing income with the same ID
    pub fn update(&self, income: Income) -> Result<(), CashflowError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let slot = data
            .iter_mut()
            .find(|i| i.id == income.id)
            .ok_or_else(|| CashflowError::income_not_found(income.id.to_string()))?;
        *slot = income;
        Ok(())
    }

    /// Remove an income, returning it if it existed
    pub fn delete(&self, id: IncomeId) -> Result<Option<Income>, CashflowError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CashflowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data
            .iter()
            .position(|i| i.id == id)
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

fn sort_chronologically(incomes: &mut [Income]) {
    incomes.sort_by(|a, b| a.date.cmp(&b.date).then(a.created_at.cmp(&b.created_at)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, d).unwrap()
    }

    fn create_test_repo() -> (TempDir, IncomeRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = IncomeRepository::new(temp_dir.path().join("incomes.json"));
        (temp_dir, repo)
    }

    #[test]
    fn test_insert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        let income = Income::new(date(1), "Salary", Money::from_cents(500_000));
        let id = income.id;

        repo.insert(income).unwrap();

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.amount.cents(), 500_000);
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("incomes.json");

        {
            let repo = IncomeRepository::new(path.clone());
            repo.insert(Income::new(date(9), "Gift", Money::from_cents(2_000)))
                .unwrap();
            repo.insert(Income::new(date(1), "Salary", Money::from_cents(500_000)))
                .unwrap();
            repo.save().unwrap();
        }

        {
            let repo = IncomeRepository::new(path);
            repo.load().unwrap();
            let all = repo.get_all().unwrap();
            assert_eq!(all.len(), 2);
            assert_eq!(all[0].source, "Salary");
            assert_eq!(all[1].source, "Gift");
        }
    }

    #[test]
    fn test_corrupt_record_fails_loudly() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("incomes.json");

        let mut bad = Income::new(date(1), "Salary", Money::from_cents(100));
        bad.amount = Money::zero();
        write_json_atomic(&path, &IncomeData { incomes: vec![bad] }).unwrap();

        let repo = IncomeRepository::new(path);
        let err = repo.load().unwrap_err();
        assert!(matches!(err, CashflowError::Storage(_)));
        assert!(err.to_string().contains("Corrupt income record"));
    }

    #[test]
    fn test_update_and_delete() {
        let (_temp_dir, repo) = create_test_repo();
        let mut income = Income::new(date(1), "Salary", Money::from_cents(100));
        let id = income.id;
        repo.insert(income.clone()).unwrap();

        income.set_amount(Money::from_cents(900));
        repo.update(income).unwrap();
        assert_eq!(repo.get(id).unwrap().unwrap().amount.cents(), 900);

        let removed = repo.delete(id).unwrap();
        assert!(removed.is_some());
        assert!(repo.get(id).unwrap().is_none());
        assert!(repo.delete(id).unwrap().is_none());
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let (_temp_dir, repo) = create_test_repo();
        let income = Income::new(date(1), "Salary", Money::from_cents(100));
        assert!(repo.update(income).unwrap_err().is_not_found());
    }

    #[test]
    fn test_find_by_prefix() {
        let (_temp_dir, repo) = create_test_repo();
        let income = Income::new(date(1), "Salary", Money::from_cents(100));
        let short = income.id.to_string();
        repo.insert(income.clone()).unwrap();

        assert_eq!(repo.find_by_prefix(&short).unwrap().id, income.id);
        assert!(repo.find_by_prefix("inc-zzzz").unwrap_err().is_not_found());
    }
}
