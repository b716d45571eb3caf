//! Expense service
//!
//! Manages fixed and variable expenses. Variable expenses are always
//! one-time; asking for any other recurrence on one is a validation error.

use chrono::NaiveDate;

use crate::audit::{diff_records, EntityType};
use crate::error::{CashflowError, CashflowResult};
use crate::models::{Expense, ExpenseKind, Frequency, Money};
use crate::storage::Storage;

use super::input::Period;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

/// Input for recording a committed, recurring expense
#[derive(Debug, Clone)]
pub struct NewFixedExpense {
    pub date: NaiveDate,
    pub category: String,
    pub amount: Money,
    pub frequency: Frequency,
    pub description: Option<String>,
}

/// Input for recording a discretionary expense
#[derive(Debug, Clone)]
pub struct NewVariableExpense {
    pub date: NaiveDate,
    pub category: String,
    pub amount: Money,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub amount: Option<Money>,
    pub frequency: Option<Frequency>,
    pub description: Option<String>,
}

impl ExpenseUpdate {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.category.is_none()
            && self.amount.is_none()
            && self.frequency.is_none()
            && self.description.is_none()
    }
}

/// Options for filtering expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    pub period: Period,
    pub kind: Option<ExpenseKind>,
    /// Case-insensitive category match
    pub category: Option<String>,
}

impl ExpenseFilter {
    pub fn matches(&self, expense: &Expense, today: NaiveDate) -> bool {
        self.period.contains(expense.date, today)
            && self.kind.map_or(true, |k| expense.kind == k)
            && self
                .category
                .as_deref()
                .map_or(true, |c| expense.category.eq_ignore_ascii_case(c.trim()))
    }
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn add_fixed(&self, input: NewFixedExpense) -> CashflowResult<Expense> {
        let expense = Expense::fixed(input.date, input.category, input.amount, input.frequency);
        self.create(with_description(expense, input.description))
    }

    pub fn add_variable(&self, input: NewVariableExpense) -> CashflowResult<Expense> {
        let expense = Expense::variable(input.date, input.category, input.amount);
        self.create(with_description(expense, input.description))
    }

    fn create(&self, expense: Expense) -> CashflowResult<Expense> {
        expense
            .validate()
            .map_err(|e| CashflowError::Validation(e.to_string()))?;

        self.storage.expenses.insert(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.category.clone()),
            &expense,
        )?;

        tracing::info!(
            id = %expense.id,
            kind = %expense.kind,
            amount = expense.amount.cents(),
            "expense added"
        );
        Ok(expense)
    }

    /// Resolve an ID given in full or as a unique prefix
    pub fn find(&self, id: &str) -> CashflowResult<Expense> {
        self.storage.expenses.find_by_prefix(id)
    }

    pub fn update(&self, id: &str, changes: ExpenseUpdate) -> CashflowResult<Expense> {
        if changes.is_empty() {
            return Err(CashflowError::Validation("Nothing to update".into()));
        }

        let before = self.find(id)?;
        let mut expense = before.clone();

        if let Some(frequency) = changes.frequency {
            if expense.is_variable() && frequency != Frequency::OneTime {
                return Err(CashflowError::Validation(format!(
                    "Variable expenses are always one-time, cannot set frequency to {}",
                    frequency
                )));
            }
            expense.set_frequency(frequency);
        }
        if let Some(date) = changes.date {
            expense.set_date(date);
        }
        if let Some(category) = changes.category {
            expense.set_category(category);
        }
        if let Some(amount) = changes.amount {
            expense.set_amount(amount);
        }
        if let Some(description) = changes.description {
            expense.set_description(description.trim());
        }

        expense
            .validate()
            .map_err(|e| CashflowError::Validation(e.to_string()))?;

        self.storage.expenses.update(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage.log_update(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.category.clone()),
            &before,
            &expense,
            diff_records(&before, &expense),
        )?;

        tracing::info!(id = %expense.id, "expense updated");
        Ok(expense)
    }

    pub fn delete(&self, id: &str) -> CashflowResult<Expense> {
        let expense = self.find(id)?;

        self.storage
            .expenses
            .delete(expense.id)?
            .ok_or_else(|| CashflowError::expense_not_found(id))?;
        self.storage.expenses.save()?;

        self.storage.log_delete(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.category.clone()),
            &expense,
        )?;

        tracing::info!(id = %expense.id, "expense deleted");
        Ok(expense)
    }

    /// Expenses matching the filter, newest first
    pub fn list(&self, filter: &ExpenseFilter, today: NaiveDate) -> CashflowResult<Vec<Expense>> {
        let mut expenses: Vec<Expense> = self
            .storage
            .expenses
            .get_all()?
            .into_iter()
            .filter(|e| filter.matches(e, today))
            .collect();
        expenses.reverse();
        Ok(expenses)
    }

    pub fn total(expenses: &[Expense]) -> Money {
        expenses.iter().map(|e| e.amount).sum()
    }
}

fn with_description(expense: Expense, description: Option<String>) -> Expense {
    match description {
        Some(d) => expense.with_description(d.trim()),
        None => expense,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CashflowPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashflowPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn rent() -> NewFixedExpense {
        NewFixedExpense {
            date: date(1),
            category: "Rent".into(),
            amount: Money::from_cents(1_200_000),
            frequency: Frequency::Monthly,
            description: Some(" June rent ".into()),
        }
    }

    fn food(d: u32, cents: i64) -> NewVariableExpense {
        NewVariableExpense {
            date: date(d),
            category: "Food".into(),
            amount: Money::from_cents(cents),
            description: None,
        }
    }

    #[test]
    fn test_add_fixed_and_variable() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let fixed = service.add_fixed(rent()).unwrap();
        let variable = service.add_variable(food(3, 45_000)).unwrap();

        assert!(fixed.is_fixed());
        assert_eq!(fixed.description, "June rent");
        assert_eq!(variable.frequency, Frequency::OneTime);
        assert_eq!(storage.load_expenses().unwrap().len(), 2);
        assert_eq!(storage.audit().read_all().unwrap().len(), 2);
    }

    #[test]
    fn test_variable_frequency_change_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        let variable = service.add_variable(food(3, 45_000)).unwrap();

        let err = service
            .update(
                &variable.id.to_string(),
                ExpenseUpdate {
                    frequency: Some(Frequency::Weekly),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            storage.load_expenses().unwrap()[0].frequency,
            Frequency::OneTime
        );
    }

    #[test]
    fn test_update_fixed_frequency() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        let fixed = service.add_fixed(rent()).unwrap();

        let updated = service
            .update(
                &fixed.id.to_string(),
                ExpenseUpdate {
                    frequency: Some(Frequency::Weekly),
                    amount: Some(Money::from_cents(300_000)),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.frequency, Frequency::Weekly);
        assert_eq!(updated.amount.cents(), 300_000);
    }

    #[test]
    fn test_delete_unknown_is_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        assert!(service.delete("exp-00000000").unwrap_err().is_not_found());
    }

    #[test]
    fn test_list_filters() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        service.add_fixed(rent()).unwrap();
        service.add_variable(food(10, 1_000)).unwrap();
        service.add_variable(food(19, 2_000)).unwrap();

        let today = date(21);
        let variable = service
            .list(
                &ExpenseFilter {
                    kind: Some(ExpenseKind::Variable),
                    ..Default::default()
                },
                today,
            )
            .unwrap();
        assert_eq!(variable.len(), 2);
        assert_eq!(variable[0].date, date(19));
        assert_eq!(ExpenseService::total(&variable).cents(), 3_000);

        let this_week = service
            .list(
                &ExpenseFilter {
                    period: Period::Last7Days,
                    ..Default::default()
                },
                today,
            )
            .unwrap();
        assert_eq!(this_week.len(), 1);

        let rent_only = service
            .list(
                &ExpenseFilter {
                    category: Some("rent".into()),
                    ..Default::default()
                },
                today,
            )
            .unwrap();
        assert_eq!(rent_only.len(), 1);
        assert!(rent_only[0].is_fixed());
    }
}
