//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Entity was created
    Create,
    /// Entity was updated
    Update,
    /// Entity was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Income,
    Expense,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Income => write!(f, "Income"),
            EntityType::Expense => write!(f, "Expense"),
        }
    }
}

/// One create, update or delete of a record
///
/// Records are snapshotted as JSON so the log stays readable even after
/// the record types change shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the change was made (UTC)
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub entity_type: EntityType,
    /// Full record ID
    pub entity_id: String,

    /// Income source or expense category at the time of the change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// Record as it was; absent for creates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,

    /// Record as it became; absent for deletes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,

    /// Field-level summary for updates, e.g. `amount: 500000 -> 550000`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

fn snapshot<T: Serialize>(record: &T) -> Option<Value> {
    serde_json::to_value(record).ok()
}

impl AuditEntry {
    fn stamped(
        operation: Operation,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id,
            entity_name,
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        record: &T,
    ) -> Self {
        Self {
            after: snapshot(record),
            ..Self::stamped(Operation::Create, entity_type, entity_id.into(), entity_name)
        }
    }

    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Self {
        Self {
            before: snapshot(before),
            after: snapshot(after),
            diff_summary,
            ..Self::stamped(Operation::Update, entity_type, entity_id.into(), entity_name)
        }
    }

    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        record: &T,
    ) -> Self {
        Self {
            before: snapshot(record),
            ..Self::stamped(Operation::Delete, entity_type, entity_id.into(), entity_name)
        }
    }

    /// One line per change, plus an indented line listing changed fields
    pub fn format_human_readable(&self) -> String {
        let name = self
            .entity_name
            .as_ref()
            .map(|n| format!(" ({})", n))
            .unwrap_or_default();

        let mut output = format!(
            "[{}] {} {} {}{}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id,
            name
        );

        if let Some(diff) = &self.diff_summary {
            output.push_str("\n  Changes: ");
            output.push_str(diff);
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Income, Money};
    use chrono::NaiveDate;

    fn salary() -> Income {
        Income::new(
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            "Salary",
            Money::from_cents(5_000_000),
        )
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_entity_type_display() {
        assert_eq!(EntityType::Income.to_string(), "Income");
        assert_eq!(EntityType::Expense.to_string(), "Expense");
    }

    #[test]
    fn test_create_entry_snapshots_record() {
        let income = salary();
        let entry = AuditEntry::create(
            EntityType::Income,
            income.id.to_string(),
            Some(income.source.clone()),
            &income,
        );

        assert_eq!(entry.operation, Operation::Create);
        assert!(entry.before.is_none());
        let after = entry.after.unwrap();
        assert_eq!(after["amount"], 5_000_000);
        assert_eq!(after["date"], "2025-06-01");
    }

    #[test]
    fn test_update_entry() {
        let before = salary();
        let mut after = before.clone();
        after.set_amount(Money::from_cents(5_500_000));

        let entry = AuditEntry::update(
            EntityType::Income,
            before.id.to_string(),
            Some("Salary".to_string()),
            &before,
            &after,
            Some("amount: 5000000 -> 5500000".to_string()),
        );

        assert_eq!(entry.operation, Operation::Update);
        assert!(entry.before.is_some());
        assert!(entry.after.is_some());
        assert_eq!(
            entry.diff_summary.as_deref(),
            Some("amount: 5000000 -> 5500000")
        );
    }

    #[test]
    fn test_delete_entry() {
        let expense = Expense::variable(
            NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
            "Food",
            Money::from_cents(45_000),
        );
        let entry = AuditEntry::delete(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.category.clone()),
            &expense,
        );

        assert_eq!(entry.operation, Operation::Delete);
        assert_eq!(entry.before.as_ref().unwrap()["type"], "variable");
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::create(EntityType::Expense, "exp-123", None, &salary());

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"entity_type\":\"expense\""));
        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.operation, Operation::Create);
        assert_eq!(deserialized.entity_type, EntityType::Expense);
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::create(
            EntityType::Income,
            "inc-12345678",
            Some("Salary".to_string()),
            &salary(),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("CREATE"));
        assert!(formatted.contains("Income"));
        assert!(formatted.contains("inc-12345678"));
        assert!(formatted.contains("(Salary)"));
    }
}
