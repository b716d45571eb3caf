//! Diff generation for audit logging
//!
//! Produces a one-line, field-level summary of what changed between two
//! snapshots of a record.

use serde::Serialize;
use serde_json::Value;

/// Fields that change on every edit and would only add noise to a diff
const BOOKKEEPING_FIELDS: &[&str] = &["updated_at"];

/// Diff two serializable records
///
/// Returns `None` when nothing but bookkeeping timestamps changed or when
/// either side fails to serialize.
pub fn diff_records<T: Serialize>(before: &T, after: &T) -> Option<String> {
    let before = serde_json::to_value(before).ok()?;
    let after = serde_json::to_value(after).ok()?;
    generate_diff(&before, &after)
}

/// Generate a human-readable diff between two JSON values
///
/// Only top-level fields are compared.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                if BOOKKEEPING_FIELDS.contains(&key.as_str()) {
                    continue;
                }
                match after_obj.get(key) {
                    Some(after_val) if after_val != before_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!(
                        "{}: {} -> (removed)",
                        key,
                        format_value(before_val)
                    )),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ if before != after => Some(format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )),
        _ => None,
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            if s.chars().count() > 50 {
                let head: String = s.chars().take(47).collect();
                format!("\"{}...\"", head)
            } else {
                format!("\"{}\"", s)
            }
        }
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Frequency, Money};
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_simple_field_change() {
        let before = json!({"source": "Salary", "amount": 1000});
        let after = json!({"source": "Salary", "amount": 1500});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "amount: 1000 -> 1500");
    }

    #[test]
    fn test_field_added_and_removed() {
        let before = json!({"category": "Rent", "old": "value"});
        let after = json!({"category": "Rent", "description": "June"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("old: \"value\" -> (removed)"));
        assert!(diff.contains("description: (added) -> \"June\""));
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"category": "Rent", "amount": 100});
        assert!(generate_diff(&value, &value).is_none());
    }

    #[test]
    fn test_updated_at_is_ignored() {
        let before = json!({"amount": 100, "updated_at": "2025-06-01T00:00:00Z"});
        let after = json!({"amount": 100, "updated_at": "2025-06-02T00:00:00Z"});
        assert!(generate_diff(&before, &after).is_none());
    }

    #[test]
    fn test_diff_records_on_expense() {
        let before = Expense::fixed(
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            "Rent",
            Money::from_cents(1_200_000),
            Frequency::Monthly,
        );
        let mut after = before.clone();
        after.set_frequency(Frequency::Weekly);
        after.set_amount(Money::from_cents(300_000));

        let diff = diff_records(&before, &after).unwrap();
        assert!(diff.contains("amount: 1200000 -> 300000"));
        assert!(diff.contains("frequency: \"monthly\" -> \"weekly\""));
        assert!(!diff.contains("updated_at"));
    }

    #[test]
    fn test_long_string_truncation() {
        let before = json!({"description": "a".repeat(100)});
        let after = json!({"description": "short"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("...\""));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!(null)), "null");
        assert_eq!(format_value(&json!(true)), "true");
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!("test")), "\"test\"");
        assert_eq!(format_value(&json!([1, 2, 3])), "[3 items]");
        assert_eq!(format_value(&json!({"a": 1, "b": 2})), "{2 fields}");
    }
}
