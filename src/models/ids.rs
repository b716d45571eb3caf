//! Strongly-typed ID wrappers for record types
//!
//! Incomes and expenses live in separate files, so keeping their IDs as
//! distinct types stops one from being looked up in the other's repository.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Prefix used by the short display form
            pub const PREFIX: &'static str = $display_prefix;

            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse an ID from a full UUID string, with or without the prefix
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                s.parse()
            }

            /// Check whether user input refers to this ID
            ///
            /// Matches the short display form ("inc-1a2b3c4d"), any prefix of
            /// it, or a prefix of the full UUID. Empty input never matches.
            pub fn matches_prefix(&self, input: &str) -> bool {
                let input = input.trim().to_ascii_lowercase();
                let bare = input.strip_prefix($display_prefix).unwrap_or(&input);
                !bare.is_empty() && self.0.to_string().starts_with(bare)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(IncomeId, "inc-");
define_id!(ExpenseId, "exp-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = IncomeId::new();
        let display = id.to_string();
        assert!(display.starts_with("inc-"));
        assert_eq!(display.len(), 12);
        assert!(ExpenseId::new().to_string().starts_with("exp-"));
    }

    #[test]
    fn test_id_parse() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = ExpenseId::parse(uuid_str).unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);

        let prefixed: ExpenseId = format!("exp-{}", uuid_str).parse().unwrap();
        assert_eq!(prefixed, id);
    }

    #[test]
    fn test_matches_prefix() {
        let id = IncomeId::from(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap());

        assert!(id.matches_prefix("inc-550e8400"));
        assert!(id.matches_prefix("inc-550e"));
        assert!(id.matches_prefix("550e8400-e29b"));
        assert!(id.matches_prefix("INC-550E8400"));
        assert!(!id.matches_prefix("inc-"));
        assert!(!id.matches_prefix(""));
        assert!(!id.matches_prefix("inc-deadbeef"));
    }

    #[test]
    fn test_id_serialization() {
        let id = IncomeId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: IncomeId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
