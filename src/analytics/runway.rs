//! Runway projection: how many days the safe balance lasts

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::Money;

/// How far ahead the runway is allowed to reach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunwayPolicy {
    /// Report the raw projection, which may be infinite
    Unbounded,
    /// Never report more days than remain in the current month
    #[default]
    CappedToMonth,
}

impl fmt::Display for RunwayPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => write!(f, "unbounded"),
            Self::CappedToMonth => write!(f, "capped-to-month"),
        }
    }
}

impl FromStr for RunwayPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "unbounded" => Ok(Self::Unbounded),
            "capped-to-month" | "capped" => Ok(Self::CappedToMonth),
            other => Err(format!("Unknown runway policy: {}", other)),
        }
    }
}

impl RunwayPolicy {
    /// Apply the policy to a raw projection
    ///
    /// Capping only bounds the upper end: an already negative runway stays
    /// negative.
    pub fn apply(self, projected_days: f64, days_left_in_month: i64) -> f64 {
        match self {
            Self::Unbounded => projected_days,
            Self::CappedToMonth => projected_days.min(days_left_in_month as f64),
        }
    }
}

/// Project the runway in days, uncapped
///
/// Without ongoing spend a non-negative balance lasts forever (`+inf`) and a
/// negative one has already run out (`-inf`).
pub fn project_runway(safe_balance: Money, daily_burn_rate: f64) -> f64 {
    if daily_burn_rate <= 0.0 {
        return if safe_balance.is_negative() {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    safe_balance.cents() as f64 / daily_burn_rate
}
