//! Stress classification of a runway

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse runway risk, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StressLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Errors for threshold pairs that cannot classify consistently
#[derive(Debug, Clone, PartialEq)]
pub enum ThresholdError {
    NotPositive { medium_days: f64 },
    NotOrdered { low_days: f64, medium_days: f64 },
}

impl fmt::Display for ThresholdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPositive { medium_days } => write!(
                f,
                "Medium stress threshold must be a positive number of days, got {}",
                medium_days
            ),
            Self::NotOrdered {
                low_days,
                medium_days,
            } => write!(
                f,
                "Low stress threshold ({}) must be greater than medium threshold ({})",
                low_days, medium_days
            ),
        }
    }
}

impl std::error::Error for ThresholdError {}

/// Day cutoffs: at least `low_days` is Low, at least `medium_days` is Medium,
/// anything shorter is High
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressThresholds {
    low_days: f64,
    medium_days: f64,
}

impl Default for StressThresholds {
    fn default() -> Self {
        Self {
            low_days: 10.0,
            medium_days: 5.0,
        }
    }
}

impl StressThresholds {
    /// Create a threshold pair; requires `low_days > medium_days > 0`
    pub fn new(low_days: f64, medium_days: f64) -> Result<Self, ThresholdError> {
        let thresholds = Self {
            low_days,
            medium_days,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Check a pair that may have come from a settings file
    pub fn validate(&self) -> Result<(), ThresholdError> {
        // Written so that NaN fails both checks
        if !(self.medium_days > 0.0) {
            return Err(ThresholdError::NotPositive {
                medium_days: self.medium_days,
            });
        }
        if !(self.low_days > self.medium_days) {
            return Err(ThresholdError::NotOrdered {
                low_days: self.low_days,
                medium_days: self.medium_days,
            });
        }
        Ok(())
    }

    pub fn low_days(&self) -> f64 {
        self.low_days
    }

    pub fn medium_days(&self) -> f64 {
        self.medium_days
    }

    /// Classify a runway in days
    pub fn classify(&self, days: f64) -> StressLevel {
        if days >= self.low_days {
            StressLevel::Low
        } else if days >= self.medium_days {
            StressLevel::Medium
        } else {
            // Also catches NaN
            StressLevel::High
        }
    }
}
