//! User settings for the cashflow scanner
//!
//! Holds display preferences and the analytics policy. The runway policy,
//! stress thresholds and the low-balance warning are separate knobs.

use serde::{Deserialize, Serialize};

use super::paths::CashflowPaths;
use crate::analytics::{AnalyticsConfig, RunwayPolicy, StressThresholds};
use crate::error::CashflowError;

/// User settings, persisted as `config.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for display (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether the runway may extend past the end of the month
    #[serde(default)]
    pub runway_policy: RunwayPolicy,

    /// Day cutoffs for the stress classification
    #[serde(default)]
    pub stress_thresholds: StressThresholds,

    /// Warn when the balance runs out in fewer days than this
    #[serde(default = "default_warning_days")]
    pub warning_days: f64,

    /// Diagnostic log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_warning_days() -> f64 {
    7.0
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            runway_policy: RunwayPolicy::default(),
            stress_thresholds: StressThresholds::default(),
            warning_days: default_warning_days(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Engine policy derived from these settings
    pub fn analytics_config(&self) -> AnalyticsConfig {
        AnalyticsConfig {
            runway_policy: self.runway_policy,
            stress_thresholds: self.stress_thresholds,
        }
    }

    /// Reject settings the engine cannot work with
    pub fn validate(&self) -> Result<(), CashflowError> {
        self.stress_thresholds
            .validate()
            .map_err(|e| CashflowError::Config(e.to_string()))?;

        if !self.warning_days.is_finite() || self.warning_days < 0.0 {
            return Err(CashflowError::Config(format!(
                "warning_days must be a non-negative number, got {}",
                self.warning_days
            )));
        }

        Ok(())
    }

    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &CashflowPaths) -> Result<Self, CashflowError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| CashflowError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| CashflowError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CashflowPaths) -> Result<(), CashflowError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CashflowError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| CashflowError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.runway_policy, RunwayPolicy::CappedToMonth);
        assert_eq!(settings.stress_thresholds.low_days(), 10.0);
        assert_eq!(settings.stress_thresholds.medium_days(), 5.0);
        assert_eq!(settings.warning_days, 7.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashflowPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashflowPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            runway_policy: RunwayPolicy::Unbounded,
            stress_thresholds: StressThresholds::new(15.0, 7.0).unwrap(),
            currency_symbol: "$".to_string(),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.analytics_config().runway_policy, RunwayPolicy::Unbounded);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashflowPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"runway_policy": "unbounded"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.runway_policy, RunwayPolicy::Unbounded);
        assert_eq!(loaded.warning_days, 7.0);
        assert_eq!(loaded.currency_symbol, "₹");
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashflowPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"stress_thresholds": {"low_days": 3, "medium_days": 8}}"#,
        )
        .unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, CashflowError::Config(_)));
    }
}
