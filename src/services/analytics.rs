//! Analytics service
//!
//! Bridges stored records and user settings to the pure analytics engine.

use chrono::NaiveDate;

use crate::analytics::{AnalyticsConfig, AnalyticsSummary, RunwayPolicy, StressThresholds};
use crate::config::Settings;
use crate::error::{CashflowError, CashflowResult};
use crate::storage::Storage;

/// Per-invocation overrides of the configured engine policy
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisOverrides {
    pub runway_policy: Option<RunwayPolicy>,
    pub low_days: Option<f64>,
    pub medium_days: Option<f64>,
}

/// Service producing cashflow summaries
pub struct AnalyticsService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Engine configuration after applying overrides to the settings
    pub fn config(&self, overrides: &AnalysisOverrides) -> CashflowResult<AnalyticsConfig> {
        let mut config = self.settings.analytics_config();

        if let Some(policy) = overrides.runway_policy {
            config.runway_policy = policy;
        }

        if overrides.low_days.is_some() || overrides.medium_days.is_some() {
            let current = config.stress_thresholds;
            config.stress_thresholds = StressThresholds::new(
                overrides.low_days.unwrap_or(current.low_days()),
                overrides.medium_days.unwrap_or(current.medium_days()),
            )
            .map_err(|e| CashflowError::Validation(e.to_string()))?;
        }

        Ok(config)
    }

    /// Summarize the stored records as of `today`
    pub fn summary(
        &self,
        today: NaiveDate,
        overrides: &AnalysisOverrides,
    ) -> CashflowResult<AnalyticsSummary> {
        let config = self.config(overrides)?;
        let snapshot = self.storage.snapshot()?;
        Ok(snapshot.analyze(today, &config))
    }

    /// Whether the summary should carry the low-balance warning
    pub fn needs_warning(&self, summary: &AnalyticsSummary) -> bool {
        summary.is_below(self.settings.warning_days)
    }
}
