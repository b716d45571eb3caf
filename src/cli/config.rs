//! CLI command for viewing and changing settings

use clap::Args;

use crate::analytics::{RunwayPolicy, StressThresholds};
use crate::config::{CashflowPaths, Settings};
use crate::error::{CashflowError, CashflowResult};

/// Options for `cashflow config`; with no flags the current settings are shown
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Currency symbol printed before amounts
    #[arg(long)]
    pub currency: Option<String>,

    /// strftime format for dates in tables
    #[arg(long)]
    pub date_format: Option<String>,

    /// capped-to-month or unbounded
    #[arg(long)]
    pub policy: Option<String>,

    #[arg(long)]
    pub low_days: Option<f64>,

    #[arg(long)]
    pub medium_days: Option<f64>,

    /// Warn when the balance covers fewer days than this
    #[arg(long)]
    pub warning_days: Option<f64>,

    /// error, warn, info, debug or trace
    #[arg(long)]
    pub log_level: Option<String>,
}

impl ConfigArgs {
    fn has_changes(&self) -> bool {
        self.currency.is_some()
            || self.date_format.is_some()
            || self.policy.is_some()
            || self.low_days.is_some()
            || self.medium_days.is_some()
            || self.warning_days.is_some()
            || self.log_level.is_some()
    }

    /// Apply the requested changes to a copy of `settings`
    pub fn apply(&self, settings: &Settings) -> CashflowResult<Settings> {
        let mut updated = settings.clone();

        if let Some(currency) = &self.currency {
            updated.currency_symbol = currency.clone();
        }
        if let Some(format) = &self.date_format {
            updated.date_format = format.clone();
        }
        if let Some(policy) = &self.policy {
            updated.runway_policy = policy
                .parse::<RunwayPolicy>()
                .map_err(CashflowError::Validation)?;
        }
        if self.low_days.is_some() || self.medium_days.is_some() {
            let current = settings.stress_thresholds;
            updated.stress_thresholds = StressThresholds::new(
                self.low_days.unwrap_or(current.low_days()),
                self.medium_days.unwrap_or(current.medium_days()),
            )
            .map_err(|e| CashflowError::Validation(e.to_string()))?;
        }
        if let Some(days) = self.warning_days {
            updated.warning_days = days;
        }
        if let Some(level) = &self.log_level {
            let level = level.trim().to_ascii_lowercase();
            if !matches!(level.as_str(), "error" | "warn" | "info" | "debug" | "trace") {
                return Err(CashflowError::Validation(format!(
                    "Unknown log level '{}'",
                    level
                )));
            }
            updated.log_level = level;
        }

        updated.validate()?;
        Ok(updated)
    }
}

/// Handle `cashflow config`
pub fn handle_config_command(
    paths: &CashflowPaths,
    settings: &Settings,
    args: ConfigArgs,
) -> CashflowResult<()> {
    let settings = if args.has_changes() {
        let updated = args.apply(settings)?;
        updated.save(paths)?;
        tracing::info!(file = %paths.settings_file().display(), "settings updated");
        println!("Settings saved.");
        updated
    } else {
        settings.clone()
    };

    println!("Configuration:");
    println!("  Data directory:   {}", paths.base_dir().display());
    println!("  Settings file:    {}", paths.settings_file().display());
    println!("  Audit log:        {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency:         {}", settings.currency_symbol);
    println!("  Date format:      {}", settings.date_format);
    println!("  Runway policy:    {}", settings.runway_policy);
    println!(
        "  Stress Low at:    {} days or more",
        settings.stress_thresholds.low_days()
    );
    println!(
        "  Stress Medium at: {} days or more",
        settings.stress_thresholds.medium_days()
    );
    println!("  Warning below:    {} days", settings.warning_days);
    println!("  Log level:        {}", settings.log_level);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_changes() {
        let args = ConfigArgs {
            policy: Some("unbounded".into()),
            low_days: Some(14.0),
            ..Default::default()
        };

        let updated = args.apply(&Settings::default()).unwrap();
        assert_eq!(updated.runway_policy, RunwayPolicy::Unbounded);
        assert_eq!(updated.stress_thresholds.low_days(), 14.0);
        assert_eq!(updated.stress_thresholds.medium_days(), 5.0);
    }

    #[test]
    fn test_apply_rejects_inverted_thresholds() {
        let args = ConfigArgs {
            medium_days: Some(20.0),
            ..Default::default()
        };

        assert!(args.apply(&Settings::default()).is_err());
    }

    #[test]
    fn test_apply_rejects_unknown_log_level() {
        let args = ConfigArgs {
            log_level: Some("loud".into()),
            ..Default::default()
        };

        assert!(matches!(
            args.apply(&Settings::default()),
            Err(CashflowError::Validation(_))
        ));
    }

    #[test]
    fn test_no_changes() {
        assert!(!ConfigArgs::default().has_changes());
    }
}
