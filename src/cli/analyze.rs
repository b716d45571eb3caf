//! CLI command for the cashflow summary

use clap::Args;

use crate::analytics::RunwayPolicy;
use crate::config::Settings;
use crate::display::{format_summary, SummaryStyle};
use crate::error::{CashflowError, CashflowResult};
use crate::services::{parse_date_or, AnalysisOverrides, AnalyticsService};
use crate::storage::Storage;

use super::{print_json, today, use_color};

/// Options for `cashflow analyze`
#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// Evaluate as if today were this date (YYYY-MM-DD)
    #[arg(long)]
    pub as_of: Option<String>,

    /// Runway policy for this run: capped-to-month or unbounded
    #[arg(long)]
    pub policy: Option<String>,

    /// Runway in days at or above which stress is Low
    #[arg(long)]
    pub low_days: Option<f64>,

    /// Runway in days at or above which stress is Medium
    #[arg(long)]
    pub medium_days: Option<f64>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Handle `cashflow analyze`
pub fn handle_analyze_command(
    storage: &Storage,
    settings: &Settings,
    args: AnalyzeArgs,
) -> CashflowResult<()> {
    let as_of = parse_date_or(args.as_of.as_deref(), today())?;
    let overrides = AnalysisOverrides {
        runway_policy: args
            .policy
            .as_deref()
            .map(|p| p.parse::<RunwayPolicy>().map_err(CashflowError::Validation))
            .transpose()?,
        low_days: args.low_days,
        medium_days: args.medium_days,
    };

    let service = AnalyticsService::new(storage, settings);
    let summary = service.summary(as_of, &overrides)?;

    if service.needs_warning(&summary) {
        tracing::warn!(
            projected_days = summary.projected_days,
            warning_days = settings.warning_days,
            "safe balance is running low"
        );
    }

    if args.json {
        print_json(&summary)?;
    } else {
        let style = SummaryStyle::from_settings(settings, use_color(args.no_color));
        println!("{}", format_summary(&summary, &style));
    }

    Ok(())
}
