//! Cashflow summary panel

use crate::analytics::{AnalyticsSummary, RunwayPolicy};
use crate::config::Settings;

use super::format::{
    bold, double_separator, format_days, format_money_colored, format_stress, separator, warning,
};

const WIDTH: usize = 48;

/// Presentation options for the panel
#[derive(Debug, Clone)]
pub struct SummaryStyle<'a> {
    pub currency: &'a str,
    pub date_format: &'a str,
    pub warning_days: f64,
    pub color: bool,
}

impl<'a> SummaryStyle<'a> {
    pub fn from_settings(settings: &'a Settings, color: bool) -> Self {
        Self {
            currency: &settings.currency_symbol,
            date_format: &settings.date_format,
            warning_days: settings.warning_days,
            color,
        }
    }
}

/// Render the summary as a terminal panel
pub fn format_summary(summary: &AnalyticsSummary, style: &SummaryStyle<'_>) -> String {
    let currency = style.currency;
    let mut lines = Vec::new();

    lines.push(bold(
        &format!(
            "Cashflow Summary as of {}",
            summary.as_of.format(style.date_format)
        ),
        style.color,
    ));
    lines.push(double_separator(WIDTH));
    lines.push(row(
        "Total Income",
        &summary.total_income.format_with_symbol(currency),
    ));
    lines.push(row(
        "Fixed Expenses",
        &summary.total_fixed_expenses.format_with_symbol(currency),
    ));
    lines.push(row(
        "Variable Expenses",
        &summary.total_variable_expenses.format_with_symbol(currency),
    ));
    lines.push(separator(WIDTH));
    lines.push(row(
        "Safe Balance",
        &format_money_colored(summary.safe_balance, currency, style.color),
    ));
    lines.push(row(
        "Daily Burn Rate",
        &format!("{}/day", summary.daily_burn().format_with_symbol(currency)),
    ));
    lines.push(row(
        "Days Left in Month",
        &summary.days_left_in_month.to_string(),
    ));

    let runway = match summary.runway_policy {
        RunwayPolicy::CappedToMonth if summary.projected_days != summary.remaining_days => {
            format!(
                "{} days (capped; projected {})",
                format_days(summary.remaining_days),
                format_days(summary.projected_days)
            )
        }
        _ => format!("{} days", format_days(summary.remaining_days)),
    };
    lines.push(row("Runway", &runway));
    lines.push(row(
        "Stress Level",
        &format_stress(summary.stress_level, style.color),
    ));

    if summary.is_below(style.warning_days) {
        lines.push(String::new());
        lines.push(warning(
            &format!(
                "Warning: safe balance covers only {} day(s) of spending",
                format_days(summary.projected_days)
            ),
            style.color,
        ));
    }

    lines.join("\n")
}

fn row(label: &str, value: &str) -> String {
    format!("{:<22}{}", label, value)
}
