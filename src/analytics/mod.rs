//! Cashflow analytics engine
//!
//! Pure functions that turn a snapshot of income and expense records into a
//! stress forecast:
//!
//! - `balance`: safe balance (income minus fixed expenses)
//! - `burn`: daily burn rate of variable spend over the rest of the month
//! - `runway`: days the safe balance lasts, with a capping policy
//! - `stress`: Low / Medium / High classification
//!
//! Nothing here touches the file system or fails. Input is assumed to have
//! been validated when it was recorded.
//!
//! # Example
//!
//! ```
//! use cashflow_scanner::analytics::{analyze, AnalyticsConfig, StressLevel};
//! use cashflow_scanner::models::{Expense, Frequency, Income, Money};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 6, 21).unwrap();
//! let incomes = vec![Income::new(today, "Salary", Money::from_cents(50_000))];
//! let expenses = vec![
//!     Expense::fixed(today, "Rent", Money::from_cents(20_000), Frequency::Monthly),
//!     Expense::variable(today, "Food", Money::from_cents(15_000)),
//! ];
//!
//! let summary = analyze(&incomes, &expenses, today, &AnalyticsConfig::default());
//! assert_eq!(summary.safe_balance.cents(), 30_000);
//! assert_eq!(summary.daily_burn_rate, 1_500.0);
//! assert_eq!(summary.remaining_days, 10.0);
//! assert_eq!(summary.stress_level, StressLevel::Low);
//! ```

pub mod balance;
pub mod burn;
pub mod runway;
pub mod stress;

pub use balance::{calculate_safe_balance, SafeBalance};
pub use burn::{calculate_daily_burn, days_in_month, remaining_days_in_month, DailyBurn};
pub use runway::{project_runway, RunwayPolicy};
pub use stress::{StressLevel, StressThresholds, ThresholdError};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

use crate::models::{Expense, Income, Money};

/// Tunable policy for the engine
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default)]
    pub runway_policy: RunwayPolicy,
    #[serde(default)]
    pub stress_thresholds: StressThresholds,
}

/// A complete, already-validated set of records to analyze
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordSnapshot {
    pub incomes: Vec<Income>,
    pub expenses: Vec<Expense>,
}

impl RecordSnapshot {
    pub fn new(incomes: Vec<Income>, expenses: Vec<Expense>) -> Self {
        Self { incomes, expenses }
    }

    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty() && self.expenses.is_empty()
    }

    /// Run the engine over this snapshot
    pub fn analyze(&self, today: NaiveDate, config: &AnalyticsConfig) -> AnalyticsSummary {
        analyze(&self.incomes, &self.expenses, today, config)
    }
}

/// Result of one analysis run; recomputed on every request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsSummary {
    pub as_of: NaiveDate,
    pub total_income: Money,
    pub total_fixed_expenses: Money,
    pub total_variable_expenses: Money,
    pub safe_balance: Money,
    /// Minor units per day
    pub daily_burn_rate: f64,
    pub days_left_in_month: i64,
    /// Raw projection before the runway policy
    #[serde(serialize_with = "serialize_days")]
    pub projected_days: f64,
    /// Projection after the runway policy
    #[serde(serialize_with = "serialize_days")]
    pub remaining_days: f64,
    pub runway_policy: RunwayPolicy,
    pub stress_level: StressLevel,
}

impl AnalyticsSummary {
    /// Daily burn rounded to the nearest minor unit
    pub fn daily_burn(&self) -> Money {
        Money::from_cents(self.daily_burn_rate.round() as i64)
    }

    /// Whether the projected runway falls short of `warning_days`
    ///
    /// Judged on the uncapped projection: the month-end cap only bounds
    /// what is displayed, it does not mean the balance runs out.
    pub fn is_below(&self, warning_days: f64) -> bool {
        self.projected_days < warning_days
    }
}

/// JSON has no infinities; emit them as strings
fn serialize_days<S: Serializer>(days: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if days.is_finite() {
        serializer.serialize_f64(*days)
    } else if *days > 0.0 {
        serializer.serialize_str("infinity")
    } else {
        serializer.serialize_str("-infinity")
    }
}

/// Compute the full summary for a record set as of `today`
///
/// Stress is classified from the uncapped projection, so a balance that
/// outlasts the month reads as Low even on the last day of the month.
pub fn analyze(
    incomes: &[Income],
    expenses: &[Expense],
    today: NaiveDate,
    config: &AnalyticsConfig,
) -> AnalyticsSummary {
    let balance = calculate_safe_balance(incomes, expenses);
    let burn = calculate_daily_burn(expenses, today);
    let projected_days = project_runway(balance.safe_balance, burn.daily_burn_rate);
    let remaining_days = config
        .runway_policy
        .apply(projected_days, burn.remaining_days_in_month);
    let stress_level = config.stress_thresholds.classify(projected_days);

    tracing::debug!(
        incomes = incomes.len(),
        expenses = expenses.len(),
        %today,
        safe_balance = balance.safe_balance.cents(),
        daily_burn_rate = burn.daily_burn_rate,
        projected_days,
        remaining_days,
        %stress_level,
        "cashflow analysis complete"
    );

    AnalyticsSummary {
        as_of: today,
        total_income: balance.total_income,
        total_fixed_expenses: balance.total_fixed_expenses,
        total_variable_expenses: burn.total_variable_expenses,
        safe_balance: balance.safe_balance,
        daily_burn_rate: burn.daily_burn_rate,
        days_left_in_month: burn.remaining_days_in_month,
        projected_days,
        remaining_days,
        runway_policy: config.runway_policy,
        stress_level,
    }
}
