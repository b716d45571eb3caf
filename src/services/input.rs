//! Boundary parsing of user-entered amounts, dates and list periods
//!
//! Everything typed on the command line passes through here before it
//! reaches a service, so bad input never touches the store.

use std::str::FromStr;

use chrono::{Days, NaiveDate};

use crate::error::{CashflowError, CashflowResult};
use crate::models::{Money, MoneyParseError};

/// Date format accepted on input and written to disk
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a strictly positive amount
///
/// Accepts an optional currency symbol and thousands separators; rejects
/// non-numeric text, zero, negatives, more than two decimal places and
/// anything above [`Money::MAX_AMOUNT`].
pub fn parse_amount(input: &str) -> CashflowResult<Money> {
    let amount = Money::parse(input).map_err(|e| {
        let reason = match e {
            MoneyParseError::InvalidFormat(_) => "not a number",
            MoneyParseError::TooPrecise(_) => "more than two decimal places",
            MoneyParseError::Overflow(_) => "amount is too large",
        };
        CashflowError::invalid_amount(input, reason)
    })?;

    if amount.is_negative() {
        return Err(CashflowError::invalid_amount(input, "amount cannot be negative"));
    }
    if amount.is_zero() {
        return Err(CashflowError::invalid_amount(input, "amount must be greater than zero"));
    }
    if amount > Money::MAX_AMOUNT {
        return Err(CashflowError::invalid_amount(input, "amount is too large"));
    }

    Ok(amount)
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> CashflowResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| CashflowError::InvalidDate(input.to_string()))
}

pub fn parse_date_or(input: Option<&str>, default: NaiveDate) -> CashflowResult<NaiveDate> {
    input.map_or(Ok(default), parse_date)
}

/// Require a non-blank label such as an income source or expense category
pub fn parse_label(input: &str, what: &str) -> CashflowResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CashflowError::Validation(format!("{} cannot be empty", what)));
    }
    Ok(trimmed.to_string())
}

/// Date window used by the list commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    All,
    /// Records dated within the last 7 days
    Last7Days,
    /// Records dated within the last 30 days
    LastMonth,
}

impl Period {
    /// Earliest date included, if the window is bounded
    pub fn start(self, today: NaiveDate) -> Option<NaiveDate> {
        let days = match self {
            Self::All => return None,
            Self::Last7Days => 7,
            Self::LastMonth => 30,
        };
        Some(today.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN))
    }

    pub fn contains(self, date: NaiveDate, today: NaiveDate) -> bool {
        self.start(today).map_or(true, |start| date >= start)
    }
}

impl FromStr for Period {
    type Err = CashflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "all" => Ok(Self::All),
            "last-7-days" | "7d" | "week" => Ok(Self::Last7Days),
            "last-month" | "30d" | "month" => Ok(Self::LastMonth),
            other => Err(CashflowError::Validation(format!(
                "Unknown period '{}'. Use all, last-7-days or last-month",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Last7Days => write!(f, "last-7-days"),
            Self::LastMonth => write!(f, "last-month"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_amount_accepts_common_forms() {
        assert_eq!(parse_amount("500").unwrap().cents(), 50_000);
        assert_eq!(parse_amount("12.5").unwrap().cents(), 1_250);
        assert_eq!(parse_amount("₹1,200.75").unwrap().cents(), 120_075);
    }

    #[test]
    fn test_parse_amount_rejects_bad_input() {
        for bad in ["abc", "", "0", "0.00", "-5", "1.234"] {
            let err = parse_amount(bad).unwrap_err();
            assert!(
                matches!(err, CashflowError::InvalidAmount { .. }),
                "{} should be an invalid amount",
                bad
            );
        }
    }

    #[test]
    fn test_parse_amount_upper_bound() {
        // 100 billion is the largest accepted amount
        assert_eq!(
            parse_amount("100,000,000,000").unwrap(),
            Money::MAX_AMOUNT
        );

        for too_large in ["100000000000.01", "92233720368547758"] {
            match parse_amount(too_large) {
                Err(CashflowError::InvalidAmount { reason, .. }) => {
                    assert_eq!(reason, "amount is too large")
                }
                other => panic!("{} accepted: {:?}", too_large, other),
            }
        }
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-06-21").unwrap(), date(2025, 6, 21));
        assert!(matches!(
            parse_date("21/06/2025"),
            Err(CashflowError::InvalidDate(_))
        ));
        assert!(parse_date("2025-02-30").is_err());
    }

    #[test]
    fn test_parse_date_or_default() {
        let today = date(2025, 6, 21);
        assert_eq!(parse_date_or(None, today).unwrap(), today);
        assert_eq!(
            parse_date_or(Some("2025-06-01"), today).unwrap(),
            date(2025, 6, 1)
        );
    }

    #[test]
    fn test_parse_label() {
        assert_eq!(parse_label("  Rent ", "Category").unwrap(), "Rent");
        assert!(parse_label("   ", "Category").unwrap_err().is_validation());
    }

    #[test]
    fn test_period_windows() {
        let today = date(2025, 6, 21);
        assert_eq!(Period::Last7Days.start(today), Some(date(2025, 6, 14)));
        assert_eq!(Period::LastMonth.start(today), Some(date(2025, 5, 22)));
        assert_eq!(Period::All.start(today), None);

        assert!(Period::Last7Days.contains(date(2025, 6, 14), today));
        assert!(!Period::Last7Days.contains(date(2025, 6, 13), today));
        assert!(Period::All.contains(date(1999, 1, 1), today));
    }

    #[test]
    fn test_period_from_str() {
        assert_eq!("last-7-days".parse::<Period>().unwrap(), Period::Last7Days);
        assert_eq!("LAST_MONTH".parse::<Period>().unwrap(), Period::LastMonth);
        assert!("fortnight".parse::<Period>().is_err());
    }
}
