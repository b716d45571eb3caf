//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (i64 cents/paisa) so that sums
//! over many records never drift. Input in major units ("125.50") is
//! converted exactly; anything more precise than two decimals is rejected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as minor units (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest amount accepted from user input: 100 billion major units
    ///
    /// Far above any personal cashflow, and small enough that sums over
    /// millions of records stay well inside `i64`.
    pub const MAX_AMOUNT: Money = Money(10_000_000_000_000);

    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use cashflow_scanner::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from major and minor units
    ///
    /// # Examples
    /// ```
    /// use cashflow_scanner::models::Money;
    /// let amount = Money::from_major_minor(10, 50);
    /// assert_eq!(amount.cents(), 1050);
    /// ```
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        Self(major * 100 + minor)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole major-unit portion (truncated toward zero)
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Get the minor-unit portion (0-99)
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount given in major units
    ///
    /// Accepts "10.50", "-10.50", "$10.50", "₹1,250.5", "10". Integers are
    /// whole major units. More than two decimal places is an error rather
    /// than a silent truncation.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let s = s
            .strip_prefix('$')
            .or_else(|| s.strip_prefix('₹'))
            .unwrap_or(s);
        let s: String = s.chars().filter(|c| *c != ',').collect();

        if s.is_empty() {
            return Err(MoneyParseError::InvalidFormat(original.to_string()));
        }

        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s.as_str(), ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(MoneyParseError::InvalidFormat(original.to_string()));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(MoneyParseError::InvalidFormat(original.to_string()));
        }
        if frac.len() > 2 {
            return Err(MoneyParseError::TooPrecise(original.to_string()));
        }

        let major: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| MoneyParseError::Overflow(original.to_string()))?
        };

        let minor: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().unwrap_or(0) * 10,
            _ => frac.parse::<i64>().unwrap_or(0),
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| MoneyParseError::Overflow(original.to_string()))?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol and thousands separators
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            group_thousands(self.major().unsigned_abs()),
            self.minor_part()
        )
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.major().abs(), self.minor_part())
        } else {
            write!(f, "{}.{:02}", self.major(), self.minor_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    TooPrecise(String),
    Overflow(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::TooPrecise(s) => {
                write!(f, "More than two decimal places: {}", s)
            }
            MoneyParseError::Overflow(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let fee = Money::from_cents(250_075);
        assert_eq!(fee.cents(), 250_075);
        assert_eq!(fee.major(), 2_500);
        assert_eq!(fee.minor_part(), 75);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(123456789).format_with_symbol("₹"), "₹1,234,567.89");
        assert_eq!(Money::from_cents(-100050).format_with_symbol("$"), "-$1,000.50");
        assert_eq!(Money::from_cents(99).format_with_symbol("$"), "$0.99");
    }

    #[test]
    fn test_running_balance() {
        let income = Money::from_cents(5_000_000);
        let rent = Money::from_cents(2_000_000);
        let food = Money::from_cents(1_500_000);

        let mut balance = income - rent - food;
        assert_eq!(balance.cents(), 1_500_000);

        balance -= income;
        assert!(balance.is_negative());
        assert_eq!((-balance).format_with_symbol("₹"), "₹35,000.00");

        balance += Money::from_cents(3_500_000);
        assert!(balance.is_zero());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("₹1,250.50").unwrap().cents(), 125050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Money::parse("abc"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(matches!(Money::parse(""), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("."), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(
            Money::parse("1.2.3"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Money::parse("10.505"),
            Err(MoneyParseError::TooPrecise(_))
        ));
        assert!(matches!(
            Money::parse("99999999999999999999"),
            Err(MoneyParseError::Overflow(_))
        ));
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_cents(i64::MAX);
        assert_eq!(huge + Money::from_cents(1), huge);
        assert_eq!([huge, huge].into_iter().sum::<Money>(), huge);
        assert_eq!(-huge - huge, Money::from_cents(i64::MIN));
        assert_eq!(-Money::from_cents(i64::MIN), huge);

        let mut total = huge;
        total += huge;
        assert_eq!(total, huge);
    }

    #[test]
    fn test_sum_owned_and_borrowed() {
        let spends = [
            Money::from_cents(45_000),
            Money::from_cents(12_050),
            Money::from_cents(2_950),
        ];
        let borrowed: Money = spends.iter().sum();
        let owned: Money = spends.into_iter().sum();
        assert_eq!(owned, Money::from_cents(60_000));
        assert_eq!(borrowed, owned);
        assert_eq!(Vec::<Money>::new().into_iter().sum::<Money>(), Money::zero());
    }

    #[test]
    fn test_serialization() {
        // Stored as a bare integer of minor units
        let rent = Money::from_cents(1_200_000);
        assert_eq!(serde_json::to_string(&rent).unwrap(), "1200000");
        assert_eq!(serde_json::from_str::<Money>("1200000").unwrap(), rent);
    }
}
