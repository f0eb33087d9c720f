//! Amount type for expense magnitudes
//!
//! Wraps a [`Decimal`] so sums keep full precision; rounding to two places
//! happens only when formatting. Persisted as a plain JSON number.
//!
//! User input is limited to [`MAX_AMOUNT`] and [`MAX_SIGNIFICANT_DIGITS`]:
//! such a value survives the trip through an `f64` unchanged, and a ledger
//! of them cannot overflow when summed.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// Decimal places shown to the user
pub const DISPLAY_DP: u32 = 2;

/// Largest amount accepted from user input
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Most significant digits accepted from user input; an `f64` holds 15 exactly
pub const MAX_SIGNIFICANT_DIGITS: u32 = 15;

/// A currency-agnostic amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Wrap an existing decimal
    pub const fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    /// Get the underlying decimal at full precision
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Parse user input
    ///
    /// Accepts formats: "10.50", "10", "$10.50", " 3.5 ". Surrounding
    /// whitespace and a leading `$` are ignored.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();

        if digits.is_empty() {
            return Err(AmountParseError::Empty);
        }

        Decimal::from_str(digits)
            .map(|d| Self(d.normalize()))
            .map_err(|_| AmountParseError::InvalidFormat(trimmed.to_string()))
    }

    /// Parse user input, requiring a value greater than zero
    ///
    /// Also rejects values above [`MAX_AMOUNT`] or with more than
    /// [`MAX_SIGNIFICANT_DIGITS`] significant digits, so the value kept in
    /// memory is exactly the one read back from disk.
    pub fn parse_positive(s: &str) -> Result<Self, AmountParseError> {
        let amount = Self::parse(s)?;
        if !amount.is_positive() {
            return Err(AmountParseError::NotPositive(s.trim().to_string()));
        }
        if amount.0 > MAX_AMOUNT {
            return Err(AmountParseError::TooLarge(s.trim().to_string()));
        }
        if amount.significant_digits() > MAX_SIGNIFICANT_DIGITS {
            return Err(AmountParseError::TooPrecise(s.trim().to_string()));
        }
        Ok(amount)
    }

    /// Digits in the normalized mantissa
    fn significant_digits(&self) -> u32 {
        let mantissa = self.0.normalize().mantissa().unsigned_abs();
        mantissa.checked_ilog10().map_or(1, |log| log + 1)
    }

    /// Round half away from zero to the display precision
    pub fn rounded(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(DISPLAY_DP, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Format with a currency symbol, e.g. "$3.50"
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.rounded())
    }
}

/// Saturates at [`Decimal::MAX`] instead of panicking. Only a hand-edited
/// ledger can get there; input is capped at [`MAX_AMOUNT`].
impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.checked_add(other.0).unwrap_or(Decimal::MAX))
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Goes through the decimal text so the `f64` is the nearest one to the
/// exact value.
impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value: f64 = self
            .0
            .normalize()
            .to_string()
            .parse::<f64>()
            .map_err(<S::Error as serde::ser::Error>::custom)?;
        serializer.serialize_f64(value)
    }
}

/// Reads the shortest decimal text of the stored `f64`.
impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Decimal::from_str(&value.to_string())
            .map(|d| Self(d.normalize()))
            .map_err(|e| {
                <D::Error as serde::de::Error>::custom(format!("invalid amount {}: {}", value, e))
            })
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountParseError {
    #[error("amount is empty")]
    Empty,
    #[error("invalid amount format: {0}")]
    InvalidFormat(String),
    #[error("amount must be greater than 0: {0}")]
    NotPositive(String),
    #[error("amount must not exceed 1000000000000: {0}")]
    TooLarge(String),
    #[error("amount has more than 15 significant digits: {0}")]
    TooPrecise(String),
}
