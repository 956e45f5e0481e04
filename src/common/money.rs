use bigdecimal::{BigDecimal, ParseBigDecimalError};
use num_traits::ToPrimitive;
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

const SCALE: i64 = 10_000;

/// Largest magnitude accepted when parsing, in whole units. Keeps sums of
/// any realistic collection far from `i64` limits.
pub const MAX_UNITS: i64 = 1_000_000_000_000;

#[derive(Debug, Clone, Copy, Default)]
/// A debt or payment amount stored as ten-thousandths of a currency unit.
///
/// Keeping amounts integral means totals are exact and order independent, and
/// that there is no NaN or infinity to guard against when formatting.
///
/// # Examples
/// ```
/// use debt_ledger::common::money::Money;
///
/// let amount: Money = "1250.5".parse().unwrap();
/// assert_eq!(amount.as_i64(), 12_505_000);
/// assert_eq!(amount.round_to_units(), 1251);
/// assert_eq!(amount.to_string(), "1250.5");
/// ```
pub struct Money(i64);

impl Money {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Whole currency units, e.g. `Money::from_units(50)` is fifty dinars.
    pub fn from_units(units: i64) -> Self {
        Money(units.saturating_mul(SCALE))
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parses user input the way the amount field does: anything that is not
    /// a number becomes zero.
    pub fn parse_or_zero(input: &str) -> Self {
        input.parse().unwrap_or_default()
    }

    /// Rounds to the nearest whole unit, halves away from zero.
    pub fn round_to_units(&self) -> i64 {
        let half = SCALE / 2;
        if self.0 >= 0 {
            self.0.saturating_add(half) / SCALE
        } else {
            self.0.saturating_sub(half) / SCALE
        }
    }

    /// Plain decimal form without trailing zeros ("100", "12.5", "-0.0001").
    pub fn to_plain_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let units = abs / SCALE as u64;
        let frac = abs % SCALE as u64;
        if frac == 0 {
            return format!("{sign}{units}");
        }
        let frac = format!("{frac:04}");
        format!("{sign}{units}.{}", frac.trim_end_matches('0'))
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        // Scale to 4 decimal places
        let scaled = (bd * BigDecimal::from(SCALE)).round(0);
        let value: i64 = scaled
            .to_i64()
            .filter(|v| v.unsigned_abs() <= (MAX_UNITS * SCALE) as u64)
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain_string())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
