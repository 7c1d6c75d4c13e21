use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::{Add, RangeInclusive};
use std::str::FromStr;

use thiserror::Error;

/// The bound board costs are held to when entered by hand: $5.00 to $20.00 inclusive.
pub const COST_RANGE: RangeInclusive<Cost> = Cost::from_cents(500)..=Cost::from_cents(2000);

/// A monetary board cost, held in whole cents so sums compare exactly.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Cost(u64);

/// Cost text that is not a non-negative number.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("invalid cost '{0}', expected a number")]
pub struct ParseCostError(pub String);

/// A cost outside the bound imposed by the caller.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("board cost {cost} must be between {} and {}", .range.start(), .range.end())]
pub struct RangeError {
    /// The offending cost.
    pub cost: Cost,
    /// The bound it was checked against.
    pub range: RangeInclusive<Cost>,
}

impl Cost {
    /// A cost of exactly `cents` cents.
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// This cost in cents.
    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Returns `self` if it lies within `range`, [`RangeError`] otherwise.
    pub fn validate(self, range: &RangeInclusive<Cost>) -> Result<Self, RangeError> {
        if range.contains(&self) {
            Ok(self)
        } else {
            Err(RangeError { cost: self, range: range.clone() })
        }
    }
}

impl Add for Cost {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Cost {
    fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl FromStr for Cost {
    type Err = ParseCostError;

    /// Parse a decimal amount such as `10`, `10.5` or `$12.99`, rounding to the nearest cent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed.strip_prefix('$').unwrap_or(trimmed);
        match number.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 && value * 100.0 <= u64::MAX as f64 => {
                Ok(Self((value * 100.0).round() as u64))
            }
            _ => Err(ParseCostError(s.to_string())),
        }
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rounds_to_cents() {
        assert_eq!("10.00".parse::<Cost>().unwrap(), Cost::from_cents(1000));
        assert_eq!(" $7.125 ".parse::<Cost>().unwrap(), Cost::from_cents(713));
        assert_eq!("12".parse::<Cost>().unwrap(), Cost::from_cents(1200));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("ten".parse::<Cost>().is_err());
        assert!("-5".parse::<Cost>().is_err());
        assert!("NaN".parse::<Cost>().is_err());
        assert!("".parse::<Cost>().is_err());
    }

    #[test]
    fn sums_saturate() {
        let max = Cost::from_cents(u64::MAX);
        assert_eq!(max + Cost::from_cents(1), max);
        assert_eq!([max, max, Cost::from_cents(500)].into_iter().sum::<Cost>(), max);
        assert_eq!(Cost::from_cents(250) + Cost::from_cents(250), Cost::from_cents(500));
    }

    #[test]
    fn display_pads_cents() {
        assert_eq!(Cost::from_cents(1005).to_string(), "$10.05");
        assert_eq!(Cost::from_cents(7).to_string(), "$0.07");
    }

    #[test]
    fn validate_against_cost_range() {
        assert!(Cost::from_cents(500).validate(&COST_RANGE).is_ok());
        assert!(Cost::from_cents(2000).validate(&COST_RANGE).is_ok());

        let err = Cost::from_cents(2001).validate(&COST_RANGE).unwrap_err();
        assert_eq!(err.to_string(), "board cost $20.01 must be between $5.00 and $20.00");
    }
}
