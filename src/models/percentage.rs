//! Percentage type for category allocations
//!
//! Stored as hundredths of a percent so that sums are exact: three categories
//! at 33.3%, 33.3% and 33.4% add up to exactly 100%.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Sub};

use super::money::parse_hundredths;

/// A percentage of monthly income, stored as hundredths of a percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Percentage(i64);

impl Percentage {
    /// The whole: 100%
    pub const FULL: Percentage = Percentage(10_000);

    /// Create a percentage from hundredths of a percent (1250 -> 12.5%)
    pub const fn from_hundredths(hundredths: i64) -> Self {
        Self(hundredths)
    }

    /// Create a percentage from a decimal number, rounding to the nearest hundredth
    ///
    /// # Examples
    /// ```
    /// use pocketbudget::models::Percentage;
    /// assert_eq!(Percentage::from_f64(12.5).hundredths(), 1250);
    /// ```
    pub fn from_f64(value: f64) -> Self {
        Self((value * 100.0).round() as i64)
    }

    /// Zero percent
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the raw value in hundredths of a percent
    pub const fn hundredths(&self) -> i64 {
        self.0
    }

    /// Get the percentage as a decimal number
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Whether this is a valid category allocation: greater than 0 and at most 100
    pub fn is_valid_allocation(&self) -> bool {
        self.0 > 0 && *self <= Self::FULL
    }

    /// Parse a percentage from a string ("25", "12.5", "12.5%", "-3")
    pub fn parse(s: &str) -> Result<Self, PercentageParseError> {
        let trimmed = s.trim();
        let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };

        let hundredths = parse_hundredths(rest)
            .ok_or_else(|| PercentageParseError::InvalidFormat(s.to_string()))?;

        Ok(Self(if negative { -hundredths } else { hundredths }))
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.as_f64())
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Percentage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Ok(Self::from_f64(value))
    }
}

// Saturating, so an absurd total still compares as above 100%.
impl Add for Percentage {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Sub for Percentage {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl std::iter::Sum for Percentage {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Percentage::zero(), |acc, p| acc + p)
    }
}

/// Error type for percentage parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PercentageParseError {
    InvalidFormat(String),
}

impl fmt::Display for PercentageParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid percentage: {}", s),
        }
    }
}

impl std::error::Error for PercentageParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Percentage::parse("25").unwrap().hundredths(), 2500);
        assert_eq!(Percentage::parse("12.5").unwrap().hundredths(), 1250);
        assert_eq!(Percentage::parse("12.5%").unwrap().hundredths(), 1250);
        assert_eq!(Percentage::parse("-3").unwrap().hundredths(), -300);
        assert!(Percentage::parse("lots").is_err());
    }

    #[test]
    fn test_valid_allocation_bounds() {
        assert!(!Percentage::zero().is_valid_allocation());
        assert!(!Percentage::from_f64(-1.0).is_valid_allocation());
        assert!(Percentage::from_f64(0.01).is_valid_allocation());
        assert!(Percentage::FULL.is_valid_allocation());
        assert!(!Percentage::from_f64(100.01).is_valid_allocation());
    }

    #[test]
    fn test_sum_is_exact() {
        let parts = [33.3, 33.3, 33.4].map(Percentage::from_f64);
        let total: Percentage = parts.into_iter().sum();
        assert_eq!(total, Percentage::FULL);
    }

    #[test]
    fn test_sum_saturates_instead_of_wrapping() {
        let huge = Percentage::from_f64(1e17);
        let total: Percentage = [huge, huge, Percentage::FULL].into_iter().sum();
        assert_eq!(total.hundredths(), i64::MAX);
        assert!(total > Percentage::FULL);
        assert_eq!((Percentage::FULL - total).hundredths(), 10_000 - i64::MAX);
    }

    #[test]
    fn test_display_one_decimal() {
        assert_eq!(Percentage::from_f64(12.5).to_string(), "12.5%");
        assert_eq!(Percentage::from_f64(40.0).to_string(), "40.0%");
    }

    #[test]
    fn test_serializes_as_decimal_number() {
        let json = serde_json::to_string(&Percentage::from_f64(12.5)).unwrap();
        assert_eq!(json, "12.5");
        let back: Percentage = serde_json::from_str("60").unwrap();
        assert_eq!(back.hundredths(), 6000);
    }
}
