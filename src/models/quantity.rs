//! Non-negative quantity type for tracked metrics
//!
//! Every numeric field of a daily entry (litres of water, minutes, commits,
//! money) is a `Quantity`. Whole values are stored as JSON integers, anything
//! else as a decimal, so `5` stays `5` on disk and `2.5` stays `2.5`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A finite number greater than or equal to zero
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Quantity(f64);

impl Quantity {
    /// Create a quantity, rejecting negative and non-finite values
    ///
    /// # Examples
    /// ```
    /// use habit_tracker::models::Quantity;
    /// assert!(Quantity::new(2.5).is_ok());
    /// assert!(Quantity::new(-1.0).is_err());
    /// ```
    pub fn new(value: f64) -> Result<Self, QuantityError> {
        if !value.is_finite() {
            return Err(QuantityError::NotANumber(value.to_string()));
        }
        if value < 0.0 {
            return Err(QuantityError::Negative(value));
        }
        // Normalize -0.0 so it serializes as 0
        Ok(Self(value + 0.0))
    }

    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Parse a quantity from user input such as "3", "2.5" or " 10 "
    pub fn parse(s: &str) -> Result<Self, QuantityError> {
        let trimmed = s.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| QuantityError::NotANumber(trimmed.to_string()))?;
        Self::new(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Whether the value has no fractional part
    pub fn is_whole(&self) -> bool {
        self.0.fract() == 0.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Quantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Quantity {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, q| acc + q)
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_whole() && self.0 <= u64::MAX as f64 {
            serializer.serialize_u64(self.0 as u64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Quantity::new(value).map_err(serde::de::Error::custom)
    }
}

/// Errors raised when a value cannot be a quantity
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityError {
    NotANumber(String),
    Negative(f64),
}

impl fmt::Display for QuantityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber(s) => write!(f, "'{}' is not a number", s),
            Self::Negative(v) => write!(f, "{} is negative", v),
        }
    }
}

impl std::error::Error for QuantityError {}
