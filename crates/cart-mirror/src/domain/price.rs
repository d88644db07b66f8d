//! Price
//!
//! Catalog prices arrive as strings ("19.99") or JSON numbers. They are kept
//! as whole cents so line totals and subtotals add up exactly.

use std::fmt;
use std::iter::Sum;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Non-negative amount in minor currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "PriceRepr", into = "f64")]
pub struct Price(u64);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceParseError {
    #[error("price is empty")]
    Empty,
    #[error("price {0:?} is not a number")]
    Invalid(String),
    #[error("price {0:?} is negative")]
    Negative(String),
}

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(self) -> u64 {
        self.0
    }

    /// Round a decimal amount to the nearest cent, half-up on its shortest
    /// decimal form
    pub fn from_decimal(value: f64) -> Result<Self, PriceParseError> {
        if !value.is_finite() {
            return Err(PriceParseError::Invalid(value.to_string()));
        }
        if value < 0.0 {
            return Err(PriceParseError::Negative(value.to_string()));
        }
        let text = value.abs().to_string();
        parse_cents(&text).map(Self).ok_or(PriceParseError::Invalid(text))
    }

    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl FromStr for Price {
    type Err = PriceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits: String = trimmed
            .strip_prefix('$')
            .unwrap_or(trimmed)
            .chars()
            .filter(|c| *c != ',')
            .collect();
        if digits.is_empty() {
            return Err(PriceParseError::Empty);
        }
        if let Some(magnitude) = digits.strip_prefix('-') {
            return match parse_cents(magnitude) {
                Some(_) => Err(PriceParseError::Negative(s.to_string())),
                None => Err(PriceParseError::Invalid(s.to_string())),
            };
        }
        parse_cents(&digits)
            .map(Self)
            .ok_or_else(|| PriceParseError::Invalid(s.to_string()))
    }
}

/// Cents of a plain decimal such as `12`, `12.5` or `.99`
///
/// Works on the digits as written; a third fractional digit of 5 or more
/// rounds up and anything beyond it is ignored.
fn parse_cents(text: &str) -> Option<u64> {
    let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let whole: u64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let mut digits = fraction.bytes().map(|b| u64::from(b - b'0'));
    let tenths = digits.next().unwrap_or(0);
    let hundredths = digits.next().unwrap_or(0);
    let round_up = digits.next().is_some_and(|d| d >= 5);
    whole
        .checked_mul(100)?
        .checked_add(tenths * 10 + hundredths + u64::from(round_up))
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0 as f64 / 100.0
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        Price(iter.map(|p| p.0).fold(0u64, u64::saturating_add))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PriceRepr {
    Number(f64),
    Text(String),
}

impl TryFrom<PriceRepr> for Price {
    type Error = PriceParseError;

    fn try_from(repr: PriceRepr) -> Result<Self, Self::Error> {
        match repr {
            PriceRepr::Number(n) => Price::from_decimal(n),
            PriceRepr::Text(s) => s.parse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_strings() {
        assert_eq!("19.99".parse::<Price>().unwrap().cents(), 1999);
        assert_eq!(" $1,299.50 ".parse::<Price>().unwrap().cents(), 129_950);
        assert_eq!("5".parse::<Price>().unwrap().cents(), 500);
        assert_eq!("0.1".parse::<Price>().unwrap().cents(), 10);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("".parse::<Price>(), Err(PriceParseError::Empty));
        assert!(matches!("abc".parse::<Price>(), Err(PriceParseError::Invalid(_))));
        assert!(matches!("-3.00".parse::<Price>(), Err(PriceParseError::Negative(_))));
        assert!(matches!("NaN".parse::<Price>(), Err(PriceParseError::Invalid(_))));
    }

    #[test]
    fn test_half_cents_round_up_consistently() {
        assert_eq!("1.005".parse::<Price>().unwrap().cents(), 101);
        assert_eq!("1.115".parse::<Price>().unwrap().cents(), 112);
        assert_eq!("0.125".parse::<Price>().unwrap().cents(), 13);
        assert_eq!("2.9949".parse::<Price>().unwrap().cents(), 299);
        assert_eq!(Price::from_decimal(1.005).unwrap().cents(), 101);
        assert_eq!(Price::from_decimal(1.115).unwrap().cents(), 112);
        assert_eq!(Price::from_decimal(0.1).unwrap().cents(), 10);
    }

    #[test]
    fn test_parse_partial_decimals() {
        assert_eq!(".99".parse::<Price>().unwrap().cents(), 99);
        assert_eq!("3.".parse::<Price>().unwrap().cents(), 300);
        assert!(matches!(".".parse::<Price>(), Err(PriceParseError::Invalid(_))));
        assert!(matches!("1e3".parse::<Price>(), Err(PriceParseError::Invalid(_))));
        assert!(matches!("1.2.3".parse::<Price>(), Err(PriceParseError::Invalid(_))));
    }

    #[test]
    fn test_deserialize_string_or_number() {
        let a: Price = serde_json::from_str("\"12.34\"").unwrap();
        let b: Price = serde_json::from_str("12.34").unwrap();
        assert_eq!(a, b);
        assert!(serde_json::from_str::<Price>("\"free\"").is_err());
    }

    #[test]
    fn test_display_and_totals() {
        let price = Price::from_cents(1205);
        assert_eq!(price.to_string(), "12.05");
        assert_eq!(price.times(3).to_string(), "36.15");
        let total: Price = [Price::from_cents(100), Price::from_cents(250)].into_iter().sum();
        assert_eq!(total, Price::from_cents(350));
    }
}
