//! Amount type for monetary values.
//!
//! This module provides the `Amount` type which wraps `Decimal` and handles
//! parsing values that may or may not include a currency sign and commas.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents a monetary amount.
///
/// This type wraps `Decimal` and provides custom serialization/deserialization so that stored
/// and imported values may be formatted with or without a currency sign or thousands separators.
/// The canonical persisted form is the plain two-decimal string, e.g. `"3.50"`.
///
/// # Examples
///
/// ```
/// # use fintrack::model::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("$1,234.5").unwrap();
/// assert_eq!(amount.plain(), "1234.50");
/// assert_eq!(amount.to_string(), "1,234.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount {
    value: Decimal,
}

impl Amount {
    /// Creates a new Amount from a Decimal value.
    pub const fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Returns the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.value().is_zero()
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.value().is_sign_negative() && !self.is_zero()
    }

    /// The plain two-decimal string form with no grouping, e.g. `1234.50`.
    ///
    /// This is the form used for persistence and for the search haystack, where thousands
    /// separators would get in the way of user patterns.
    pub fn plain(&self) -> String {
        format!("{:.2}", self.value)
    }
}

/// An error that can occur when parsing strings into `Decimal` values.
pub struct AmountError(rust_decimal::Error);

impl Debug for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl std::error::Error for AmountError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Amount::default());
        }

        // Remove a currency sign if present, keeping the leading minus in place.
        let without_sign = if let Some(after_minus) = trimmed.strip_prefix('-') {
            match after_minus.strip_prefix('$') {
                Some(after_dollar) => format!("-{after_dollar}"),
                None => trimmed.to_string(),
            }
        } else if let Some(after_dollar) = trimmed.strip_prefix('$') {
            after_dollar.to_string()
        } else {
            trimmed.to_string()
        };

        // Remove commas (thousand separators)
        let without_commas = without_sign.replace(',', "");

        let value = Decimal::from_str(&without_commas).map_err(AmountError)?;
        Ok(Amount { value })
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (sign, num) = if self.is_negative() {
            (String::from("-"), self.value().abs())
        } else {
            (String::new(), self.value())
        };
        write!(
            f,
            "{sign}{}",
            format_num::format_num!(",.2", num.to_f64().unwrap_or_default())
        )
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Serialize as the plain two-decimal string
        serializer.serialize_str(&self.plain())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AmountVisitor)
    }
}

/// Accepts strings (possibly with currency signs or commas) as well as bare JSON numbers, so
/// that files exported by other tools can be imported without reformatting.
struct AmountVisitor;

impl serde::de::Visitor<'_> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("a monetary amount as a string or number")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Amount::from_str(v).map_err(serde::de::Error::custom)
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Decimal::try_from(v)
            .map(Amount::new)
            .map_err(serde::de::Error::custom)
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Amount::new(Decimal::from(v)))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Amount::new(Decimal::from(v)))
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        let amount = Amount::from_str("50.00").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("50.00").unwrap());
    }

    #[test]
    fn test_parse_with_dollar_sign() {
        let amount = Amount::from_str("$50.00").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("50.00").unwrap());
    }

    #[test]
    fn test_parse_negative_with_dollar_sign() {
        let amount = Amount::from_str("-$50.00").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("-50.00").unwrap());
    }

    #[test]
    fn test_parse_empty_string() {
        let amount = Amount::from_str("").unwrap();
        assert_eq!(amount.value(), Decimal::ZERO);
    }

    #[test]
    fn test_parse_whitespace() {
        let amount = Amount::from_str("  50.00  ").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("50.00").unwrap());
    }

    #[test]
    fn test_parse_with_commas() {
        let amount = Amount::from_str("$1,234,567.89").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("1234567.89").unwrap());
    }

    #[test]
    fn test_plain_pads_to_two_decimals() {
        let amount = Amount::from_str("3.5").unwrap();
        assert_eq!(amount.plain(), "3.50");
    }

    #[test]
    fn test_display_groups_thousands() {
        let amount = Amount::from_str("60000").unwrap();
        assert_eq!(amount.to_string(), "60,000.00");
    }

    #[test]
    fn test_display_negative() {
        let amount = Amount::from_str("-50").unwrap();
        assert_eq!(amount.to_string(), "-50.00");
    }

    #[test]
    fn test_serialize() {
        let amount = Amount::from_str("1234.5").unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"1234.50\"");
    }

    #[test]
    fn test_deserialize_string() {
        let amount: Amount = serde_json::from_str("\"$1,000.00\"").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("1000.00").unwrap());
    }

    #[test]
    fn test_deserialize_number() {
        let amount: Amount = serde_json::from_str("3.5").unwrap();
        assert_eq!(amount.value(), Decimal::try_from(3.5).unwrap());
    }

    #[test]
    fn test_deserialize_integer() {
        let amount: Amount = serde_json::from_str("7").unwrap();
        assert_eq!(amount.value(), Decimal::from(7));
    }

    #[test]
    fn test_round_trip() {
        let original = Amount::from_str("999999.99").unwrap();
        let json = serde_json::to_string(&original).unwrap();
        let read: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(original, read);
    }

    #[test]
    fn test_ordering() {
        let a1 = Amount::from_str("30.00").unwrap();
        let a2 = Amount::from_str("50.00").unwrap();
        assert!(a1 < a2);
    }

    #[test]
    fn test_zero_is_not_negative() {
        let zero = Amount::from_str("0.00").unwrap();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
    }
}
