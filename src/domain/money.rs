//! Price handling in integer minor currency units.
//!
//! Prices are stored as whole minor units (cents) to avoid floating-point
//! rounding error and only turned into human-readable decimal strings at the
//! presentation boundary. The decimal separator and currency symbol are
//! explicit configuration instead of ambient locale state.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::domain::types::{TaxPercentage, TypeConstraintError};

/// How monetary amounts are rendered for humans.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoneyFormat {
    /// Decimal separator used when displaying amounts, e.g. `,` or `.`.
    pub decimal_separator: char,
    /// Currency symbol shown next to amounts in views.
    pub currency_symbol: String,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self {
            decimal_separator: ',',
            currency_symbol: "€".to_string(),
        }
    }
}

/// A non-negative amount of money in minor currency units.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Constructs a price from whole minor units, rejecting negative values.
    pub fn new(minor_units: i64) -> Result<Self, TypeConstraintError> {
        if minor_units >= 0 {
            Ok(Self(minor_units))
        } else {
            Err(TypeConstraintError::NegativeNumber("price"))
        }
    }

    /// Returns the raw amount in minor units.
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// Parses a human decimal string into minor units.
    ///
    /// Both comma and dot are accepted as the decimal separator regardless of
    /// the configured display format, so `"2"`, `"2,5"` and `"2.50"` are all
    /// valid. At most two fractional digits are allowed and the value must be
    /// non-negative.
    pub fn parse(input: &str) -> Result<Self, TypeConstraintError> {
        let invalid = || TypeConstraintError::InvalidPrice(input.to_string());

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }

        let mut parts = trimmed.splitn(2, [',', '.']);
        let whole = parts.next().unwrap_or_default();
        let fraction = parts.next();

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let units: i64 = whole.parse().map_err(|_| invalid())?;

        let cents = match fraction {
            None => 0,
            Some(f) => {
                if f.is_empty() || f.len() > 2 || !f.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                let parsed: i64 = f.parse().map_err(|_| invalid())?;
                // "2,5" means 2,50 and not 2,05.
                if f.len() == 1 { parsed * 10 } else { parsed }
            }
        };

        units
            .checked_mul(100)
            .and_then(|u| u.checked_add(cents))
            .map(Self)
            .ok_or_else(invalid)
    }

    /// Renders the price as a canonical two-decimal string, e.g. `200` →
    /// `"2,00"`. Exact inverse of [`Price::parse`] for valid inputs.
    pub fn display(self, format: &MoneyFormat) -> String {
        format_minor_units(self.0, format)
    }

    /// The tax share contained in this gross price for a given percentage.
    ///
    /// With price `P` and percentage `T` the pre-tax base is
    /// `P * 100 / (100 + T)`; the tax amount is the remainder, rounded to
    /// whole minor units and rendered with the display rule above.
    pub fn tax_amount(self, percentage: TaxPercentage, format: &MoneyFormat) -> String {
        let gross = self.0 as f64;
        let base = gross * 100.0 / (100.0 + percentage.get());
        humanize_minor_units(gross - base, format)
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Price {
    type Error = TypeConstraintError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for i64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

fn format_minor_units(minor_units: i64, format: &MoneyFormat) -> String {
    format!(
        "{}{}{:02}",
        minor_units / 100,
        format.decimal_separator,
        minor_units % 100
    )
}

/// Rounds a fractional minor-unit amount to whole cents and formats it the
/// same way as [`Price::display`].
pub fn humanize_minor_units(minor_units: f64, format: &MoneyFormat) -> String {
    format_minor_units(minor_units.round() as i64, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt() -> MoneyFormat {
        MoneyFormat::default()
    }

    #[test]
    fn parses_whole_units() {
        assert_eq!(Price::parse("2").unwrap().minor_units(), 200);
    }

    #[test]
    fn parses_comma_decimals() {
        assert_eq!(Price::parse("2,00").unwrap().minor_units(), 200);
        assert_eq!(Price::parse("2,5").unwrap().minor_units(), 250);
        assert_eq!(Price::parse("0,07").unwrap().minor_units(), 7);
    }

    #[test]
    fn parses_dot_decimals() {
        assert_eq!(Price::parse("19.99").unwrap().minor_units(), 1999);
    }

    #[test]
    fn rejects_malformed_prices() {
        for input in ["", "  ", "-2", "2,000", "2,", ",50", "2,5a", "abc", "2,5,0"] {
            assert!(
                Price::parse(input).is_err(),
                "expected {input:?} to be rejected"
            );
        }
    }

    #[test]
    fn displays_canonical_two_decimal_form() {
        assert_eq!(Price::new(200).unwrap().display(&fmt()), "2,00");
        assert_eq!(Price::new(250).unwrap().display(&fmt()), "2,50");
        assert_eq!(Price::new(7).unwrap().display(&fmt()), "0,07");
        assert_eq!(Price::new(0).unwrap().display(&fmt()), "0,00");
    }

    #[test]
    fn display_respects_configured_separator() {
        let format = MoneyFormat {
            decimal_separator: '.',
            currency_symbol: "$".to_string(),
        };
        assert_eq!(Price::new(1999).unwrap().display(&format), "19.99");
    }

    #[test]
    fn parse_then_display_is_canonical() {
        for (input, canonical) in [("2", "2,00"), ("2,00", "2,00"), ("2,5", "2,50")] {
            assert_eq!(Price::parse(input).unwrap().display(&fmt()), canonical);
        }
    }

    #[test]
    fn tax_amount_uses_the_display_rounding_rule() {
        // 200 minor units at 19%: base = 168.07, tax = 31.93 → "0,32".
        let price = Price::new(200).unwrap();
        let percentage = TaxPercentage::new(19.0).unwrap();
        assert_eq!(price.tax_amount(percentage, &fmt()), "0,32");
    }

    #[test]
    fn tax_amount_is_zero_for_zero_percentage() {
        let price = Price::new(200).unwrap();
        let percentage = TaxPercentage::new(0.0).unwrap();
        assert_eq!(price.tax_amount(percentage, &fmt()), "0,00");
    }

    #[test]
    fn rejects_negative_minor_units() {
        assert!(Price::new(-1).is_err());
    }
}
