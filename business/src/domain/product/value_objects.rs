use serde::{Deserialize, Serialize};

use super::errors::ProductError;

/// Identifier assigned by the remote persistence service.
/// Opaque to the client: never parsed, never generated for committed records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Largest amount the product table's `NUMERIC(12, 2)` column holds.
pub const MAX_PRICE: f64 = 9_999_999_999.99;

/// Non-negative decimal amount in the shop's currency, at most [`MAX_PRICE`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub fn new(amount: f64) -> Result<Self, ProductError> {
        if !amount.is_finite() || amount < 0.0 || amount > MAX_PRICE {
            return Err(ProductError::PriceInvalid);
        }
        Ok(Self(amount))
    }

    /// Parses form input. Surrounding whitespace and thousands separators are ignored.
    pub fn parse(raw: &str) -> Result<Self, ProductError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ProductError::PriceMissing);
        }
        let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();
        let amount = cleaned
            .parse::<f64>()
            .map_err(|_| ProductError::PriceInvalid)?;
        Self::new(amount)
    }

    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Amount in hundredths. Exact for every accepted price.
    pub fn cents(&self) -> u64 {
        (self.0 * 100.0).round() as u64
    }
}

impl TryFrom<f64> for Price {
    type Error = ProductError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl std::fmt::Display for Price {
    /// `18000` renders as `18,000`; fractional amounts keep two decimals.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cents = self.cents();
        let whole = cents / 100;
        let fraction = cents % 100;

        let digits = whole.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        if fraction == 0 {
            write!(f, "{}", grouped)
        } else {
            write!(f, "{}.{:02}", grouped, fraction)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_parse_plain_and_grouped_amounts() {
        assert_eq!(Price::parse("18000").unwrap().amount(), 18000.0);
        assert_eq!(Price::parse(" 18,000 ").unwrap().amount(), 18000.0);
        assert_eq!(Price::parse("12.5").unwrap().amount(), 12.5);
        assert_eq!(Price::parse("0").unwrap().amount(), 0.0);
    }

    #[test]
    fn should_reject_missing_price() {
        assert!(matches!(Price::parse(""), Err(ProductError::PriceMissing)));
        assert!(matches!(Price::parse("   "), Err(ProductError::PriceMissing)));
    }

    #[test]
    fn should_reject_negative_or_non_numeric_price() {
        assert!(matches!(Price::parse("-1"), Err(ProductError::PriceInvalid)));
        assert!(matches!(Price::parse("abc"), Err(ProductError::PriceInvalid)));
        assert!(matches!(Price::parse("NaN"), Err(ProductError::PriceInvalid)));
        assert!(matches!(Price::parse("inf"), Err(ProductError::PriceInvalid)));
    }

    #[test]
    fn should_reject_amounts_beyond_storage_range() {
        assert!(matches!(
            Price::parse("100000000000000000000"),
            Err(ProductError::PriceInvalid)
        ));
        assert!(matches!(
            Price::parse("10,000,000,000"),
            Err(ProductError::PriceInvalid)
        ));
        assert!(matches!(
            Price::new(9_999_999_999.995),
            Err(ProductError::PriceInvalid)
        ));
    }

    #[test]
    fn should_display_largest_price_exactly() {
        let price = Price::parse("9,999,999,999.99").unwrap();

        assert_eq!(price.cents(), 999_999_999_999);
        assert_eq!(price.to_string(), "9,999,999,999.99");
    }

    #[test]
    fn should_display_with_thousands_separators() {
        assert_eq!(Price::new(18000.0).unwrap().to_string(), "18,000");
        assert_eq!(Price::new(1234567.0).unwrap().to_string(), "1,234,567");
        assert_eq!(Price::new(999.0).unwrap().to_string(), "999");
        assert_eq!(Price::new(12.5).unwrap().to_string(), "12.50");
        assert_eq!(Price::new(0.0).unwrap().to_string(), "0");
    }

    #[test]
    fn should_reject_negative_price_when_deserializing() {
        let parsed: Result<Price, _> = serde_json::from_str("-5");
        assert!(parsed.is_err());
        let parsed: Price = serde_json::from_str("8800").unwrap();
        assert_eq!(parsed.amount(), 8800.0);
    }

    #[test]
    fn should_display_product_id() {
        let id = ProductId::new("a1b2");
        assert_eq!(id.to_string(), "a1b2");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"a1b2\"");
    }

    proptest! {
        #[test]
        fn parsed_prices_are_never_negative(raw in "\\PC*") {
            if let Ok(price) = Price::parse(&raw) {
                prop_assert!(price.amount() >= 0.0);
                prop_assert!(price.amount().is_finite());
                prop_assert!(price.amount() <= MAX_PRICE);
            }
        }
    }
}
