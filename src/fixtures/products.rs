//! Product Fixtures

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{fixtures::FixtureError, products::Product};

/// A catalogue entry from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ProductFixture {
    /// Product code, unique within the catalogue
    pub code: String,

    /// Product name
    pub name: String,

    /// Price as a decimal string (e.g. "32.95")
    pub price: String,
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let price = parse_price(&fixture.price)?;

        Ok(Product::new(fixture.code, fixture.name, price)?)
    }
}

/// Parse a price string into a decimal amount.
///
/// # Errors
///
/// Returns [`FixtureError::InvalidPrice`] if the string is not a decimal number.
pub fn parse_price(s: &str) -> Result<Decimal, FixtureError> {
    s.trim()
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))
}
