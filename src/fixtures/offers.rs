//! Offer Fixtures

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    offers::{BuyOneGetHalfOffRedWidgetOffer, PercentageDiscountOffer, SharedOffer, offer},
};

/// An offer from YAML, tagged by `type`
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OfferFixture {
    /// Percentage off every product
    PercentageDiscount {
        /// Percentage points as a decimal string (e.g. "10" for 10%)
        percentage: String,
    },

    /// Every second red widget at half price
    BuyOneGetHalfOffRedWidget,
}

impl OfferFixture {
    /// Build the configured offer.
    ///
    /// # Errors
    ///
    /// Returns an error if the percentage does not parse or is out of range.
    pub fn try_into_offer(self) -> Result<SharedOffer<'static>, FixtureError> {
        match self {
            OfferFixture::PercentageDiscount { percentage } => {
                let points = parse_percentage(&percentage)?;

                Ok(offer(PercentageDiscountOffer::new(points)?))
            }
            OfferFixture::BuyOneGetHalfOffRedWidget => {
                Ok(offer(BuyOneGetHalfOffRedWidgetOffer::new()))
            }
        }
    }
}

/// Parse percentage points, allowing an optional trailing `%`.
///
/// # Errors
///
/// Returns [`FixtureError::InvalidPercentage`] if the string is not a number.
pub fn parse_percentage(s: &str) -> Result<Decimal, FixtureError> {
    let trimmed = s.trim();

    trimmed
        .strip_suffix('%')
        .unwrap_or(trimmed)
        .trim_end()
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPercentage(s.to_string()))
}
