//! Percentage Discount
//!
//! A flat percentage off every product in the basket.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;

use crate::{
    offers::{Offer, OfferError},
    products::Product,
};

/// Takes a fixed percentage off every product.
#[derive(Debug, Clone, Copy)]
pub struct PercentageDiscountOffer {
    points: Decimal,
    discount: Percentage,
}

impl PercentageDiscountOffer {
    /// Create a new percentage discount from percentage points (`10` is 10% off).
    ///
    /// # Errors
    ///
    /// Returns [`OfferError::PercentageOutOfRange`] unless `0 <= points <= 100`.
    pub fn new(points: Decimal) -> Result<Self, OfferError> {
        if points < Decimal::ZERO || points > Decimal::ONE_HUNDRED {
            return Err(OfferError::PercentageOutOfRange(points));
        }

        Ok(Self {
            points,
            discount: Percentage::from(points / Decimal::ONE_HUNDRED),
        })
    }

    /// Return the discount in percentage points
    pub fn percentage(&self) -> Decimal {
        self.points
    }
}

impl Offer for PercentageDiscountOffer {
    fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .map(|product| product.discounted(self.discount))
            .collect()
    }
}
