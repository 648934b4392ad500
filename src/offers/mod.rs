//! Offers
//!
//! An offer rewrites the expanded basket sequence into a repriced one. Offers
//! are chained: each one sees the output of the offer before it.

use std::{fmt::Debug, sync::Arc};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::products::Product;

pub mod percentage_discount;
pub mod red_widget;

pub use percentage_discount::PercentageDiscountOffer;
pub use red_widget::{BuyOneGetHalfOffRedWidgetOffer, is_red_widget};

/// Errors raised while configuring an offer.
#[derive(Debug, Error, PartialEq)]
pub enum OfferError {
    /// Percentage points outside `0..=100`.
    #[error("Percentage must be between 0 and 100, got {0}")]
    PercentageOutOfRange(Decimal),
}

/// A pricing transformation over the products in a basket.
///
/// Implementations must not rely on being able to mutate the input; any repriced
/// product is a new [`Product`] value.
pub trait Offer: Debug + Send + Sync {
    /// Apply the offer, returning the repriced products.
    fn apply(&self, products: &[Product]) -> Vec<Product>;
}

/// Offer object held by a basket.
pub type SharedOffer<'a> = Arc<dyn Offer + 'a>;

/// Convert any offer implementation into a shared offer object.
pub fn offer<'a, O>(offer: O) -> SharedOffer<'a>
where
    O: Offer + 'a,
{
    Arc::new(offer)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[derive(Debug)]
    struct Reverse;

    impl Offer for Reverse {
        fn apply(&self, products: &[Product]) -> Vec<Product> {
            products.iter().rev().cloned().collect()
        }
    }

    #[test]
    fn offer_helper_wraps_trait_implementation() -> TestResult {
        let wrapped = offer(Reverse);
        let products = [
            Product::new("A", "A", Decimal::ONE)?,
            Product::new("B", "B", Decimal::TWO)?,
        ];

        let applied = wrapped.apply(&products);
        let codes: Vec<&str> = applied.iter().map(Product::code).collect();

        assert_eq!(codes, vec!["B", "A"]);

        Ok(())
    }
}
