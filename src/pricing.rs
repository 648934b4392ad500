//! Pricing

use rust_decimal::Decimal;
use thiserror::Error;

use crate::products::Product;

/// Errors that can occur while calculating total price.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// The sum does not fit in a `Decimal`.
    #[error("total price overflowed")]
    Overflow,
}

/// Calculates the total price of a list of products.
///
/// An empty list totals zero.
///
/// # Errors
///
/// Returns [`TotalPriceError::Overflow`] if the sum does not fit in a `Decimal`.
pub fn total_price(products: &[Product]) -> Result<Decimal, TotalPriceError> {
    products.iter().try_fold(Decimal::ZERO, |acc, product| {
        acc.checked_add(product.price())
            .ok_or(TotalPriceError::Overflow)
    })
}

/// Adds two amounts, failing instead of overflowing.
///
/// # Errors
///
/// Returns [`TotalPriceError::Overflow`] if the sum does not fit in a `Decimal`.
pub fn checked_sum(a: Decimal, b: Decimal) -> Result<Decimal, TotalPriceError> {
    a.checked_add(b).ok_or(TotalPriceError::Overflow)
}
