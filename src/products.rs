//! Products

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use slotmap::new_key_type;
use thiserror::Error;

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// Errors raised while constructing a product.
#[derive(Debug, Error, PartialEq)]
pub enum ProductError {
    /// The product price was below zero.
    #[error("Product {code} has negative price {price}")]
    NegativePrice {
        /// Code of the rejected product
        code: String,

        /// Price that was rejected
        price: Decimal,
    },
}

/// An immutable catalogue entry.
///
/// Two products are equal when their codes match, regardless of name or price.
/// Repricing never mutates a product; it returns a new one with the same code
/// and name.
#[derive(Debug, Clone)]
pub struct Product {
    code: String,
    name: String,
    price: Decimal,
}

impl Product {
    /// Create a new product.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::NegativePrice`] if `price` is below zero.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
    ) -> Result<Self, ProductError> {
        let code = code.into();

        if price < Decimal::ZERO {
            return Err(ProductError::NegativePrice { code, price });
        }

        Ok(Self {
            code,
            name: name.into(),
            price,
        })
    }

    /// Returns the product code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns a copy of this product at a different price.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::NegativePrice`] if `price` is below zero.
    pub fn with_price(&self, price: Decimal) -> Result<Self, ProductError> {
        Self::new(self.code.clone(), self.name.clone(), price)
    }

    /// Returns a copy of this product with `discount` taken off its price.
    ///
    /// The discount is clamped to `0..=1`, so the price never rises and never
    /// goes below zero.
    #[must_use]
    pub fn discounted(&self, discount: Percentage) -> Self {
        let fraction = (discount * Decimal::ONE).clamp(Decimal::ZERO, Decimal::ONE);
        let price = self.price - self.price * fraction;

        Self {
            code: self.code.clone(),
            name: self.name.clone(),
            price,
        }
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
