//! Delivery
//!
//! Delivery rules price the surcharge for a basket from its (already
//! discounted) products.

use std::{fmt::Debug, sync::Arc};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{pricing::TotalPriceError, products::Product};

pub mod threshold;
pub mod tiered;

pub use threshold::ThresholdDeliveryRule;
pub use tiered::{DeliveryTier, TieredDeliveryRule};

/// Errors raised while configuring a delivery rule.
#[derive(Debug, Error, PartialEq)]
pub enum DeliveryRuleError {
    /// Spend threshold below zero.
    #[error("Threshold cannot be negative, got {0}")]
    NegativeThreshold(Decimal),

    /// Delivery cost below zero.
    #[error("Delivery cost cannot be negative, got {0}")]
    NegativeCost(Decimal),

    /// No tier starts at zero spend, so some baskets would have no cost.
    #[error("Tiered delivery needs a tier starting at zero")]
    MissingBaseTier,
}

/// Computes a non-negative delivery surcharge.
pub trait DeliveryRule: Debug + Send + Sync {
    /// Calculate the delivery cost for the given products.
    ///
    /// # Errors
    ///
    /// Returns [`TotalPriceError`] if summing the products overflows.
    fn calculate(&self, products: &[Product]) -> Result<Decimal, TotalPriceError>;
}

/// Delivery rule object held by a basket.
pub type SharedDeliveryRule<'a> = Arc<dyn DeliveryRule + 'a>;

/// Convert any delivery rule implementation into a shared delivery rule object.
pub fn delivery_rule<'a, R>(rule: R) -> SharedDeliveryRule<'a>
where
    R: DeliveryRule + 'a,
{
    Arc::new(rule)
}

/// Reject negative amounts with the given error.
fn non_negative(
    value: Decimal,
    error: impl FnOnce(Decimal) -> DeliveryRuleError,
) -> Result<Decimal, DeliveryRuleError> {
    if value < Decimal::ZERO {
        Err(error(value))
    } else {
        Ok(value)
    }
}
