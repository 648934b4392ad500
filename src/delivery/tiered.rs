//! Tiered Delivery
//!
//! Delivery cost chosen by spend bracket. The standard tiers are:
//!
//! | Spend           | Cost  |
//! |-----------------|-------|
//! | under 50.00     | 4.95  |
//! | 50.00 to 89.99  | 2.95  |
//! | 90.00 and above | free  |
//!
//! Each tier's lower bound is inclusive.

use rust_decimal::Decimal;
use smallvec::{SmallVec, smallvec};

use crate::{
    delivery::{DeliveryRule, DeliveryRuleError, non_negative},
    pricing::{TotalPriceError, total_price},
    products::Product,
};

/// A spend bracket starting at `threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryTier {
    threshold: Decimal,
    cost: Decimal,
}

impl DeliveryTier {
    /// Create a tier charging `cost` from `threshold` spend upwards.
    pub fn new(threshold: Decimal, cost: Decimal) -> Self {
        Self { threshold, cost }
    }

    /// Return the spend this tier starts at
    pub fn threshold(&self) -> Decimal {
        self.threshold
    }

    /// Return the delivery cost for this tier
    pub fn cost(&self) -> Decimal {
        self.cost
    }
}

/// Delivery cost picked from the highest tier the spend reaches.
#[derive(Debug, Clone)]
pub struct TieredDeliveryRule {
    /// Sorted by ascending threshold, first tier starts at zero.
    tiers: SmallVec<[DeliveryTier; 3]>,
}

impl TieredDeliveryRule {
    /// The standard tiers: 4.95 under 50, 2.95 under 90, free from 90.
    pub fn standard() -> Self {
        Self {
            tiers: smallvec![
                DeliveryTier::new(Decimal::ZERO, Decimal::new(495, 2)),
                DeliveryTier::new(Decimal::new(50, 0), Decimal::new(295, 2)),
                DeliveryTier::new(Decimal::new(90, 0), Decimal::ZERO),
            ],
        }
    }

    /// Create a rule from custom tiers, in any order.
    ///
    /// When two tiers share a threshold the one supplied last wins.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`DeliveryRuleError::NegativeThreshold`] or [`DeliveryRuleError::NegativeCost`]
    ///   if any tier has a negative value.
    /// - [`DeliveryRuleError::MissingBaseTier`] if no tier starts at zero.
    pub fn new(tiers: impl IntoIterator<Item = DeliveryTier>) -> Result<Self, DeliveryRuleError> {
        let mut tiers = tiers
            .into_iter()
            .map(|tier| {
                Ok(DeliveryTier::new(
                    non_negative(tier.threshold, DeliveryRuleError::NegativeThreshold)?,
                    non_negative(tier.cost, DeliveryRuleError::NegativeCost)?,
                ))
            })
            .collect::<Result<SmallVec<[DeliveryTier; 3]>, DeliveryRuleError>>()?;

        if !tiers.iter().any(|tier| tier.threshold.is_zero()) {
            return Err(DeliveryRuleError::MissingBaseTier);
        }

        tiers.sort_by_key(|tier| tier.threshold);

        Ok(Self { tiers })
    }

    /// Return the tiers in ascending threshold order
    pub fn tiers(&self) -> &[DeliveryTier] {
        &self.tiers
    }

    /// Delivery cost for a given spend.
    pub fn cost_for(&self, spend: Decimal) -> Decimal {
        self.tiers
            .iter()
            .rev()
            .find(|tier| spend >= tier.threshold)
            .map_or(Decimal::ZERO, DeliveryTier::cost)
    }
}

impl Default for TieredDeliveryRule {
    fn default() -> Self {
        Self::standard()
    }
}

impl DeliveryRule for TieredDeliveryRule {
    fn calculate(&self, products: &[Product]) -> Result<Decimal, TotalPriceError> {
        Ok(self.cost_for(total_price(products)?))
    }
}
