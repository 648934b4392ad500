//! Threshold Delivery
//!
//! Free delivery once spend reaches a threshold, a flat cost below it.

use rust_decimal::Decimal;

use crate::{
    delivery::{DeliveryRule, DeliveryRuleError, non_negative},
    pricing::{TotalPriceError, total_price},
    products::Product,
};

/// Free delivery at or above `threshold`, otherwise `cost`.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdDeliveryRule {
    threshold: Decimal,
    cost: Decimal,
}

impl ThresholdDeliveryRule {
    /// Create a new threshold delivery rule.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryRuleError::NegativeThreshold`] or
    /// [`DeliveryRuleError::NegativeCost`] for negative inputs.
    pub fn new(threshold: Decimal, cost: Decimal) -> Result<Self, DeliveryRuleError> {
        Ok(Self {
            threshold: non_negative(threshold, DeliveryRuleError::NegativeThreshold)?,
            cost: non_negative(cost, DeliveryRuleError::NegativeCost)?,
        })
    }

    /// Return the spend threshold for free delivery
    pub fn threshold(&self) -> Decimal {
        self.threshold
    }

    /// Return the cost charged below the threshold
    pub fn cost(&self) -> Decimal {
        self.cost
    }
}

impl DeliveryRule for ThresholdDeliveryRule {
    fn calculate(&self, products: &[Product]) -> Result<Decimal, TotalPriceError> {
        if total_price(products)? >= self.threshold {
            Ok(Decimal::ZERO)
        } else {
            Ok(self.cost)
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn priced(amounts: &[Decimal]) -> Result<Vec<Product>, crate::products::ProductError> {
        amounts
            .iter()
            .map(|amount| Product::new("ITEM", "Item", *amount))
            .collect()
    }

    #[test]
    fn new_rejects_negative_values() {
        assert_eq!(
            ThresholdDeliveryRule::new(Decimal::NEGATIVE_ONE, Decimal::TWO).err(),
            Some(DeliveryRuleError::NegativeThreshold(Decimal::NEGATIVE_ONE))
        );
        assert_eq!(
            ThresholdDeliveryRule::new(Decimal::TEN, Decimal::NEGATIVE_ONE).err(),
            Some(DeliveryRuleError::NegativeCost(Decimal::NEGATIVE_ONE))
        );
    }

    #[test]
    fn accessors_return_constructor_values() -> TestResult {
        let rule = ThresholdDeliveryRule::new(Decimal::new(500, 2), Decimal::new(200, 2))?;

        assert_eq!(rule.threshold(), Decimal::new(500, 2));
        assert_eq!(rule.cost(), Decimal::new(200, 2));

        Ok(())
    }

    #[test]
    fn charges_below_threshold() -> TestResult {
        let rule = ThresholdDeliveryRule::new(Decimal::new(500, 2), Decimal::new(200, 2))?;
        let products = priced(&[Decimal::new(150, 2), Decimal::new(200, 2)])?;

        assert_eq!(rule.calculate(&products)?, Decimal::new(200, 2));

        Ok(())
    }

    #[test]
    fn free_at_exactly_threshold() -> TestResult {
        let rule = ThresholdDeliveryRule::new(Decimal::new(500, 2), Decimal::new(200, 2))?;
        let products = priced(&[Decimal::new(300, 2), Decimal::new(200, 2)])?;

        assert_eq!(rule.calculate(&products)?, Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn free_above_threshold() -> TestResult {
        let rule = ThresholdDeliveryRule::new(Decimal::new(500, 2), Decimal::new(200, 2))?;
        let products = priced(&[Decimal::new(1000, 2)])?;

        assert_eq!(rule.calculate(&products)?, Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn overflowing_spend_is_an_error() -> TestResult {
        let rule = ThresholdDeliveryRule::new(Decimal::TEN, Decimal::TWO)?;
        let products = priced(&[Decimal::MAX, Decimal::MAX])?;

        assert_eq!(rule.calculate(&products), Err(TotalPriceError::Overflow));

        Ok(())
    }

    #[test]
    fn empty_basket_pays_unless_threshold_is_zero() -> TestResult {
        let paid = ThresholdDeliveryRule::new(Decimal::ONE, Decimal::TWO)?;
        let free = ThresholdDeliveryRule::new(Decimal::ZERO, Decimal::TWO)?;

        assert_eq!(paid.calculate(&[])?, Decimal::TWO);
        assert_eq!(free.calculate(&[])?, Decimal::ZERO);

        Ok(())
    }
}
