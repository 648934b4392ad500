//! Delivery Fixtures

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    delivery::{
        DeliveryTier, SharedDeliveryRule, ThresholdDeliveryRule, TieredDeliveryRule,
        delivery_rule,
    },
    fixtures::FixtureError,
};

/// A delivery rule from YAML, tagged by `type`
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeliveryFixture {
    /// Flat cost below a spend threshold
    Threshold {
        /// Spend at which delivery becomes free
        threshold: String,

        /// Cost charged below the threshold
        cost: String,
    },

    /// Cost by spend bracket, the standard brackets when `tiers` is omitted
    Tiered {
        /// Custom tiers
        #[serde(default)]
        tiers: Option<Vec<TierFixture>>,
    },
}

/// A single spend bracket
#[derive(Debug, Clone, Deserialize)]
pub struct TierFixture {
    /// Spend the bracket starts at
    pub threshold: String,

    /// Delivery cost within the bracket
    pub cost: String,
}

impl DeliveryFixture {
    /// Build the configured delivery rule.
    ///
    /// # Errors
    ///
    /// Returns an error if an amount does not parse or the rule rejects it.
    pub fn try_into_rule(self) -> Result<SharedDeliveryRule<'static>, FixtureError> {
        match self {
            DeliveryFixture::Threshold { threshold, cost } => Ok(delivery_rule(
                ThresholdDeliveryRule::new(parse_amount(&threshold)?, parse_amount(&cost)?)?,
            )),
            DeliveryFixture::Tiered { tiers: None } => {
                Ok(delivery_rule(TieredDeliveryRule::standard()))
            }
            DeliveryFixture::Tiered { tiers: Some(tiers) } => {
                let tiers = tiers
                    .iter()
                    .map(|tier| {
                        Ok(DeliveryTier::new(
                            parse_amount(&tier.threshold)?,
                            parse_amount(&tier.cost)?,
                        ))
                    })
                    .collect::<Result<Vec<_>, FixtureError>>()?;

                Ok(delivery_rule(TieredDeliveryRule::new(tiers)?))
            }
        }
    }
}

fn parse_amount(s: &str) -> Result<Decimal, FixtureError> {
    s.trim()
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidAmount(s.to_string()))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{delivery::DeliveryRuleError, products::Product};

    use super::*;

    fn spend(amount: Decimal) -> Result<Vec<Product>, crate::products::ProductError> {
        Ok(vec![Product::new("A", "A", amount)?])
    }

    #[test]
    fn threshold_fixture_builds_rule() -> TestResult {
        let fixture: DeliveryFixture =
            serde_norway::from_str("type: threshold\nthreshold: \"5.00\"\ncost: \"2.00\"\n")?;

        let rule = fixture.try_into_rule()?;

        assert_eq!(rule.calculate(&spend(Decimal::new(499, 2))?)?, Decimal::TWO);
        assert_eq!(rule.calculate(&spend(Decimal::new(500, 2))?)?, Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn tiered_fixture_without_tiers_is_standard() -> TestResult {
        let fixture: DeliveryFixture = serde_norway::from_str("type: tiered\n")?;

        let rule = fixture.try_into_rule()?;

        assert_eq!(rule.calculate(&[])?, Decimal::new(495, 2));
        assert_eq!(rule.calculate(&spend(Decimal::new(50, 0))?)?, Decimal::new(295, 2));
        assert_eq!(rule.calculate(&spend(Decimal::new(90, 0))?)?, Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn tiered_fixture_with_custom_tiers() -> TestResult {
        let yaml = r#"
type: tiered
tiers:
  - threshold: "0"
    cost: "3.00"
  - threshold: "20"
    cost: "0"
"#;
        let fixture: DeliveryFixture = serde_norway::from_str(yaml)?;

        let rule = fixture.try_into_rule()?;

        assert_eq!(rule.calculate(&spend(Decimal::new(1999, 2))?)?, Decimal::new(3, 0));
        assert_eq!(rule.calculate(&spend(Decimal::new(20, 0))?)?, Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn tiers_without_base_tier_are_rejected() -> TestResult {
        let yaml = "type: tiered\ntiers:\n  - threshold: \"10\"\n    cost: \"1\"\n";
        let fixture: DeliveryFixture = serde_norway::from_str(yaml)?;

        assert!(matches!(
            fixture.try_into_rule(),
            Err(FixtureError::DeliveryRule(DeliveryRuleError::MissingBaseTier))
        ));

        Ok(())
    }

    #[test]
    fn bad_amounts_are_reported() {
        let fixture = DeliveryFixture::Threshold {
            threshold: "five".to_string(),
            cost: "2".to_string(),
        };

        assert!(matches!(
            fixture.try_into_rule(),
            Err(FixtureError::InvalidAmount(s)) if s == "five"
        ));
    }
}
