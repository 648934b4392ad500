//! Trolley prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::{Basket, BasketError},
    catalogue::Catalogue,
    delivery::{
        DeliveryRule, DeliveryRuleError, DeliveryTier, SharedDeliveryRule, ThresholdDeliveryRule,
        TieredDeliveryRule, delivery_rule,
    },
    fixtures::{Fixture, FixtureError},
    offers::{
        BuyOneGetHalfOffRedWidgetOffer, Offer, OfferError, PercentageDiscountOffer, SharedOffer,
        is_red_widget, offer,
    },
    pricing::{TotalPriceError, total_price},
    products::{Product, ProductError, ProductKey},
    receipt::{Receipt, ReceiptError, ReceiptLine},
};
