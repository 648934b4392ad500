//! Basket
//!
//! Tracks quantities of catalogue products and prices them through the
//! configured offers and delivery rule.
//!
//! Pricing runs in a fixed order:
//!
//! 1. Quantities are expanded to one [`Product`] per unit, in the order codes
//!    were first added.
//! 2. Each offer is applied in turn to the output of the previous one.
//! 3. The first delivery rule (if any) prices delivery from the discounted
//!    products. Any further rules are ignored.
//! 4. The total is the discounted subtotal plus delivery.

use rust_decimal::Decimal;
use smallvec::SmallVec;
use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    catalogue::Catalogue,
    delivery::SharedDeliveryRule,
    offers::SharedOffer,
    pricing::{TotalPriceError, checked_sum, total_price},
    products::{Product, ProductKey},
    receipt::Receipt,
};

/// Errors related to basket updates.
#[derive(Debug, Error, PartialEq)]
pub enum BasketError {
    /// The product code is not in the catalogue.
    #[error("Product with code '{0}' not found in catalogue")]
    ProductNotFound(String),
}

/// Basket
///
/// Holds quantities of catalogue products along with the offers and delivery
/// rules used to price them.
#[derive(Debug, Clone)]
pub struct Basket<'a> {
    catalogue: Catalogue,

    /// Quantities in first-added order. Quantities are always above zero.
    lines: SmallVec<[(ProductKey, usize); 8]>,

    delivery_rules: Vec<SharedDeliveryRule<'a>>,
    offers: Vec<SharedOffer<'a>>,
}

impl<'a> Basket<'a> {
    /// Create an empty basket with no offers or delivery rules.
    pub fn new(catalogue: impl Into<Catalogue>) -> Self {
        Self::with_rules(catalogue, Vec::new(), Vec::new())
    }

    /// Create an empty basket with delivery rules and offers.
    ///
    /// Offers are applied in the order given. Only the first delivery rule is used.
    pub fn with_rules(
        catalogue: impl Into<Catalogue>,
        delivery_rules: Vec<SharedDeliveryRule<'a>>,
        offers: Vec<SharedOffer<'a>>,
    ) -> Self {
        if delivery_rules.len() > 1 {
            debug!(
                configured = delivery_rules.len(),
                "only the first delivery rule will be used"
            );
        }

        Basket {
            catalogue: catalogue.into(),
            lines: SmallVec::new(),
            delivery_rules,
            offers,
        }
    }

    /// Add one unit of a product.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::ProductNotFound`] if `code` is not in the catalogue.
    /// The basket is left unchanged.
    pub fn add(&mut self, code: &str) -> Result<(), BasketError> {
        let key = self
            .catalogue
            .key(code)
            .ok_or_else(|| BasketError::ProductNotFound(code.to_string()))?;

        match self.lines.iter_mut().find(|(line_key, _)| *line_key == key) {
            Some((_, quantity)) => *quantity += 1,
            None => self.lines.push((key, 1)),
        }

        trace!(code, quantity = self.quantity_of(code), "added product");

        Ok(())
    }

    /// Remove one unit of a product.
    ///
    /// Returns `false` if the product was not in the basket.
    pub fn remove(&mut self, code: &str) -> bool {
        let Some(key) = self.catalogue.key(code) else {
            return false;
        };

        let Some(idx) = self.lines.iter().position(|(line_key, _)| *line_key == key) else {
            return false;
        };

        if let Some((_, quantity)) = self.lines.get_mut(idx) {
            if *quantity > 1 {
                *quantity -= 1;
            } else {
                self.lines.remove(idx);
            }
        }

        trace!(code, quantity = self.quantity_of(code), "removed product");

        true
    }

    /// Remove everything from the basket.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Number of distinct products in the basket.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of units across all products.
    pub fn total_quantity(&self) -> usize {
        self.lines.iter().map(|(_, quantity)| quantity).sum()
    }

    /// Whether the basket holds at least one unit of `code`.
    pub fn contains(&self, code: &str) -> bool {
        self.quantity_of(code) > 0
    }

    /// Units of `code` in the basket, zero if absent.
    pub fn quantity_of(&self, code: &str) -> usize {
        self.catalogue.key(code).map_or(0, |key| {
            self.lines
                .iter()
                .find(|(line_key, _)| *line_key == key)
                .map_or(0, |(_, quantity)| *quantity)
        })
    }

    /// Check if the basket is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The catalogue this basket draws from.
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Configured offers, in application order.
    pub fn offers(&self) -> &[SharedOffer<'a>] {
        &self.offers
    }

    /// Configured delivery rules. Only the first is used.
    pub fn delivery_rules(&self) -> &[SharedDeliveryRule<'a>] {
        &self.delivery_rules
    }

    /// One product per unit, grouped by product in first-added order.
    pub fn products(&self) -> Vec<Product> {
        let mut products = Vec::with_capacity(self.total_quantity());

        for (key, quantity) in &self.lines {
            if let Some(product) = self.catalogue.product(*key) {
                products.extend(std::iter::repeat_n(product, *quantity).cloned());
            }
        }

        products
    }

    /// The expanded products after every offer has been applied.
    pub fn discounted_products(&self) -> Vec<Product> {
        let mut products = self.products();

        for (idx, offer) in self.offers.iter().enumerate() {
            products = offer.apply(&products);

            trace!(offer = idx, products = products.len(), "applied offer");
        }

        products
    }

    /// Price of everything in the basket before offers.
    ///
    /// # Errors
    ///
    /// Returns [`TotalPriceError::Overflow`] if the sum does not fit in a `Decimal`.
    pub fn subtotal(&self) -> Result<Decimal, TotalPriceError> {
        total_price(&self.products())
    }

    /// Delivery cost for a set of discounted products.
    fn delivery_for(&self, discounted: &[Product]) -> Result<Decimal, TotalPriceError> {
        self.delivery_rules
            .first()
            .map_or(Ok(Decimal::ZERO), |rule| rule.calculate(discounted))
    }

    /// Delivery cost for the basket after offers.
    ///
    /// # Errors
    ///
    /// Returns [`TotalPriceError::Overflow`] if the delivery rule cannot sum
    /// the discounted products.
    pub fn delivery_cost(&self) -> Result<Decimal, TotalPriceError> {
        self.delivery_for(&self.discounted_products())
    }

    /// Total cost including offers and delivery.
    ///
    /// Recomputed from scratch on every call.
    ///
    /// # Errors
    ///
    /// Returns [`TotalPriceError::Overflow`] if any sum does not fit in a `Decimal`.
    pub fn total(&self) -> Result<Decimal, TotalPriceError> {
        let discounted = self.discounted_products();
        let subtotal = total_price(&discounted)?;
        let delivery = self.delivery_for(&discounted)?;
        let total = checked_sum(subtotal, delivery)?;

        debug!(
            items = discounted.len(),
            %subtotal,
            %delivery,
            %total,
            "calculated basket total"
        );

        Ok(total)
    }

    /// Build a receipt for the current contents.
    ///
    /// # Errors
    ///
    /// Returns [`TotalPriceError::Overflow`] if any sum does not fit in a `Decimal`.
    pub fn receipt(&self) -> Result<Receipt, TotalPriceError> {
        let discounted = self.discounted_products();
        let delivery = self.delivery_for(&discounted)?;

        Receipt::new(&self.catalogue, self.subtotal()?, discounted, delivery)
    }
}
