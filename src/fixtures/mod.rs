//! Fixtures
//!
//! A fixture set is one YAML file describing a catalogue, the codes to put in
//! the basket, and the offers and delivery rules to price it with:
//!
//! ```yaml
//! products:
//!   - code: R01
//!     name: Red Widget
//!     price: "32.95"
//! items: [R01, R01]
//! offers:
//!   - type: buy_one_get_half_off_red_widget
//! delivery:
//!   - type: tiered
//! ```

use std::{fs, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    basket::{Basket, BasketError},
    catalogue::Catalogue,
    delivery::{DeliveryRuleError, SharedDeliveryRule},
    fixtures::{delivery::DeliveryFixture, offers::OfferFixture, products::ProductFixture},
    offers::{OfferError, SharedOffer},
    products::{Product, ProductError},
};

pub mod delivery;
pub mod offers;
pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid percentage format
    #[error("Invalid percentage format: {0}")]
    InvalidPercentage(String),

    /// Invalid delivery amount format
    #[error("Invalid amount format: {0}")]
    InvalidAmount(String),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Not enough items available
    #[error("Requested {requested} items but only {available} available")]
    NotEnoughItems {
        /// Number of items requested
        requested: usize,

        /// Number of items available
        available: usize,
    },

    /// Product rejected
    #[error(transparent)]
    Product(#[from] ProductError),

    /// Offer rejected
    #[error(transparent)]
    Offer(#[from] OfferError),

    /// Delivery rule rejected
    #[error(transparent)]
    DeliveryRule(#[from] DeliveryRuleError),

    /// Basket creation error
    #[error("Failed to create basket: {0}")]
    Basket(#[from] BasketError),
}

/// Wrapper for a fixture set in YAML
#[derive(Debug, Deserialize)]
struct SetFixture {
    products: Vec<ProductFixture>,

    #[serde(default)]
    items: Vec<String>,

    #[serde(default)]
    offers: Vec<OfferFixture>,

    #[serde(default)]
    delivery: Vec<DeliveryFixture>,
}

/// Fixture
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    catalogue: Catalogue,

    /// Product codes to add, in order
    items: Vec<String>,

    offers: Vec<SharedOffer<'static>>,
    delivery_rules: Vec<SharedDeliveryRule<'static>>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            catalogue: Catalogue::default(),
            items: Vec::new(),
            offers: Vec::new(),
            delivery_rules: Vec::new(),
        }
    }

    /// Load a fixture set from `<base_path>/<name>.yml`, replacing anything
    /// loaded before.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or it contains
    /// invalid products, offers or delivery rules.
    pub fn load(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join(format!("{name}.yml"));

        debug!(path = %file_path.display(), "loading fixture set");

        let contents = fs::read_to_string(file_path)?;

        self.load_yaml(&contents)
    }

    /// Load a fixture set from a YAML string, replacing anything loaded before.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed or it contains invalid
    /// products, offers or delivery rules.
    pub fn load_yaml(&mut self, yaml: &str) -> Result<&mut Self, FixtureError> {
        let set: SetFixture = serde_norway::from_str(yaml)?;

        let products = set
            .products
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let offers = set
            .offers
            .into_iter()
            .map(OfferFixture::try_into_offer)
            .collect::<Result<Vec<_>, _>>()?;

        let delivery_rules = set
            .delivery
            .into_iter()
            .map(DeliveryFixture::try_into_rule)
            .collect::<Result<Vec<_>, _>>()?;

        self.catalogue = Catalogue::new(products);
        self.items = set.items;
        self.offers = offers;
        self.delivery_rules = delivery_rules;

        Ok(self)
    }

    /// Load a fixture set by name from the default base path
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture set cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load(name)?;

        Ok(fixture)
    }

    /// Create a fixture from a YAML string
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be loaded.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_yaml(yaml)?;

        Ok(fixture)
    }

    /// Get a product by its code
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn product(&self, code: &str) -> Result<&Product, FixtureError> {
        self.catalogue
            .get(code)
            .ok_or_else(|| FixtureError::ProductNotFound(code.to_string()))
    }

    /// Get the loaded catalogue
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Get the product codes listed under `items`
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Get the loaded offers
    pub fn offers(&self) -> &[SharedOffer<'static>] {
        &self.offers
    }

    /// Get the loaded delivery rules
    pub fn delivery_rules(&self) -> &[SharedDeliveryRule<'static>] {
        &self.delivery_rules
    }

    /// Create a basket with the fixture's rules and no items
    pub fn empty_basket(&self) -> Basket<'static> {
        Basket::with_rules(
            self.catalogue.clone(),
            self.delivery_rules.clone(),
            self.offers.clone(),
        )
    }

    /// Create a basket with the fixture's rules and the first `n` items, or
    /// all of them when `n` is `None`
    ///
    /// # Errors
    ///
    /// Returns an error if more items are requested than are listed, or an
    /// item code is not in the catalogue.
    pub fn basket(&self, n: Option<usize>) -> Result<Basket<'static>, FixtureError> {
        if let Some(n) = n
            && n > self.items.len()
        {
            return Err(FixtureError::NotEnoughItems {
                requested: n,
                available: self.items.len(),
            });
        }

        let mut basket = self.empty_basket();

        for code in self.items.iter().take(n.unwrap_or(self.items.len())) {
            basket.add(code)?;
        }

        Ok(basket)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    const WIDGETS: &str = r#"
products:
  - code: R01
    name: Red Widget
    price: "32.95"
  - code: G01
    name: Green Widget
    price: "24.95"
items: [R01, G01, R01]
offers:
  - type: buy_one_get_half_off_red_widget
delivery:
  - type: tiered
"#;

    #[test]
    fn from_yaml_loads_every_section() -> TestResult {
        let fixture = Fixture::from_yaml(WIDGETS)?;

        assert_eq!(fixture.catalogue().len(), 2);
        assert_eq!(fixture.items(), ["R01", "G01", "R01"]);
        assert_eq!(fixture.offers().len(), 1);
        assert_eq!(fixture.delivery_rules().len(), 1);
        assert_eq!(fixture.product("G01")?.price(), Decimal::new(2495, 2));

        Ok(())
    }

    #[test]
    fn product_reports_unknown_codes() -> TestResult {
        let fixture = Fixture::from_yaml(WIDGETS)?;

        assert!(matches!(
            fixture.product("B01"),
            Err(FixtureError::ProductNotFound(code)) if code == "B01"
        ));

        Ok(())
    }

    #[test]
    fn basket_prices_all_items() -> TestResult {
        let fixture = Fixture::from_yaml(WIDGETS)?;
        let basket = fixture.basket(None)?;

        // 32.95 + 16.475 + 24.95 = 74.375, plus 2.95 delivery
        assert_eq!(basket.total_quantity(), 3);
        assert_eq!(basket.subtotal()?, Decimal::new(9085, 2));
        assert_eq!(basket.delivery_cost()?, Decimal::new(295, 2));
        assert_eq!(basket.total()?, Decimal::new(77325, 3));

        Ok(())
    }

    #[test]
    fn basket_takes_first_n_items() -> TestResult {
        let fixture = Fixture::from_yaml(WIDGETS)?;
        let basket = fixture.basket(Some(2))?;

        assert_eq!(basket.quantity_of("R01"), 1);
        assert_eq!(basket.quantity_of("G01"), 1);

        Ok(())
    }

    #[test]
    fn basket_rejects_too_many_items() -> TestResult {
        let fixture = Fixture::from_yaml(WIDGETS)?;

        assert!(matches!(
            fixture.basket(Some(4)),
            Err(FixtureError::NotEnoughItems {
                requested: 4,
                available: 3
            })
        ));

        Ok(())
    }

    #[test]
    fn basket_rejects_unknown_item_codes() -> TestResult {
        let fixture = Fixture::from_yaml(
            "products:\n  - code: A\n    name: Apple\n    price: \"1\"\nitems: [A, Z]\n",
        )?;

        assert!(matches!(
            fixture.basket(None),
            Err(FixtureError::Basket(BasketError::ProductNotFound(code))) if code == "Z"
        ));

        Ok(())
    }

    #[test]
    fn optional_sections_default_to_empty() -> TestResult {
        let fixture =
            Fixture::from_yaml("products:\n  - code: A\n    name: Apple\n    price: \"1.50\"\n")?;
        let basket = fixture.empty_basket();

        assert!(fixture.items().is_empty());
        assert!(fixture.offers().is_empty());
        assert!(basket.delivery_rules().is_empty());
        assert_eq!(basket.delivery_cost()?, Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn load_reads_from_base_path() -> TestResult {
        let dir = tempfile::tempdir()?;

        fs::write(dir.path().join("widgets.yml"), WIDGETS)?;

        let mut fixture = Fixture::with_base_path(dir.path());
        fixture.load("widgets")?;

        assert_eq!(fixture.catalogue().len(), 2);

        Ok(())
    }

    #[test]
    fn load_replaces_previous_set() -> TestResult {
        let mut fixture = Fixture::from_yaml(WIDGETS)?;

        fixture.load_yaml("products:\n  - code: A\n    name: Apple\n    price: \"1\"\n")?;

        assert_eq!(fixture.catalogue().len(), 1);
        assert!(fixture.items().is_empty());
        assert!(fixture.offers().is_empty());

        Ok(())
    }

    #[test]
    fn missing_set_is_an_io_error() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut fixture = Fixture::with_base_path(dir.path());

        assert!(matches!(fixture.load("missing"), Err(FixtureError::Io(_))));

        Ok(())
    }

    #[test]
    fn malformed_yaml_is_a_yaml_error() {
        assert!(matches!(
            Fixture::from_yaml("products: {code: oops"),
            Err(FixtureError::Yaml(_))
        ));
    }

    #[test]
    fn from_set_loads_bundled_acme_set() -> TestResult {
        let fixture = Fixture::from_set("acme")?;

        assert!(fixture.catalogue().contains("R01"));
        assert!(!fixture.delivery_rules().is_empty());

        Ok(())
    }
}
