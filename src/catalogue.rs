//! Catalogue
//!
//! The fixed set of products a basket can be filled from, indexed by code.

use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use crate::products::{Product, ProductKey};

/// Products available for purchase, keyed by code.
///
/// Built once and never mutated. When the same code is supplied more than once
/// the last product wins, but it keeps the position of the first occurrence.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    products: SlotMap<ProductKey, Product>,
    keys: FxHashMap<String, ProductKey>,
}

impl Catalogue {
    /// Create a catalogue from a list of products.
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        let mut catalogue = Self::default();

        for product in products {
            catalogue.insert(product);
        }

        catalogue
    }

    fn insert(&mut self, product: Product) {
        if let Some(existing) = self
            .keys
            .get(product.code())
            .and_then(|key| self.products.get_mut(*key))
        {
            *existing = product;
            return;
        }

        let code = product.code().to_string();
        let key = self.products.insert(product);

        self.keys.insert(code, key);
    }

    /// Look up a product by code.
    pub fn get(&self, code: &str) -> Option<&Product> {
        self.key(code).and_then(|key| self.products.get(key))
    }

    /// Look up the key for a product code.
    pub fn key(&self, code: &str) -> Option<ProductKey> {
        self.keys.get(code).copied()
    }

    /// Look up a product by key.
    pub fn product(&self, key: ProductKey) -> Option<&Product> {
        self.products.get(key)
    }

    /// Whether the catalogue has a product with this code.
    pub fn contains(&self, code: &str) -> bool {
        self.keys.contains_key(code)
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalogue has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterate over products in the order they were first supplied.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        // Slots are never freed, so slot order is insertion order.
        self.products.values()
    }
}

impl FromIterator<Product> for Catalogue {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<Product>> for Catalogue {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}

impl<const N: usize> From<[Product; N]> for Catalogue {
    fn from(products: [Product; N]) -> Self {
        Self::new(products)
    }
}
