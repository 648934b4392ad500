//! Red Widget Offer
//!
//! Buy one red widget, get the second half price. Qualifying products are
//! paired in basket order: the 2nd, 4th, 6th... red widget is half price.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;

use crate::{offers::Offer, products::Product};

/// Whether a product counts as a red widget.
///
/// The name must contain both "red" and "widget", ignoring case, anywhere and
/// in any order.
pub fn is_red_widget(product: &Product) -> bool {
    let name = product.name().to_lowercase();

    name.contains("red") && name.contains("widget")
}

/// Every second red widget is half price.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuyOneGetHalfOffRedWidgetOffer;

impl BuyOneGetHalfOffRedWidgetOffer {
    /// Create the offer.
    pub fn new() -> Self {
        Self
    }
}

impl Offer for BuyOneGetHalfOffRedWidgetOffer {
    fn apply(&self, products: &[Product]) -> Vec<Product> {
        let qualifying = products.iter().filter(|p| is_red_widget(p)).count();

        if qualifying < 2 {
            return products.to_vec();
        }

        let half = Percentage::from(Decimal::new(5, 1));
        let mut seen = 0usize;

        products
            .iter()
            .map(|product| {
                if !is_red_widget(product) {
                    return product.clone();
                }

                seen += 1;

                if seen % 2 == 0 {
                    product.discounted(half)
                } else {
                    product.clone()
                }
            })
            .collect()
    }
}
