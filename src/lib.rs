//! Trolley
//!
//! Trolley prices shopping baskets: quantities of catalogue products run
//! through an ordered chain of offers, then a delivery rule adds the surcharge.

pub mod basket;
pub mod catalogue;
pub mod delivery;
pub mod fixtures;
pub mod offers;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod receipt;
pub mod utils;
