//! Receipt

use std::io;

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    catalogue::Catalogue,
    pricing::{TotalPriceError, checked_sum, total_price},
    products::Product,
};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// IO error
    #[error("IO error")]
    IO,
}

/// A single unit on the receipt.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine {
    code: String,
    name: String,
    base_price: Decimal,
    final_price: Decimal,
}

impl ReceiptLine {
    /// Product code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Product name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Catalogue price before offers
    pub fn base_price(&self) -> Decimal {
        self.base_price
    }

    /// Price paid after offers
    pub fn final_price(&self) -> Decimal {
        self.final_price
    }

    /// Amount saved on this unit
    pub fn savings(&self) -> Decimal {
        self.base_price - self.final_price
    }
}

/// Final receipt for a priced basket.
#[derive(Debug, Clone)]
pub struct Receipt {
    lines: Vec<ReceiptLine>,

    /// Total cost before any offers
    subtotal: Decimal,

    /// Total cost after offers, before delivery
    discounted_subtotal: Decimal,

    delivery: Decimal,

    /// Discounted subtotal plus delivery
    total: Decimal,
}

impl Receipt {
    /// Build a receipt from discounted products.
    ///
    /// Base prices come from the catalogue; products the catalogue does not
    /// know are shown at their discounted price.
    ///
    /// # Errors
    ///
    /// Returns [`TotalPriceError::Overflow`] if the discounted subtotal or the
    /// total does not fit in a `Decimal`.
    pub fn new(
        catalogue: &Catalogue,
        subtotal: Decimal,
        discounted: Vec<Product>,
        delivery: Decimal,
    ) -> Result<Self, TotalPriceError> {
        let discounted_subtotal = total_price(&discounted)?;
        let total = checked_sum(discounted_subtotal, delivery)?;

        let lines = discounted
            .into_iter()
            .map(|product| {
                let base_price = catalogue
                    .get(product.code())
                    .map_or(product.price(), Product::price);

                ReceiptLine {
                    code: product.code().to_string(),
                    name: product.name().to_string(),
                    base_price,
                    final_price: product.price(),
                }
            })
            .collect();

        Ok(Self {
            lines,
            subtotal,
            discounted_subtotal,
            delivery,
            total,
        })
    }

    /// One line per unit, in pricing order
    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    /// Total cost before any offers
    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    /// Total cost after offers, before delivery
    pub fn discounted_subtotal(&self) -> Decimal {
        self.discounted_subtotal
    }

    /// Delivery charge
    pub fn delivery(&self) -> Decimal {
        self.delivery
    }

    /// Amount paid
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Savings made by applying offers.
    pub fn savings(&self) -> Decimal {
        self.subtotal - self.discounted_subtotal
    }

    /// Savings as a fraction of the subtotal.
    ///
    /// Zero when the subtotal is zero or the ratio does not fit in a `Decimal`.
    pub fn savings_percent(&self) -> Percentage {
        Percentage::from(
            self.savings()
                .checked_div(self.subtotal)
                .unwrap_or(Decimal::ZERO),
        )
    }

    /// Savings in percent points, rounded to two places.
    fn savings_points(&self) -> Decimal {
        self.savings()
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|points| points.checked_div(self.subtotal))
            .unwrap_or(Decimal::ZERO)
            .round_dp(2)
    }

    /// Writes the receipt as a table followed by a summary.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::IO`] if writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Item", "Code", "Base Price", "Price", "Savings"]);

        for (idx, line) in self.lines.iter().enumerate() {
            let savings = line.savings();

            builder.push_record([
                format!("#{:<3}", idx + 1),
                line.name.clone(),
                line.code.clone(),
                format!("{:.2}", line.base_price),
                format!("{:.2}", line.final_price),
                if savings.is_zero() {
                    String::new()
                } else {
                    format!("{savings:.2}")
                },
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(3..6), Alignment::right());

        writeln!(out, "\n{table}").map_err(|_err| ReceiptError::IO)?;

        let percent_points = self.savings_points();

        let summary = [
            ("Subtotal:", format!("{:.2}", self.subtotal)),
            (
                "Savings:",
                format!("({percent_points:.2}%) {:.2}", self.savings()),
            ),
            ("Delivery:", format!("{:.2}", self.delivery)),
            ("Total:", format!("{:.2}", self.total())),
        ];

        let value_width = summary
            .iter()
            .map(|(_, value)| value.len())
            .max()
            .unwrap_or_default();

        for (label, value) in summary {
            writeln!(out, " {label:>9}  {value:>value_width$}").map_err(|_err| ReceiptError::IO)?;
        }

        Ok(())
    }
}
