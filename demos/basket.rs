//! Basket Example
//!
//! Prices a fixture basket and prints the receipt.
//!
//! Use `-f` to load a fixture set by name
//! Use `-n` to specify the number of fixture items to add to the basket
//! Any trailing arguments are extra product codes to add
//!
//! Set `RUST_LOG=trolley=trace` to follow each pricing stage.

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use trolley::{fixtures::Fixture, utils::ExampleBasketArgs};

/// Basket Example
pub fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = ExampleBasketArgs::parse();

    let fixture = Fixture::from_set(&args.fixture)?;

    let mut basket = fixture.basket(args.n)?;

    for code in &args.codes {
        basket.add(code)?;
    }

    tracing::info!(
        fixture = %args.fixture,
        items = basket.total_quantity(),
        "pricing basket"
    );

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    basket.receipt()?.write_to(&mut handle)?;

    Ok(())
}
