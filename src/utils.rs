//! Utils

use clap::Parser;

/// Arguments for the basket demo
#[derive(Debug, Parser)]
pub struct ExampleBasketArgs {
    /// Number of fixture items to add to the basket
    #[clap(short, long)]
    pub n: Option<usize>,

    /// Fixture set to use for the catalogue, offers & delivery rules
    #[clap(short, long, default_value = "acme")]
    pub fixture: String,

    /// Extra product codes to add after the fixture items
    pub codes: Vec<String>,
}
