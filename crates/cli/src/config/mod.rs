//! Cartstore CLI configuration

use clap::Parser;

use crate::{
    cli::Command,
    config::{
        logging::LoggingConfig,
        pricing::CurrencyCode,
        stock::StockApiConfig,
        storage::StorageConfig,
    },
};

pub mod logging;
pub mod pricing;
pub mod stock;
pub mod storage;

/// Cartstore CLI configuration
#[derive(Debug, Parser)]
#[command(name = "cartstore", about = "Shopping cart CLI", long_about = None)]
pub struct Config {
    /// Stock API settings.
    #[command(flatten)]
    pub stock: StockApiConfig,

    /// Cart storage settings.
    #[command(flatten)]
    pub storage: StorageConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Currency used to display prices
    #[arg(
        long,
        env = "CART_CURRENCY",
        value_enum,
        default_value_t = CurrencyCode::Brl,
        global = true
    )]
    pub currency: CurrencyCode,

    /// Cart operation to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
