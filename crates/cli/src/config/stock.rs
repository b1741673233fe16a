//! Stock API Config

use std::time::Duration;

use clap::Args;

/// Stock API connection settings.
#[derive(Debug, Args)]
pub struct StockApiConfig {
    /// Stock API base URL
    #[arg(
        long = "stock-api-url",
        env = "STOCK_API_URL",
        default_value = "http://localhost:3333",
        global = true
    )]
    pub url: String,

    /// Stock API request timeout in milliseconds
    #[arg(
        long = "stock-api-timeout-ms",
        env = "STOCK_API_TIMEOUT_MS",
        default_value_t = 5_000_u64,
        global = true
    )]
    pub timeout_ms: u64,
}

impl StockApiConfig {
    /// Request timeout as a duration.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
