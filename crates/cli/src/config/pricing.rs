//! Pricing Config

use rusty_money::iso::{self, Currency};

/// Currencies prices can be displayed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum CurrencyCode {
    /// Brazilian real
    Brl,

    /// US dollar
    Usd,

    /// Euro
    Eur,

    /// Pound sterling
    Gbp,
}

impl CurrencyCode {
    /// ISO currency for this code.
    pub fn currency(self) -> &'static Currency {
        match self {
            Self::Brl => iso::BRL,
            Self::Usd => iso::USD,
            Self::Eur => iso::EUR,
            Self::Gbp => iso::GBP,
        }
    }
}
