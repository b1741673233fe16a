//! Cart commands

use std::{io, sync::Arc};

use cartstore::{CartStore, ProductId, StorageError};
use clap::Subcommand;
use thiserror::Error;
use tracing::info;

use crate::{
    config::Config, file_store::FileStore, http::HttpStockService, notifier::TerminalNotifier,
    render,
};

/// Errors that stop a command before or after it touches the cart.
#[derive(Debug, Error)]
pub enum CliError {
    /// The HTTP client could not be built.
    #[error("failed to build stock API client: {0}")]
    Http(#[from] reqwest::Error),

    /// The storage directory could not be opened.
    #[error("failed to open cart storage: {0}")]
    Storage(#[from] StorageError),

    /// Output could not be written.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Cart operation to run.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add one unit of a product
    Add {
        /// Product identifier
        product_id: u64,
    },

    /// Remove a product from the cart
    Remove {
        /// Product identifier
        product_id: u64,
    },

    /// Set the quantity of a product already in the cart
    Update {
        /// Product identifier
        product_id: u64,

        /// New quantity; zero or less is ignored
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },

    /// Show the cart
    Show,
}

/// Build the store from configuration, run the command and print the resulting cart.
///
/// # Errors
///
/// Returns a [`CliError`] if the collaborators cannot be built or output cannot be written.
/// Cart operation failures are reported as notifications, not errors.
pub async fn run(config: Config, out: &mut impl io::Write) -> Result<(), CliError> {
    let stock = HttpStockService::new(&config.stock)?;
    let storage = FileStore::open(&config.storage.dir)?;

    info!(dir = %storage.dir().display(), "opened cart storage");

    let store = CartStore::new(
        Arc::new(stock),
        Arc::new(storage),
        Arc::new(TerminalNotifier),
    );

    execute(&store, &config.command).await;

    render::write_cart(out, &store.cart(), config.currency.currency())?;

    Ok(())
}

/// Apply a command to the store.
pub async fn execute(store: &CartStore, command: &Command) {
    match *command {
        Command::Add { product_id } => store.add_product(ProductId(product_id)).await,
        Command::Remove { product_id } => store.remove_product(ProductId(product_id)),
        Command::Update { product_id, amount } => {
            store
                .update_product_amount(ProductId(product_id), amount)
                .await;
        }
        Command::Show => {}
    }
}
