//! Storage Config

use std::path::PathBuf;

use clap::Args;

/// Cart storage settings.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Directory the cart is stored in
    #[arg(
        long = "storage-dir",
        env = "CART_STORAGE_DIR",
        default_value = ".cartstore",
        global = true
    )]
    pub dir: PathBuf,
}
