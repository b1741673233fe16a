//! Stock service.

use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::products::{Product, ProductId};

/// Available inventory for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    /// Product identifier
    pub id: ProductId,

    /// Units available; zero or negative when sold out or oversold
    pub amount: i64,
}

/// Errors raised by a [`StockService`] lookup.
#[derive(Debug, Error)]
pub enum StockServiceError {
    /// No product or stock record exists for the identifier.
    #[error("product not found")]
    NotFound,

    /// The request could not be completed.
    #[error("stock service unreachable: {0}")]
    Transport(String),

    /// The response body did not have the expected shape.
    #[error("malformed stock service response: {0}")]
    Malformed(String),
}

/// Remote inventory and catalog lookups.
#[automock]
#[async_trait]
pub trait StockService: Send + Sync {
    /// Retrieve the available inventory for a product.
    async fn stock(&self, product: ProductId) -> Result<Stock, StockServiceError>;

    /// Retrieve the catalog data for a product.
    async fn product(&self, product: ProductId) -> Result<Product, StockServiceError>;
}
