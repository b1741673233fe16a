//! HTTP stock service client.

use async_trait::async_trait;
use cartstore::{Product, ProductId, Stock, StockService, StockServiceError};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::stock::StockApiConfig;

/// Stock service backed by a JSON API exposing `/stock/{id}` and `/products/{id}`.
#[derive(Debug, Clone)]
pub struct HttpStockService {
    base_url: String,
    http: Client,
}

impl HttpStockService {
    /// Create a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &StockApiConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn url(&self, resource: &str, product: ProductId) -> String {
        format!("{}/{resource}/{product}", self.base_url)
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, StockServiceError> {
        debug!(url, "requesting");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|error| StockServiceError::Transport(error.to_string()))?;

        check_status(response.status())?;

        let body = response
            .bytes()
            .await
            .map_err(|error| StockServiceError::Transport(error.to_string()))?;

        decode(&body)
    }
}

#[async_trait]
impl StockService for HttpStockService {
    #[instrument(skip(self))]
    async fn stock(&self, product: ProductId) -> Result<Stock, StockServiceError> {
        self.get(&self.url("stock", product)).await
    }

    #[instrument(skip(self))]
    async fn product(&self, product: ProductId) -> Result<Product, StockServiceError> {
        self.get(&self.url("products", product)).await
    }
}

fn check_status(status: StatusCode) -> Result<(), StockServiceError> {
    if status == StatusCode::NOT_FOUND {
        return Err(StockServiceError::NotFound);
    }

    if !status.is_success() {
        return Err(StockServiceError::Transport(format!(
            "request failed with status {status}"
        )));
    }

    Ok(())
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, StockServiceError> {
    serde_json::from_slice(body).map_err(|error| StockServiceError::Malformed(error.to_string()))
}
