//! Cart operation errors.

use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

use crate::{
    notifications::Notification, products::ProductId, snapshot::SnapshotError,
    stock::StockServiceError, storage::StorageError,
};

/// Mutating cart operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Adding a product
    Add,

    /// Removing a product
    Remove,

    /// Changing a product's quantity
    Update,
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Update => "update",
        })
    }
}

/// Reasons a cart operation left the cart unchanged.
#[derive(Debug, Error)]
pub enum CartError {
    /// The stock service reports fewer units than requested.
    #[error("product {product_id} has {available} units in stock, {requested} requested")]
    OutOfStock {
        /// Product identifier
        product_id: ProductId,

        /// Quantity the caller asked for
        requested: i64,

        /// Quantity the stock service reported
        available: i64,
    },

    /// The cart holds no line for the product.
    #[error("product {0} is not in the cart")]
    NotFound(ProductId),

    /// The stock or catalog lookup failed.
    #[error(transparent)]
    Stock(#[from] StockServiceError),

    /// The new cart could not be written to storage.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The new cart could not be serialized.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

impl CartError {
    /// Check if this is an expected business outcome rather than an infrastructure failure.
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::OutOfStock { .. } | Self::NotFound(_))
    }

    /// The user-facing notification for this error raised during `operation`.
    pub fn notification(&self, operation: Operation) -> Notification {
        match (self, operation) {
            (Self::OutOfStock { .. }, _) => Notification::OutOfStock,
            (_, Operation::Add) => Notification::AddFailed,
            (_, Operation::Remove) => Notification::RemoveFailed,
            (_, Operation::Update) => Notification::UpdateFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_stock_notifies_out_of_stock_for_every_operation() {
        let error = CartError::OutOfStock {
            product_id: ProductId(1),
            requested: 15,
            available: 10,
        };

        for operation in [Operation::Add, Operation::Remove, Operation::Update] {
            assert_eq!(error.notification(operation), Notification::OutOfStock);
        }
    }

    #[test]
    fn transport_failures_notify_per_operation() {
        let error = CartError::Stock(StockServiceError::Transport("timed out".to_string()));

        assert_eq!(error.notification(Operation::Add), Notification::AddFailed);
        assert_eq!(
            error.notification(Operation::Update),
            Notification::UpdateFailed
        );
    }

    #[test]
    fn not_found_on_remove_notifies_remove_failed() {
        let error = CartError::NotFound(ProductId(7));

        assert!(error.is_expected());
        assert_eq!(
            error.notification(Operation::Remove),
            Notification::RemoveFailed
        );
    }

    #[test]
    fn storage_failure_is_not_expected() {
        assert!(!CartError::Storage(StorageError::Poisoned).is_expected());
    }
}
