//! Cartstore
//!
//! Client-side shopping cart state: an in-memory list of products and quantities, validated
//! against a stock service and mirrored to persistent storage after every change.

pub mod cart;
pub mod errors;
pub mod notifications;
pub mod pricing;
pub mod products;
pub mod snapshot;
pub mod stock;
pub mod storage;
pub mod store;

pub use cart::{Cart, CartLine};
pub use errors::{CartError, Operation};
pub use notifications::{LogNotifier, Notification, Notifier};
pub use products::{Product, ProductId};
pub use stock::{Stock, StockService, StockServiceError};
pub use storage::{MemoryStore, PersistentStore, StorageError};
pub use store::{CartChange, CartStore};
