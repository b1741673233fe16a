//! Cart store.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use crate::{
    cart::{Cart, CartLine},
    errors::{CartError, Operation},
    notifications::Notifier,
    products::ProductId,
    snapshot::{self, CART_STORAGE_KEY},
    stock::StockService,
    storage::PersistentStore,
};

/// Result of a cart operation that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum CartChange {
    /// The cart was replaced, persisted and published.
    Updated(Cart),

    /// Nothing was written.
    Unchanged,
}

/// Holds the current cart and applies add/remove/quantity changes to it.
///
/// Every committed change is written to the [`PersistentStore`] and then published to
/// subscribers. Async operations read the cart when they start and compute their result from
/// that snapshot once the stock service answers, so two overlapping operations can clobber
/// each other; the last write wins.
pub struct CartStore {
    stock: Arc<dyn StockService>,
    storage: Arc<dyn PersistentStore>,
    notifier: Arc<dyn Notifier>,
    state: watch::Sender<Cart>,
    attached: AtomicBool,
}

impl Debug for CartStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CartStore")
            .field("cart", &*self.state.borrow())
            .field("attached", &self.is_attached())
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Create a store, restoring the cart from `storage`.
    ///
    /// A missing or unreadable stored cart yields an empty cart.
    pub fn new(
        stock: Arc<dyn StockService>,
        storage: Arc<dyn PersistentStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let cart = snapshot::load(storage.as_ref());
        let (state, _) = watch::channel(cart);

        Self {
            stock,
            storage,
            notifier,
            state,
            attached: AtomicBool::new(true),
        }
    }

    /// Snapshot of the current cart.
    pub fn cart(&self) -> Cart {
        self.state.borrow().clone()
    }

    /// Subscribe to cart changes.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.state.subscribe()
    }

    /// Tear the store down. Lookups still in flight are discarded when they resolve.
    pub fn detach(&self) {
        self.attached.store(false, Ordering::Release);
    }

    /// Check if the store is still accepting results.
    pub fn is_attached(&self) -> bool {
        self.attached.load(Ordering::Acquire)
    }

    /// Add one unit of a product, notifying on failure.
    pub async fn add_product(&self, product_id: ProductId) {
        if let Some(amount) = self.cart().get(product_id).map(|line| line.amount) {
            self.update_product_amount(product_id, i64::from(amount) + 1)
                .await;

            return;
        }

        let result = self.try_add_product(product_id).await;

        self.report(Operation::Add, result);
    }

    /// Remove a product's line, notifying on failure.
    pub fn remove_product(&self, product_id: ProductId) {
        let result = self.try_remove_product(product_id);

        self.report(Operation::Remove, result);
    }

    /// Set a product's quantity, notifying on failure.
    ///
    /// Quantities of zero or less are ignored; use [`CartStore::remove_product`] to drop a
    /// line.
    pub async fn update_product_amount(&self, product_id: ProductId, amount: i64) {
        let result = self.try_update_product_amount(product_id, amount).await;

        self.report(Operation::Update, result);
    }

    /// Add one unit of a product.
    ///
    /// Products already in the cart have their quantity incremented through
    /// [`CartStore::try_update_product_amount`]. New products are checked against the stock
    /// service, then their catalog data is fetched and appended as a line of one.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the product is out of stock, a lookup fails, or the new cart
    /// cannot be persisted.
    #[instrument(skip(self))]
    pub async fn try_add_product(&self, product_id: ProductId) -> Result<CartChange, CartError> {
        let cart = self.cart();

        if let Some(line) = cart.get(product_id) {
            return self
                .try_update_product_amount(product_id, i64::from(line.amount) + 1)
                .await;
        }

        let stock = self.stock.stock(product_id).await?;

        if !self.is_attached() {
            return Ok(self.discard());
        }

        if stock.amount < 1 {
            return Err(CartError::OutOfStock {
                product_id,
                requested: 1,
                available: stock.amount,
            });
        }

        let product = self.stock.product(product_id).await?;

        if !self.is_attached() {
            return Ok(self.discard());
        }

        self.commit(cart.with_line(CartLine::new(product)))
    }

    /// Remove a product's line.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the product is not in the cart or the new cart cannot be
    /// persisted.
    #[instrument(skip(self))]
    pub fn try_remove_product(&self, product_id: ProductId) -> Result<CartChange, CartError> {
        let cart = self.cart();

        if !cart.contains(product_id) {
            return Err(CartError::NotFound(product_id));
        }

        self.commit(cart.without(product_id))
    }

    /// Set a product's quantity after checking it against the stock service.
    ///
    /// Quantities of zero or less are a no-op. A product with no line in the cart is still
    /// checked against the stock service but leaves the cart unchanged.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the quantity exceeds the stock on hand, the lookup fails, or
    /// the new cart cannot be persisted.
    #[instrument(skip(self))]
    pub async fn try_update_product_amount(
        &self,
        product_id: ProductId,
        amount: i64,
    ) -> Result<CartChange, CartError> {
        if amount <= 0 {
            debug!("ignoring non-positive amount");

            return Ok(CartChange::Unchanged);
        }

        let cart = self.cart();
        let stock = self.stock.stock(product_id).await?;

        if !self.is_attached() {
            return Ok(self.discard());
        }

        let requested = u32::try_from(amount)
            .ok()
            .filter(|_| amount <= stock.amount);

        let Some(requested) = requested else {
            return Err(CartError::OutOfStock {
                product_id,
                requested: amount,
                available: stock.amount,
            });
        };

        if !cart.contains(product_id) {
            debug!("product not in cart, nothing to update");

            return Ok(CartChange::Unchanged);
        }

        self.commit(cart.with_amount(product_id, requested))
    }

    fn commit(&self, cart: Cart) -> Result<CartChange, CartError> {
        let encoded = snapshot::encode(&cart)?;

        self.storage.write(CART_STORAGE_KEY, &encoded)?;

        debug!(bytes = encoded.len(), "persisted cart");

        self.state.send_replace(cart.clone());

        info!(lines = cart.len(), "cart updated");

        Ok(CartChange::Updated(cart))
    }

    fn discard(&self) -> CartChange {
        debug!("store detached, discarding lookup result");

        CartChange::Unchanged
    }

    fn report(&self, operation: Operation, result: Result<CartChange, CartError>) {
        let Err(error) = result else {
            return;
        };

        if !self.is_attached() {
            debug!(%operation, %error, "store detached, dropping failure");

            return;
        }

        let notification = error.notification(operation);

        if error.is_expected() {
            info!(%operation, %error, "cart operation rejected");
        } else {
            warn!(%operation, %error, "cart operation failed");
        }

        self.notifier.notify(notification);
    }
}
