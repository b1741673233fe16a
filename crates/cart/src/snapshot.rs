//! Persisted cart snapshots.
//!
//! The cart is stored as a JSON envelope carrying a format version. Anything that fails to
//! decode, or carries another version, is treated as no cart at all: storage is a
//! best-effort cache, not a source of truth.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    cart::{Cart, CartIntegrityError, CartLine},
    storage::PersistentStore,
};

/// Storage key the cart is written under.
pub const CART_STORAGE_KEY: &str = "@cartstore:cart:v1";

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors raised while encoding or decoding a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The value is not valid snapshot JSON.
    #[error("invalid snapshot json")]
    Json(#[from] serde_json::Error),

    /// The snapshot was written by an incompatible format version.
    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u32),

    /// The snapshot lines break a cart invariant.
    #[error(transparent)]
    Integrity(#[from] CartIntegrityError),
}

#[derive(Debug, Deserialize)]
struct Header {
    version: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedCart {
    version: u32,
    saved_at: Timestamp,
    lines: Vec<CartLine>,
}

/// Serialize a cart into a versioned snapshot.
///
/// # Errors
///
/// Returns a [`SnapshotError`] if serialization fails.
pub fn encode(cart: &Cart) -> Result<String, SnapshotError> {
    let snapshot = PersistedCart {
        version: SNAPSHOT_VERSION,
        saved_at: Timestamp::now(),
        lines: cart.lines().to_vec(),
    };

    Ok(serde_json::to_string(&snapshot)?)
}

/// Deserialize a versioned snapshot into a cart.
///
/// # Errors
///
/// Returns a [`SnapshotError`] if the value is malformed, has another version, or its lines
/// break a cart invariant.
pub fn decode(raw: &str) -> Result<Cart, SnapshotError> {
    let header: Header = serde_json::from_str(raw)?;

    if header.version != SNAPSHOT_VERSION {
        return Err(SnapshotError::UnsupportedVersion(header.version));
    }

    let snapshot: PersistedCart = serde_json::from_str(raw)?;

    Ok(Cart::from_lines(snapshot.lines)?)
}

/// Load the cart from storage, falling back to an empty cart.
pub fn load(storage: &dyn PersistentStore) -> Cart {
    let raw = match storage.read(CART_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("no stored cart, starting empty");

            return Cart::new();
        }
        Err(error) => {
            warn!(%error, "failed to read stored cart, starting empty");

            return Cart::new();
        }
    };

    match decode(&raw) {
        Ok(cart) => {
            debug!(lines = cart.len(), "restored stored cart");

            cart
        }
        Err(error) => {
            warn!(%error, "discarding corrupt stored cart");

            Cart::new()
        }
    }
}
