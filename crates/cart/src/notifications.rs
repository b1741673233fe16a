//! Notifications
//!
//! Cart operations never fail to their caller. Failures are reported here instead, as
//! human-readable messages for the front end to display.

use std::fmt::{Display, Formatter, Result as FmtResult};

use mockall::automock;
use tracing::warn;

/// A failure worth telling the shopper about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// Adding a product failed.
    AddFailed,

    /// Removing a product failed.
    RemoveFailed,

    /// Changing a quantity failed.
    UpdateFailed,

    /// The requested quantity exceeds the stock on hand.
    OutOfStock,
}

impl Notification {
    /// Message shown to the shopper.
    pub fn message(self) -> &'static str {
        match self {
            Self::AddFailed => "Error adding product",
            Self::RemoveFailed => "Error removing product",
            Self::UpdateFailed => "Error changing product quantity",
            Self::OutOfStock => "Requested quantity is out of stock",
        }
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.message())
    }
}

/// Sink for shopper-facing notifications.
#[automock]
pub trait Notifier: Send + Sync {
    /// Deliver a notification.
    fn notify(&self, notification: Notification);
}

/// Notifier that only writes to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        warn!(?notification, "{notification}");
    }
}
