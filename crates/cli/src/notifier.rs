//! Terminal notifications.

use std::io::{self, Write};

use cartstore::{Notification, Notifier};
use tracing::warn;

/// Writes shopper notifications to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        warn!(?notification, "{notification}");

        _ = writeln!(io::stderr().lock(), "{notification}");
    }
}
