//! Cartstore CLI
//!
//! Wires the cart store to an HTTP stock API and a file-backed store.

pub mod cli;
pub mod config;
pub mod file_store;
pub mod http;
pub mod notifier;
pub mod observability;
pub mod render;
