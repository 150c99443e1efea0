//! Read-only access to the measurement store.
//!
//! Holds the process-wide SQLite pool and the four fixed query shapes the
//! API serves. Every query acquires its own pooled connection, so concurrent
//! requests never share a session.

mod client;
mod error;

pub use client::{ClimateStore, StoreConfig};
pub use error::StoreError;
