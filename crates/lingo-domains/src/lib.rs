//! Domain and DNS record client for the Linode v4 API.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::DomainClient;
pub use models::{Domain, DomainRecord, DomainRecordType, DomainStatus, DomainType};

/// Convenient result alias that reuses the shared core error type.
pub type Result<T> = lingo_core::Result<T>;
