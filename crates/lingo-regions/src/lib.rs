//! Region client and data models for the Linode v4 API.
//!
//! Regions are read-only: the API exposes listing and single lookup only.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::RegionClient;
pub use models::Region;

/// Convenient result alias that reuses the shared core error type.
pub type Result<T> = lingo_core::Result<T>;
