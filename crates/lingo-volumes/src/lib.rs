//! Block storage volume client and data models for the Linode v4 API.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::VolumeClient;
pub use models::{AttachVolumeRequest, CreateVolumeRequest, UpdateVolumeRequest, Volume, VolumeStatus};

/// Convenient result alias that reuses the shared core error type.
pub type Result<T> = lingo_core::Result<T>;
