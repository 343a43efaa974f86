//! Networking client and data models for the Linode v4 API.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::NetworkClient;
pub use models::{
    Address, AddressType, AllocateAddressRequest, AssignAddressRequest, Assignment, IPv6Pool,
    IPv6Range, SharingRequest, UpdateRdnsRequest,
};

/// Convenient result alias that reuses the shared core error type.
pub type Result<T> = lingo_core::Result<T>;
