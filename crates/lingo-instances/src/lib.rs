//! Instance client and data models for the Linode v4 API.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::InstanceClient;
pub use models::{
    Addons, Alerts, BackupAddon, Class, CloneInstanceRequest, CreateInstanceRequest, Hypervisor,
    Instance, InstanceStatus, InstanceType, Price, RebuildInstanceRequest, Specs,
    UpdateInstanceRequest,
};

/// Convenient result alias that reuses the shared core error type.
pub type Result<T> = lingo_core::Result<T>;
