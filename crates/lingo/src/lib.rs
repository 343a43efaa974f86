//! Asynchronous client library for the Linode v4 API.
//!
//! The [`Linode`] handle bundles one client per resource family on top of a
//! single shared dispatcher, so every call goes through the same
//! authentication, error handling, and busy-retry policy.
//!
//! ```no_run
//! use lingo::Linode;
//!
//! # async fn demo() -> lingo::Result<()> {
//! let linode = Linode::new("my-api-key")?;
//! let images = linode.images.list_images().await?;
//! for image in images {
//!     println!("{}", image.label);
//! }
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

use std::sync::Arc;

use lingo_core::backoff::Backoff;
use lingo_core::client::{ApiClient, ApiClientBuilder, Dispatch};
use lingo_core::config::ClientConfig;

pub use lingo_core::backoff;
pub use lingo_core::client;
pub use lingo_core::config;
pub use lingo_core::error::{ApiError, ApiErrors, Error};
pub use lingo_core::page::Page;
pub use lingo_core::time::Timestamp;
pub use lingo_core::Result;

pub use lingo_balancers as balancers;
pub use lingo_disks as disks;
pub use lingo_domains as domains;
pub use lingo_images as images;
pub use lingo_instances as instances;
pub use lingo_networking as networking;
pub use lingo_regions as regions;
pub use lingo_volumes as volumes;

/// Aggregated handle over every resource family in the Linode v4 API.
///
/// All clients share one [`ApiClient`], so the busy-retry counter and the
/// HTTP connection pool are common to the whole handle.
#[derive(Clone)]
pub struct Linode {
    /// Instance and instance type operations.
    pub instances: instances::InstanceClient,
    /// Instance disk operations.
    pub disks: disks::DiskClient,
    /// NodeBalancer operations.
    pub balancers: balancers::BalancerClient,
    /// Domain and domain record operations.
    pub domains: domains::DomainClient,
    /// Machine image operations.
    pub images: images::ImageClient,
    /// IP address and IPv6 pool operations.
    pub networking: networking::NetworkClient,
    /// Region operations.
    pub regions: regions::RegionClient,
    /// Block storage volume operations.
    pub volumes: volumes::VolumeClient,
}

impl Linode {
    /// Build a handle for the public API with the default retry policy.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP transport cannot be constructed.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api = ApiClient::builder(api_key)
            .with_backoff(Backoff::default())
            .build()?;
        Ok(Self::from_dispatcher(Arc::new(api)))
    }

    /// Build a handle from a validated [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the configuration fails validation.
    pub fn from_config(api_key: impl Into<String>, config: &ClientConfig) -> Result<Self> {
        let api = ApiClientBuilder::from_config(api_key, config)?.build()?;
        Ok(Self::from_dispatcher(Arc::new(api)))
    }

    /// Build a handle on top of an existing dispatcher.
    pub fn from_dispatcher(api: Arc<dyn Dispatch>) -> Self {
        Self {
            instances: instances::InstanceClient::new(Arc::clone(&api)),
            disks: disks::DiskClient::new(Arc::clone(&api)),
            balancers: balancers::BalancerClient::new(Arc::clone(&api)),
            domains: domains::DomainClient::new(Arc::clone(&api)),
            images: images::ImageClient::new(Arc::clone(&api)),
            networking: networking::NetworkClient::new(Arc::clone(&api)),
            regions: regions::RegionClient::new(Arc::clone(&api)),
            volumes: volumes::VolumeClient::new(api),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_builds_with_default_policy() {
        let linode = Linode::new("test-key").unwrap();
        let _ = linode.clone();
    }

    #[test]
    fn handle_shares_one_dispatcher() {
        let api = ApiClient::new("test-key").unwrap();
        let _ = Linode::from_dispatcher(Arc::new(api));
    }
}
