//! NodeBalancer client and data models for the Linode v4 API.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::BalancerClient;
pub use models::{
    Algorithm, BalancerConfig, BalancerNode, Check, CipherSuite, CreateBalancerConfigRequest,
    CreateBalancerRequest, CreateNodeRequest, NodeBalancer, NodeMode, Protocol, Stickiness,
    Transfer, UpdateBalancerConfigRequest, UpdateBalancerRequest, UpdateNodeRequest,
};

/// Convenient result alias that reuses the shared core error type.
pub type Result<T> = lingo_core::Result<T>;
