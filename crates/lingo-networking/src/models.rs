//! Networking data models.

use serde::{Deserialize, Serialize};

/// Kind of network address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressType {
    /// Public or private IPv4 address
    #[serde(rename = "ipv4")]
    IPv4,
    /// SLAAC IPv6 address
    #[serde(rename = "ipv6")]
    IPv6,
    /// Address out of an IPv6 pool
    #[serde(rename = "ipv6/pool")]
    Pool,
    /// Address out of a routed IPv6 range
    #[serde(rename = "ipv6/range")]
    Range,
}

/// A network address attached to an instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// The address itself
    pub address: String,
    /// Gateway for the address
    #[serde(default)]
    pub gateway: Option<String>,
    /// Subnet mask
    #[serde(default)]
    pub subnet_mask: String,
    /// Network prefix length
    pub prefix: u32,
    /// Kind of address
    #[serde(rename = "type")]
    pub address_type: AddressType,
    /// Whether the address is publicly routable
    pub public: bool,
    /// Reverse DNS name
    #[serde(default)]
    pub rdns: Option<String>,
    /// Instance the address belongs to
    pub linode_id: u64,
    /// Region the address is routed in
    pub region: String,
}

/// Parameters for allocating a new address to an instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocateAddressRequest {
    /// Instance to allocate to
    pub linode_id: u64,
    /// Kind of address to allocate
    #[serde(rename = "type")]
    pub address_type: AddressType,
    /// Whether the address should be publicly routable
    pub public: bool,
}

/// Parameters for updating the reverse DNS name of an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRdnsRequest {
    /// New reverse DNS name; null restores the default
    pub rdns: Option<String>,
}

/// Parameters for assigning existing addresses to instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignAddressRequest {
    /// Region the addresses and instances live in
    pub region: String,
    /// Address-to-instance pairings
    pub assignments: Vec<Assignment>,
}

/// A single address-to-instance pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Instance receiving the address
    pub linode_id: u64,
    /// Address being assigned
    pub address: String,
}

/// Parameters for configuring IP sharing on an instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharingRequest {
    /// Instance the addresses are shared with
    pub linode_id: u64,
    /// Addresses to share
    pub ips: Vec<String>,
}

/// A routed IPv6 range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IPv6Range {
    /// The range in CIDR notation
    pub range: String,
    /// Region the range is routed in
    pub region: String,
}

/// An IPv6 address pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IPv6Pool {
    /// The pool in CIDR notation
    pub range: String,
    /// Region the pool is routed in
    pub region: String,
}
