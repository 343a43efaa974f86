//! NodeBalancer data models.

use lingo_core::time::Timestamp;
use serde::{Deserialize, Serialize};

/// Network transfer metrics for a NodeBalancer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    /// Inbound transfer in MB
    #[serde(default)]
    pub r#in: Option<f64>,
    /// Outbound transfer in MB
    #[serde(default)]
    pub out: Option<f64>,
    /// Total transfer in MB
    #[serde(default)]
    pub total: Option<f64>,
}

/// A NodeBalancer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeBalancer {
    /// NodeBalancer identifier
    pub id: u64,
    /// Display label
    pub label: String,
    /// DNS hostname pointing at the balancer
    pub hostname: String,
    /// Connections per second allowed from a single client
    #[serde(default)]
    pub client_conn_throttle: u64,
    /// Region the balancer lives in
    pub region: String,
    /// Public IPv4 address
    pub ipv4: String,
    /// Public IPv6 address
    #[serde(default)]
    pub ipv6: Option<String>,
    /// Creation timestamp
    pub created: Timestamp,
    /// Last-update timestamp
    pub updated: Timestamp,
    /// Transfer metrics for the current month
    #[serde(default)]
    pub transfer: Transfer,
}

/// Fields required to spin up a new NodeBalancer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBalancerRequest {
    /// Region to provision in
    pub region: String,
    /// Display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Connections per second allowed from a single client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_conn_throttle: Option<u64>,
}

/// Fields that can be updated on an existing NodeBalancer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBalancerRequest {
    /// New display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// New client connection throttle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_conn_throttle: Option<u64>,
}

/// Protocol a balancer port configuration speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// Plain HTTP
    Http,
    /// TLS-terminated HTTP
    Https,
    /// Raw TCP
    Tcp,
}

/// Strategy used to pick a backend for a new connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Rotate through backends in order
    RoundRobin,
    /// Prefer the backend with the fewest open connections
    LeastConn,
    /// Hash on the client source address
    Source,
}

/// Session stickiness behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stickiness {
    /// No stickiness
    None,
    /// Stick by source-address table
    Table,
    /// Stick by HTTP cookie
    HttpCookie,
}

/// Health check performed against backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    /// No active checking
    None,
    /// TCP connect check
    Connection,
    /// HTTP status check
    Http,
    /// HTTP body regex check
    HttpBody,
}

/// TLS cipher suite profile for HTTPS configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherSuite {
    /// Modern cipher list
    Recommended,
    /// Older cipher list for legacy clients
    Legacy,
}

/// A port configuration on a NodeBalancer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalancerConfig {
    /// Configuration identifier
    pub id: u64,
    /// Inbound port
    pub port: u16,
    /// Protocol spoken on the port
    pub protocol: Protocol,
    /// Backend selection strategy
    pub algorithm: Algorithm,
    /// Session stickiness behavior
    pub stickiness: Stickiness,
    /// Health check kind
    pub check: Check,
    /// Seconds between health checks
    #[serde(default)]
    pub check_interval: u64,
    /// Seconds before a health check times out
    #[serde(default)]
    pub check_timeout: u64,
    /// Failed checks before a backend is taken out of rotation
    #[serde(default)]
    pub check_attempts: u64,
    /// Path probed by HTTP checks
    #[serde(default)]
    pub check_path: Option<String>,
    /// Body regex for HTTP body checks
    #[serde(default)]
    pub check_body: Option<String>,
    /// Whether checks reuse keepalive connections
    #[serde(default)]
    pub check_passive: bool,
    /// Cipher suite profile for HTTPS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cipher_suite: Option<CipherSuite>,
}

/// Fields required to add a port configuration to a NodeBalancer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBalancerConfigRequest {
    /// Inbound port
    pub port: u16,
    /// Protocol spoken on the port
    pub protocol: Protocol,
    /// Backend selection strategy
    pub algorithm: Algorithm,
    /// Session stickiness behavior
    pub stickiness: Stickiness,
    /// Health check kind
    pub check: Check,
    /// Seconds between health checks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_interval: Option<u64>,
    /// Cipher suite profile for HTTPS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cipher_suite: Option<CipherSuite>,
}

/// Fields that can be updated on an existing port configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateBalancerConfigRequest {
    /// New inbound port
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// New protocol
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Protocol>,
    /// New backend selection strategy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<Algorithm>,
    /// New stickiness behavior
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stickiness: Option<Stickiness>,
    /// New health check kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check: Option<Check>,
}

/// Traffic mode for a backend node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeMode {
    /// Receive traffic
    Accept,
    /// Refuse new connections
    Reject,
    /// Drain existing sessions before removal
    Drain,
    /// Only receive traffic when all accept nodes are down
    Backup,
}

/// A backend node behind a port configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalancerNode {
    /// Node identifier
    pub id: u64,
    /// Display label
    pub label: String,
    /// Private address and port of the backend
    pub address: String,
    /// Current health status as reported by checks
    #[serde(default)]
    pub status: Option<String>,
    /// Relative traffic weight
    #[serde(default)]
    pub weight: u64,
    /// Traffic mode
    pub mode: NodeMode,
}

/// Fields required to register a backend node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateNodeRequest {
    /// Display label
    pub label: String,
    /// Private address and port of the backend
    pub address: String,
    /// Relative traffic weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u64>,
    /// Traffic mode
    pub mode: NodeMode,
}

/// Fields that can be updated on an existing backend node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateNodeRequest {
    /// New display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// New backend address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// New traffic weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u64>,
    /// New traffic mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<NodeMode>,
}
