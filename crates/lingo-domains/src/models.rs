//! Domain and DNS record data models.

use serde::{Deserialize, Serialize};

/// Whether this server is authoritative for the domain or mirrors another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainType {
    /// Authoritative zone
    Master,
    /// Zone transferred from configured master IPs
    Slave,
}

/// Lifecycle status of a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainStatus {
    /// Not being served
    Disabled,
    /// Being served normally
    Active,
    /// Being edited; not served
    EditMode,
    /// Zone file has errors
    HasErrors,
}

/// A DNS zone managed by the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    /// Domain identifier; zero when creating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// The domain name itself
    pub domain: String,
    /// Master or slave
    #[serde(rename = "type")]
    pub domain_type: DomainType,
    /// Current status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DomainStatus>,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Default TTL in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl_sec: Option<u64>,
    /// SOA retry interval in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_sec: Option<u64>,
    /// Master IPs for slave zones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_ips: Option<Vec<String>>,
    /// IPs allowed to AXFR the zone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axfr_ips: Option<Vec<String>>,
    /// SOA expire interval in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire_sec: Option<u64>,
    /// SOA refresh interval in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_sec: Option<u64>,
    /// SOA contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soa_email: Option<String>,
}

/// DNS record types supported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainRecordType {
    /// Canonical name
    CNAME,
    /// IPv4 address
    A,
    /// IPv6 address
    AAAA,
    /// Name server
    NS,
    /// Mail exchanger
    MX,
    /// Text record
    TXT,
    /// Service locator
    SRV,
    /// Reverse pointer
    PTR,
    /// Certificate authority authorization
    CAA,
}

/// A single record inside a domain's zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRecord {
    /// Record identifier; zero when creating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Record name (subdomain)
    pub name: String,
    /// Record target
    pub target: String,
    /// Priority for MX and SRV records
    #[serde(default)]
    pub priority: u8,
    /// Record type
    #[serde(rename = "type")]
    pub record_type: DomainRecordType,
    /// Port for SRV records
    #[serde(default)]
    pub port: u64,
    /// Service for SRV records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// Protocol for SRV records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// TTL in seconds
    #[serde(default)]
    pub ttl_sec: u64,
    /// Tag for CAA records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}
