//! Instance data models.

use lingo_core::time::Timestamp;
use serde::{Deserialize, Serialize};

/// Lifecycle status of an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceStatus {
    /// Powered off
    Offline,
    /// Power-on in progress
    Booting,
    /// Up and running
    Running,
    /// Power-off in progress
    ShuttingDown,
    /// Restart in progress
    Rebooting,
    /// Being built
    Provisioning,
    /// Being torn down
    Deleting,
    /// Moving between hosts
    Migrating,
}

/// Virtualization platform an instance runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hypervisor {
    /// KVM virtualization
    Kvm,
    /// Legacy Xen virtualization
    Xen,
}

/// Alert thresholds for instance metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alerts {
    /// CPU usage percentage that triggers an alert
    #[serde(default)]
    pub cpu: u64,
    /// Disk operations per second that trigger an alert
    #[serde(default)]
    pub io: u64,
    /// Inbound traffic in Mbps that triggers an alert
    #[serde(default)]
    pub network_in: u64,
    /// Outbound traffic in Mbps that triggers an alert
    #[serde(default)]
    pub network_out: u64,
    /// Percentage of the transfer quota that triggers an alert
    #[serde(default)]
    pub transfer_quota: u64,
}

/// Hardware specification of an instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specs {
    /// Disk space in MB
    pub disk: u64,
    /// Memory in MB
    pub memory: u64,
    /// Virtual CPU count
    pub vcpus: u64,
    /// Monthly transfer quota in GB
    pub transfer: u64,
}

/// A Linode instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    /// Instance identifier
    pub id: u64,
    /// Alert thresholds
    #[serde(default)]
    pub alerts: Alerts,
    /// Region the instance lives in
    pub region: String,
    /// Image the instance was deployed from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Public and private IPv4 addresses
    #[serde(default)]
    pub ipv4: Vec<String>,
    /// SLAAC IPv6 address
    #[serde(default)]
    pub ipv6: Option<String>,
    /// Display label
    pub label: String,
    /// Type the instance is provisioned as
    #[serde(rename = "type")]
    pub type_id: String,
    /// Current status
    pub status: InstanceStatus,
    /// Virtualization platform
    pub hypervisor: Hypervisor,
    /// Hardware specification
    pub specs: Specs,
    /// Creation timestamp
    pub created: Timestamp,
    /// Last-update timestamp
    pub updated: Timestamp,
}

/// Fields required to provision a new instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateInstanceRequest {
    /// Region to provision in
    pub region: String,
    /// Type to provision as
    #[serde(rename = "type")]
    pub type_id: String,
    /// Display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Root password when deploying an image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_pass: Option<String>,
    /// SSH public keys to install for root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorized_keys: Option<Vec<String>>,
    /// StackScript to run when deploying an image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stackscript_id: Option<u64>,
    /// Arbitrary data handed to the StackScript
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stackscript_data: Option<serde_json::Value>,
    /// Backup to restore onto the new instance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_id: Option<u64>,
    /// Image to deploy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Whether to enroll the instance in the backup service
    #[serde(default)]
    pub backups_enabled: bool,
    /// Whether to boot once provisioning finishes
    #[serde(default)]
    pub booted: bool,
    /// Swap disk size in MB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swap_size: Option<u64>,
}

/// Fields that can be updated on an existing instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateInstanceRequest {
    /// New display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// New alert thresholds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alerts: Option<Alerts>,
}

/// Parameters for cloning an instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloneInstanceRequest {
    /// Region for the clone
    pub region: String,
    /// Type for the clone
    #[serde(rename = "type")]
    pub type_id: String,
    /// Display label for the clone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Existing instance to clone into instead of a new one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linode_id: Option<u64>,
    /// Whether to enroll the clone in the backup service
    #[serde(default)]
    pub backups_enabled: bool,
    /// Disks to clone; all when empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disks: Option<Vec<u64>>,
    /// Configuration profiles to clone; all when empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configs: Option<Vec<u64>>,
}

/// Parameters for rebuilding an instance in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RebuildInstanceRequest {
    /// Image to deploy
    pub image: String,
    /// Root password for the rebuilt disk
    pub root_pass: String,
    /// SSH public keys to install for root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorized_keys: Option<Vec<String>>,
    /// StackScript to run during the rebuild
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stackscript_id: Option<u64>,
    /// Arbitrary data handed to the StackScript
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stackscript_data: Option<serde_json::Value>,
    /// Whether to boot once the rebuild finishes
    #[serde(default)]
    pub booted: bool,
}

/// Pricing class an instance type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Class {
    /// Shared entry-level plans
    Nanode,
    /// Shared standard plans
    Standard,
    /// High-memory plans
    Highmem,
}

/// Hourly and monthly cost of an instance type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// Cost per hour in USD
    pub hourly: f64,
    /// Cost per month in USD
    pub monthly: f64,
}

/// Priced add-on services for an instance type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Addons {
    /// Backup service pricing
    #[serde(default)]
    pub backups: BackupAddon,
}

/// Backup service pricing entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BackupAddon {
    /// Cost of the backup service
    #[serde(default)]
    pub price: Price,
}

/// A provisionable instance type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceType {
    /// Type identifier
    pub id: String,
    /// Disk space in MB
    pub disk: u64,
    /// Pricing class
    pub class: Class,
    /// Base pricing
    pub price: Price,
    /// Display label
    pub label: String,
    /// Add-on pricing
    #[serde(default)]
    pub addons: Addons,
    /// Outbound network cap in Mbps
    #[serde(default)]
    pub network_out: u64,
    /// Memory in MB
    pub memory: u64,
    /// Monthly transfer quota in GB
    pub transfer: u64,
    /// Virtual CPU count
    pub vcpus: u64,
}
