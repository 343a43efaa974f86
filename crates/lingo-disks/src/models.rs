//! Instance disk data models.

use lingo_core::time::Timestamp;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiskStatus {
    /// Usable
    #[serde(rename = "ready")]
    Ready,
    /// Still being created or restored
    #[serde(rename = "not ready")]
    NotReady,
    /// Recently modified
    #[serde(rename = "updated")]
    Updated,
}

/// Filesystem a disk can be formatted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileSystem {
    /// No filesystem, raw block device
    Raw,
    /// Linux swap space
    Swap,
    /// ext3 journaling filesystem
    Ext3,
    /// ext4 journaling filesystem
    Ext4,
    /// initrd ramdisk image
    Initrd,
}

/// A disk belonging to an instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disk {
    /// Disk identifier
    pub id: u64,
    /// Display label
    pub label: String,
    /// Current status
    pub status: DiskStatus,
    /// Size in MB
    pub size: u64,
    /// Filesystem the disk carries
    pub filesystem: FileSystem,
    /// Creation timestamp
    pub created: Timestamp,
    /// Last-update timestamp
    pub updated: Timestamp,
}

/// Fields required to build a new disk on an instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateDiskRequest {
    /// Size in MB
    pub size: u64,
    /// Image to deploy onto the disk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Root password to set when deploying an image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_pass: Option<String>,
    /// SSH public keys to install for root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorized_keys: Option<Vec<String>>,
    /// Display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Filesystem to format with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filesystem: Option<FileSystem>,
    /// Whether the disk mounts read-only
    #[serde(default)]
    pub read_only: bool,
    /// StackScript to run when deploying an image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stackscript_id: Option<u64>,
    /// Arbitrary data handed to the StackScript
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stackscript_data: Option<serde_json::Value>,
}

/// Fields that can be updated on an existing disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDiskRequest {
    /// New display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// New filesystem
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filesystem: Option<FileSystem>,
}
