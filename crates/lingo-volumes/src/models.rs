//! Block storage volume data models.

use lingo_core::time::Timestamp;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeStatus {
    /// Being provisioned
    Creating,
    /// Ready for use
    Active,
    /// Resize in progress
    Resizing,
    /// Unavailable
    Offline,
}

/// A block storage volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    /// Volume identifier
    pub id: u64,
    /// Display label
    pub label: String,
    /// Current status
    pub status: VolumeStatus,
    /// Size in GB
    pub size: u64,
    /// Region the volume lives in
    pub region: String,
    /// Creation timestamp
    pub created: Timestamp,
    /// Last-update timestamp
    pub updated: Timestamp,
    /// Instance the volume is attached to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linode_id: Option<u64>,
    /// Device path when attached
    #[serde(default)]
    pub filesystem_path: String,
}

/// Fields required to provision a new volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateVolumeRequest {
    /// Display label
    pub label: String,
    /// Size in GB
    pub size: u64,
    /// Region to provision in; omit when attaching at create time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Instance to attach to at create time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linode_id: Option<u64>,
}

/// Fields that can be updated on an existing volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateVolumeRequest {
    /// New display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Parameters for attaching a volume to an instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachVolumeRequest {
    /// Instance to attach to
    pub linode_id: u64,
    /// Configuration profile to attach under, when not the default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_id: Option<u64>,
}
