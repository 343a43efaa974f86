//! Machine image data models.

use lingo_core::time::Timestamp;
use serde::{Deserialize, Serialize};

/// How an image came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    /// Captured explicitly by the user
    Manual,
    /// Captured automatically (e.g. on disk deletion)
    Automatic,
}

/// A machine image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Image identifier, e.g. `linode/debian12` or `private/12345`
    pub id: String,
    /// Display label
    pub label: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// How the image was created
    #[serde(rename = "type")]
    pub image_type: ImageType,
    /// Whether the image is publicly available
    pub is_public: bool,
    /// Image size in MB
    pub size: i64,
    /// Distribution vendor, e.g. `Debian`
    #[serde(default)]
    pub vendor: String,
    /// Whether the image is deprecated
    #[serde(default)]
    pub deprecated: bool,
    /// Account that created the image
    #[serde(default)]
    pub created_by: String,
    /// Creation timestamp
    pub created: Timestamp,
}

/// Fields required to capture a new image from an existing disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateImageRequest {
    /// Disk to capture
    pub disk_id: u64,
    /// Display label
    pub label: String,
    /// Free-form description
    pub description: String,
}

/// Fields that can be updated on an existing image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateImageRequest {
    /// New display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// New description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
