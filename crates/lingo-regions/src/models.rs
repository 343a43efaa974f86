//! Region data models.

use serde::{Deserialize, Serialize};

/// A deployment region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Region identifier, e.g. `us-east`
    pub id: String,
    /// ISO country code the region is located in
    pub country: String,
}
