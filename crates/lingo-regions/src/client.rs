//! Asynchronous region client implementation.

use crate::models::Region;
use crate::Result;
use lingo_core::client::Dispatch;
use lingo_core::error::Error;
use lingo_core::page::Page;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Client for the read-only region endpoints.
#[derive(Clone)]
pub struct RegionClient {
    api: Arc<dyn Dispatch>,
}

impl RegionClient {
    /// Create a client on top of the given dispatcher.
    pub fn new(api: Arc<dyn Dispatch>) -> Self {
        Self { api }
    }

    /// List all regions.
    pub async fn list_regions(&self) -> Result<Page<Region>> {
        let data = self
            .api
            .fetch("regions")
            .await
            .map_err(|err| err.context("failed to make request for ListRegions"))?;
        decode("ListRegions", &data)
    }

    /// Fetch a single region by id.
    pub async fn view_region(&self, id: &str) -> Result<Region> {
        let data = self
            .api
            .fetch(&format!("regions/{id}"))
            .await
            .map_err(|err| err.context("failed to make request for ViewRegion"))?;
        decode("ViewRegion", &data)
    }
}

fn decode<T: DeserializeOwned>(op: &str, data: &[u8]) -> Result<T> {
    serde_json::from_slice(data)
        .map_err(|err| Error::Decode(format!("failed to decode {op} response: {err}")))
}
