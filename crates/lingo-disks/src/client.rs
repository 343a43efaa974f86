//! Asynchronous instance disk client implementation.

use crate::models::{CreateDiskRequest, Disk, UpdateDiskRequest};
use crate::Result;
use bytes::Bytes;
use lingo_core::client::Dispatch;
use lingo_core::error::Error;
use lingo_core::page::Page;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Client for the disk endpoints nested under an instance.
#[derive(Clone)]
pub struct DiskClient {
    api: Arc<dyn Dispatch>,
}

impl DiskClient {
    /// Create a client on top of the given dispatcher.
    pub fn new(api: Arc<dyn Dispatch>) -> Self {
        Self { api }
    }

    /// List the disks attached to an instance.
    pub async fn list_disks(&self, linode_id: u64) -> Result<Page<Disk>> {
        let data = self
            .api
            .fetch(&format!("linode/instances/{linode_id}/disks"))
            .await
            .map_err(|err| err.context("failed to make request for ListDisks"))?;
        decode("ListDisks", &data)
    }

    /// Fetch a single disk.
    pub async fn view_disk(&self, linode_id: u64, disk_id: u64) -> Result<Disk> {
        let data = self
            .api
            .fetch(&format!("linode/instances/{linode_id}/disks/{disk_id}"))
            .await
            .map_err(|err| err.context("failed to make request for ViewDisk"))?;
        decode("ViewDisk", &data)
    }

    /// Build a new disk on an instance.
    pub async fn create_disk(&self, linode_id: u64, req: &CreateDiskRequest) -> Result<Disk> {
        let payload = encode("CreateDisk", req)?;
        let data = self
            .api
            .create(&format!("linode/instances/{linode_id}/disks"), Some(payload))
            .await
            .map_err(|err| err.context("failed to make request for CreateDisk"))?;
        decode("CreateDisk", &data)
    }

    /// Update an existing disk.
    pub async fn update_disk(
        &self,
        linode_id: u64,
        disk_id: u64,
        req: &UpdateDiskRequest,
    ) -> Result<Disk> {
        let payload = encode("UpdateDisk", req)?;
        let data = self
            .api
            .replace(
                &format!("linode/instances/{linode_id}/disks/{disk_id}"),
                payload,
            )
            .await
            .map_err(|err| err.context("failed to make request for UpdateDisk"))?;
        decode("UpdateDisk", &data)
    }

    /// Delete a disk.
    pub async fn delete_disk(&self, linode_id: u64, disk_id: u64) -> Result<()> {
        self.api
            .remove(&format!("linode/instances/{linode_id}/disks/{disk_id}"))
            .await
            .map_err(|err| err.context("failed to make request for DeleteDisk"))?;
        Ok(())
    }

    /// Reset the root password stored on a disk.
    pub async fn reset_disk_root_password(
        &self,
        linode_id: u64,
        disk_id: u64,
        password: &str,
    ) -> Result<Disk> {
        #[derive(Serialize)]
        struct PasswordBody<'a> {
            password: &'a str,
        }
        let payload = encode("ResetDiskRootPassword", &PasswordBody { password })?;
        let data = self
            .api
            .create(
                &format!("linode/instances/{linode_id}/disks/{disk_id}/password"),
                Some(payload),
            )
            .await
            .map_err(|err| err.context("failed to make request for ResetDiskRootPassword"))?;
        decode("ResetDiskRootPassword", &data)
    }

    /// Resize a disk to the given size in MB.
    pub async fn resize_disk(&self, linode_id: u64, disk_id: u64, size: u64) -> Result<Disk> {
        #[derive(Serialize)]
        struct ResizeBody {
            size: u64,
        }
        let payload = encode("ResizeDisk", &ResizeBody { size })?;
        let data = self
            .api
            .create(
                &format!("linode/instances/{linode_id}/disks/{disk_id}/resize"),
                Some(payload),
            )
            .await
            .map_err(|err| err.context("failed to make request for ResizeDisk"))?;
        decode("ResizeDisk", &data)
    }
}

fn decode<T: DeserializeOwned>(op: &str, data: &[u8]) -> Result<T> {
    serde_json::from_slice(data)
        .map_err(|err| Error::Decode(format!("failed to decode {op} response: {err}")))
}

fn encode<T: Serialize>(op: &str, payload: &T) -> Result<Bytes> {
    serde_json::to_vec(payload)
        .map(Bytes::from)
        .map_err(|err| Error::Encode(format!("failed to marshal request for {op}: {err}")))
}
