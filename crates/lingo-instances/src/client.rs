//! Asynchronous instance client implementation.

use crate::models::{
    CloneInstanceRequest, CreateInstanceRequest, Instance, InstanceType, RebuildInstanceRequest,
    UpdateInstanceRequest,
};
use crate::Result;
use bytes::Bytes;
use lingo_core::client::Dispatch;
use lingo_core::error::Error;
use lingo_core::page::Page;
use lingo_volumes::Volume;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct ConfigBody {
    config_id: u64,
}

/// Client for the instance and instance type endpoints.
#[derive(Clone)]
pub struct InstanceClient {
    api: Arc<dyn Dispatch>,
}

impl InstanceClient {
    /// Create a client on top of the given dispatcher.
    pub fn new(api: Arc<dyn Dispatch>) -> Self {
        Self { api }
    }

    /// List instances on the account.
    pub async fn list_instances(&self) -> Result<Page<Instance>> {
        let data = self
            .api
            .fetch("linode/instances")
            .await
            .map_err(|err| err.context("failed to make request for ListInstances"))?;
        decode("ListInstances", &data)
    }

    /// Fetch a single instance.
    pub async fn view_instance(&self, id: u64) -> Result<Instance> {
        let data = self
            .api
            .fetch(&format!("linode/instances/{id}"))
            .await
            .map_err(|err| err.context("failed to make request for ViewInstance"))?;
        decode("ViewInstance", &data)
    }

    /// Provision a new instance.
    pub async fn create_instance(&self, req: &CreateInstanceRequest) -> Result<Instance> {
        let payload = encode("CreateInstance", req)?;
        let data = self
            .api
            .create("linode/instances", Some(payload))
            .await
            .map_err(|err| err.context("failed to make request for CreateInstance"))?;
        decode("CreateInstance", &data)
    }

    /// Update an existing instance.
    pub async fn update_instance(&self, id: u64, req: &UpdateInstanceRequest) -> Result<Instance> {
        let payload = encode("UpdateInstance", req)?;
        let data = self
            .api
            .replace(&format!("linode/instances/{id}"), payload)
            .await
            .map_err(|err| err.context("failed to make request for UpdateInstance"))?;
        decode("UpdateInstance", &data)
    }

    /// Delete an instance.
    pub async fn delete_instance(&self, id: u64) -> Result<()> {
        self.api
            .remove(&format!("linode/instances/{id}"))
            .await
            .map_err(|err| err.context("failed to make request for DeleteInstance"))?;
        Ok(())
    }

    /// Boot an instance using its default configuration profile.
    pub async fn boot_instance(&self, id: u64) -> Result<()> {
        self.api
            .create(&format!("linode/instances/{id}/boot"), None)
            .await
            .map_err(|err| err.context("failed to make request for BootInstance"))?;
        Ok(())
    }

    /// Boot an instance using a specific configuration profile.
    pub async fn boot_instance_with_config(&self, id: u64, config_id: u64) -> Result<()> {
        let payload = encode("BootInstance", &ConfigBody { config_id })?;
        self.api
            .create(&format!("linode/instances/{id}/boot"), Some(payload))
            .await
            .map_err(|err| err.context("failed to make request for BootInstance"))?;
        Ok(())
    }

    /// Reboot an instance using its default configuration profile.
    pub async fn reboot_instance(&self, id: u64) -> Result<()> {
        self.api
            .create(&format!("linode/instances/{id}/reboot"), None)
            .await
            .map_err(|err| err.context("failed to make request for RebootInstance"))?;
        Ok(())
    }

    /// Reboot an instance using a specific configuration profile.
    pub async fn reboot_instance_with_config(&self, id: u64, config_id: u64) -> Result<()> {
        let payload = encode("RebootInstance", &ConfigBody { config_id })?;
        self.api
            .create(&format!("linode/instances/{id}/reboot"), Some(payload))
            .await
            .map_err(|err| err.context("failed to make request for RebootInstance"))?;
        Ok(())
    }

    /// Shut down an instance.
    pub async fn shutdown_instance(&self, id: u64) -> Result<()> {
        self.api
            .create(&format!("linode/instances/{id}/shutdown"), None)
            .await
            .map_err(|err| err.context("failed to make request for ShutdownInstance"))?;
        Ok(())
    }

    /// Resize an instance to a different type.
    pub async fn resize_instance(&self, id: u64, type_id: &str) -> Result<()> {
        #[derive(Serialize)]
        struct ResizeBody<'a> {
            #[serde(rename = "type")]
            type_id: &'a str,
        }
        let payload = encode("ResizeInstance", &ResizeBody { type_id })?;
        self.api
            .create(&format!("linode/instances/{id}/resize"), Some(payload))
            .await
            .map_err(|err| err.context("failed to make request for ResizeInstance"))?;
        Ok(())
    }

    /// Upgrade an instance to its newest generation.
    pub async fn mutate_instance(&self, id: u64) -> Result<()> {
        self.api
            .create(&format!("linode/instances/{id}/mutate"), None)
            .await
            .map_err(|err| err.context("failed to make request for MutateInstance"))?;
        Ok(())
    }

    /// Clone an instance.
    pub async fn clone_instance(&self, id: u64, req: &CloneInstanceRequest) -> Result<Instance> {
        let payload = encode("CloneInstance", req)?;
        let data = self
            .api
            .create(&format!("linode/instances/{id}/clone"), Some(payload))
            .await
            .map_err(|err| err.context("failed to make request for CloneInstance"))?;
        decode("CloneInstance", &data)
    }

    /// Rebuild an instance in place from an image.
    pub async fn rebuild_instance(&self, id: u64, req: &RebuildInstanceRequest) -> Result<()> {
        let payload = encode("RebuildInstance", req)?;
        self.api
            .create(&format!("linode/instances/{id}/rebuild"), Some(payload))
            .await
            .map_err(|err| err.context("failed to make request for RebuildInstance"))?;
        Ok(())
    }

    /// List volumes attached to an instance.
    pub async fn list_instance_volumes(&self, id: u64) -> Result<Page<Volume>> {
        let data = self
            .api
            .fetch(&format!("linode/instances/{id}/volumes"))
            .await
            .map_err(|err| err.context("failed to make request for ListInstanceVolumes"))?;
        decode("ListInstanceVolumes", &data)
    }

    /// List provisionable instance types.
    pub async fn list_types(&self) -> Result<Page<InstanceType>> {
        let data = self
            .api
            .fetch("linode/types")
            .await
            .map_err(|err| err.context("failed to make request for ListTypes"))?;
        decode("ListTypes", &data)
    }

    /// Fetch a single instance type.
    pub async fn view_type(&self, id: &str) -> Result<InstanceType> {
        let data = self
            .api
            .fetch(&format!("linode/types/{id}"))
            .await
            .map_err(|err| err.context("failed to make request for ViewType"))?;
        decode("ViewType", &data)
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
