//! Asynchronous NodeBalancer client implementation.

use crate::models::{
    BalancerConfig, BalancerNode, CreateBalancerConfigRequest, CreateBalancerRequest,
    CreateNodeRequest, NodeBalancer, UpdateBalancerConfigRequest, UpdateBalancerRequest,
    UpdateNodeRequest,
};
use crate::Result;
use bytes::Bytes;
use lingo_core::client::Dispatch;
use lingo_core::error::Error;
use lingo_core::page::Page;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Client for the NodeBalancer endpoints.
#[derive(Clone)]
pub struct BalancerClient {
    api: Arc<dyn Dispatch>,
}

impl BalancerClient {
    /// Create a client on top of the given dispatcher.
    pub fn new(api: Arc<dyn Dispatch>) -> Self {
        Self { api }
    }

    /// List NodeBalancers on the account.
    pub async fn list_node_balancers(&self) -> Result<Page<NodeBalancer>> {
        let data = self
            .api
            .fetch("nodebalancers")
            .await
            .map_err(|err| err.context("failed to make request for ListNodeBalancers"))?;
        decode("ListNodeBalancers", &data)
    }

    /// Fetch a single NodeBalancer.
    pub async fn view_node_balancer(&self, id: u64) -> Result<NodeBalancer> {
        let data = self
            .api
            .fetch(&format!("nodebalancers/{id}"))
            .await
            .map_err(|err| err.context("failed to make request for ViewNodeBalancer"))?;
        decode("ViewNodeBalancer", &data)
    }

    /// Spin up a new NodeBalancer.
    pub async fn create_node_balancer(&self, req: &CreateBalancerRequest) -> Result<NodeBalancer> {
        let payload = encode("CreateNodeBalancer", req)?;
        let data = self
            .api
            .create("nodebalancers", Some(payload))
            .await
            .map_err(|err| err.context("failed to make request for CreateNodeBalancer"))?;
        decode("CreateNodeBalancer", &data)
    }

    /// Update an existing NodeBalancer.
    pub async fn update_node_balancer(
        &self,
        id: u64,
        req: &UpdateBalancerRequest,
    ) -> Result<NodeBalancer> {
        let payload = encode("UpdateNodeBalancer", req)?;
        let data = self
            .api
            .replace(&format!("nodebalancers/{id}"), payload)
            .await
            .map_err(|err| err.context("failed to make request for UpdateNodeBalancer"))?;
        decode("UpdateNodeBalancer", &data)
    }

    /// Delete a NodeBalancer.
    pub async fn delete_node_balancer(&self, id: u64) -> Result<()> {
        self.api
            .remove(&format!("nodebalancers/{id}"))
            .await
            .map_err(|err| err.context("failed to make request for DeleteNodeBalancer"))?;
        Ok(())
    }

    /// List port configurations on a NodeBalancer.
    pub async fn list_node_balancer_configs(
        &self,
        balancer_id: u64,
    ) -> Result<Page<BalancerConfig>> {
        let data = self
            .api
            .fetch(&format!("nodebalancers/{balancer_id}/configs"))
            .await
            .map_err(|err| err.context("failed to make request for ListNodeBalancerConfigs"))?;
        decode("ListNodeBalancerConfigs", &data)
    }

    /// Fetch a single port configuration.
    pub async fn view_node_balancer_config(
        &self,
        balancer_id: u64,
        config_id: u64,
    ) -> Result<BalancerConfig> {
        let data = self
            .api
            .fetch(&format!("nodebalancers/{balancer_id}/configs/{config_id}"))
            .await
            .map_err(|err| err.context("failed to make request for ViewNodeBalancerConfig"))?;
        decode("ViewNodeBalancerConfig", &data)
    }

    /// Add a port configuration to a NodeBalancer.
    pub async fn create_node_balancer_config(
        &self,
        balancer_id: u64,
        req: &CreateBalancerConfigRequest,
    ) -> Result<BalancerConfig> {
        let payload = encode("CreateNodeBalancerConfig", req)?;
        let data = self
            .api
            .create(&format!("nodebalancers/{balancer_id}/configs"), Some(payload))
            .await
            .map_err(|err| err.context("failed to make request for CreateNodeBalancerConfig"))?;
        decode("CreateNodeBalancerConfig", &data)
    }

    /// Update an existing port configuration.
    pub async fn update_node_balancer_config(
        &self,
        balancer_id: u64,
        config_id: u64,
        req: &UpdateBalancerConfigRequest,
    ) -> Result<BalancerConfig> {
        let payload = encode("UpdateNodeBalancerConfig", req)?;
        let data = self
            .api
            .replace(
                &format!("nodebalancers/{balancer_id}/configs/{config_id}"),
                payload,
            )
            .await
            .map_err(|err| err.context("failed to make request for UpdateNodeBalancerConfig"))?;
        decode("UpdateNodeBalancerConfig", &data)
    }

    /// Remove a port configuration from a NodeBalancer.
    pub async fn delete_node_balancer_config(
        &self,
        balancer_id: u64,
        config_id: u64,
    ) -> Result<()> {
        self.api
            .remove(&format!("nodebalancers/{balancer_id}/configs/{config_id}"))
            .await
            .map_err(|err| err.context("failed to make request for DeleteNodeBalancerConfig"))?;
        Ok(())
    }

    /// List backend nodes behind a port configuration.
    pub async fn list_nodes(
        &self,
        balancer_id: u64,
        config_id: u64,
    ) -> Result<Page<BalancerNode>> {
        let data = self
            .api
            .fetch(&format!(
                "nodebalancers/{balancer_id}/configs/{config_id}/nodes"
            ))
            .await
            .map_err(|err| err.context("failed to make request for ListNodes"))?;
        decode("ListNodes", &data)
    }

    /// Fetch a single backend node.
    pub async fn view_node(
        &self,
        balancer_id: u64,
        config_id: u64,
        node_id: u64,
    ) -> Result<BalancerNode> {
        let data = self
            .api
            .fetch(&format!(
                "nodebalancers/{balancer_id}/configs/{config_id}/nodes/{node_id}"
            ))
            .await
            .map_err(|err| err.context("failed to make request for ViewNode"))?;
        decode("ViewNode", &data)
    }

    /// Register a backend node under a port configuration.
    pub async fn create_node(
        &self,
        balancer_id: u64,
        config_id: u64,
        req: &CreateNodeRequest,
    ) -> Result<BalancerNode> {
        let payload = encode("CreateNode", req)?;
        let data = self
            .api
            .create(
                &format!("nodebalancers/{balancer_id}/configs/{config_id}/nodes"),
                Some(payload),
            )
            .await
            .map_err(|err| err.context("failed to make request for CreateNode"))?;
        decode("CreateNode", &data)
    }

    /// Update an existing backend node.
    pub async fn update_node(
        &self,
        balancer_id: u64,
        config_id: u64,
        node_id: u64,
        req: &UpdateNodeRequest,
    ) -> Result<BalancerNode> {
        let payload = encode("UpdateNode", req)?;
        let data = self
            .api
            .replace(
                &format!("nodebalancers/{balancer_id}/configs/{config_id}/nodes/{node_id}"),
                payload,
            )
            .await
            .map_err(|err| err.context("failed to make request for UpdateNode"))?;
        decode("UpdateNode", &data)
    }

    /// Remove a backend node from a port configuration.
    pub async fn delete_node(
        &self,
        balancer_id: u64,
        config_id: u64,
        node_id: u64,
    ) -> Result<()> {
        self.api
            .remove(&format!(
                "nodebalancers/{balancer_id}/configs/{config_id}/nodes/{node_id}"
            ))
            .await
            .map_err(|err| err.context("failed to make request for DeleteNode"))?;
        Ok(())
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
