//! Asynchronous block storage volume client implementation.

use crate::models::{AttachVolumeRequest, CreateVolumeRequest, UpdateVolumeRequest, Volume};
use crate::Result;
use bytes::Bytes;
use lingo_core::client::Dispatch;
use lingo_core::error::Error;
use lingo_core::page::Page;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Client for the block storage volume endpoints.
#[derive(Clone)]
pub struct VolumeClient {
    api: Arc<dyn Dispatch>,
}

impl VolumeClient {
    /// Create a client on top of the given dispatcher.
    pub fn new(api: Arc<dyn Dispatch>) -> Self {
        Self { api }
    }

    /// List volumes on the account.
    pub async fn list_volumes(&self) -> Result<Page<Volume>> {
        let data = self
            .api
            .fetch("volumes")
            .await
            .map_err(|err| err.context("failed to make request for ListVolumes"))?;
        decode("ListVolumes", &data)
    }

    /// Fetch a single volume.
    pub async fn view_volume(&self, id: u64) -> Result<Volume> {
        let data = self
            .api
            .fetch(&format!("volumes/{id}"))
            .await
            .map_err(|err| err.context("failed to make request for ViewVolume"))?;
        decode("ViewVolume", &data)
    }

    /// Provision a new volume.
    pub async fn create_volume(&self, req: &CreateVolumeRequest) -> Result<Volume> {
        let payload = encode("CreateVolume", req)?;
        let data = self
            .api
            .create("volumes", Some(payload))
            .await
            .map_err(|err| err.context("failed to make request for CreateVolume"))?;
        decode("CreateVolume", &data)
    }

    /// Update an existing volume.
    pub async fn update_volume(&self, id: u64, req: &UpdateVolumeRequest) -> Result<Volume> {
        let payload = encode("UpdateVolume", req)?;
        let data = self
            .api
            .replace(&format!("volumes/{id}"), payload)
            .await
            .map_err(|err| err.context("failed to make request for UpdateVolume"))?;
        decode("UpdateVolume", &data)
    }

    /// Delete a volume.
    pub async fn delete_volume(&self, id: u64) -> Result<()> {
        self.api
            .remove(&format!("volumes/{id}"))
            .await
            .map_err(|err| err.context("failed to make request for DeleteVolume"))?;
        Ok(())
    }

    /// Attach a volume to an instance.
    pub async fn attach_volume(&self, id: u64, req: &AttachVolumeRequest) -> Result<()> {
        let payload = encode("AttachVolume", req)?;
        self.api
            .create(&format!("volumes/{id}/attach"), Some(payload))
            .await
            .map_err(|err| err.context("failed to make request for AttachVolume"))?;
        Ok(())
    }

    /// Detach a volume from its instance.
    pub async fn detach_volume(&self, id: u64) -> Result<()> {
        self.api
            .create(&format!("volumes/{id}/detach"), None)
            .await
            .map_err(|err| err.context("failed to make request for DetachVolume"))?;
        Ok(())
    }

    /// Clone a volume under a new label.
    pub async fn clone_volume(&self, id: u64, label: &str) -> Result<()> {
        #[derive(Serialize)]
        struct CloneBody<'a> {
            label: &'a str,
        }
        let payload = encode("CloneVolume", &CloneBody { label })?;
        self.api
            .create(&format!("volumes/{id}/clone"), Some(payload))
            .await
            .map_err(|err| err.context("failed to make request for CloneVolume"))?;
        Ok(())
    }

    /// Resize a volume to the given size in GB. Volumes only grow.
    pub async fn resize_volume(&self, id: u64, size: u64) -> Result<()> {
        #[derive(Serialize)]
        struct ResizeBody {
            size: u64,
        }
        let payload = encode("ResizeVolume", &ResizeBody { size })?;
        self.api
            .create(&format!("volumes/{id}/resize"), Some(payload))
            .await
            .map_err(|err| err.context("failed to make request for ResizeVolume"))?;
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

#[cfg(test)]
mod tests {
    use super::*;
    use lingo_core::client::ApiClient;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn volume_json(id: u64, label: &str) -> serde_json::Value {
        json!({
            "id": id,
            "label": label,
            "status": "active",
            "size": 20,
            "region": "us-east",
            "created": "2018-01-02T03:04:05",
            "updated": "2018-01-02T03:04:05",
            "linode_id": null,
            "filesystem_path": format!("/dev/disk/by-id/scsi-0Linode_Volume_{label}")
        })
    }

    fn test_client(server: &MockServer) -> VolumeClient {
        let api = ApiClient::builder("test-key")
            .with_base_url(server.uri())
            .build()
            .unwrap();
        VolumeClient::new(Arc::new(api))
    }

    #[tokio::test]
    async fn create_volume_posts_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/volumes"))
            .and(body_json(json!({
                "label": "backups",
                "size": 20,
                "region": "us-east"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(volume_json(31, "backups")))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let req = CreateVolumeRequest {
            label: "backups".to_string(),
            size: 20,
            region: Some("us-east".to_string()),
            linode_id: None,
        };
        let volume = client.create_volume(&req).await.unwrap();
        assert_eq!(volume.id, 31);
        assert_eq!(volume.status, crate::models::VolumeStatus::Active);
    }

    #[tokio::test]
    async fn attach_and_detach_post_to_action_paths() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/volumes/31/attach"))
            .and(body_json(json!({"linode_id": 42})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/volumes/31/detach"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client
            .attach_volume(
                31,
                &AttachVolumeRequest {
                    linode_id: 42,
                    config_id: None,
                },
            )
            .await
            .unwrap();
        client.detach_volume(31).await.unwrap();
    }

    #[tokio::test]
    async fn resize_volume_sends_new_size() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/volumes/31/resize"))
            .and(body_json(json!({"size": 40})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.resize_volume(31, 40).await.unwrap();
    }

    #[tokio::test]
    async fn list_volumes_decodes_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/volumes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [volume_json(31, "backups")],
                "page": 1,
                "pages": 1,
                "results": 1
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let page = client.list_volumes().await.unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].label, "backups");
    }
}
