//! Asynchronous machine image client implementation.

use crate::models::{CreateImageRequest, Image, UpdateImageRequest};
use crate::Result;
use bytes::Bytes;
use lingo_core::client::Dispatch;
use lingo_core::error::Error;
use lingo_core::page::Page;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Client for the machine image endpoints.
#[derive(Clone)]
pub struct ImageClient {
    api: Arc<dyn Dispatch>,
}

impl ImageClient {
    /// Create a client on top of the given dispatcher.
    pub fn new(api: Arc<dyn Dispatch>) -> Self {
        Self { api }
    }

    /// List machine images visible to the account.
    pub async fn list_images(&self) -> Result<Page<Image>> {
        let data = self
            .api
            .fetch("images")
            .await
            .map_err(|err| err.context("failed to make request for ListImages"))?;
        decode("ListImages", &data)
    }

    /// Fetch a single image by id.
    pub async fn view_image(&self, id: &str) -> Result<Image> {
        let data = self
            .api
            .fetch(&format!("images/{id}"))
            .await
            .map_err(|err| err.context("failed to make request for ViewImage"))?;
        decode("ViewImage", &data)
    }

    /// Capture a new image from an existing disk.
    pub async fn create_image(&self, req: &CreateImageRequest) -> Result<Image> {
        let payload = encode("CreateImage", req)?;
        let data = self
            .api
            .create("images", Some(payload))
            .await
            .map_err(|err| err.context("failed to make request for CreateImage"))?;
        decode("CreateImage", &data)
    }

    /// Update an existing image.
    pub async fn update_image(&self, id: &str, req: &UpdateImageRequest) -> Result<Image> {
        let payload = encode("UpdateImage", req)?;
        let data = self
            .api
            .replace(&format!("images/{id}"), payload)
            .await
            .map_err(|err| err.context("failed to make request for UpdateImage"))?;
        decode("UpdateImage", &data)
    }

    /// Delete an image.
    pub async fn delete_image(&self, id: &str) -> Result<()> {
        self.api
            .remove(&format!("images/{id}"))
            .await
            .map_err(|err| err.context("failed to make request for DeleteImage"))?;
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

    fn image_json(id: &str, label: &str) -> serde_json::Value {
        json!({
            "id": id,
            "label": label,
            "description": "",
            "type": "manual",
            "is_public": false,
            "size": 1300,
            "vendor": "Debian",
            "deprecated": false,
            "created_by": "tester",
            "created": "2018-01-02T03:04:05"
        })
    }

    fn test_client(server: &MockServer) -> ImageClient {
        let api = ApiClient::builder("test-key")
            .with_base_url(server.uri())
            .build()
            .unwrap();
        ImageClient::new(Arc::new(api))
    }

    #[tokio::test]
    async fn list_images_decodes_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/images"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [image_json("private/1", "backup"), image_json("linode/debian12", "Debian 12")],
                "page": 1,
                "pages": 1,
                "results": 2
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let page = client.list_images().await.unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].id, "private/1");
        assert_eq!(page.data[1].label, "Debian 12");
    }

    #[tokio::test]
    async fn create_image_posts_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/images"))
            .and(body_json(json!({
                "disk_id": 123,
                "label": "backup",
                "description": "weekly snapshot"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(image_json("private/9", "backup")))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let req = CreateImageRequest {
            disk_id: 123,
            label: "backup".to_string(),
            description: "weekly snapshot".to_string(),
        };
        let image = client.create_image(&req).await.unwrap();
        assert_eq!(image.id, "private/9");
    }

    #[tokio::test]
    async fn update_image_puts_only_set_fields() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/images/private/9"))
            .and(body_json(json!({"label": "renamed"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(image_json("private/9", "renamed")))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let req = UpdateImageRequest {
            label: Some("renamed".to_string()),
            ..UpdateImageRequest::default()
        };
        let image = client.update_image("private/9", &req).await.unwrap();
        assert_eq!(image.label, "renamed");
    }

    #[tokio::test]
    async fn delete_image_discards_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/images/private/9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.delete_image("private/9").await.unwrap();
    }
}
